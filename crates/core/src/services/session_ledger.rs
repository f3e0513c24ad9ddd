use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::session::SessionRecord;
use crate::models::settings::WageRates;
use crate::models::stats::{AggregateStats, OpportunityCost};

/// Tolerance used when checking a stored history against its running totals.
const CONSISTENCY_TOLERANCE: f64 = 1e-9;

/// Append-only history of poker sessions with incrementally maintained totals.
///
/// `stats()` is O(1) and always agrees with a full re-derivation from
/// `history()`. The ledger has no internal locking: callers that share one
/// across threads must serialize `record_session` themselves (e.g. behind a
/// `Mutex`) so the cumulative balance chain stays in call order.
///
/// Serialized form is the record list alone. Deserializing re-checks the
/// cumulative balances and rebuilds the totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<SessionRecord>", try_from = "Vec<SessionRecord>")]
pub struct SessionLedger {
    records: Vec<SessionRecord>,
    total_winnings: f64,
    total_losses: f64,
    hours_played: f64,
}

impl SessionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished session dated now.
    pub fn record_session(&mut self, amount: f64, hours: f64) -> Result<&SessionRecord, CoreError> {
        self.record_session_at(amount, hours, Utc::now())
    }

    /// Record a finished session with an explicit date.
    ///
    /// Rules:
    /// - `amount` must be finite (any sign)
    /// - `hours` must be finite and non-negative; zero is accepted
    pub fn record_session_at(
        &mut self,
        amount: f64,
        hours: f64,
        date: DateTime<Utc>,
    ) -> Result<&SessionRecord, CoreError> {
        Self::validate_session(amount, hours)?;

        let previous_balance = self.balance();
        let record = SessionRecord::new(amount, hours, date, previous_balance);

        // A session is either a win or a loss, never both.
        if amount > 0.0 {
            self.total_winnings += amount;
        } else if amount < 0.0 {
            self.total_losses += -amount;
        }
        self.hours_played += hours;

        tracing::debug!(
            amount,
            hours,
            balance = record.cumulative_balance,
            sessions = self.records.len() + 1,
            "session recorded"
        );

        let index = self.records.len();
        self.records.push(record);
        Ok(&self.records[index])
    }

    /// Current statistics from the running totals.
    #[must_use]
    pub fn stats(&self) -> AggregateStats {
        AggregateStats::from_totals(
            self.records.len(),
            self.total_winnings,
            self.total_losses,
            self.hours_played,
        )
    }

    /// All sessions in the order they were recorded.
    #[must_use]
    pub fn history(&self) -> &[SessionRecord] {
        &self.records
    }

    /// Poker profit next to what the same hours would have paid at each
    /// reference wage.
    #[must_use]
    pub fn opportunity_cost(&self, rates: &WageRates) -> OpportunityCost {
        OpportunityCost::compute(
            self.hours_played,
            self.total_winnings - self.total_losses,
            rates,
        )
    }

    /// Cumulative balance after the latest session (0 when empty).
    #[must_use]
    pub fn balance(&self) -> f64 {
        self.records.last().map_or(0.0, |r| r.cumulative_balance)
    }

    #[must_use]
    pub fn last(&self) -> Option<&SessionRecord> {
        self.records.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sessions dated within `[from, to]`, in recorded order.
    #[must_use]
    pub fn sessions_in_range(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Vec<&SessionRecord> {
        self.records
            .iter()
            .filter(|r| r.date >= from && r.date <= to)
            .collect()
    }

    /// Check the cumulative balance chain and that the running totals match
    /// a full rescan of the history.
    pub fn verify_consistency(&self) -> Result<(), CoreError> {
        Self::verify_chain(&self.records)?;
        let rescanned = AggregateStats::from_history(&self.records);
        if !self.stats().approx_eq(&rescanned, CONSISTENCY_TOLERANCE) {
            return Err(CoreError::ValidationError(
                "Running totals disagree with session history".into(),
            ));
        }
        Ok(())
    }

    fn validate_session(amount: f64, hours: f64) -> Result<(), CoreError> {
        if !amount.is_finite() {
            tracing::warn!(amount, "rejected session with non-finite amount");
            return Err(CoreError::ValidationError(format!(
                "Session amount must be a finite number (got {amount})"
            )));
        }
        if !hours.is_finite() || hours < 0.0 {
            tracing::warn!(hours, "rejected session with invalid duration");
            return Err(CoreError::ValidationError(format!(
                "Session hours must be a finite, non-negative number (got {hours})"
            )));
        }
        Ok(())
    }

    fn verify_chain(records: &[SessionRecord]) -> Result<(), CoreError> {
        let mut expected = 0.0;
        for (i, record) in records.iter().enumerate() {
            Self::validate_session(record.amount, record.hours)?;
            expected += record.amount;
            let tolerance = CONSISTENCY_TOLERANCE * expected.abs().max(1.0);
            if (record.cumulative_balance - expected).abs() > tolerance {
                return Err(CoreError::ValidationError(format!(
                    "Session {i} has cumulative balance {} but its history sums to {expected}",
                    record.cumulative_balance
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<SessionRecord>> for SessionLedger {
    type Error = CoreError;

    fn try_from(records: Vec<SessionRecord>) -> Result<Self, Self::Error> {
        Self::verify_chain(&records)?;
        let totals = AggregateStats::from_history(&records);
        Ok(Self {
            records,
            total_winnings: totals.total_winnings,
            total_losses: totals.total_losses,
            hours_played: totals.hours_played,
        })
    }
}

impl From<SessionLedger> for Vec<SessionRecord> {
    fn from(ledger: SessionLedger) -> Self {
        ledger.records
    }
}
