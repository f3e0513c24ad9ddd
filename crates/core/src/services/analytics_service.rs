use chrono::Utc;

use crate::models::analytics::TrackerSummary;
use crate::models::bankroll::Bankroll;

/// Computes tracker-wide analytics: session breakdown, extremes, goal progress.
///
/// Headline statistics come straight from the ledger's running totals; the
/// per-session figures need one pass over the history.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Generate a full summary of the bankroll as of now.
    pub fn summary(&self, bankroll: &Bankroll) -> TrackerSummary {
        let ledger = &bankroll.ledger;
        let history = ledger.history();

        let winning_sessions = history.iter().filter(|r| r.is_win()).count();
        let losing_sessions = history.iter().filter(|r| r.is_loss()).count();

        let best_session = history.iter().map(|r| r.amount).reduce(f64::max);
        let worst_session = history.iter().map(|r| r.amount).reduce(f64::min);

        TrackerSummary {
            as_of: Utc::now(),
            stats: ledger.stats(),
            opportunity_cost: ledger.opportunity_cost(&bankroll.settings.wage_rates),
            balance: ledger.balance(),
            winning_sessions,
            losing_sessions,
            best_session,
            worst_session,
            first_session: history.first().map(|r| r.date),
            goals_total: bankroll.goals.len(),
            goals_achieved: bankroll.goals.iter().filter(|g| g.achieved).count(),
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
