use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed play session.
///
/// Records are created only by the ledger and never change afterwards;
/// the ledger hands them out by shared reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique identifier
    pub id: Uuid,

    /// When the session was recorded
    pub date: DateTime<Utc>,

    /// Signed result: positive for a win, negative for a loss
    pub amount: f64,

    /// Session length in hours
    pub hours: f64,

    /// Running sum of `amount` over this and every earlier record
    pub cumulative_balance: f64,
}

impl SessionRecord {
    pub(crate) fn new(amount: f64, hours: f64, date: DateTime<Utc>, previous_balance: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            hours,
            cumulative_balance: previous_balance + amount,
        }
    }

    pub fn is_win(&self) -> bool {
        self.amount > 0.0
    }

    pub fn is_loss(&self) -> bool {
        self.amount < 0.0
    }
}
