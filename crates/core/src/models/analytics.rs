use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::stats::{AggregateStats, OpportunityCost};

/// Snapshot of the whole tracker at a point in time, for dashboards and
/// JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerSummary {
    /// When this summary was computed
    pub as_of: DateTime<Utc>,

    /// Aggregate session statistics
    pub stats: AggregateStats,

    /// Poker profit against the reference wages
    pub opportunity_cost: OpportunityCost,

    /// Cumulative balance after the latest session
    pub balance: f64,

    /// Number of sessions with a positive result
    pub winning_sessions: usize,

    /// Number of sessions with a negative result
    pub losing_sessions: usize,

    /// Largest single-session result, if any sessions exist
    pub best_session: Option<f64>,

    /// Smallest single-session result, if any sessions exist
    pub worst_session: Option<f64>,

    /// Date of the first session, if any
    pub first_session: Option<DateTime<Utc>>,

    /// Total number of goals
    pub goals_total: usize,

    /// Goals ticked off as achieved
    pub goals_achieved: usize,
}
