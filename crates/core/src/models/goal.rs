use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A purchase the player is saving towards with poker profits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier, stable for the goal's lifetime
    pub id: Uuid,

    /// Display label (never empty)
    pub name: String,

    /// Target amount (> 0)
    pub cost: f64,

    /// Ticked off by the user
    pub achieved: bool,

    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Callers validate `name` and `cost` first; see `GoalService::add_goal`.
    pub(crate) fn new(name: String, cost: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            cost,
            achieved: false,
            created_at: Utc::now(),
        }
    }
}

/// How long reaching a goal takes at the current hourly profit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GoalTimeline {
    Reachable {
        /// cost / profit_per_hour
        hours: f64,
        /// hours split into working days, rounded up
        days: u64,
    },
    /// Profit per hour is zero or negative.
    Unreachable,
}

impl GoalTimeline {
    pub fn hours(&self) -> Option<f64> {
        match self {
            GoalTimeline::Reachable { hours, .. } => Some(*hours),
            GoalTimeline::Unreachable => None,
        }
    }

    pub fn days(&self) -> Option<u64> {
        match self {
            GoalTimeline::Reachable { days, .. } => Some(*days),
            GoalTimeline::Unreachable => None,
        }
    }
}

/// A goal paired with its current timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProjection {
    pub goal: Goal,
    pub timeline: GoalTimeline,
}
