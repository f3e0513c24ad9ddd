use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::goal::{Goal, GoalProjection, GoalTimeline};
use crate::models::stats::ratio_or;

/// Manages savings goals and projects how long each takes to reach.
///
/// Pure business logic with no I/O. Operates on the goal list it is handed.
pub struct GoalService;

impl GoalService {
    pub fn new() -> Self {
        Self
    }

    /// Create a goal and append it. Returns the new goal's ID.
    ///
    /// Rules:
    /// - name must not be blank (it is stored trimmed)
    /// - cost must be finite and positive
    pub fn add_goal(&self, goals: &mut Vec<Goal>, name: &str, cost: f64) -> Result<Uuid, CoreError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::ValidationError("Goal name must not be empty".into()));
        }
        if !cost.is_finite() || cost <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Goal cost must be a positive number (got {cost})"
            )));
        }

        let goal = Goal::new(trimmed.to_string(), cost);
        let id = goal.id;
        tracing::info!(%id, name = trimmed, cost, "goal added");
        goals.push(goal);
        Ok(id)
    }

    /// Remove a goal by ID and return it.
    pub fn remove_goal(&self, goals: &mut Vec<Goal>, id: Uuid) -> Result<Goal, CoreError> {
        let idx = goals
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| CoreError::GoalNotFound(id.to_string()))?;
        let removed = goals.remove(idx);
        tracing::info!(%id, name = %removed.name, "goal removed");
        Ok(removed)
    }

    /// Flip the achieved flag. Returns the new value.
    pub fn toggle_achieved(&self, goals: &mut [Goal], id: Uuid) -> Result<bool, CoreError> {
        let goal = goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| CoreError::GoalNotFound(id.to_string()))?;
        goal.achieved = !goal.achieved;
        Ok(goal.achieved)
    }

    /// Time needed to fund `cost` at `profit_per_hour`, in hours and in
    /// working days of `hours_per_day` (rounded up).
    pub fn timeline(&self, cost: f64, profit_per_hour: f64, hours_per_day: f64) -> GoalTimeline {
        if profit_per_hour <= 0.0 || !profit_per_hour.is_finite() {
            return GoalTimeline::Unreachable;
        }
        let hours = cost / profit_per_hour;
        if !hours.is_finite() {
            return GoalTimeline::Unreachable;
        }
        let days = ratio_or(hours, hours_per_day, 0.0).ceil();
        GoalTimeline::Reachable {
            hours,
            days: days as u64,
        }
    }

    /// Timeline for every goal, in list order.
    pub fn projections(
        &self,
        goals: &[Goal],
        profit_per_hour: f64,
        hours_per_day: f64,
    ) -> Vec<GoalProjection> {
        goals
            .iter()
            .map(|goal| GoalProjection {
                goal: goal.clone(),
                timeline: self.timeline(goal.cost, profit_per_hour, hours_per_day),
            })
            .collect()
    }
}

impl Default for GoalService {
    fn default() -> Self {
        Self::new()
    }
}
