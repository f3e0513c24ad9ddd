use serde::{Deserialize, Serialize};

use super::goal::Goal;
use super::settings::Settings;
use crate::services::session_ledger::SessionLedger;

/// The main data container. Everything in here gets serialized and saved
/// to a tracker snapshot.
///
/// Contains: the session ledger, savings goals, and user settings.
/// Signup emails are not part of it; they live in a `SignupStore`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bankroll {
    /// Append-only session history with running totals
    pub ledger: SessionLedger,

    /// Savings goals, in creation order
    #[serde(default)]
    pub goals: Vec<Goal>,

    /// User settings (wage rates, working day length, signup domain)
    pub settings: Settings,
}
