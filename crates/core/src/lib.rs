pub mod errors;
pub mod models;
pub mod services;
pub mod storage;
pub mod stores;

use chrono::{DateTime, Utc};
use models::{
    analytics::TrackerSummary,
    bankroll::Bankroll,
    card::Card,
    goal::{Goal, GoalProjection},
    hand::HandLabel,
    session::SessionRecord,
    settings::{Settings, WageRates},
    signup::EmailSignup,
    stats::{AggregateStats, OpportunityCost},
    strategy::{Position, Recommendation},
};
use services::{
    analytics_service::AnalyticsService, goal_service::GoalService,
    hand_classifier::HandClassifier, session_ledger::SessionLedger,
    signup_service::SignupService,
};
use storage::manager::StorageManager;
use stores::traits::SignupStore;
use uuid::Uuid;

use errors::CoreError;

/// Main entry point for the pokes core library.
/// Holds one player's bankroll and the services that operate on it.
///
/// Mutating methods take `&mut self`; an owner sharing a tracker between
/// concurrent callers must wrap it (e.g. in a `Mutex`) so sessions are
/// appended in a single order.
#[must_use]
pub struct PokerTracker {
    bankroll: Bankroll,
    classifier: HandClassifier<'static>,
    goal_service: GoalService,
    analytics_service: AnalyticsService,
    signup_service: SignupService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for PokerTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokerTracker")
            .field("sessions", &self.bankroll.ledger.len())
            .field("goals", &self.bankroll.goals.len())
            .field("settings", &self.bankroll.settings)
            .field("signups", &self.signup_service)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl PokerTracker {
    /// Create an empty tracker with default settings and an in-memory
    /// signup store.
    pub fn create_new() -> Self {
        Self::build(Bankroll::default(), SignupService::in_memory())
    }

    /// Create an empty tracker whose signups go to `store`.
    pub fn with_signup_store(store: Box<dyn SignupStore>) -> Self {
        Self::build(Bankroll::default(), SignupService::new(store))
    }

    /// Load a tracker from snapshot bytes.
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, CoreError> {
        let bankroll = StorageManager::load_from_bytes(data)?;
        Ok(Self::build(bankroll, SignupService::in_memory()))
    }

    /// Save the bankroll to snapshot bytes.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_bytes(&mut self) -> Result<Vec<u8>, CoreError> {
        let bytes = StorageManager::save_to_bytes(&self.bankroll)?;
        self.dirty = false;
        Ok(bytes)
    }

    /// Load from a snapshot file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Self, CoreError> {
        let bankroll = StorageManager::load_from_file(path)?;
        Ok(Self::build(bankroll, SignupService::in_memory()))
    }

    /// Save to a snapshot file on disk (native only, not WASM).
    /// Clears the unsaved-changes flag on success.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&mut self, path: &str) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.bankroll, path)?;
        self.dirty = false;
        Ok(())
    }

    // ── Sessions ────────────────────────────────────────────────────

    /// Record a finished session: signed result and duration in hours.
    pub fn record_session(&mut self, amount: f64, hours: f64) -> Result<SessionRecord, CoreError> {
        let record = self.bankroll.ledger.record_session(amount, hours)?.clone();
        self.dirty = true;
        Ok(record)
    }

    /// Record a finished session with an explicit date.
    pub fn record_session_at(
        &mut self,
        amount: f64,
        hours: f64,
        date: DateTime<Utc>,
    ) -> Result<SessionRecord, CoreError> {
        let record = self
            .bankroll
            .ledger
            .record_session_at(amount, hours, date)?
            .clone();
        self.dirty = true;
        Ok(record)
    }

    /// Current aggregate statistics.
    #[must_use]
    pub fn get_stats(&self) -> AggregateStats {
        self.bankroll.ledger.stats()
    }

    /// Session history in recorded order.
    #[must_use]
    pub fn get_history(&self) -> &[SessionRecord] {
        self.bankroll.ledger.history()
    }

    /// Session history, newest first (as the session list displays it).
    #[must_use]
    pub fn get_history_newest_first(&self) -> Vec<&SessionRecord> {
        self.bankroll.ledger.history().iter().rev().collect()
    }

    /// Sessions dated within `[from, to]`, in recorded order.
    #[must_use]
    pub fn get_sessions_in_range(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Vec<&SessionRecord> {
        self.bankroll.ledger.sessions_in_range(from, to)
    }

    /// Cumulative balance after the latest session.
    #[must_use]
    pub fn balance(&self) -> f64 {
        self.bankroll.ledger.balance()
    }

    #[must_use]
    pub fn session_count(&self) -> usize {
        self.bankroll.ledger.len()
    }

    /// Compare poker profit against the configured reference wages.
    #[must_use]
    pub fn opportunity_cost(&self) -> OpportunityCost {
        self.bankroll
            .ledger
            .opportunity_cost(&self.bankroll.settings.wage_rates)
    }

    /// Read-only access to the underlying ledger.
    #[must_use]
    pub fn ledger(&self) -> &SessionLedger {
        &self.bankroll.ledger
    }

    // ── Hand Classification ─────────────────────────────────────────

    /// Canonical label ("AKs", "88", …) for two hole cards.
    pub fn normalize_hand(&self, card1: Card, card2: Card) -> Result<HandLabel, CoreError> {
        self.classifier.normalize(card1, card2)
    }

    /// Pre-flop recommendation for two hole cards from `position`.
    pub fn classify_hand(
        &self,
        card1: Card,
        card2: Card,
        position: Position,
    ) -> Result<Recommendation, CoreError> {
        self.classifier.classify(card1, card2, position)
    }

    /// Pre-flop recommendation from raw selections like `("Ah", "Kd", "SB")`.
    pub fn classify_hand_raw(
        &self,
        card1: &str,
        card2: &str,
        position: &str,
    ) -> Result<Recommendation, CoreError> {
        self.classifier.classify_raw(card1, card2, position)
    }

    /// Seats the strategy chart has recommendations for.
    #[must_use]
    pub fn covered_positions(&self) -> Vec<Position> {
        self.classifier.table().covered_positions()
    }

    // ── Goals ───────────────────────────────────────────────────────

    /// Add a savings goal. Returns its ID.
    pub fn add_goal(&mut self, name: &str, cost: f64) -> Result<Uuid, CoreError> {
        let id = self.goal_service.add_goal(&mut self.bankroll.goals, name, cost)?;
        self.dirty = true;
        Ok(id)
    }

    /// Remove a goal by ID. Returns the removed goal.
    pub fn remove_goal(&mut self, id: Uuid) -> Result<Goal, CoreError> {
        let goal = self.goal_service.remove_goal(&mut self.bankroll.goals, id)?;
        self.dirty = true;
        Ok(goal)
    }

    /// Flip a goal's achieved flag. Returns the new value.
    pub fn toggle_goal_achieved(&mut self, id: Uuid) -> Result<bool, CoreError> {
        let achieved = self
            .goal_service
            .toggle_achieved(&mut self.bankroll.goals, id)?;
        self.dirty = true;
        Ok(achieved)
    }

    #[must_use]
    pub fn get_goal(&self, id: Uuid) -> Option<&Goal> {
        self.bankroll.goals.iter().find(|g| g.id == id)
    }

    /// All goals in creation order.
    #[must_use]
    pub fn get_goals(&self) -> &[Goal] {
        &self.bankroll.goals
    }

    /// Every goal with the time it takes to fund at the current profit per hour.
    #[must_use]
    pub fn goal_projections(&self) -> Vec<GoalProjection> {
        self.goal_service.projections(
            &self.bankroll.goals,
            self.get_stats().profit_per_hour,
            self.bankroll.settings.work_hours_per_day,
        )
    }

    // ── Analytics ───────────────────────────────────────────────────

    /// Full tracker summary as of now.
    #[must_use]
    pub fn get_summary(&self) -> TrackerSummary {
        self.analytics_service.summary(&self.bankroll)
    }

    /// The summary serialized as pretty-printed JSON.
    pub fn export_summary_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.get_summary())
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize summary: {e}")))
    }

    // ── Signups ─────────────────────────────────────────────────────

    /// Capture a beta-signup email, enforcing the configured domain suffix.
    pub fn submit_signup(&mut self, email: &str) -> Result<EmailSignup, CoreError> {
        let suffix = self.bankroll.settings.required_email_suffix.clone();
        self.signup_service.submit(email, suffix.as_deref())
    }

    /// All captured signups, newest first.
    pub fn get_signups(&self) -> Result<Vec<EmailSignup>, CoreError> {
        self.signup_service.list()
    }

    /// Captured signups as CSV (`email,timestamp`).
    pub fn export_signups_csv(&self) -> Result<String, CoreError> {
        self.signup_service.export_csv()
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn get_settings(&self) -> &Settings {
        &self.bankroll.settings
    }

    /// Replace the reference wages used for opportunity cost.
    pub fn set_wage_rates(&mut self, rates: WageRates) -> Result<(), CoreError> {
        rates.validate()?;
        self.bankroll.settings.wage_rates = rates;
        self.dirty = true;
        Ok(())
    }

    /// Set the length of a working day used for goal projections.
    pub fn set_work_hours_per_day(&mut self, hours: f64) -> Result<(), CoreError> {
        Settings::validate_work_hours_per_day(hours)?;
        self.bankroll.settings.work_hours_per_day = hours;
        self.dirty = true;
        Ok(())
    }

    /// Require signup addresses to end with `suffix` (e.g. ".edu"),
    /// or accept any domain with `None`.
    pub fn set_required_email_suffix(&mut self, suffix: Option<String>) {
        self.bankroll.settings.required_email_suffix = suffix
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        self.dirty = true;
    }

    // ── Dirty State ─────────────────────────────────────────────────

    /// Returns `true` if the bankroll has been modified since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(bankroll: Bankroll, signup_service: SignupService) -> Self {
        Self {
            bankroll,
            classifier: HandClassifier::new(),
            goal_service: GoalService::new(),
            analytics_service: AnalyticsService::new(),
            signup_service,
            dirty: false,
        }
    }
}
