use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::hand::HandLabel;
use crate::errors::CoreError;

/// Seat at a six-handed table.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Under the gun (first to act pre-flop)
    UTG,
    /// Middle position
    MP,
    /// Cutoff
    CO,
    /// Button
    BTN,
    /// Small blind
    SB,
    /// Big blind
    BB,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::UTG,
        Position::MP,
        Position::CO,
        Position::BTN,
        Position::SB,
        Position::BB,
    ];
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::UTG => write!(f, "UTG"),
            Position::MP => write!(f, "MP"),
            Position::CO => write!(f, "CO"),
            Position::BTN => write!(f, "BTN"),
            Position::SB => write!(f, "SB"),
            Position::BB => write!(f, "BB"),
        }
    }
}

impl FromStr for Position {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "UTG" => Ok(Position::UTG),
            "MP" => Ok(Position::MP),
            "CO" => Ok(Position::CO),
            "BTN" => Ok(Position::BTN),
            "SB" => Ok(Position::SB),
            "BB" => Ok(Position::BB),
            _ => Err(CoreError::ValidationError(format!("Unknown table position '{s}'"))),
        }
    }
}

/// Recommended pre-flop action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Open-raise and call a 3-bet
    #[serde(rename = "raise-and-call-3bet")]
    RaiseCall3Bet,
    /// Shove all-in
    #[serde(rename = "jam")]
    Jam,
    /// Open-raise, jam over a 3-bet
    #[serde(rename = "raise-or-jam")]
    RaiseOrJam,
    /// Open-raise, fold to a 3-bet
    #[serde(rename = "raise-or-fold")]
    RaiseOrFold,
    /// Complete the blind
    #[serde(rename = "limp")]
    Limp,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::RaiseCall3Bet => write!(f, "raise-and-call-3bet"),
            Action::Jam => write!(f, "jam"),
            Action::RaiseOrJam => write!(f, "raise-or-jam"),
            Action::RaiseOrFold => write!(f, "raise-or-fold"),
            Action::Limp => write!(f, "limp"),
        }
    }
}

/// Outcome of a strategy lookup. A missing entry is a valid answer,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Action(Action),
    NoRecommendation,
}

impl Recommendation {
    pub fn action(&self) -> Option<Action> {
        match self {
            Recommendation::Action(a) => Some(*a),
            Recommendation::NoRecommendation => None,
        }
    }

    pub fn is_recommended(&self) -> bool {
        matches!(self, Recommendation::Action(_))
    }
}

impl From<Option<Action>> for Recommendation {
    fn from(action: Option<Action>) -> Self {
        match action {
            Some(a) => Recommendation::Action(a),
            None => Recommendation::NoRecommendation,
        }
    }
}

/// Position-indexed pre-flop strategy: `Position → HandLabel → Action`.
///
/// Positions without an entry in the outer map are uncovered; every hand
/// looked up there yields [`Recommendation::NoRecommendation`]. Within a
/// covered position, hands outside the chart are treated the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyTable {
    charts: HashMap<Position, HashMap<HandLabel, Action>>,
}

impl StrategyTable {
    /// An empty table with no covered positions.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in chart, loaded once per process and never mutated.
    pub fn builtin() -> &'static StrategyTable {
        &BUILTIN_TABLE
    }

    /// Add (or replace) a single chart entry. Marks `position` as covered.
    pub fn insert(&mut self, position: Position, label: HandLabel, action: Action) {
        self.charts.entry(position).or_default().insert(label, action);
    }

    /// Add every label in `labels` (canonical notation) with the same action.
    /// Nothing is inserted unless every label parses.
    pub fn insert_range(
        &mut self,
        position: Position,
        labels: &[&str],
        action: Action,
    ) -> Result<(), CoreError> {
        let parsed = labels
            .iter()
            .map(|raw| raw.parse::<HandLabel>())
            .collect::<Result<Vec<_>, _>>()?;
        let chart = self.charts.entry(position).or_default();
        for label in parsed {
            chart.insert(label, action);
        }
        Ok(())
    }

    pub fn lookup(&self, position: Position, label: &HandLabel) -> Recommendation {
        self.charts
            .get(&position)
            .and_then(|chart| chart.get(label))
            .copied()
            .into()
    }

    /// Whether the table has any chart for `position`.
    pub fn is_covered(&self, position: Position) -> bool {
        self.charts.get(&position).is_some_and(|chart| !chart.is_empty())
    }

    /// Covered positions in seat order.
    pub fn covered_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|p| self.is_covered(*p))
            .collect()
    }

    /// Number of hands charted for `position`.
    pub fn chart_len(&self, position: Position) -> usize {
        self.charts.get(&position).map_or(0, HashMap::len)
    }
}

// Small-blind chart. No other seat is charted yet.
const SB_RAISE_CALL_3BET: &[&str] = &["AA", "KK", "QQ", "JJ", "AKs", "AKo", "AQs"];

const SB_JAM: &[&str] = &["TT", "99", "88", "77", "AQo", "AJs", "ATs", "KQs"];

const SB_RAISE_OR_JAM: &[&str] = &[
    "66", "55", "44", "33", "22",
    "AJo", "ATo",
    "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s",
    "KJs", "KTs", "QJs", "KQo",
];

const SB_RAISE_OR_FOLD: &[&str] = &[
    "K9s", "K8s", "K7s", "K6s", "K5s",
    "QTs", "Q9s", "JTs", "J9s",
    "T9s", "T8s", "98s", "87s", "76s", "65s", "54s",
    "KJo", "KTo", "QJo", "QTo", "JTo",
    "A9o", "A8o", "A7o", "A6o", "A5o",
];

const SB_LIMP: &[&str] = &[
    "K4s", "K3s", "K2s",
    "Q8s", "Q7s", "Q6s", "Q5s",
    "J8s", "J7s", "T7s", "97s", "86s", "75s", "64s", "53s",
    "A4o", "A3o", "A2o",
    "K9o", "K8o", "K7o", "Q9o", "J9o", "T9o", "98o", "87o",
];

static BUILTIN_TABLE: Lazy<StrategyTable> = Lazy::new(|| {
    let mut table = StrategyTable::new();
    let ranges = [
        (SB_RAISE_CALL_3BET, Action::RaiseCall3Bet),
        (SB_JAM, Action::Jam),
        (SB_RAISE_OR_JAM, Action::RaiseOrJam),
        (SB_RAISE_OR_FOLD, Action::RaiseOrFold),
        (SB_LIMP, Action::Limp),
    ];
    for (labels, action) in ranges {
        if let Err(e) = table.insert_range(Position::SB, labels, action) {
            tracing::error!(error = %e, "built-in strategy chart contains a malformed label");
        }
    }
    table
});
