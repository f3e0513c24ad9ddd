use crate::errors::CoreError;
use crate::models::card::Card;
use crate::models::hand::HandLabel;
use crate::models::strategy::{Position, Recommendation, StrategyTable};

/// Turns two hole cards and a seat into a pre-flop recommendation.
///
/// Stateless: validate → normalize → lookup. The table is borrowed, so the
/// built-in `'static` chart can be shared by any number of classifiers
/// without locking.
#[derive(Debug, Clone, Copy)]
pub struct HandClassifier<'t> {
    table: &'t StrategyTable,
}

impl HandClassifier<'static> {
    /// Classifier backed by the built-in strategy chart.
    pub fn new() -> Self {
        Self {
            table: StrategyTable::builtin(),
        }
    }
}

impl Default for HandClassifier<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> HandClassifier<'t> {
    /// Classifier backed by a caller-supplied chart.
    pub fn with_table(table: &'t StrategyTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t StrategyTable {
        self.table
    }

    /// Canonical label for two hole cards, independent of their order.
    pub fn normalize(&self, card1: Card, card2: Card) -> Result<HandLabel, CoreError> {
        HandLabel::from_cards(card1, card2)
    }

    /// Recommended action for the hand from `position`.
    ///
    /// Returns `Ok(Recommendation::NoRecommendation)` when the chart has
    /// nothing for this seat or this hand.
    pub fn classify(
        &self,
        card1: Card,
        card2: Card,
        position: Position,
    ) -> Result<Recommendation, CoreError> {
        let label = self.normalize(card1, card2)?;
        let recommendation = self.lookup(&label, position);
        tracing::debug!(hand = %label, %position, ?recommendation, "hand classified");
        Ok(recommendation)
    }

    /// Same as [`classify`](Self::classify), from raw UI selections such as
    /// `("Ah", "Kd", "SB")`. Malformed cards or positions fail fast.
    pub fn classify_raw(
        &self,
        card1: &str,
        card2: &str,
        position: &str,
    ) -> Result<Recommendation, CoreError> {
        let c1: Card = card1.parse()?;
        let c2: Card = card2.parse()?;
        let pos: Position = position.parse()?;
        self.classify(c1, c2, pos)
    }

    pub fn lookup(&self, label: &HandLabel, position: Position) -> Recommendation {
        self.table.lookup(position, label)
    }

    pub fn is_covered(&self, position: Position) -> bool {
        self.table.is_covered(position)
    }
}
