use serde::{Deserialize, Serialize};

use super::session::SessionRecord;
use super::settings::WageRates;

/// `numerator / denominator`, or `fallback` when the denominator is not
/// strictly positive. Keeps NaN and ±∞ out of derived statistics.
pub(crate) fn ratio_or(numerator: f64, denominator: f64, fallback: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        fallback
    }
}

/// Summary statistics over every recorded session.
///
/// Values are kept at full precision; rounding is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Number of sessions recorded
    pub session_count: usize,

    /// Sum of winning session amounts (≥ 0)
    pub total_winnings: f64,

    /// Sum of losing session amounts, as a positive number (≥ 0)
    pub total_losses: f64,

    /// Sum of session durations (≥ 0)
    pub hours_played: f64,

    /// total_winnings - total_losses
    pub net_profit: f64,

    /// net_profit / hours_played, 0 when no time has been played
    pub profit_per_hour: f64,

    /// net_profit / (total_winnings + total_losses) × 100, 0 when nothing was won or lost
    pub profit_rate_pct: f64,
}

impl AggregateStats {
    /// Derive the full stats from running totals.
    pub fn from_totals(
        session_count: usize,
        total_winnings: f64,
        total_losses: f64,
        hours_played: f64,
    ) -> Self {
        let net_profit = total_winnings - total_losses;
        Self {
            session_count,
            total_winnings,
            total_losses,
            hours_played,
            net_profit,
            profit_per_hour: ratio_or(net_profit, hours_played, 0.0),
            profit_rate_pct: ratio_or(net_profit, total_winnings + total_losses, 0.0) * 100.0,
        }
    }

    /// Recompute everything by scanning a session history.
    pub fn from_history(history: &[SessionRecord]) -> Self {
        let mut winnings = 0.0;
        let mut losses = 0.0;
        let mut hours = 0.0;
        for record in history {
            if record.amount > 0.0 {
                winnings += record.amount;
            } else if record.amount < 0.0 {
                losses += -record.amount;
            }
            hours += record.hours;
        }
        Self::from_totals(history.len(), winnings, losses, hours)
    }

    /// Profit rate rounded to one decimal, or "0" when nothing was won or lost.
    pub fn profit_rate_display(&self) -> String {
        if self.total_winnings + self.total_losses > 0.0 {
            format!("{:.1}", self.profit_rate_pct)
        } else {
            "0".to_string()
        }
    }

    /// Field-by-field comparison within `tolerance`.
    pub fn approx_eq(&self, other: &AggregateStats, tolerance: f64) -> bool {
        let close = |a: f64, b: f64| (a - b).abs() <= tolerance;
        self.session_count == other.session_count
            && close(self.total_winnings, other.total_winnings)
            && close(self.total_losses, other.total_losses)
            && close(self.hours_played, other.hours_played)
            && close(self.net_profit, other.net_profit)
            && close(self.profit_per_hour, other.profit_per_hour)
            && close(self.profit_rate_pct, other.profit_rate_pct)
    }
}

/// What the hours spent at the table would have earned elsewhere,
/// next to what poker actually paid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpportunityCost {
    pub minimum_wage: f64,
    pub software_dev: f64,
    pub finance: f64,
    /// Net poker profit over the same hours
    pub poker: f64,
}

impl OpportunityCost {
    pub fn compute(hours_played: f64, net_profit: f64, rates: &WageRates) -> Self {
        Self {
            minimum_wage: hours_played * rates.minimum_wage,
            software_dev: hours_played * rates.software_dev,
            finance: hours_played * rates.finance,
            poker: net_profit,
        }
    }

    /// Whether poker paid more than a minimum-wage job would have.
    pub fn beats_minimum_wage(&self) -> bool {
        self.poker > self.minimum_wage
    }
}
