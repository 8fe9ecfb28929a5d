//! Global financial assumptions shared by every channel and expense row.

use serde::{Deserialize, Serialize};

/// Plan-wide knobs. Every rate is a whole-number percent (`3.0` = 3%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Assumptions {
    /// Starting cash balance
    pub cash_on_hand: f64,
    /// Blended customer acquisition cost
    pub cac: f64,
    /// Monthly churn, also governs the partner channel
    pub churn_rate: f64,
    /// Default monthly expansion for channels without their own
    pub expansion_rate: f64,
    /// Default annual contract value for channels without their own
    pub base_acv: f64,
    /// Employer burden on top of gross salary
    pub salary_tax_rate: f64,
    /// Annual salary escalation
    pub salary_growth_rate: f64,
    /// Annual escalation of non-headcount costs
    pub inflation_rate: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            cash_on_hand: 0.0,
            cac: 5_000.0,
            churn_rate: 3.0,
            expansion_rate: 5.0,
            base_acv: 12_000.0,
            salary_tax_rate: 35.0,
            salary_growth_rate: 5.0,
            inflation_rate: 2.0,
        }
    }
}

impl Assumptions {
    /// Same assumptions with a different starting balance
    #[must_use]
    pub fn with_cash_on_hand(mut self, cash_on_hand: f64) -> Self {
        self.cash_on_hand = cash_on_hand;
        self
    }
}
