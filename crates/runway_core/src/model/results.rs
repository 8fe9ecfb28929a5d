//! Forecast output types
//!
//! `ForecastResult` is what callers serialize and chart: one `ForecastMonth`
//! per simulated month plus the scalar `ForecastSummary`.

use serde::{Deserialize, Serialize};

use crate::month::YearMonth;

/// Sentinel for metrics that have no finite value (infinite runway, no new
/// customers to pay back CAC, ...). Callers render anything `>= UNBOUNDED` as "∞".
pub const UNBOUNDED: f64 = 999.0;

/// One simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastMonth {
    pub month_index: usize,
    pub date: YearMonth,

    pub plg_mrr: f64,
    pub sales_mrr: f64,
    pub partner_mrr: f64,
    pub total_mrr: f64,
    pub total_arr: f64,
    pub total_customers: f64,
    pub new_customers: f64,

    // MRR movements, summed across channels
    pub new_mrr: f64,
    pub churned_mrr: f64,
    pub expansion_mrr: f64,

    pub headcount_expense: f64,
    pub non_headcount_expense: f64,
    pub total_expense: f64,

    /// Expense minus revenue; positive while burning cash
    pub net_burn: f64,
    pub cumulative_burn: f64,
    pub cash_remaining: f64,
}

/// End-of-horizon and trailing-window metrics
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub projected_arr: f64,
    pub projected_mrr: f64,
    pub net_new_arr: f64,
    pub annual_nrr: f64,
    pub annual_grr: f64,
    pub total_customers: f64,
    pub cash_on_hand: f64,
    pub monthly_burn: f64,
    pub runway_months: f64,
    pub cac: f64,
    pub cac_payback_months: f64,
    pub ltv_cac_ratio: f64,
    pub burn_multiple: f64,
    pub rule_of_40: f64,
}

/// Complete output of one forecast run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub months: Vec<ForecastMonth>,
    pub summary: ForecastSummary,
}

impl ForecastResult {
    /// Record for a specific calendar month, if inside the horizon
    pub fn month(&self, date: YearMonth) -> Option<&ForecastMonth> {
        let first = self.months.first()?;
        let offset = usize::try_from(first.date.months_until(date)).ok()?;
        self.months.get(offset)
    }

    pub fn last(&self) -> Option<&ForecastMonth> {
        self.months.last()
    }

    /// First month where revenue covers expenses
    pub fn break_even_month(&self) -> Option<&ForecastMonth> {
        self.months.iter().find(|m| m.net_burn <= 0.0)
    }

    /// First month where the cash balance is exhausted
    pub fn cash_out_month(&self) -> Option<&ForecastMonth> {
        self.months.iter().find(|m| m.cash_remaining <= 0.0)
    }

    /// Sum of MRR over the horizon
    pub fn total_revenue(&self) -> f64 {
        self.months.iter().map(|m| m.total_mrr).sum()
    }

    pub fn total_expense(&self) -> f64 {
        self.months.iter().map(|m| m.total_expense).sum()
    }
}

/// Whether a metric carries the "no finite value" sentinel
#[inline]
pub fn is_unbounded(value: f64) -> bool {
    value >= UNBOUNDED
}
