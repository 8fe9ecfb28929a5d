//! Forecast Builder
//!
//! Fluent assembly of a [`ForecastConfig`], the way a plan editor adds hires
//! and cost lines one at a time.

use jiff::Timestamp;

use super::ForecastConfig;
use crate::model::{
    Assumptions, ExpenseRow, HeadcountRow, PartnerConfig, PlgConfig, RevenueConfig, SalesConfig,
};
use crate::month::YearMonth;

/// Builder for forecast configurations
#[derive(Debug, Clone)]
pub struct ForecastBuilder {
    start_month: Option<YearMonth>,
    months: usize,
    revenue: RevenueConfig,
    headcount: Vec<HeadcountRow>,
    expenses: Vec<ExpenseRow>,
    assumptions: Assumptions,
}

impl Default for ForecastBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastBuilder {
    /// Start from default channels and assumptions
    #[must_use]
    pub fn new() -> Self {
        Self {
            start_month: None,
            months: 24,
            revenue: RevenueConfig::default(),
            headcount: Vec::new(),
            expenses: Vec::new(),
            assumptions: Assumptions::default(),
        }
    }

    // =========================================================================
    // Horizon
    // =========================================================================

    /// Set the first month. An invalid month number leaves the start unset.
    #[must_use]
    pub fn start(mut self, year: i16, month: i8) -> Self {
        self.start_month = YearMonth::new(year, month).ok();
        self
    }

    #[must_use]
    pub fn start_month(mut self, start_month: YearMonth) -> Self {
        self.start_month = Some(start_month);
        self
    }

    #[must_use]
    pub fn months(mut self, months: usize) -> Self {
        self.months = months;
        self
    }

    // =========================================================================
    // Assumptions
    // =========================================================================

    #[must_use]
    pub fn assumptions(mut self, assumptions: Assumptions) -> Self {
        self.assumptions = assumptions;
        self
    }

    #[must_use]
    pub fn cash_on_hand(mut self, cash_on_hand: f64) -> Self {
        self.assumptions.cash_on_hand = cash_on_hand;
        self
    }

    // =========================================================================
    // Revenue channels
    // =========================================================================

    #[must_use]
    pub fn revenue(mut self, revenue: RevenueConfig) -> Self {
        self.revenue = revenue;
        self
    }

    /// Switch every channel off
    #[must_use]
    pub fn no_revenue(mut self) -> Self {
        self.revenue = RevenueConfig::zero();
        self
    }

    #[must_use]
    pub fn plg(mut self, plg: PlgConfig) -> Self {
        self.revenue.plg = plg;
        self
    }

    #[must_use]
    pub fn sales(mut self, sales: SalesConfig) -> Self {
        self.revenue.sales = sales;
        self
    }

    #[must_use]
    pub fn partners(mut self, partners: PartnerConfig) -> Self {
        self.revenue.partners = partners;
        self
    }

    // =========================================================================
    // Cost lines
    // =========================================================================

    #[must_use]
    pub fn hire(mut self, row: HeadcountRow) -> Self {
        self.headcount.push(row);
        self
    }

    #[must_use]
    pub fn expense(mut self, row: ExpenseRow) -> Self {
        self.expenses.push(row);
        self
    }

    /// Finish the configuration. Without an explicit start the forecast
    /// begins in the current UTC month.
    pub fn build(self) -> ForecastConfig {
        let start_month = self
            .start_month
            .unwrap_or_else(|| YearMonth::from_timestamp(Timestamp::now()));

        ForecastConfig {
            start_month,
            months: self.months,
            revenue: self.revenue,
            headcount: self.headcount,
            expenses: self.expenses,
            assumptions: self.assumptions,
        }
    }
}
