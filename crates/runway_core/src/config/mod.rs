//! Forecast configuration
//!
//! `ForecastConfig` carries everything one forecast run needs. It is read-only
//! to the engine, so the same config can be re-run for every what-if edit.
//!
//! # Builder DSL
//!
//! ```ignore
//! use runway_core::config::ForecastBuilder;
//! use runway_core::model::{ExpenseFrequency, ExpenseRow, HeadcountRow};
//!
//! let jan: runway_core::YearMonth = "2025-01".parse()?;
//! let config = ForecastBuilder::new()
//!     .start(2025, 1)
//!     .months(24)
//!     .cash_on_hand(500_000.0)
//!     .hire(HeadcountRow::new("Engineer", 8_000.0, jan))
//!     .expense(ExpenseRow::new("Hosting", 2_000.0, ExpenseFrequency::Monthly, jan))
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

use crate::error::HorizonError;
use crate::model::{Assumptions, ExpenseRow, HeadcountRow, RevenueConfig};
use crate::month::YearMonth;

pub mod builder;

pub use builder::ForecastBuilder;

fn default_months() -> usize {
    24
}

/// Complete input of a forecast run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastConfig {
    /// Label of the first simulated month
    pub start_month: YearMonth,

    /// Number of months to simulate; zero yields an empty series
    #[serde(default = "default_months")]
    pub months: usize,

    #[serde(default)]
    pub revenue: RevenueConfig,

    #[serde(default)]
    pub headcount: Vec<HeadcountRow>,

    #[serde(default)]
    pub expenses: Vec<ExpenseRow>,

    #[serde(default)]
    pub assumptions: Assumptions,
}

impl ForecastConfig {
    /// Default channels and assumptions, no expense rows
    pub fn new(start_month: YearMonth, months: usize) -> Self {
        Self {
            start_month,
            months,
            revenue: RevenueConfig::default(),
            headcount: Vec::new(),
            expenses: Vec::new(),
            assumptions: Assumptions::default(),
        }
    }

    /// Calendar month of a given month index, saturating at [`YearMonth::MAX`]
    #[inline]
    pub fn month_at(&self, index: usize) -> YearMonth {
        i64::try_from(index)
            .ok()
            .and_then(|offset| self.start_month.checked_add_months(offset))
            .unwrap_or(YearMonth::MAX)
    }

    /// Last simulated month, `None` for an empty horizon
    pub fn end_month(&self) -> Option<YearMonth> {
        self.months.checked_sub(1).map(|last| self.month_at(last))
    }

    /// Longest horizon whose months all stay within the calendar range
    pub fn max_months(&self) -> usize {
        // start_month <= MAX, so the distance is never negative
        self.start_month.months_until(YearMonth::MAX) as usize + 1
    }

    /// Reject horizons that run past [`YearMonth::MAX`]
    pub fn check_horizon(&self) -> Result<(), HorizonError> {
        let limit = self.max_months();
        if self.months > limit {
            return Err(HorizonError {
                start_month: self.start_month,
                months: self.months,
                limit,
            });
        }
        Ok(())
    }

    /// Variant with a different horizon
    #[must_use]
    pub fn with_months(&self, months: usize) -> Self {
        Self {
            months,
            ..self.clone()
        }
    }

    /// Variant with different assumptions
    #[must_use]
    pub fn with_assumptions(&self, assumptions: Assumptions) -> Self {
        Self {
            assumptions,
            ..self.clone()
        }
    }

    /// Variant with different channel configuration
    #[must_use]
    pub fn with_revenue(&self, revenue: RevenueConfig) -> Self {
        Self {
            revenue,
            ..self.clone()
        }
    }
}
