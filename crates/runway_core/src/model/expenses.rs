//! Headcount and discrete expense line items

use serde::{Deserialize, Serialize};

use crate::month::YearMonth;

fn default_fte() -> f64 {
    1.0
}

/// An ongoing hire, active from `start_month` to the end of the horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadcountRow {
    pub role: String,
    #[serde(default)]
    pub category: String,
    /// Monthly gross salary
    pub base_salary: f64,
    /// Full-time-equivalent multiplier (0.5 = half time)
    #[serde(default = "default_fte")]
    pub fte: f64,
    pub start_month: YearMonth,
}

impl HeadcountRow {
    pub fn new(role: impl Into<String>, base_salary: f64, start_month: YearMonth) -> Self {
        Self {
            role: role.into(),
            category: String::new(),
            base_salary,
            fte: default_fte(),
            start_month,
        }
    }

    #[must_use]
    pub fn with_fte(mut self, fte: f64) -> Self {
        self.fte = fte;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[inline]
    pub fn is_active(&self, month: YearMonth) -> bool {
        self.start_month <= month
    }
}

/// How an expense row's `amount` is spread over its active window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseFrequency {
    /// `amount` every active month
    Monthly,
    /// `amount / 12` every active month
    Annual,
    /// `amount` once, in `start_month`
    OneTime,
}

/// A non-headcount cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRow {
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub amount: f64,
    pub frequency: ExpenseFrequency,
    pub start_month: YearMonth,
    /// Inclusive last month; open-ended when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_month: Option<YearMonth>,
}

impl ExpenseRow {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        frequency: ExpenseFrequency,
        start_month: YearMonth,
    ) -> Self {
        Self {
            name: name.into(),
            category: String::new(),
            amount,
            frequency,
            start_month,
            end_month: None,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Close the active window at `end_month` (inclusive)
    #[must_use]
    pub fn ending(mut self, end_month: YearMonth) -> Self {
        self.end_month = Some(end_month);
        self
    }

    /// Whether `month` falls inside `[start_month, end_month]`
    #[inline]
    pub fn is_active(&self, month: YearMonth) -> bool {
        self.start_month <= month && self.end_month.is_none_or(|end| month <= end)
    }
}
