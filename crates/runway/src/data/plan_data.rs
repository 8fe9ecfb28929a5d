//! Plan file shape
//!
//! A plan is stored as YAML. Every field is optional; unset values fall back
//! to the engine defaults when the plan is converted into a `ForecastConfig`.
//!
//! ```yaml
//! name: Seed round
//! start_month: 2025-01
//! months: 24
//! assumptions:
//!   cash_on_hand: 750000
//! revenue:
//!   plg:
//!     monthly_trials: 300
//!     trial_conversion_rate: 4
//! headcount:
//!   - role: Engineer
//!     category: engineering
//!     base_salary: 8000
//!     start_month: 2025-02-15
//! expenses:
//!   - name: Hosting
//!     amount: 1500
//!     frequency: monthly
//!     start_month: 2025-01
//! ```

use runway_core::model::ExpenseFrequency;
use serde::{Deserialize, Serialize};

/// A persisted plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// First month (any date-like string); the current month when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_month: Option<String>,

    /// Horizon in months
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months: Option<usize>,

    #[serde(default)]
    pub assumptions: AssumptionsData,

    /// Channel configuration; the default channels when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<RevenueData>,

    #[serde(default)]
    pub headcount: Vec<HeadcountData>,

    #[serde(default)]
    pub expenses: Vec<ExpenseData>,
}

/// Global assumptions, percentages as whole numbers (3 = 3%)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssumptionsData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_on_hand: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cac: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub churn_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expansion_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_acv: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_tax_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_growth_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation_rate: Option<f64>,
}

/// Channels of a plan; a missing channel keeps its default placeholder values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plg: Option<PlgData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales: Option<SalesData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partners: Option<PartnerData>,
}

/// PLG channel. Unset ACV, churn and expansion use the global assumptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlgData {
    #[serde(default)]
    pub monthly_trials: f64,
    #[serde(default)]
    pub trial_conversion_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_acv: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub churn_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expansion_rate: Option<f64>,
}

/// Sales channel. Unset ACV, churn and expansion use the global assumptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    #[serde(default)]
    pub monthly_sqls: f64,
    #[serde(default)]
    pub close_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_acv: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub churn_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expansion_rate: Option<f64>,
}

/// Partner channel. Unset ACV uses the global assumption.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartnerData {
    #[serde(default)]
    pub monthly_referrals: f64,
    #[serde(default)]
    pub close_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_acv: Option<f64>,
    #[serde(default)]
    pub commission_rate: f64,
}

/// A hire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadcountData {
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub base_salary: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fte: Option<f64>,
    /// Any date-like string, truncated to its month
    pub start_month: String,
}

/// A non-headcount cost line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub amount: f64,
    pub frequency: ExpenseFrequency,
    pub start_month: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_month: Option<String>,
}

impl PlanData {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Save to YAML string
    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    /// Display name, falling back to `fallback`
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(fallback)
    }
}
