//! Acquisition channel configuration

use serde::{Deserialize, Serialize};

/// Product-led funnel: constant trial inflow converting the same month
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlgConfig {
    pub monthly_trials: f64,
    pub trial_conversion_rate: f64,
    pub avg_acv: f64,
    pub churn_rate: f64,
    pub expansion_rate: f64,
}

/// Sales-assisted deals, closed in the month they are generated
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalesConfig {
    pub monthly_sqls: f64,
    pub close_rate: f64,
    pub avg_acv: f64,
    pub churn_rate: f64,
    pub expansion_rate: f64,
}

/// Partner referrals. Churn comes from the global assumption and a commission
/// is paid out of gross revenue.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartnerConfig {
    pub monthly_referrals: f64,
    pub close_rate: f64,
    pub avg_acv: f64,
    pub commission_rate: f64,
}

/// The three acquisition channels of a plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueConfig {
    pub plg: PlgConfig,
    pub sales: SalesConfig,
    pub partners: PartnerConfig,
}

/// Placeholder channels shown on a brand-new plan
pub const DEFAULT_REVENUE_CONFIG: RevenueConfig = RevenueConfig {
    plg: PlgConfig {
        monthly_trials: 200.0,
        trial_conversion_rate: 5.0,
        avg_acv: 1_200.0,
        churn_rate: 4.0,
        expansion_rate: 1.0,
    },
    sales: SalesConfig {
        monthly_sqls: 20.0,
        close_rate: 20.0,
        avg_acv: 12_000.0,
        churn_rate: 2.0,
        expansion_rate: 1.0,
    },
    partners: PartnerConfig {
        monthly_referrals: 5.0,
        close_rate: 25.0,
        avg_acv: 6_000.0,
        commission_rate: 20.0,
    },
};

impl Default for RevenueConfig {
    fn default() -> Self {
        DEFAULT_REVENUE_CONFIG
    }
}

impl RevenueConfig {
    /// Every inflow and rate set to zero
    pub fn zero() -> Self {
        Self {
            plg: PlgConfig::default(),
            sales: SalesConfig::default(),
            partners: PartnerConfig::default(),
        }
    }
}
