//! Scenario tests for the forecast engine
//!
//! Tests are organized by topic:
//! - `forecast` - Horizon, dates and orchestration contracts
//! - `revenue` - Channel behaviour as seen through a full forecast
//! - `expenses` - Headcount and expense amortization inside a forecast
//! - `runway` - Cash, burn and runway
//! - `summary` - Investor metrics

mod summary;

use crate::model::{PlgConfig, RevenueConfig};
use crate::month::YearMonth;

pub(crate) fn ym(s: &str) -> YearMonth {
    s.parse().unwrap()
}

pub(crate) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual} (tolerance {tolerance})"
    );
}

/// Revenue from a single PLG channel, every other channel switched off
pub(crate) fn plg_only(plg: PlgConfig) -> RevenueConfig {
    RevenueConfig {
        plg,
        ..RevenueConfig::zero()
    }
}
