//! SaaS forecast engine
//!
//! This crate projects a company's monthly revenue, expenses, cash and
//! investor metrics over an arbitrary horizon. It supports:
//! - Three acquisition channels (PLG, sales-assisted, partners) with churn,
//!   expansion and partner commission
//! - Headcount with salary tax loading and annual raises
//! - Monthly, annual and one-time expenses with annual inflation
//! - Cash, cumulative burn and runway
//! - Summary metrics: ARR, NRR, GRR, CAC payback, LTV/CAC, burn multiple, Rule of 40
//!
//! The engine is pure: no I/O, no shared state, every call recomputes the
//! forecast from its config.
//!
//! ```ignore
//! use runway_core::{ForecastBuilder, build_forecast};
//!
//! let config = ForecastBuilder::new()
//!     .start(2025, 1)
//!     .months(24)
//!     .cash_on_hand(500_000.0)
//!     .build();
//! let result = build_forecast(&config);
//! println!("runway: {:.1} months", result.summary.runway_months);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod cash;
pub mod error;
pub mod expenses;
pub mod forecast;
pub mod month;
pub mod revenue;
pub mod summary;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{ForecastBuilder, ForecastConfig};
pub use error::{HorizonError, MonthParseError};
pub use forecast::{build_forecast, forecast_scenarios};
pub use month::{YearMonth, add_months, date_to_month};
