//! Command-line front end for the runway forecast engine
//!
//! Loads YAML plan files, resolves them into a `ForecastConfig` and renders
//! the forecast as text tables or camelCase JSON.

pub mod data;
pub mod logging;
pub mod report;

pub use data::{ConvertError, PlanData, StorageError, load_plan, save_plan};
pub use logging::init_logging;
