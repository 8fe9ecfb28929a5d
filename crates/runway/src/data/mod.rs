//! Plan file model, conversion into engine types, and storage

pub mod convert;
pub mod plan_data;
pub mod storage;

pub use convert::{ConvertError, DEFAULT_MONTHS};
pub use plan_data::PlanData;
pub use storage::{StorageError, load_plan, save_plan};
