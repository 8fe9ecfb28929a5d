mod assumptions;
mod expenses;
mod results;
mod revenue;

pub use assumptions::Assumptions;
pub use expenses::{ExpenseFrequency, ExpenseRow, HeadcountRow};
pub use results::{ForecastMonth, ForecastResult, ForecastSummary, UNBOUNDED, is_unbounded};
pub use revenue::{DEFAULT_REVENUE_CONFIG, PartnerConfig, PlgConfig, RevenueConfig, SalesConfig};
