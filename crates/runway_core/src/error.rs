use std::fmt;

/// Errors raised when turning text into a [`YearMonth`](crate::month::YearMonth)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    /// Input was not shaped like `YYYY-MM`
    InvalidFormat(String),
    /// The month component was outside `01..=12`
    MonthOutOfRange { input: String, month: i8 },
    /// The year was outside `-9999..=9999`
    YearOutOfRange(i16),
    /// Input was neither a month, a civil date/datetime nor a timestamp
    InvalidDate(String),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(input) => {
                write!(f, "expected a YYYY-MM month, got {input:?}")
            }
            MonthParseError::MonthOutOfRange { input, month } => {
                write!(f, "month {month} out of range in {input:?}")
            }
            MonthParseError::YearOutOfRange(year) => {
                write!(f, "year {year} outside -9999..=9999")
            }
            MonthParseError::InvalidDate(input) => {
                write!(f, "cannot interpret {input:?} as a date")
            }
        }
    }
}

impl std::error::Error for MonthParseError {}

pub type Result<T> = std::result::Result<T, MonthParseError>;

/// A forecast horizon that runs past [`YearMonth::MAX`](crate::month::YearMonth::MAX)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorizonError {
    pub start_month: crate::month::YearMonth,
    pub months: usize,
    /// Longest horizon representable from `start_month`
    pub limit: usize,
}

impl fmt::Display for HorizonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} months from {} runs past 9999-12 (at most {} months)",
            self.months, self.start_month, self.limit
        )
    }
}

impl std::error::Error for HorizonError {}
