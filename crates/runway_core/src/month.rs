//! Calendar month arithmetic.
//!
//! The forecast works on whole calendar months. [`YearMonth`] is the typed
//! `"YYYY-MM"` value used everywhere inside the engine; months are compared
//! and offset through a flat month index (`year * 12 + month - 1`) so no
//! day-of-month normalisation is ever involved. Years are limited to jiff's
//! civil range, `-9999..=9999`.

use std::fmt;
use std::str::FromStr;

use jiff::civil::{Date, DateTime};
use jiff::tz::TimeZone;
use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MonthParseError, Result};

/// A calendar month, e.g. `2025-03`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i16,
    month: i8,
}

impl YearMonth {
    pub const MIN: YearMonth = YearMonth {
        year: -9999,
        month: 1,
    };
    pub const MAX: YearMonth = YearMonth {
        year: 9999,
        month: 12,
    };

    /// Build a month, rejecting month numbers outside `1..=12` and years
    /// outside `-9999..=9999`.
    pub fn new(year: i16, month: i8) -> Result<Self> {
        if !(Self::MIN.year..=Self::MAX.year).contains(&year) {
            return Err(MonthParseError::YearOutOfRange(year));
        }
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::MonthOutOfRange {
                input: format!("{year:04}-{month:02}"),
                month,
            });
        }
        Ok(Self { year, month })
    }

    #[inline]
    pub fn year(self) -> i16 {
        self.year
    }

    #[inline]
    pub fn month(self) -> i8 {
        self.month
    }

    #[inline]
    fn index(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    fn from_index(index: i64) -> Option<Self> {
        if !(Self::MIN.index()..=Self::MAX.index()).contains(&index) {
            return None;
        }
        Some(Self {
            year: i16::try_from(index.div_euclid(12)).ok()?,
            month: i8::try_from(index.rem_euclid(12) + 1).ok()?,
        })
    }

    /// Offset by `n` calendar months, `None` when the result leaves the
    /// supported year range.
    pub fn checked_add_months(self, n: i64) -> Option<Self> {
        Self::from_index(self.index().checked_add(n)?)
    }

    /// Offset by `n` calendar months, rolling over year boundaries and
    /// saturating at [`YearMonth::MIN`] and [`YearMonth::MAX`].
    #[must_use]
    pub fn add_months(self, n: i32) -> Self {
        self.checked_add_months(i64::from(n))
            .unwrap_or(if n < 0 { Self::MIN } else { Self::MAX })
    }

    /// Signed number of months from `self` to `other`.
    ///
    /// `2025-11`.months_until(`2026-01`) is `2`.
    #[inline]
    pub fn months_until(self, other: YearMonth) -> i32 {
        // both indices lie within +-120_000
        (other.index() - self.index()) as i32
    }

    /// Truncate a civil date to its month.
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Truncate an instant to its month in UTC.
    pub fn from_timestamp(ts: Timestamp) -> Self {
        Self::from_date(ts.to_zoned(TimeZone::UTC).date())
    }

    /// Interpret any date-like string as a month.
    ///
    /// Accepts `YYYY-MM`, civil dates (`2025-03-15`), civil datetimes
    /// (`2025-03-15T10:30`) and RFC 3339 timestamps (`2025-03-31T23:30:00-05:00`,
    /// truncated in UTC). Day and time are discarded.
    pub fn parse_date_like(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.len() == 7 {
            return trimmed.parse();
        }
        if let Ok(ts) = trimmed.parse::<Timestamp>() {
            return Ok(Self::from_timestamp(ts));
        }
        if let Ok(dt) = trimmed.parse::<DateTime>() {
            return Ok(Self::from_date(dt.date()));
        }
        if let Ok(date) = trimmed.parse::<Date>() {
            return Ok(Self::from_date(date));
        }
        Err(MonthParseError::InvalidDate(input.to_string()))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }

        let year: i16 = s[..4]
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: i8 = s[5..]
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::MonthOutOfRange {
                input: s.to_string(),
                month,
            });
        }
        Ok(Self { year, month })
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Add `n` months to a `YYYY-MM` string.
pub fn add_months(month: &str, n: i32) -> Result<String> {
    Ok(month.parse::<YearMonth>()?.add_months(n).to_string())
}

/// Truncate a date-like string (month, date, datetime or timestamp) to `YYYY-MM`.
pub fn date_to_month(date: &str) -> Result<String> {
    Ok(YearMonth::parse_date_like(date)?.to_string())
}
