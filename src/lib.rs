//! Compile an inclusive calendar date range into a predicate over a
//! `year`/`month`/`day` partitioned table.
//!
//! ```
//! use hive_range::{CalendarDate, compile};
//!
//! let start: CalendarDate = "12/25/2019".parse()?;
//! let end: CalendarDate = "2020-01-03".parse()?;
//! let predicate = compile(start, end)?;
//!
//! assert_eq!(
//!     predicate.to_string(),
//!     "((year = '2019' and month = '12' and day in ('25', '26', '27', '28', '29', '30', '31'))\n  \
//!      or (year = '2020' and month = '01' and day in ('01', '02', '03')))"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Whole years collapse to a year-only clause and runs of whole months to a
//! single month list; only the partial first and last months carry day lists.

mod clause;
mod consts;
mod error;
mod predicate;
mod prelude;
mod range;
mod render;
#[cfg(test)]
mod test_utils;
mod types;
mod walker;

pub use clause::{Clause, MonthSet};
pub use consts::*;
pub use error::{CompileError, ShapeViolation};
pub use predicate::Predicate;
pub use range::{DateRange, RangeError};
pub use render::{Layout, PartitionColumns, RenderOptions};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use walker::compile;

use crate::prelude::*;
use std::str::FromStr;

/// A validated Gregorian calendar date.
///
/// Ordering is lexicographic on (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CalendarDate {
    /// Creates a date from raw components, validating each against the calendar.
    ///
    /// # Errors
    /// Returns the `DateError` for the first component that is out of range,
    /// including February 29th in a non-leap year.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    pub const fn is_first_of_month(&self) -> bool {
        self.day.get() == MIN_DAY
    }

    pub const fn is_last_of_month(&self) -> bool {
        self.day.get() == self.month.days_in(self.year)
    }

    /// Converts to partition columns: (year, month, day)
    pub const fn to_columns(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// The following calendar day, or `None` past December 31st of `MAX_YEAR`.
    pub fn next_day(&self) -> Option<Self> {
        if !self.is_last_of_month() {
            let day = Day::new(self.day.get() + 1, self.year, self.month).ok()?;
            return Some(Self { day, ..*self });
        }
        if self.month.get() < DECEMBER {
            let month = Month::new(self.month.get() + 1).ok()?;
            return Some(Self {
                month,
                day: Day::FIRST,
                ..*self
            });
        }
        let year = Year::new(self.year.get() + 1).ok()?;
        Some(Self {
            year,
            month: Month::JANUARY,
            day: Day::FIRST,
        })
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses `M/D/YYYY` (one or two digit month and day) or ISO `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

        if has_hyphen && has_slash {
            return Err(DateError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
            )));
        }

        let (separator, order) = if has_hyphen {
            (DATE_SEPARATOR, FieldOrder::YearFirst)
        } else if has_slash {
            (MONTH_FIRST_SEPARATOR, FieldOrder::MonthFirst)
        } else {
            return Err(DateError::InvalidFormat(format!(
                "Expected M/D/YYYY or YYYY-MM-DD, found {trimmed}"
            )));
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        let [a, b, c] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "Expected 2 {separator} separators, found {}",
                parts.len() - 1
            )));
        };

        let (year, month, day) = match order {
            FieldOrder::YearFirst => (parse_u16(a)?, parse_u8(b)?, parse_u8(c)?),
            FieldOrder::MonthFirst => (parse_u16(c)?, parse_u8(a)?, parse_u8(b)?),
        };
        Self::new(year, month, day)
    }
}

enum FieldOrder {
    YearFirst,
    MonthFirst,
}

fn parse_u16(s: &str) -> Result<u16, DateError> {
    s.parse::<u16>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

fn parse_u8(s: &str) -> Result<u8, DateError> {
    s.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = DateError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses both dates and compiles the range between them.
///
/// # Errors
/// `CompileError::Date` if either string is not a valid date, otherwise the
/// errors of [`compile`].
pub fn compile_str(start: &str, end: &str) -> Result<Predicate, CompileError> {
    let start = start.parse::<CalendarDate>()?;
    let end = end.parse::<CalendarDate>()?;
    compile(start, end)
}
