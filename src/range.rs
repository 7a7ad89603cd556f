use std::{iter, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, CompileError, DateError, Predicate, RANGE_DOTS, RANGE_SEPARATOR, compile, prelude::*};

/// An inclusive range of calendar dates.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: CalendarDate,
    end:   CalendarDate,
}

/// Error type for date range construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: CalendarDate, end: CalendarDate },

    /// Error parsing one of the dates.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range covering a single day.
    pub const fn day(date: CalendarDate) -> Self {
        Self {
            start: date,
            end:   date,
        }
    }

    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Every date in the range, ascending.
    pub fn dates(&self) -> impl Iterator<Item = CalendarDate> {
        let end = self.end;
        iter::successors(Some(self.start), move |d| d.next_day().filter(|next| *next <= end))
    }

    /// Compiles this range into a partition predicate.
    ///
    /// # Errors
    /// Only internal invariant violations; the bounds are already ordered.
    pub fn compile(&self) -> Result<Predicate, CompileError> {
        compile(self.start, self.end)
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    /// `YYYY-MM-DD/YYYY-MM-DD`, or `<date>..<date>` with either date format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let (start_str, end_str) = if let Some(split) = trimmed.split_once(RANGE_DOTS) {
            split
        } else {
            let separator_count = trimmed.matches(RANGE_SEPARATOR).count();
            match separator_count {
                0 => {
                    return Err(RangeError::InvalidFormat(format!(
                        "No range separator found (expected '{RANGE_SEPARATOR}' or '{RANGE_DOTS}'): {s}"
                    )));
                },
                1 => trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?,
                _ => {
                    return Err(RangeError::InvalidFormat(format!(
                        "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count} \
                         (use '{RANGE_DOTS}' between month-first dates)"
                    )));
                },
            }
        };

        let start = start_str.trim().parse::<CalendarDate>()?;
        let end = end_str.trim().parse::<CalendarDate>()?;
        Self::new(start, end)
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            start:          CalendarDate,
            end:            CalendarDate,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                start:          date(2019, 10, 22),
                end:            date(2019, 11, 4),
                should_succeed: true,
                description:    "valid range (start < end)",
            },
            TestCase {
                start:          date(2019, 11, 4),
                end:            date(2019, 10, 22),
                should_succeed: false,
                description:    "invalid range (start > end)",
            },
            TestCase {
                start:          date(2019, 10, 1),
                end:            date(2019, 10, 1),
                should_succeed: true,
                description:    "equal dates (start == end)",
            },
        ];

        for case in &cases {
            let range = DateRange::new(case.start, case.end);

            if case.should_succeed {
                assert!(range.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert!(
                    matches!(range, Err(RangeError::InvalidRange { .. })),
                    "Expected failure for: {}",
                    case.description
                );
            }
        }
    }

    #[test]
    fn test_accessors_and_contains() {
        let range = DateRange::new(date(2019, 12, 25), date(2020, 1, 3)).expect("failed to construct range");

        assert_eq!(range.start(), date(2019, 12, 25));
        assert_eq!(range.end(), date(2020, 1, 3));
        assert!(range.contains(&date(2019, 12, 25)));
        assert!(range.contains(&date(2019, 12, 31)));
        assert!(range.contains(&date(2020, 1, 3)));
        assert!(!range.contains(&date(2019, 12, 24)));
        assert!(!range.contains(&date(2020, 1, 4)));
    }

    #[test]
    fn test_dates_iterates_across_year_boundary() {
        let range = DateRange::new(date(2019, 12, 30), date(2020, 1, 2)).expect("failed to construct range");
        let dates: Vec<CalendarDate> = range.dates().collect();
        assert_eq!(
            dates,
            vec![
                date(2019, 12, 30),
                date(2019, 12, 31),
                date(2020, 1, 1),
                date(2020, 1, 2)
            ]
        );

        assert_eq!(DateRange::day(date(2020, 2, 29)).dates().count(), 1);
        assert_eq!(
            DateRange::new(date(9999, 12, 30), date(9999, 12, 31))
                .expect("failed to construct range at year limit")
                .dates()
                .count(),
            2
        );
    }

    #[test]
    fn test_display() {
        let range = DateRange::new(date(2019, 10, 22), date(2019, 11, 4)).expect("failed to construct range");
        assert_eq!(range.to_string(), "2019-10-22/2019-11-04");
    }

    #[test]
    fn test_from_str_iso() {
        let range = "2019-10-22/2019-11-04"
            .parse::<DateRange>()
            .expect("failed to parse ISO range");
        assert_eq!(range.start(), date(2019, 10, 22));
        assert_eq!(range.end(), date(2019, 11, 4));
    }

    #[test]
    fn test_from_str_dots() {
        let range = "10/22/2019..11/4/2019"
            .parse::<DateRange>()
            .expect("failed to parse month-first range");
        assert_eq!(range.start(), date(2019, 10, 22));
        assert_eq!(range.end(), date(2019, 11, 4));

        let range = " 2019-12-25 .. 2020-01-03 "
            .parse::<DateRange>()
            .expect("failed to parse ISO range with dots");
        assert_eq!(range.end(), date(2020, 1, 3));
    }

    #[test]
    fn test_from_str_invalid_order() {
        let result = "2020-01-03/2019-12-25".parse::<DateRange>();
        assert!(matches!(result, Err(RangeError::InvalidRange { .. })));
    }

    #[test]
    fn test_from_str_errors() {
        let err = "20191022".parse::<DateRange>().expect_err("expected missing separator error");
        assert!(err.to_string().contains("No range separator found"));

        let err = "10/22/2019/11/4/2019"
            .parse::<DateRange>()
            .expect_err("expected too many separators error");
        assert!(err.to_string().contains("Too many '/' separators"));

        let err = "2019-02-10/2019-02-29"
            .parse::<DateRange>()
            .expect_err("expected invalid leap day error");
        assert!(matches!(err, RangeError::Date(DateError::InvalidDay { .. })));
    }

    #[test]
    fn test_ordering() {
        let first = DateRange::new(date(2019, 1, 1), date(2019, 6, 1)).expect("failed to construct first range");
        let second = DateRange::new(date(2019, 1, 1), date(2019, 7, 1)).expect("failed to construct second range");
        let third = DateRange::new(date(2019, 2, 1), date(2019, 3, 1)).expect("failed to construct third range");
        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn test_compile() {
        let range = DateRange::day(date(2019, 10, 1));
        let predicate = range.compile().expect("failed to compile single-day range");
        assert_eq!(predicate.clauses().len(), 1);
    }

    #[test]
    fn test_serde_string_format() {
        let range = DateRange::new(date(2019, 10, 22), date(2019, 11, 4)).expect("failed to construct range");
        let json = serde_json::to_string(&range).expect("failed to serialize range");
        assert_eq!(json, r#""2019-10-22/2019-11-04""#);

        let parsed: DateRange = serde_json::from_str(&json).expect("failed to deserialize range");
        assert_eq!(parsed, range);

        let result: Result<DateRange, _> = serde_json::from_str(r#""2019-11-04/2019-10-22""#);
        assert!(result.is_err());
    }
}
