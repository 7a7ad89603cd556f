use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, CompileError, Day, Month, ShapeViolation, Year,
    render::{PartitionColumns, write_clause},
};

/// Months selected by a clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MonthSet {
    /// Every month of the year; the clause filters on year only.
    All,
    One(Month),
    /// Two or more months, ascending and distinct.
    Many(Vec<Month>),
}

impl MonthSet {
    pub fn contains(&self, month: Month) -> bool {
        match self {
            Self::All => true,
            Self::One(m) => *m == month,
            Self::Many(months) => months.binary_search(&month).is_ok(),
        }
    }
}

/// One disjunct of a partition predicate, scoped to a single year.
///
/// A day list is only ever present alongside exactly one month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "ClauseRepr", try_from = "ClauseRepr")]
pub struct Clause {
    year:   Year,
    months: MonthSet,
    days:   Option<Vec<Day>>,
}

impl Clause {
    /// Builds a clause from a year, a month list and a day list.
    ///
    /// Empty `months` selects the whole year and empty `days` selects whole
    /// months. Both lists are sorted and deduplicated.
    ///
    /// # Errors
    /// `CompileError::IllegalClauseShape` when days are given with zero or
    /// several months, or when a day does not exist in the selected month.
    pub fn build(year: Year, months: &[Month], days: &[Day]) -> Result<Self, CompileError> {
        let months = sorted(months);
        let days = sorted(days);
        let illegal = |reason| CompileError::IllegalClauseShape { year, reason };

        if !days.is_empty() && months.len() > 1 {
            return Err(illegal(ShapeViolation::DaysWithMultipleMonths));
        }
        if months.is_empty() && !days.is_empty() {
            return Err(illegal(ShapeViolation::DaysWithoutMonth));
        }

        let months = if months.is_empty() {
            MonthSet::All
        } else if let [month] = months[..] {
            MonthSet::One(month)
        } else {
            MonthSet::Many(months)
        };

        let days = if days.is_empty() {
            None
        } else {
            if let MonthSet::One(month) = &months {
                let last = Day::last_of(year, *month);
                if let Some(past) = days.iter().find(|d| **d > last) {
                    return Err(illegal(ShapeViolation::DayPastMonthEnd(past.get())));
                }
            }
            Some(days)
        };

        Ok(Self { year, months, days })
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn months(&self) -> &MonthSet {
        &self.months
    }

    pub fn days(&self) -> Option<&[Day]> {
        self.days.as_deref()
    }

    pub const fn is_whole_year(&self) -> bool {
        matches!(self.months, MonthSet::All)
    }

    /// Whether the partition key of `date` satisfies this clause.
    pub fn matches(&self, date: &CalendarDate) -> bool {
        date.year() == self.year
            && self.months.contains(date.month())
            && self
                .days
                .as_ref()
                .is_none_or(|days| days.binary_search(&date.day()).is_ok())
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_clause(f, self, &PartitionColumns::default())
    }
}

fn sorted<T: Copy + Ord>(items: &[T]) -> Vec<T> {
    let mut items = items.to_vec();
    items.sort_unstable();
    items.dedup();
    items
}

/// Serialized form: `{"year": 2019, "months": [10], "days": [22, 23]}`.
/// `months` is omitted for a whole year and `days` when absent.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClauseRepr {
    year:   Year,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    months: Option<Vec<Month>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    days:   Option<Vec<Day>>,
}

impl From<Clause> for ClauseRepr {
    fn from(clause: Clause) -> Self {
        let months = match clause.months {
            MonthSet::All => None,
            MonthSet::One(month) => Some(vec![month]),
            MonthSet::Many(months) => Some(months),
        };
        Self {
            year: clause.year,
            months,
            days: clause.days,
        }
    }
}

impl TryFrom<ClauseRepr> for Clause {
    type Error = CompileError;

    fn try_from(repr: ClauseRepr) -> Result<Self, Self::Error> {
        Self::build(
            repr.year,
            repr.months.as_deref().unwrap_or_default(),
            repr.days.as_deref().unwrap_or_default(),
        )
    }
}
