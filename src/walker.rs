//! Walks a date range year by year and month by month, emitting one clause
//! per whole year, per run of whole months within a year, and per partial
//! first or last month.

use crate::{CalendarDate, Clause, CompileError, Day, MONTHS_PER_YEAR, Month, Predicate, Year};

/// How much of a month the range covers.
#[derive(Debug, Clone, PartialEq, Eq)]
enum MonthSelector {
    Whole,
    /// A contiguous run of days, ascending.
    Partial(Vec<Day>),
}

/// Compiles the inclusive range `start..=end` into a partition predicate.
///
/// # Errors
/// `CompileError::InvalidRange` if `end` precedes `start`. The bounds are
/// never swapped.
pub fn compile(start: CalendarDate, end: CalendarDate) -> Result<Predicate, CompileError> {
    if end < start {
        return Err(CompileError::InvalidRange { start, end });
    }

    let mut clauses = Vec::new();
    for year in start.year().through(end.year()) {
        if start.year() < year && year < end.year() {
            clauses.push(Clause::build(year, &[], &[])?);
        } else {
            walk_boundary_year(year, start, end, &mut clauses)?;
        }
    }
    Predicate::assemble(clauses)
}

/// Emits the clauses for the first and/or last year of the range.
fn walk_boundary_year(
    year: Year,
    start: CalendarDate,
    end: CalendarDate,
    clauses: &mut Vec<Clause>,
) -> Result<(), CompileError> {
    let first_month = if year == start.year() {
        start.month()
    } else {
        Month::JANUARY
    };
    let last_month = if year == end.year() {
        end.month()
    } else {
        Month::DECEMBER
    };

    // The whole range sits inside one month: always a day list.
    if start.year() == end.year() && first_month == last_month {
        let days: Vec<Day> = start.day().through(end.day()).collect();
        clauses.push(Clause::build(year, &[first_month], &days)?);
        return Ok(());
    }

    let mut whole_months = Vec::with_capacity(MONTHS_PER_YEAR);
    for month in first_month.through(last_month) {
        match select(year, month, start, end) {
            MonthSelector::Whole => whole_months.push(month),
            MonthSelector::Partial(days) => {
                // A partial last month follows the whole months before it.
                if month == last_month {
                    flush_whole_months(year, &mut whole_months, clauses)?;
                }
                clauses.push(Clause::build(year, &[month], &days)?);
            },
        }
    }
    flush_whole_months(year, &mut whole_months, clauses)
}

/// Classifies one month of a range spanning more than one month.
fn select(year: Year, month: Month, start: CalendarDate, end: CalendarDate) -> MonthSelector {
    let opens_range = year == start.year() && month == start.month();
    let closes_range = year == end.year() && month == end.month();

    if opens_range && !start.is_first_of_month() {
        MonthSelector::Partial(start.day().through(Day::last_of(year, month)).collect())
    } else if closes_range && !end.is_last_of_month() {
        MonthSelector::Partial(Day::FIRST.through(end.day()).collect())
    } else {
        MonthSelector::Whole
    }
}

/// Emits accumulated whole months as one clause; twelve collapse to the year.
fn flush_whole_months(
    year: Year,
    whole_months: &mut Vec<Month>,
    clauses: &mut Vec<Clause>,
) -> Result<(), CompileError> {
    if whole_months.is_empty() {
        return Ok(());
    }
    let clause = if whole_months.len() == MONTHS_PER_YEAR {
        Clause::build(year, &[], &[])?
    } else {
        Clause::build(year, whole_months, &[])?
    };
    clauses.push(clause);
    whole_months.clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        MonthSet,
        test_utils::{date, days, month, year},
    };

    fn shape(clause: &Clause) -> (u16, Vec<u8>, Vec<u8>) {
        let months = match clause.months() {
            MonthSet::All => Vec::new(),
            MonthSet::One(m) => vec![m.get()],
            MonthSet::Many(ms) => ms.iter().map(|m| m.get()).collect(),
        };
        let days = clause
            .days()
            .map(|ds| ds.iter().map(|d| d.get()).collect())
            .unwrap_or_default();
        (clause.year().get(), months, days)
    }

    fn shapes(start: CalendarDate, end: CalendarDate) -> Vec<(u16, Vec<u8>, Vec<u8>)> {
        compile(start, end).unwrap().clauses().iter().map(shape).collect()
    }

    #[test]
    fn test_select_classification() {
        let start = date(2019, 10, 22);
        let end = date(2020, 11, 4);

        assert_eq!(
            select(year(2019), month(10), start, end),
            MonthSelector::Partial(days(2019, 10, 22..=31))
        );
        assert_eq!(select(year(2019), month(11), start, end), MonthSelector::Whole);
        assert_eq!(select(year(2020), month(1), start, end), MonthSelector::Whole);
        assert_eq!(
            select(year(2020), month(11), start, end),
            MonthSelector::Partial(days(2020, 11, 1..=4))
        );
    }

    #[test]
    fn test_select_whole_when_range_edges_align() {
        let start = date(2019, 3, 1);
        let end = date(2019, 6, 30);
        assert_eq!(select(year(2019), month(3), start, end), MonthSelector::Whole);
        assert_eq!(select(year(2019), month(6), start, end), MonthSelector::Whole);
    }

    #[test]
    fn test_single_month_is_always_a_day_list() {
        assert_eq!(
            shapes(date(2019, 10, 1), date(2019, 10, 31)),
            vec![(2019, vec![10], (1..=31).collect())]
        );
    }

    #[test]
    fn test_whole_first_month_joins_month_list() {
        assert_eq!(
            shapes(date(2019, 1, 1), date(2019, 3, 4)),
            vec![
                (2019, vec![1, 2], vec![]),
                (2019, vec![3], vec![1, 2, 3, 4]),
            ]
        );
    }

    #[test]
    fn test_whole_last_month_joins_month_list() {
        assert_eq!(
            shapes(date(2019, 1, 5), date(2019, 4, 30)),
            vec![
                (2019, vec![1], (5..=31).collect()),
                (2019, vec![2, 3, 4], vec![]),
            ]
        );
    }

    #[test]
    fn test_whole_months_both_ends() {
        assert_eq!(
            shapes(date(2019, 1, 1), date(2019, 4, 30)),
            vec![(2019, vec![1, 2, 3, 4], vec![])]
        );
    }

    #[test]
    fn test_partial_year_ends_in_december() {
        assert_eq!(
            shapes(date(2019, 12, 1), date(2020, 1, 3)),
            vec![(2019, vec![12], vec![]), (2020, vec![1], vec![1, 2, 3])]
        );
    }

    #[test]
    fn test_whole_years_collapse() {
        assert_eq!(
            shapes(date(2018, 1, 1), date(2019, 12, 31)),
            vec![(2018, vec![], vec![]), (2019, vec![], vec![])]
        );
        assert_eq!(
            shapes(date(2018, 1, 1), date(2020, 1, 31)),
            vec![
                (2018, vec![], vec![]),
                (2019, vec![], vec![]),
                (2020, vec![1], vec![]),
            ]
        );
    }

    #[test]
    fn test_leap_february_tail() {
        assert_eq!(
            shapes(date(2020, 2, 10), date(2020, 3, 31)),
            vec![(2020, vec![2], (10..=29).collect()), (2020, vec![3], vec![])]
        );
        assert_eq!(
            shapes(date(2019, 2, 10), date(2019, 3, 31)),
            vec![(2019, vec![2], (10..=28).collect()), (2019, vec![3], vec![])]
        );
    }

    #[test]
    fn test_reversed_bounds_fail() {
        let start = date(2020, 1, 3);
        let end = date(2019, 12, 25);
        assert_eq!(
            compile(start, end),
            Err(CompileError::InvalidRange { start, end })
        );
    }
}
