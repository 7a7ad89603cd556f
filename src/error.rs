use crate::{CalendarDate, DateError, Year, prelude::*};

/// Why the clause builder refused a combination of months and days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ShapeViolation {
    #[display(fmt = "a day list requires exactly one month")]
    DaysWithMultipleMonths,
    #[display(fmt = "a day list requires a month")]
    DaysWithoutMonth,
    #[display(fmt = "day {_0} is past the end of the month")]
    DayPastMonthEnd(u8),
}

/// Error type for predicate compilation.
///
/// Every variant is terminal: compiling the same input again reproduces it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// End date precedes start date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: CalendarDate, end: CalendarDate },

    /// A clause was requested with months and days that cannot be combined.
    #[error("Illegal clause shape for year {year}: {reason}")]
    IllegalClauseShape { year: Year, reason: ShapeViolation },

    /// The walker produced nothing for a non-empty range.
    #[error("Internal invariant violated: {0}")]
    InternalInvariantViolation(&'static str),

    /// A date string did not parse.
    #[error(transparent)]
    Date(#[from] DateError),
}
