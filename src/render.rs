use std::fmt::{self, Display, Write};

use serde::{Deserialize, Serialize};

use crate::{
    Clause, DEFAULT_DAY_COLUMN, DEFAULT_MONTH_COLUMN, DEFAULT_YEAR_COLUMN, MULTI_LINE_OR, MonthSet,
    Predicate, SINGLE_LINE_OR,
};

/// Names of the three partition columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartitionColumns {
    pub year:  String,
    pub month: String,
    pub day:   String,
}

impl Default for PartitionColumns {
    fn default() -> Self {
        Self {
            year:  DEFAULT_YEAR_COLUMN.to_owned(),
            month: DEFAULT_MONTH_COLUMN.to_owned(),
            day:   DEFAULT_DAY_COLUMN.to_owned(),
        }
    }
}

/// How clauses are joined in the rendered predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// One clause per line, continuation lines start with `or`.
    #[default]
    MultiLine,
    SingleLine,
}

impl Layout {
    pub const fn joiner(self) -> &'static str {
        match self {
            Self::MultiLine => MULTI_LINE_OR,
            Self::SingleLine => SINGLE_LINE_OR,
        }
    }
}

/// Presentation settings for [`Predicate::render`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    pub columns: PartitionColumns,
    pub layout:  Layout,
}

/// `(year = '2019' and month = '10' and day in ('22', '23'))`
pub(crate) fn write_clause<W: Write>(out: &mut W, clause: &Clause, columns: &PartitionColumns) -> fmt::Result {
    write!(out, "({} = '{}'", columns.year, clause.year())?;
    match clause.months() {
        MonthSet::All => {},
        MonthSet::One(month) => write!(out, " and {} = '{month}'", columns.month)?,
        MonthSet::Many(months) => {
            write!(out, " and {} in ", columns.month)?;
            write_in_list(out, months)?;
        },
    }
    if let Some(days) = clause.days() {
        write!(out, " and {} in ", columns.day)?;
        write_in_list(out, days)?;
    }
    out.write_char(')')
}

/// The whole predicate in an outer group, clauses joined by `layout`.
pub(crate) fn write_predicate<W: Write>(out: &mut W, predicate: &Predicate, options: &RenderOptions) -> fmt::Result {
    out.write_char('(')?;
    for (i, clause) in predicate.clauses().iter().enumerate() {
        if i > 0 {
            out.write_str(options.layout.joiner())?;
        }
        write_clause(out, clause, &options.columns)?;
    }
    out.write_char(')')
}

/// `('01', '02', '03')`
fn write_in_list<W: Write, T: Display>(out: &mut W, items: &[T]) -> fmt::Result {
    out.write_char('(')?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write!(out, "'{item}'")?;
    }
    out.write_char(')')
}
