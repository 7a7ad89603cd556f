use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, Clause, CompileError,
    render::{RenderOptions, write_predicate},
};

/// Clauses OR'ed together, in the order they were emitted (ascending year, then month).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Clause>", try_from = "Vec<Clause>")]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    /// Joins clauses into a predicate.
    ///
    /// # Errors
    /// `CompileError::InternalInvariantViolation` if `clauses` is empty: an
    /// empty disjunction would match nothing, and an empty filter everything.
    pub fn assemble(clauses: Vec<Clause>) -> Result<Self, CompileError> {
        if clauses.is_empty() {
            return Err(CompileError::InternalInvariantViolation(
                "predicate assembled from zero clauses",
            ));
        }
        Ok(Self { clauses })
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn into_clauses(self) -> Vec<Clause> {
        self.clauses
    }

    /// Whether any clause accepts the partition key of `date`.
    pub fn matches(&self, date: &CalendarDate) -> bool {
        self.clauses.iter().any(|clause| clause.matches(date))
    }

    /// Renders the predicate as a `WHERE` fragment with custom columns and layout.
    pub fn render(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = write_predicate(&mut out, self, options);
        out
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_predicate(f, self, &RenderOptions::default())
    }
}

impl From<Predicate> for Vec<Clause> {
    fn from(predicate: Predicate) -> Self {
        predicate.clauses
    }
}

impl TryFrom<Vec<Clause>> for Predicate {
    type Error = CompileError;

    fn try_from(clauses: Vec<Clause>) -> Result<Self, Self::Error> {
        Self::assemble(clauses)
    }
}
