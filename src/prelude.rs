//! Prelude module for hive_range crate.
//!
//! Re-exports the derive macros shared by the date and clause types.

pub use derive_more::Display;
