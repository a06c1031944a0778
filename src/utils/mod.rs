//! Utility functions
//!
//! Pure functions grouped by the kind of value they work on. None of them
//! keep state between calls.

pub mod attributed;
pub mod date;
pub mod formatting;
pub mod text;
pub mod validation;
