//! Error types
//!
//! Most operations in this crate fail soft and return a fallback value.
//! Date parsing is the exception: callers need to tell a bad input apart
//! from a legitimate timestamp, so it reports a typed error instead.

/// Errors returned when text cannot be turned into a date
#[derive(Debug, thiserror::Error)]
pub enum DateParseError {
    #[error("'{text}' does not match date pattern '{pattern}': {source}")]
    Malformed {
        text: String,
        pattern: String,
        source: chrono::ParseError,
    },

    #[error("'{text}' names a local time that does not exist in the target time zone")]
    NonexistentLocalTime { text: String },
}
