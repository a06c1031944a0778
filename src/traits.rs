//! Common trait definitions
//!
//! Defines the host-provided collaborators the text utilities depend on:
//! a localized string table and a text-metrics provider. Both are passed
//! in explicitly so results stay deterministic under test.

use crate::font::{Font, TextMeasurement};

/// Read-only key to display-string lookup
///
/// Production code uses `MapStringTable` loaded from configuration, tests
/// can use any in-memory implementation.
pub trait StringTable: Send + Sync {
    /// Returns the localized string for `key`, if the table has one
    fn lookup(&self, key: &str) -> Option<&str>;
}

/// Measures rendered text for a font
///
/// Implementations must be deterministic: identical text and font give
/// identical measurements.
pub trait TextMetrics: Send + Sync {
    /// Width and height of `text` set in `font`
    fn measure(&self, text: &str, font: &Font) -> TextMeasurement;
}
