//! valuefmt library
//!
//! Small, stateless helpers for presenting values: dates with Unicode
//! patterns, byte counts in storage units, decimal rounding, localized
//! strings, grapheme-aware string manipulation, Korean initial consonants,
//! email and phone-number handling, and mixed-font styled text.
//!
//! Locale and font metrics are never read from global state; callers pass
//! a [`StringTable`] or [`TextMetrics`] explicitly.

pub mod config;
pub mod error;
pub mod font;
pub mod stores;
pub mod traits;
pub mod utils;

pub use config::Config;
pub use error::DateParseError;
pub use font::{Font, FontWeight, TextMeasurement};
pub use stores::{FixedAdvanceMetrics, MapStringTable};
pub use traits::{StringTable, TextMetrics};
