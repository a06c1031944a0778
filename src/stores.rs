//! Default collaborator implementations
//!
//! Provides a HashMap-backed string table and a fixed-advance text-metrics
//! provider. Hosts with a real font stack supply their own `TextMetrics`.

use crate::font::{Font, TextMeasurement};
use crate::traits::{StringTable, TextMetrics};
use crate::utils::text::cluster_weight;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// In-memory string table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapStringTable {
    entries: HashMap<String, String>,
}

impl MapStringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entry
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, String>> for MapStringTable {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapStringTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl StringTable for MapStringTable {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

/// Text metrics with a constant advance per column
///
/// Each grapheme cluster occupies one column, or two when it is wider than
/// a single UTF-8 byte. A column advances `size * advance_ratio`; each line
/// (split on `\n`) is `size * line_height_ratio` tall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedAdvanceMetrics {
    pub advance_ratio: f64,
    pub line_height_ratio: f64,
}

impl FixedAdvanceMetrics {
    pub fn new(advance_ratio: f64, line_height_ratio: f64) -> Self {
        Self {
            advance_ratio,
            line_height_ratio,
        }
    }
}

impl Default for FixedAdvanceMetrics {
    fn default() -> Self {
        Self::new(0.6, 1.2)
    }
}

impl TextMetrics for FixedAdvanceMetrics {
    fn measure(&self, text: &str, font: &Font) -> TextMeasurement {
        let advance = font.size * self.advance_ratio;
        let mut lines = 0usize;
        let mut widest = 0usize;

        for line in text.split('\n') {
            lines += 1;
            let columns: usize = line.graphemes(true).map(cluster_weight).sum();
            widest = widest.max(columns);
        }

        TextMeasurement::new(
            widest as f64 * advance,
            lines as f64 * font.size * self.line_height_ratio,
        )
    }
}
