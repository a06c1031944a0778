//! Font descriptions and text measurements
//!
//! These are plain values handed to a [`TextMetrics`](crate::traits::TextMetrics)
//! provider; the crate never loads font files itself.

use serde::{Deserialize, Serialize};

/// Family name used by [`Font::system`] and [`Font::bold_system`]
pub const SYSTEM_FAMILY: &str = "system-ui";

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// A font descriptor: family, point size and weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    /// Point size
    pub size: f64,
    #[serde(default)]
    pub weight: FontWeight,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::Regular,
        }
    }

    /// The regular system font at `size`
    pub fn system(size: f64) -> Self {
        Self::new(SYSTEM_FAMILY, size)
    }

    /// The bold system font at `size`
    pub fn bold_system(size: f64) -> Self {
        Self::system(size).with_weight(FontWeight::Bold)
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

/// Rendered size of a piece of text, in layout units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMeasurement {
    pub width: f64,
    pub height: f64,
}

impl TextMeasurement {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
