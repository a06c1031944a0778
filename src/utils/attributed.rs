//! Font-dependent text helpers
//!
//! Text measurement through an injected [`TextMetrics`] provider, and
//! styled text where spans of a string carry their own font.

use crate::font::{Font, TextMeasurement};
use crate::traits::TextMetrics;
use std::ops::Range;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// A span of text, as a byte range, set in one font
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRun {
    pub range: Range<usize>,
    pub font: Font,
}

/// Text with per-span fonts
///
/// Runs cover the text from start to end without gaps, and no two adjacent
/// runs share a font.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributedText {
    text: String,
    runs: Vec<StyleRun>,
}

impl AttributedText {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn runs(&self) -> &[StyleRun] {
        &self.runs
    }

    /// Font applied at a byte offset, if the offset is inside the text
    pub fn font_at(&self, byte_index: usize) -> Option<&Font> {
        self.runs
            .iter()
            .find(|run| run.range.contains(&byte_index))
            .map(|run| &run.font)
    }

    /// Total size of the text, measuring each run in its own font
    ///
    /// Runs are laid end to end on one line; the tallest run sets the height.
    pub fn measure(&self, metrics: &dyn TextMetrics) -> TextMeasurement {
        self.runs
            .iter()
            .map(|run| metrics.measure(&self.text[run.range.clone()], &run.font))
            .fold(TextMeasurement::default(), |total, size| {
                TextMeasurement::new(total.width + size.width, total.height.max(size.height))
            })
    }
}

/// Accumulates text segments into an [`AttributedText`]
///
/// Appending a segment in the same font as the previous one extends that
/// run instead of starting a new one.
#[derive(Debug, Default)]
pub struct AttributedTextBuilder {
    text: String,
    runs: Vec<StyleRun>,
}

impl AttributedTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `segment` set in `font`
    pub fn push(&mut self, segment: &str, font: &Font) -> &mut Self {
        if segment.is_empty() {
            return self;
        }

        let start = self.text.len();
        self.text.push_str(segment);
        let end = self.text.len();

        match self.runs.last_mut() {
            Some(last) if last.font == *font => last.range.end = end,
            _ => self.runs.push(StyleRun {
                range: start..end,
                font: font.clone(),
            }),
        }
        self
    }

    pub fn build(self) -> AttributedText {
        AttributedText {
            text: self.text,
            runs: self.runs,
        }
    }
}

/// Measures `text` set in `font`
///
/// # Arguments
/// - `metrics` - The host's text-metrics provider
/// - `text` - The text to measure
/// - `font` - The font to set it in
pub fn text_size_from_font(metrics: &dyn TextMetrics, text: &str, font: &Font) -> TextMeasurement {
    metrics.measure(text, font)
}

/// Sets the decimal digits of `text` in one font and everything else in another
///
/// Any character of general category Nd counts as a digit, so Arabic-Indic
/// and fullwidth digits are styled like `0`-`9`.
///
/// # Arguments
/// - `text` - The text to style
/// - `digit_font` - Font for decimal digits
/// - `other_font` - Font for all other characters
///
/// # Examples
/// ```
/// use valuefmt::font::Font;
/// use valuefmt::utils::attributed::different_number_font;
///
/// let styled = different_number_font("a12b", &Font::bold_system(13.0), &Font::system(13.0));
/// assert_eq!(styled.runs().len(), 3);
/// ```
pub fn different_number_font(text: &str, digit_font: &Font, other_font: &Font) -> AttributedText {
    let mut builder = AttributedTextBuilder::new();
    for (i, ch) in text.char_indices() {
        let font = if ch.general_category() == GeneralCategory::DecimalNumber {
            digit_font
        } else {
            other_font
        };
        builder.push(&text[i..i + ch.len_utf8()], font);
    }
    builder.build()
}
