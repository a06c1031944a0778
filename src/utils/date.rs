//! Date formatting and parsing with Unicode date patterns
//!
//! Patterns use the familiar LDML letters (`yyyyMMdd`, `HH:mm`, `EEEE`) and
//! are compiled into chrono strftime strings. Quoted text (`'T'`) is copied
//! literally and `''` stands for a single quote. Letters without a mapping
//! are emitted as literal text so formatting never fails.

use crate::error::DateParseError;
use chrono::format::{self, ParseResult, Parsed, StrftimeItems};
use chrono::{DateTime, LocalResult, TimeZone, Utc};
use std::fmt;

/// A compiled date pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPattern {
    source: String,
    strftime: String,
}

impl FormatPattern {
    /// Compiles a Unicode date pattern
    pub fn new(pattern: &str) -> Self {
        Self {
            source: pattern.to_string(),
            strftime: compile(pattern),
        }
    }

    /// The pattern as originally written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The equivalent chrono strftime string
    pub fn strftime(&self) -> &str {
        &self.strftime
    }

    /// Renders a point in time with this pattern
    pub fn format<Tz>(&self, date: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        date.format(&self.strftime).to_string()
    }

    /// Parses text with this pattern, interpreting it in `tz`
    ///
    /// Text carrying an explicit offset (`Z`, `XXX`) is read in that offset
    /// and converted into `tz`. Fields the pattern leaves out take their
    /// value from 2000-01-01 00:00:00, so `yyyy-MM` resolves to the first of
    /// the month at midnight and `HH:mm` resolves on 2000-01-01. Ambiguous
    /// local times pick the earlier instant.
    ///
    /// # Errors
    /// Returns [`DateParseError::Malformed`] when the text does not match
    /// and [`DateParseError::NonexistentLocalTime`] when the local time
    /// falls into a daylight-saving gap.
    pub fn parse<Tz: TimeZone>(
        &self,
        text: &str,
        tz: &Tz,
    ) -> Result<DateTime<Tz>, DateParseError> {
        let malformed = |source: chrono::ParseError| DateParseError::Malformed {
            text: text.to_string(),
            pattern: self.source.clone(),
            source,
        };

        let mut parsed = Parsed::new();
        format::parse(&mut parsed, text, StrftimeItems::new(&self.strftime))
            .map_err(malformed)?;
        fill_from_reference(&mut parsed).map_err(malformed)?;

        let date = parsed.to_naive_date().map_err(malformed)?;
        let time = parsed.to_naive_time().map_err(malformed)?;
        let naive = date.and_time(time);

        let resolved = if parsed.offset().is_some() {
            let offset = parsed.to_fixed_offset().map_err(malformed)?;
            offset
                .from_local_datetime(&naive)
                .map(|local| local.with_timezone(tz))
        } else {
            tz.from_local_datetime(&naive)
        };

        match resolved {
            LocalResult::Single(date) => Ok(date),
            LocalResult::Ambiguous(earliest, _) => Ok(earliest),
            LocalResult::None => Err(DateParseError::NonexistentLocalTime {
                text: text.to_string(),
            }),
        }
    }
}

impl fmt::Display for FormatPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Converts a date to text using a Unicode date pattern
///
/// # Arguments
/// - `date` - The point in time to render
/// - `pattern` - A pattern such as `"yyMMdd"`
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use valuefmt::utils::date::date_to_string;
///
/// let date = Utc.with_ymd_and_hms(2018, 6, 26, 0, 0, 0).unwrap();
/// assert_eq!(date_to_string(&date, "yyMMdd"), "180626");
/// ```
pub fn date_to_string<Tz>(date: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    FormatPattern::new(pattern).format(date)
}

/// Parses text into a date using a Unicode date pattern
///
/// See [`FormatPattern::parse`] for how missing fields are filled in.
///
/// # Errors
/// Returns a [`DateParseError`] when the text cannot be parsed.
pub fn string_to_date<Tz: TimeZone>(
    text: &str,
    pattern: &str,
    tz: &Tz,
) -> Result<DateTime<Tz>, DateParseError> {
    FormatPattern::new(pattern).parse(text, tz)
}

/// Parses text into a date, substituting the current time on failure
///
/// The result cannot be told apart from a successful parse of "now"; prefer
/// [`string_to_date`] unless the fallback is really wanted.
pub fn string_to_date_or_now<Tz: TimeZone>(text: &str, pattern: &str, tz: &Tz) -> DateTime<Tz> {
    string_to_date(text, pattern, tz).unwrap_or_else(|err| {
        log::debug!("falling back to current time: {}", err);
        Utc::now().with_timezone(tz)
    })
}

/// Fills fields the pattern did not set from 2000-01-01 00:00:00
fn fill_from_reference(parsed: &mut Parsed) -> ParseResult<()> {
    let has_year = parsed.year().is_some()
        || parsed.year_div_100().is_some()
        || parsed.year_mod_100().is_some()
        || parsed.isoyear().is_some();
    if !has_year {
        parsed.set_year(2000)?;
    }

    if parsed.ordinal().is_none() {
        if parsed.month().is_none() {
            parsed.set_month(1)?;
        }
        if parsed.day().is_none() {
            parsed.set_day(1)?;
        }
    }

    match (parsed.hour_div_12(), parsed.hour_mod_12()) {
        (None, None) => parsed.set_hour(0)?,
        // 12-hour clock without a marker reads as AM
        (None, Some(_)) => parsed.set_ampm(false)?,
        // marker alone is twelve o'clock
        (Some(_), None) => parsed.set_hour12(12)?,
        (Some(_), Some(_)) => {}
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0)?;
    }

    Ok(())
}

fn compile(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                push_literal(&mut out, '\'');
                continue;
            }
            while let Some(quoted) = chars.next() {
                if quoted != '\'' {
                    push_literal(&mut out, quoted);
                } else if chars.peek() == Some(&'\'') {
                    chars.next();
                    push_literal(&mut out, '\'');
                } else {
                    break;
                }
            }
            continue;
        }

        if !ch.is_ascii_alphabetic() {
            push_literal(&mut out, ch);
            continue;
        }

        let mut count = 1;
        while chars.peek() == Some(&ch) {
            chars.next();
            count += 1;
        }

        match field(ch, count) {
            Some(spec) => out.push_str(spec),
            None => {
                log::debug!("unsupported date pattern field '{}' x{}", ch, count);
                for _ in 0..count {
                    push_literal(&mut out, ch);
                }
            }
        }
    }

    out
}

fn push_literal(out: &mut String, ch: char) {
    if ch == '%' {
        out.push_str("%%");
    } else {
        out.push(ch);
    }
}

/// Maps a run of one pattern letter to a strftime specifier
fn field(letter: char, count: usize) -> Option<&'static str> {
    let spec = match (letter, count) {
        ('y', 2) => "%y",
        ('y', _) => "%Y",
        ('M' | 'L', 1) => "%-m",
        ('M' | 'L', 2) => "%m",
        ('M' | 'L', 3) => "%b",
        ('M' | 'L', _) => "%B",
        ('d', 1) => "%-d",
        ('d', _) => "%d",
        ('D', 1) => "%-j",
        ('D', _) => "%j",
        ('H', 1) => "%-H",
        ('H', _) => "%H",
        ('h', 1) => "%-I",
        ('h', _) => "%I",
        ('m', 1) => "%-M",
        ('m', _) => "%M",
        ('s', 1) => "%-S",
        ('s', _) => "%S",
        ('S', 1..=3) => "%3f",
        ('S', 4..=6) => "%6f",
        ('S', _) => "%9f",
        ('a', _) => "%p",
        ('E', 1..=3) => "%a",
        ('E', _) => "%A",
        ('Z', 1..=4) => "%z",
        ('Z', _) => "%:z",
        ('X' | 'x', 1 | 2 | 4) => "%z",
        ('X' | 'x', _) => "%:z",
        _ => return None,
    };
    Some(spec)
}
