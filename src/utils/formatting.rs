//! Byte count and numeric formatting utilities
//!
//! Functions for presenting buffer sizes in human-readable storage units
//! and for rounding floating-point values to a fixed number of decimal
//! places. Both are pure: no locale state is consulted, the numeral format
//! is pinned to `,` grouping and `.` decimals.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Set of storage units a byte count may be rendered in
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AllowedUnits: u32 {
        const BYTES = 1 << 0;
        const KB = 1 << 1;
        const MB = 1 << 2;
        const GB = 1 << 3;
        const TB = 1 << 4;
        const PB = 1 << 5;
        const EB = 1 << 6;
        const ZB = 1 << 7;
        const YB = 1 << 8;
        const ALL = 0x1FF;
    }
}

/// How many bytes make up one kilobyte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountStyle {
    /// File sizes, 1000 bytes per KB
    #[default]
    File,
    /// Memory sizes, 1024 bytes per KB
    Memory,
    /// Always 1000 bytes per KB
    Decimal,
    /// Always 1024 bytes per KB
    Binary,
}

impl CountStyle {
    fn kilo(self) -> f64 {
        match self {
            CountStyle::File | CountStyle::Decimal => 1000.0,
            CountStyle::Memory | CountStyle::Binary => 1024.0,
        }
    }
}

/// Unit flag, label and fraction digits, ordered by exponent
const UNITS: [(AllowedUnits, &str, i32); 9] = [
    (AllowedUnits::BYTES, "bytes", 0),
    (AllowedUnits::KB, "KB", 0),
    (AllowedUnits::MB, "MB", 1),
    (AllowedUnits::GB, "GB", 2),
    (AllowedUnits::TB, "TB", 2),
    (AllowedUnits::PB, "PB", 2),
    (AllowedUnits::EB, "EB", 2),
    (AllowedUnits::ZB, "ZB", 2),
    (AllowedUnits::YB, "YB", 2),
];

/// Formats the size of a byte buffer in the requested storage units
///
/// Uses the file count style (1000 bytes per KB).
///
/// # Arguments
/// - `data` - The buffer whose length is formatted
/// - `units` - The units the result may be expressed in
///
/// # Returns
/// A human-readable size such as `"1 KB"` or `"2.5 GB"`
///
/// # Examples
/// ```
/// use valuefmt::utils::formatting::{data_size_other_format, AllowedUnits};
/// assert_eq!(data_size_other_format(&[0u8; 1024], AllowedUnits::KB), "1 KB");
/// ```
pub fn data_size_other_format(data: &[u8], units: AllowedUnits) -> String {
    format_byte_count(data.len() as u64, units, CountStyle::File)
}

/// Formats a byte count in the largest allowed unit that keeps the value at or above one
///
/// When no allowed unit qualifies the smallest allowed unit is used, so
/// `999` bytes restricted to `MB` renders as `"0 MB"`. An empty unit set
/// behaves like [`AllowedUnits::ALL`].
///
/// Kilobytes carry no fraction digits, megabytes one, larger units two.
/// Values are rounded half away from zero and trailing fractional zeros
/// are dropped.
///
/// # Arguments
/// - `count` - Number of bytes
/// - `units` - The units the result may be expressed in
/// - `style` - Whether a kilobyte is 1000 or 1024 bytes
pub fn format_byte_count(count: u64, units: AllowedUnits, style: CountStyle) -> String {
    let units = if units.is_empty() {
        AllowedUnits::ALL
    } else {
        units
    };
    let kilo = style.kilo();

    let mut chosen = None;
    for (exponent, (flag, _, _)) in UNITS.iter().enumerate() {
        if !units.contains(*flag) {
            continue;
        }
        let scaled = count as f64 / kilo.powi(exponent as i32);
        if chosen.is_none() || scaled >= 1.0 {
            chosen = Some(exponent);
        }
    }
    let mut exponent = chosen.unwrap_or(0);
    let mut value = scaled_value(count, kilo, exponent);

    // rounding can carry a value up to the next unit (999,999 bytes is 1,000 KB)
    while value >= kilo && exponent + 1 < UNITS.len() && units.contains(UNITS[exponent + 1].0) {
        exponent += 1;
        value = scaled_value(count, kilo, exponent);
    }
    let (_, label, decimals) = UNITS[exponent];

    if count == 0 {
        return format!("Zero {}", label);
    }
    if exponent == 0 {
        return match count {
            1 => "1 byte".to_string(),
            n => format!("{} bytes", group_thousands(&n.to_string())),
        };
    }

    format!("{} {}", format_decimal(value, decimals), label)
}

/// `count` expressed in the unit at `exponent`, rounded to that unit's digits
fn scaled_value(count: u64, kilo: f64, exponent: usize) -> f64 {
    let (_, _, decimals) = UNITS[exponent];
    round_to_places(count as f64 / kilo.powi(exponent as i32), decimals)
}

/// Rounds a value to a number of decimal places, half away from zero
///
/// Negative `places` round to tens, hundreds and so on. Precision loss for
/// very large values is not reported, and places beyond the range of `f64`
/// give `NaN`.
///
/// # Arguments
/// - `value` - The value to round
/// - `places` - Number of decimal digits to keep
///
/// # Examples
/// ```
/// use valuefmt::utils::formatting::round_to_places;
/// assert_eq!(round_to_places(0.2289, 2), 0.23);
/// assert_eq!(round_to_places(1234.5, -2), 1200.0);
/// ```
pub fn round_to_places(value: f64, places: i32) -> f64 {
    if places >= 0 {
        let divisor = 10f64.powi(places);
        (value * divisor).round() / divisor
    } else {
        let multiplier = match places.checked_neg() {
            Some(exponent) => 10f64.powi(exponent),
            None => f64::INFINITY,
        };
        (value / multiplier).round() * multiplier
    }
}

/// Renders an already-rounded value with at most `decimals` fraction digits
fn format_decimal(value: f64, decimals: i32) -> String {
    let rendered = format!("{:.*}", decimals.max(0) as usize, value);
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer, fraction.trim_end_matches('0')),
        None => (rendered.as_str(), ""),
    };

    let mut result = group_thousands(integer);
    if !fraction.is_empty() {
        result.push('.');
        result.push_str(fraction);
    }
    result
}

/// Inserts `,` between every group of three integer digits
fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_places_basic() {
        assert_eq!(round_to_places(0.2289, 2), 0.23);
        assert_eq!(round_to_places(3.14159, 0), 3.0);
    }

    #[test]
    fn test_round_to_places_half_away_from_zero() {
        assert_eq!(round_to_places(2.5, 0), 3.0);
        assert_eq!(round_to_places(-2.5, 0), -3.0);
        assert_eq!(round_to_places(0.125, 2), 0.13);
    }

    #[test]
    fn test_round_to_places_binary_representation() {
        // 1.005 is stored slightly below the midpoint
        assert_eq!(round_to_places(1.005, 2), 1.0);
    }

    #[test]
    fn test_round_to_places_negative_places() {
        assert_eq!(round_to_places(1234.5, -2), 1200.0);
        assert_eq!(round_to_places(1250.0, -2), 1300.0);
        assert_eq!(round_to_places(-1250.0, -2), -1300.0);
    }

    #[test]
    fn test_round_to_places_extreme_places() {
        assert!(round_to_places(1.5, i32::MIN).is_nan());
        assert!(round_to_places(1.5, i32::MAX).is_nan());
        assert_eq!(round_to_places(1.5, -300), 0.0);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("-123456"), "-123,456");
    }

    #[test]
    fn test_format_decimal_trims_zeros() {
        assert_eq!(format_decimal(1.5, 1), "1.5");
        assert_eq!(format_decimal(2.0, 2), "2");
        assert_eq!(format_decimal(2.5, 2), "2.5");
        assert_eq!(format_decimal(1500.0, 0), "1,500");
    }

    #[test]
    fn test_format_byte_count_picks_largest_fitting_unit() {
        assert_eq!(
            format_byte_count(1_000_000, AllowedUnits::ALL, CountStyle::File),
            "1 MB"
        );
        assert_eq!(
            format_byte_count(2_500_000_000, AllowedUnits::ALL, CountStyle::File),
            "2.5 GB"
        );
        assert_eq!(
            format_byte_count(512, AllowedUnits::ALL, CountStyle::File),
            "512 bytes"
        );
    }

    #[test]
    fn test_format_byte_count_respects_unit_set() {
        assert_eq!(
            format_byte_count(1_500_000, AllowedUnits::KB, CountStyle::File),
            "1,500 KB"
        );
        assert_eq!(
            format_byte_count(999, AllowedUnits::MB, CountStyle::File),
            "0 MB"
        );
    }

    #[test]
    fn test_format_byte_count_promotes_after_rounding() {
        assert_eq!(
            format_byte_count(999_999, AllowedUnits::ALL, CountStyle::File),
            "1 MB"
        );
        assert_eq!(
            format_byte_count(999_999_999, AllowedUnits::ALL, CountStyle::File),
            "1 GB"
        );
        // no larger unit allowed, so the carried value stays
        assert_eq!(
            format_byte_count(999_999, AllowedUnits::KB, CountStyle::File),
            "1,000 KB"
        );
        // only carries into the adjacent unit
        let units = AllowedUnits::KB | AllowedUnits::MB | AllowedUnits::TB;
        assert_eq!(
            format_byte_count(999_999_999, units, CountStyle::File),
            "1,000 MB"
        );
    }

    #[test]
    fn test_format_byte_count_memory_style() {
        assert_eq!(
            format_byte_count(1024, AllowedUnits::ALL, CountStyle::Memory),
            "1 KB"
        );
        assert_eq!(
            format_byte_count(1_572_864, AllowedUnits::ALL, CountStyle::Binary),
            "1.5 MB"
        );
    }

    #[test]
    fn test_format_byte_count_zero_and_single_byte() {
        assert_eq!(
            format_byte_count(0, AllowedUnits::KB, CountStyle::File),
            "Zero KB"
        );
        assert_eq!(
            format_byte_count(0, AllowedUnits::ALL, CountStyle::File),
            "Zero bytes"
        );
        assert_eq!(
            format_byte_count(1, AllowedUnits::ALL, CountStyle::File),
            "1 byte"
        );
    }

    #[test]
    fn test_format_byte_count_empty_set_means_all() {
        assert_eq!(
            format_byte_count(1_000_000, AllowedUnits::empty(), CountStyle::File),
            "1 MB"
        );
    }

    #[test]
    fn test_data_size_other_format_one_kilobyte() {
        assert_eq!(data_size_other_format(&[0u8; 1024], AllowedUnits::KB), "1 KB");
    }
}
