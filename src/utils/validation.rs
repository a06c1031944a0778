//! Input validation and normalisation
//!
//! Email address checking and mobile phone number dashing. Both use
//! precompiled regular expressions and never fail: invalid input yields
//! `false` or is handed back unchanged.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Whole-string email pattern: local part, `@`, domain, alphabetic TLD
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^(?:[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,64})$").unwrap();

    /// Exactly eleven ASCII digits, split 3-4-4
    static ref PHONE_PATTERN: Regex = Regex::new(r"^([0-9]{3})([0-9]{4})([0-9]{4})$").unwrap();
}

/// Checks whether the whole string looks like an email address
///
/// # Examples
/// ```
/// use valuefmt::utils::validation::is_check_valid_email;
/// assert!(is_check_valid_email("myoungsc.dev@gmail.com"));
/// assert!(!is_check_valid_email("not-an-email"));
/// ```
pub fn is_check_valid_email(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text)
}

/// Formats an 11-digit mobile number as `ddd-dddd-dddd`
///
/// # Arguments
/// - `digits` - The number without separators, such as `"01011112222"`
///
/// # Returns
/// The dashed number, or `digits` unchanged when it is not exactly eleven
/// ASCII digits
pub fn make_phone_number(digits: &str) -> String {
    if !PHONE_PATTERN.is_match(digits) {
        log::debug!("not an 11-digit phone number, leaving as is: {:?}", digits);
        return digits.to_string();
    }
    PHONE_PATTERN.replace(digits, "$1-$2-$3").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_common_addresses() {
        assert!(is_check_valid_email("myoungsc.dev@gmail.com"));
        assert!(is_check_valid_email("first.last+tag@sub.example.co.kr"));
        assert!(is_check_valid_email("a_b%c@x-y.io"));
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert!(!is_check_valid_email("not-an-email"));
        assert!(!is_check_valid_email("missing@tld"));
        assert!(!is_check_valid_email("@example.com"));
        assert!(!is_check_valid_email("user@example.c0m"));
        assert!(!is_check_valid_email(""));
    }

    #[test]
    fn test_email_must_match_whole_string() {
        assert!(!is_check_valid_email(" user@example.com"));
        assert!(!is_check_valid_email("user@example.com trailing"));
    }

    #[test]
    fn test_make_phone_number_dashes_eleven_digits() {
        assert_eq!(make_phone_number("01011112222"), "010-1111-2222");
    }

    #[test]
    fn test_make_phone_number_leaves_other_input() {
        assert_eq!(make_phone_number("0101111222"), "0101111222");
        assert_eq!(make_phone_number("010111122223"), "010111122223");
        assert_eq!(make_phone_number("010-1111-2222"), "010-1111-2222");
        assert_eq!(make_phone_number("0101111222a"), "0101111222a");
        assert_eq!(make_phone_number(""), "");
    }

    #[test]
    fn test_make_phone_number_rejects_non_ascii_digits() {
        let arabic_indic = "٠١٠١١١١٢٢٢٢";
        assert_eq!(make_phone_number(arabic_indic), arabic_indic);
    }
}
