//! String manipulation utilities
//!
//! Localization lookups, grapheme-aware reversal and slicing, weighted
//! truncation and Korean initial-consonant extraction. Everything here
//! works on user-perceived characters (grapheme clusters) unless noted.

use crate::traits::StringTable;
use unicode_segmentation::UnicodeSegmentation;

/// First code point of the Hangul syllables block
const HANGUL_BASE: u32 = 0xAC00;

/// Last code point of the Hangul syllables block
const HANGUL_LAST: u32 = 0xD7A3;

/// Syllables sharing one leading consonant (21 vowels x 28 trailing consonants)
const SYLLABLES_PER_LEAD: u32 = 21 * 28;

/// Leading consonants as compatibility jamo, in Unicode order
const LEADING_CONSONANTS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// Looks up the localized string for a key
///
/// # Arguments
/// - `table` - The string table to consult
/// - `key` - The lookup key
///
/// # Returns
/// The localized string, or `key` itself when the table has no entry
pub fn localized(table: &dyn StringTable, key: &str) -> String {
    match table.lookup(key) {
        Some(value) => value.to_string(),
        None => {
            log::debug!("no localized string for key '{}'", key);
            key.to_string()
        }
    }
}

/// Looks up the localized string for a key, with a translator comment
///
/// The comment carries no behaviour; it only shows up in trace logs.
pub fn localized_with_comment(table: &dyn StringTable, key: &str, comment: &str) -> String {
    log::trace!("localizing '{}' ({})", key, comment);
    localized(table, key)
}

/// Reverses a string by grapheme cluster
///
/// Combining marks and multi-code-point emoji stay attached to their base.
pub fn reversed(text: &str) -> String {
    text.graphemes(true).rev().collect()
}

/// Replaces each Hangul syllable with its leading consonant
///
/// Characters outside U+AC00..=U+D7A3 pass through unchanged, so the
/// result has exactly as many `char`s as the input.
///
/// # Examples
/// ```
/// use valuefmt::utils::text::initial_korea;
/// assert_eq!(initial_korea("안녕하세요"), "ㅇㄴㅎㅅㅇ");
/// ```
pub fn initial_korea(text: &str) -> String {
    text.chars().map(leading_consonant).collect()
}

fn leading_consonant(ch: char) -> char {
    let code = ch as u32;
    if !(HANGUL_BASE..=HANGUL_LAST).contains(&code) {
        return ch;
    }
    let index = ((code - HANGUL_BASE) / SYLLABLES_PER_LEAD) as usize;
    LEADING_CONSONANTS[index]
}

/// Selects grapheme clusters by position, inclusive of both ends
///
/// Returns the clusters at indices `start` through `start + length`, which
/// is `length + 1` clusters when the text is long enough. Positions past
/// the end are ignored, so an out-of-range `start` yields an empty string.
///
/// # Examples
/// ```
/// use valuefmt::utils::text::select_text_from_range;
/// assert_eq!(select_text_from_range("안녕하세요", 2, 2), "하세요");
/// ```
pub fn select_text_from_range(text: &str, start: usize, length: usize) -> String {
    let last = start.saturating_add(length);
    text.graphemes(true)
        .enumerate()
        .skip(start)
        .take_while(|(i, _)| *i <= last)
        .map(|(_, cluster)| cluster)
        .collect()
}

/// Truncates text by display weight and appends a suffix
///
/// Single-byte clusters weigh 1, everything else weighs 2. Once the running
/// weight exceeds `limit`, the cluster that crossed it is dropped, `suffix`
/// is appended and the walk stops. Text that never exceeds `limit` is
/// returned as-is, without the suffix.
///
/// # Arguments
/// - `text` - The text to shorten
/// - `limit` - Maximum total weight kept before truncating
/// - `suffix` - Text appended after truncation, such as `"..."`
pub fn reduce_from_count(text: &str, limit: usize, suffix: &str) -> String {
    let mut result = String::with_capacity(text.len() + suffix.len());
    let mut weight = 0usize;

    for cluster in text.graphemes(true) {
        weight += cluster_weight(cluster);
        if weight > limit {
            result.push_str(suffix);
            return result;
        }
        result.push_str(cluster);
    }

    result
}

/// Display weight of a grapheme cluster: 1 for a single byte, else 2
pub(crate) fn cluster_weight(cluster: &str) -> usize {
    if cluster.len() == 1 {
        1
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::MapStringTable;

    #[test]
    fn test_localized_hit_and_miss() {
        let table: MapStringTable = [("mainPageTitle", "메인 화면")].into_iter().collect();
        assert_eq!(localized(&table, "mainPageTitle"), "메인 화면");
        assert_eq!(localized(&table, "unknownKey"), "unknownKey");
    }

    #[test]
    fn test_localized_with_comment_ignores_comment() {
        let table: MapStringTable = [("title", "Title")].into_iter().collect();
        assert_eq!(
            localized_with_comment(&table, "title", "Title in main page"),
            localized(&table, "title")
        );
    }

    #[test]
    fn test_reversed_ascii() {
        assert_eq!(reversed("Hello"), "olleH");
        assert_eq!(reversed(""), "");
    }

    #[test]
    fn test_reversed_keeps_combining_marks() {
        // "e" + combining acute accent stays one cluster
        assert_eq!(reversed("ae\u{301}b"), "be\u{301}a");
    }

    #[test]
    fn test_reversed_keeps_emoji_sequences() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
        let text = format!("x{}y", family);
        assert_eq!(reversed(&text), format!("y{}x", family));
    }

    #[test]
    fn test_initial_korea_syllables() {
        assert_eq!(initial_korea("안녕하세요"), "ㅇㄴㅎㅅㅇ");
        assert_eq!(initial_korea("까치"), "ㄲㅊ");
    }

    #[test]
    fn test_initial_korea_block_edges() {
        assert_eq!(initial_korea("\u{AC00}"), "ㄱ");
        assert_eq!(initial_korea("\u{D7A3}"), "ㅎ");
        // just outside the block
        assert_eq!(initial_korea("\u{ABFF}\u{D7A4}"), "\u{ABFF}\u{D7A4}");
    }

    #[test]
    fn test_initial_korea_passes_through_other_text() {
        assert_eq!(initial_korea("Swift 한글!"), "Swift ㅎㄱ!");
        assert_eq!(initial_korea("ㄱㄴ"), "ㄱㄴ");
    }

    #[test]
    fn test_initial_korea_preserves_char_count() {
        let text = "가나다 abc 라마";
        assert_eq!(initial_korea(text).chars().count(), text.chars().count());
    }

    #[test]
    fn test_select_text_from_range_is_inclusive() {
        assert_eq!(select_text_from_range("안녕하세요", 2, 2), "하세요");
        assert_eq!(select_text_from_range("abcdef", 0, 0), "a");
        assert_eq!(select_text_from_range("abcdef", 1, 3), "bcde");
    }

    #[test]
    fn test_select_text_from_range_out_of_bounds() {
        assert_eq!(select_text_from_range("abc", 1, 10), "bc");
        assert_eq!(select_text_from_range("abc", 5, 1), "");
        assert_eq!(select_text_from_range("abc", 1, usize::MAX), "bc");
    }

    #[test]
    fn test_reduce_from_count_ascii() {
        assert_eq!(
            reduce_from_count("Swift is Awesome!!", 15, "..."),
            "Swift is Awesom..."
        );
    }

    #[test]
    fn test_reduce_from_count_wide_characters() {
        // each syllable weighs 2; the third one crosses 5
        assert_eq!(reduce_from_count("안녕하세요", 5, "…"), "안녕…");
    }

    #[test]
    fn test_reduce_from_count_short_text_untouched() {
        assert_eq!(reduce_from_count("short", 5, "..."), "short");
        assert_eq!(reduce_from_count("", 0, "..."), "");
    }

    #[test]
    fn test_cluster_weight() {
        assert_eq!(cluster_weight("a"), 1);
        assert_eq!(cluster_weight("é"), 2);
        assert_eq!(cluster_weight("한"), 2);
    }
}
