//! Character classes shared by the address recognition rules
//!
//! Three immutable tables define the whole vocabulary of the matcher:
//! - [`SEPARATORS`]: marks that may sit between the words of an address.
//!   ASCII full stop plus the full stop / middle dot forms of CJK, Khmer,
//!   Armenian, Myanmar, Arabic-script, Ethiopic and Devanagari text.
//! - [`EXCLUDED_SYMBOLS`]: punctuation, currency and legal symbols that can
//!   never be part of a word. Digits and every Unicode whitespace character
//!   are excluded as well (see [`is_word_char`]).
//! - [`LOOSE_SEPARATORS`]: everything a user may type by mistake in place of
//!   a real separator.
//!
//! The regular expressions in [`crate::matcher`] are generated from these
//! tables, so the predicates below and the compiled patterns always agree.

/// Small immutable character set with an ASCII fast path
#[derive(Debug, Clone, Copy)]
pub struct CharTable {
    chars: &'static [char],
}

impl CharTable {
    /// Create a table over a fixed list of characters
    pub const fn new(chars: &'static [char]) -> Self {
        Self { chars }
    }

    /// Check membership
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            // Fast path: most of the tables are ASCII and live at the front
            self.chars.iter().take_while(|c| c.is_ascii()).any(|&c| c == ch)
        } else {
            self.chars.iter().any(|&c| c == ch)
        }
    }

    /// All characters in the table, ASCII first
    pub fn chars(&self) -> &'static [char] {
        self.chars
    }

    /// Render the characters as items for a regex bracket expression.
    ///
    /// Every character goes through [`regex::escape`], which makes it a
    /// literal both inside and outside of a class.
    pub(crate) fn class_items(&self) -> String {
        let mut buf = [0u8; 4];
        self.chars
            .iter()
            .map(|ch| regex::escape(ch.encode_utf8(&mut buf)))
            .collect()
    }
}

/// Characters accepted between the three words of an address
pub const SEPARATORS: CharTable = CharTable::new(&[
    '.',        // full stop
    '\u{FF61}', // halfwidth ideographic full stop
    '\u{3002}', // ideographic full stop
    '\u{FF65}', // halfwidth katakana middle dot
    '\u{30FB}', // katakana middle dot
    '\u{FE12}', // presentation form for vertical ideographic full stop
    '\u{17D4}', // khmer sign khan
    '\u{0589}', // armenian full stop
    '\u{104B}', // myanmar sign section
    '\u{06D4}', // arabic full stop
    '\u{1362}', // ethiopic full stop
    '\u{0964}', // devanagari danda
]);

/// Symbols that terminate a word (digits and whitespace are handled separately)
pub const EXCLUDED_SYMBOLS: CharTable = CharTable::new(&[
    '`', '~', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '+', '-', '_', '=', '[', '{', ']',
    '}', '\\', '|', '\'', '<', '>', '.', ',', '?', '/', ';', ':', '£', '§', 'º', '©', '®',
]);

/// Characters commonly typed in place of a separator
pub const LOOSE_SEPARATORS: CharTable = CharTable::new(&[
    '.', ':', '^', '_', ' ', ',', '\\', '/', '+', '\'', '&', ';', '|', '-', '\u{FF61}', '\u{3002}',
    '\u{FF65}', '\u{30FB}', '\u{FE12}', '\u{17D4}', '\u{0964}', '\u{1362}', '\u{104B}', '\u{06D4}',
    '\u{0589}',
    '\u{3000}', // ideographic space
]);

/// Spaces allowed between the sub-tokens of a multi-word position
pub const SUBTOKEN_SPACES: CharTable = CharTable::new(&[' ', '\u{00A0}']);

/// Is `ch` a strict word separator?
#[inline]
pub fn is_separator(ch: char) -> bool {
    SEPARATORS.contains(ch)
}

/// Is `ch` a separator a user may have typed by mistake?
#[inline]
pub fn is_loose_separator(ch: char) -> bool {
    LOOSE_SEPARATORS.contains(ch)
}

/// Can `ch` be part of a word?
///
/// Words never contain digits, whitespace (including the no-break and
/// ideographic spaces), excluded symbols or separators.
#[inline]
pub fn is_word_char(ch: char) -> bool {
    !(ch.is_ascii_digit()
        || ch.is_whitespace()
        || EXCLUDED_SYMBOLS.contains(ch)
        || SEPARATORS.contains(ch))
}

/// Bracket expression matching one word character
pub(crate) fn word_class() -> String {
    format!(
        r"[^0-9\s{}{}]",
        EXCLUDED_SYMBOLS.class_items(),
        SEPARATORS.class_items()
    )
}

/// Bracket expression matching one strict separator
pub(crate) fn separator_class() -> String {
    format!("[{}]", SEPARATORS.class_items())
}

/// Bracket expression matching one loose separator
pub(crate) fn loose_separator_class() -> String {
    format!("[{}]", LOOSE_SEPARATORS.class_items())
}

/// Bracket expression matching the space between sub-tokens
pub(crate) fn subtoken_space_class() -> String {
    format!("[{}]", SUBTOKEN_SPACES.class_items())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_lookup() {
        assert!(is_separator('.'));
        assert!(is_separator('。'));
        assert!(is_separator('・'));
        assert!(is_separator('।'));
        assert!(is_separator('۔'));
        assert!(!is_separator(','));
        assert!(!is_separator('-'));
        assert!(!is_separator('a'));
    }

    #[test]
    fn test_word_chars() {
        for ch in ['a', 'Z', 'é', 'ß', 'ж', 'ت', '日', 'ก', '"'] {
            assert!(is_word_char(ch), "{ch:?} should be a word char");
        }
        for ch in ['0', '9', ' ', '\t', '\n', '\u{00A0}', '\u{3000}', '£', '©', '/', '-'] {
            assert!(!is_word_char(ch), "{ch:?} should not be a word char");
        }
    }

    #[test]
    fn test_separators_never_form_words() {
        for &ch in SEPARATORS.chars() {
            assert!(!is_word_char(ch), "separator {ch:?} leaks into words");
        }
    }

    #[test]
    fn test_loose_separators_never_form_words() {
        for &ch in LOOSE_SEPARATORS.chars() {
            assert!(!is_word_char(ch), "loose separator {ch:?} leaks into words");
        }
    }

    #[test]
    fn test_strict_separators_are_loose() {
        for &ch in SEPARATORS.chars() {
            assert!(is_loose_separator(ch), "{ch:?} missing from loose table");
        }
    }

    #[test]
    fn test_class_items_are_literals() {
        let class = format!("^[{}]$", EXCLUDED_SYMBOLS.class_items());
        let re = regex::Regex::new(&class).unwrap();
        for &ch in EXCLUDED_SYMBOLS.chars() {
            assert!(re.is_match(&ch.to_string()), "{ch:?} not matched");
        }
        assert!(!re.is_match("a"));
    }

    #[test]
    fn test_tables_list_ascii_first() {
        for table in [SEPARATORS, EXCLUDED_SYMBOLS, LOOSE_SEPARATORS, SUBTOKEN_SPACES] {
            let first_non_ascii = table.chars().iter().position(|c| !c.is_ascii());
            if let Some(pos) = first_non_ascii {
                assert!(table.chars()[pos..].iter().all(|c| !c.is_ascii()));
            }
        }
    }

    #[test]
    fn test_ascii_fast_path_matches_slow_path() {
        for &ch in LOOSE_SEPARATORS.chars() {
            assert!(LOOSE_SEPARATORS.contains(ch));
        }
        assert!(!LOOSE_SEPARATORS.contains('x'));
        assert!(!LOOSE_SEPARATORS.contains('\u{3001}'));
    }
}
