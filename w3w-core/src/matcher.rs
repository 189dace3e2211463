//! Offline three-word address recognition
//!
//! Three independent rules decide, without touching the network, whether a
//! string looks like a three-word address:
//! - **find**: extract every `word SEP word SEP word` substring from free text
//! - **full match**: the whole string is an address, optionally behind
//!   leading slashes (`///filled.count.soap`), with each position allowed to
//!   hold up to three extra space-separated sub-tokens
//! - **likely typo**: the whole string has the three-word shape but uses one
//!   or two loose separators (`filled-count-soap`, `filled, count, soap`)
//!
//! The patterns are compiled once per process from the tables in
//! [`crate::charset`]. The `regex` crate executes them in time linear in the
//! input, so adversarial input cannot trigger catastrophic backtracking.
//!
//! Multi-token positions are only recognised by the full-match rule. The
//! find rule reports single-token words, which keeps every candidate it
//! returns a valid full match on its own.

use crate::charset::{loose_separator_class, separator_class, subtoken_space_class, word_class};
use regex::Regex;
use std::sync::OnceLock;

static MATCHER: OnceLock<AddressMatcher> = OnceLock::new();

/// A substring of the input shaped like a three-word address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Candidate<'t> {
    /// The matched text
    pub text: &'t str,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

/// Compiled recognition rules
#[derive(Debug)]
pub struct AddressMatcher {
    find: Regex,
    full: Regex,
    typo: Regex,
}

impl AddressMatcher {
    /// The process-wide matcher, compiled on first use
    pub fn global() -> &'static Self {
        MATCHER.get_or_init(Self::compile)
    }

    fn compile() -> Self {
        let word = format!("{}+", word_class());
        let sep = separator_class();
        let loose = format!("{}{{1,2}}", loose_separator_class());
        let token = format!("{word}(?:{}{word}){{0,3}}", subtoken_space_class());

        Self {
            find: build(&format!("{word}{sep}{word}{sep}{word}")),
            full: build(&format!("^/*{token}{sep}{token}{sep}{token}$")),
            typo: build(&format!("^/?{word}{loose}{word}{loose}{word}$")),
        }
    }

    /// All non-overlapping address-shaped substrings, left to right
    pub fn find_candidates<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.find.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Same as [`find_candidates`](Self::find_candidates) with byte offsets
    pub fn candidate_spans<'t>(&self, text: &'t str) -> Vec<Candidate<'t>> {
        self.find
            .find_iter(text)
            .map(|m| Candidate {
                text: m.as_str(),
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }

    /// Is the whole of `text` shaped like a three-word address?
    pub fn is_full_match(&self, text: &str) -> bool {
        self.full.is_match(text)
    }

    /// Is `text` a three-word address with the wrong punctuation?
    pub fn is_likely_typo(&self, text: &str) -> bool {
        self.typo.is_match(text)
    }
}

fn build(pattern: &str) -> Regex {
    Regex::new(pattern).expect("address patterns are generated from constant tables")
}

/// Find every substring of `text` shaped like a three-word address
pub fn find_candidates(text: &str) -> Vec<&str> {
    AddressMatcher::global().find_candidates(text)
}

/// Find every candidate in `text` together with its byte span
pub fn candidate_spans(text: &str) -> Vec<Candidate<'_>> {
    AddressMatcher::global().candidate_spans(text)
}

/// Check whether `text` is, in its entirety, shaped like a three-word address
pub fn is_full_match(text: &str) -> bool {
    AddressMatcher::global().is_full_match(text)
}

/// Check whether `text` is almost a three-word address
pub fn is_likely_typo(text: &str) -> bool {
    AddressMatcher::global().is_likely_typo(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        let matcher = AddressMatcher::compile();
        assert!(matcher.is_full_match("index.home.raft"));
    }

    #[test]
    fn test_full_match_basic() {
        assert!(is_full_match("filled.count.soap"));
        assert!(is_full_match("/filled.count.soap"));
        assert!(is_full_match("///filled.count.soap"));
    }

    #[test]
    fn test_full_match_rejects_partial() {
        assert!(!is_full_match("filled.count."));
        assert!(!is_full_match("filled.count"));
        assert!(!is_full_match(".count.soap"));
        assert!(!is_full_match("filled..soap"));
        assert!(!is_full_match("filled.count.soap.extra"));
        assert!(!is_full_match("filled.count.soap "));
        assert!(!is_full_match(" filled.count.soap"));
        assert!(!is_full_match("///"));
    }

    #[test]
    fn test_full_match_other_scripts() {
        assert!(is_full_match("تجتمع.ضباط.ثقافية"));
        assert!(is_full_match("なんて。たべた。むしょく"));
        assert!(is_full_match("ソース・ページ・ボタン"));
        assert!(is_full_match("नमस्ते।दुनिया।पानी"));
        assert!(is_full_match("продать.прилив.кошка"));
        assert!(is_full_match("ቤት።ውሃ።ዛፍ"));
    }

    #[test]
    fn test_full_match_mixed_separators() {
        assert!(is_full_match("filled。count.soap"));
        assert!(is_full_match("filled｡count･soap"));
    }

    #[test]
    fn test_full_match_multi_token_positions() {
        assert!(is_full_match("new york.some place.here"));
        assert!(is_full_match("a b c d.e.f"));
        assert!(is_full_match("one two.three four.five six"));
        assert!(is_full_match("new\u{00A0}york.some.place"));
        // Four extra sub-tokens in the first position
        assert!(!is_full_match("a b c d e.f.g"));
        // Only plain and no-break spaces join sub-tokens
        assert!(!is_full_match("new\tyork.some.place"));
        assert!(!is_full_match("new  york.some.place"));
    }

    #[test]
    fn test_full_match_rejects_loose_separators() {
        assert!(!is_full_match("filled-count-fake"));
        assert!(!is_full_match("filled,count,soap"));
        assert!(!is_full_match("filled/count/soap"));
    }

    #[test]
    fn test_full_match_rejects_digits_and_symbols() {
        assert!(!is_full_match("3.14.15"));
        assert!(!is_full_match("filled.count.s0ap"));
        assert!(!is_full_match("filled.c£unt.soap"));
        assert!(!is_full_match("fil@led.count.soap"));
    }

    #[test]
    fn test_find_candidates_in_sentence() {
        let source = "Can be found at filled.count.soap and at ///test.fake.words but not at test.fake. or test.fake";
        assert_eq!(
            find_candidates(source),
            vec!["filled.count.soap", "test.fake.words"]
        );
    }

    #[test]
    fn test_find_candidates_none() {
        assert!(find_candidates("").is_empty());
        assert!(find_candidates("a").is_empty());
        assert!(find_candidates("no addresses here at all").is_empty());
        assert!(find_candidates("Pi is 3.14159 and e.g. is an abbreviation").is_empty());
    }

    #[test]
    fn test_find_candidates_non_overlapping() {
        // A run of five words yields one candidate, the remainder is too short
        assert_eq!(find_candidates("a.b.c.d.e"), vec!["a.b.c"]);
        assert_eq!(find_candidates("a.b.c.d.e.f"), vec!["a.b.c", "d.e.f"]);
    }

    #[test]
    fn test_find_candidates_other_scripts() {
        let text = "住所 なんて。たべた。むしょく です";
        assert_eq!(find_candidates(text), vec!["なんて。たべた。むしょく"]);

        // Brackets are not excluded symbols, so they stick to the words
        let bracketed = "「なんて。たべた。むしょく」";
        assert_eq!(find_candidates(bracketed), vec![bracketed]);
    }

    #[test]
    fn test_candidate_spans_offsets() {
        let text = "go to index.home.raft now";
        let spans = candidate_spans(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "index.home.raft");
        assert_eq!(&text[spans[0].start..spans[0].end], "index.home.raft");
    }

    #[test]
    fn test_likely_typo() {
        assert!(is_likely_typo("filled-count-fake"));
        assert!(is_likely_typo("filled,count,soap"));
        assert!(is_likely_typo("filled, count, soap"));
        assert!(is_likely_typo("filled count soap"));
        assert!(is_likely_typo("filled\u{3000}count\u{3000}soap"));
        assert!(is_likely_typo("filled--count--soap"));
        assert!(is_likely_typo("filled/count\\soap"));
        assert!(is_likely_typo("filled'count'soap"));
        assert!(is_likely_typo("/filled-count-soap"));
        assert!(is_likely_typo("filled.count.soap"));
    }

    #[test]
    fn test_likely_typo_rejects() {
        assert!(!is_likely_typo("filled---count-soap"));
        assert!(!is_likely_typo("//filled-count-soap"));
        assert!(!is_likely_typo("filled-count"));
        assert!(!is_likely_typo("filled-count-soap-extra"));
        assert!(!is_likely_typo("filled-count-"));
        assert!(!is_likely_typo("1-2-3"));
    }

    #[test]
    fn test_boundaries() {
        for input in ["", "a", ".", "/", "-"] {
            assert!(find_candidates(input).is_empty(), "{input:?}");
            assert!(!is_full_match(input), "{input:?}");
            assert!(!is_likely_typo(input), "{input:?}");
        }
    }

    #[test]
    fn test_global_is_shared() {
        let a = AddressMatcher::global() as *const AddressMatcher;
        let b = AddressMatcher::global() as *const AddressMatcher;
        assert_eq!(a, b);
    }
}
