//! Immutable character tables used by the segmenter and the wrapper.
//!
//! Both tables are built once at startup and shared read-only afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Romanian letters that the default résumé font renders poorly.
pub const ROMANIAN_DIACRITICS: &[char] = &['ă', 'Ă', 'â', 'Â', 'î', 'Î', 'ș', 'Ș', 'ț', 'Ț'];

// ────────────────────────────────────────────────────────────────────────────
// Special character set
// ────────────────────────────────────────────────────────────────────────────

/// The set of characters classified as `Special` by the segmenter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialSet {
    chars: HashSet<char>,
}

impl SpecialSet {
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    pub fn romanian() -> Self {
        Self::new(ROMANIAN_DIACRITICS.iter().copied())
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Break rules
// ────────────────────────────────────────────────────────────────────────────

/// What happens to a break character once the wrapper splits on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakMode {
    /// The character ends the current line (path separators, dots).
    Inclusive,
    /// The character is consumed as a separator and appears on neither line.
    Exclusive,
}

/// A preferred break character and its retention mode.
///
/// Break tables are ordered slices: earlier rules win over later ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakRule {
    pub ch: char,
    pub mode: BreakMode,
}

impl BreakRule {
    pub const fn inclusive(ch: char) -> Self {
        Self {
            ch,
            mode: BreakMode::Inclusive,
        }
    }

    pub const fn exclusive(ch: char) -> Self {
        Self {
            ch,
            mode: BreakMode::Exclusive,
        }
    }
}

const URL_BREAKS: [BreakRule; 2] = [BreakRule::inclusive('/'), BreakRule::inclusive('.')];
const WORD_BREAKS: [BreakRule; 1] = [BreakRule::exclusive(' ')];

/// Break table for URLs: prefer the last `/`, then the last `.`, both kept.
pub fn url_breaks() -> &'static [BreakRule] {
    &URL_BREAKS
}

/// Break table for prose labels: split on spaces and drop them.
pub fn word_breaks() -> &'static [BreakRule] {
    &WORD_BREAKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_romanian_set_has_both_cases() {
        let set = SpecialSet::romanian();
        assert_eq!(set.len(), 10);
        assert!(set.contains('ș'));
        assert!(set.contains('Ț'));
        assert!(!set.contains('s'));
        // Cedilla forms are distinct code points and are not part of the set.
        assert!(!set.contains('ş'));
    }

    #[test]
    fn test_url_breaks_priority_order() {
        let rules = url_breaks();
        assert_eq!(rules[0].ch, '/');
        assert_eq!(rules[1].ch, '.');
        assert!(rules.iter().all(|r| r.mode == BreakMode::Inclusive));
    }

    #[test]
    fn test_break_mode_serializes_snake_case() {
        let json = serde_json::to_string(&BreakRule::exclusive(' ')).unwrap();
        assert_eq!(json, r#"{"ch":" ","mode":"exclusive"}"#);
    }
}
