//! Run Segmenter: splits text into maximal runs of one character class.
//!
//! The rendering layer maps each run to a font (Plain → default font,
//! Special → fallback font) and draws the runs back to back, so the result
//! must reconstruct the input exactly and never produce empty runs.

use serde::{Deserialize, Serialize};

use crate::layout::charset::SpecialSet;

/// Binary classification of a single `char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Plain,
    Special,
}

impl CharacterClass {
    #[inline]
    pub fn of(c: char, special: &SpecialSet) -> Self {
        if special.contains(c) {
            CharacterClass::Special
        } else {
            CharacterClass::Plain
        }
    }
}

/// A non-empty, maximal substring sharing one `CharacterClass`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub class: CharacterClass,
}

/// Returns true if any character of `text` belongs to `special`.
pub fn has_special(text: &str, special: &SpecialSet) -> bool {
    text.chars().any(|c| special.contains(c))
}

/// Segments `text` into runs in a single left-to-right scan.
///
/// Empty input yields no runs. Input without special characters yields one
/// `Plain` run covering the whole string.
pub fn segment(text: &str, special: &SpecialSet) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut chars = text.chars();

    let Some(first) = chars.next() else {
        return runs;
    };

    let mut current = String::new();
    current.push(first);
    let mut current_class = CharacterClass::of(first, special);

    for c in chars {
        let class = CharacterClass::of(c, special);
        if class != current_class {
            runs.push(Run {
                text: std::mem::take(&mut current),
                class: current_class,
            });
            current_class = class;
        }
        current.push(c);
    }

    runs.push(Run {
        text: current,
        class: current_class,
    });
    runs
}
