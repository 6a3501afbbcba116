//! Line Wrapper: greedy fixed-width wrapping with content-aware break points.
//!
//! Widths are counted in `char`s, not measured glyph widths. Each iteration
//! looks at the next `max_width` characters, picks the highest-priority break
//! rule that matches anywhere in that window, and splits at its rightmost
//! match. With no match the line is cut hard at `max_width`.
//!
//! A match at window position 0 is ignored: it would leave either an empty
//! line (exclusive) or a line holding only the separator (inclusive).

use serde::{Deserialize, Serialize};

use crate::layout::charset::{BreakMode, BreakRule};
use crate::layout::error::LayoutError;

/// One output row of the wrapper.
///
/// `dropped` holds the separator consumed right after this line by an
/// exclusive break, so the original text can be rebuilt with [`rejoin`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrappedLine {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropped: Option<char>,
}

impl WrappedLine {
    fn kept(chars: &[char]) -> Self {
        Self {
            text: chars.iter().collect(),
            dropped: None,
        }
    }

    /// Width of the visible text in chars.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// Wraps `text` into lines of at most `max_width` chars.
///
/// Returns an empty vector for empty input and a single line when the text
/// already fits.
pub fn wrap(
    text: &str,
    max_width: usize,
    breaks: &[BreakRule],
) -> Result<Vec<WrappedLine>, LayoutError> {
    if max_width < 1 {
        return Err(LayoutError::config(
            "max_width must be at least 1 to make progress",
        ));
    }

    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Ok(Vec::new());
    }
    if chars.len() <= max_width {
        return Ok(vec![WrappedLine::kept(&chars)]);
    }

    let mut lines = Vec::new();
    let mut start = 0usize;

    while chars.len() - start > max_width {
        let window = &chars[start..start + max_width];

        let (line_end, resume_at, dropped) = match find_break(window, breaks) {
            Some((idx, BreakMode::Inclusive)) => (start + idx + 1, start + idx + 1, None),
            Some((idx, BreakMode::Exclusive)) => (start + idx, start + idx + 1, Some(window[idx])),
            None => (start + max_width, start + max_width, None),
        };

        lines.push(WrappedLine {
            text: chars[start..line_end].iter().collect(),
            dropped,
        });
        start = resume_at;
    }

    lines.push(WrappedLine::kept(&chars[start..]));
    debug_assert_eq!(rejoin(&lines), text);
    Ok(lines)
}

/// Finds the break point inside `window`.
///
/// Rules are tried in priority order; the first rule with any match wins and
/// its rightmost occurrence is chosen.
fn find_break(window: &[char], breaks: &[BreakRule]) -> Option<(usize, BreakMode)> {
    breaks.iter().find_map(|rule| {
        window
            .iter()
            .rposition(|&c| c == rule.ch)
            .filter(|&idx| idx > 0)
            .map(|idx| (idx, rule.mode))
    })
}

/// Rebuilds the wrapped text, restoring separators dropped by exclusive breaks.
pub fn rejoin(lines: &[WrappedLine]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line.text);
        if let Some(sep) = line.dropped {
            out.push(sep);
        }
    }
    out
}

/// Convenience for callers that only need the visible rows.
pub fn wrap_to_strings(
    text: &str,
    max_width: usize,
    breaks: &[BreakRule],
) -> Result<Vec<String>, LayoutError> {
    Ok(wrap(text, max_width, breaks)?
        .into_iter()
        .map(|line| line.text)
        .collect())
}
