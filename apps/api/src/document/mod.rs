// Document assembly: turns résumé content into per-page layout instructions
// for the renderer, using the layout engine for runs, wrapped labels and pages.

pub mod assembler;
pub mod handlers;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::layout::{CharacterClass, Run};

pub use assembler::{assemble, DocumentLayout};

/// Which résumé document to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentVariant {
    /// Every enabled project, spread over as many pages as the plan needs.
    Full,
    /// A single page with the most relevant projects.
    OnePage,
}

impl FromStr for DocumentVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(DocumentVariant::Full),
            "one-page" => Ok(DocumentVariant::OnePage),
            other => Err(format!("Unknown document variant '{other}'")),
        }
    }
}

impl fmt::Display for DocumentVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentVariant::Full => f.write_str("full"),
            DocumentVariant::OnePage => f.write_str("one-page"),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font selection
// ────────────────────────────────────────────────────────────────────────────

/// Maps run classes to font families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPolicy {
    pub default_font: String,
    /// Used for characters the default font cannot draw.
    pub fallback_font: String,
}

impl FontPolicy {
    pub fn font_for(&self, class: CharacterClass) -> &str {
        match class {
            CharacterClass::Plain => &self.default_font,
            CharacterClass::Special => &self.fallback_font,
        }
    }

    pub fn style(&self, runs: Vec<Run>) -> Vec<StyledRun> {
        runs.into_iter()
            .map(|run| StyledRun {
                font: self.font_for(run.class).to_string(),
                text: run.text,
            })
            .collect()
    }
}

/// A run with its font already chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledRun {
    pub text: String,
    pub font: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Settings
// ────────────────────────────────────────────────────────────────────────────

/// Layout parameters for document assembly, loaded once from `Config`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSettings {
    pub fonts: FontPolicy,
    /// Max chars per row for blog contribution URLs.
    pub url_line_width: usize,
    /// Max chars per row for certification names.
    pub certification_line_width: usize,
    /// Projects on the first page of the full document.
    pub first_page_projects: usize,
    /// Projects on each following page of the full document.
    pub projects_per_page: usize,
    /// Achievements kept per project in the one-page document.
    pub one_page_achievements: usize,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            fonts: FontPolicy {
                default_font: "Lato".to_string(),
                fallback_font: "NotoSans".to_string(),
            },
            url_line_width: 30,
            certification_line_width: 28,
            first_page_projects: 3,
            projects_per_page: 8,
            one_page_achievements: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{segment, SpecialSet};

    #[test]
    fn test_variant_round_trips_through_path_form() {
        for variant in [DocumentVariant::Full, DocumentVariant::OnePage] {
            assert_eq!(variant.to_string().parse::<DocumentVariant>(), Ok(variant));
        }
        assert!("two-page".parse::<DocumentVariant>().is_err());
    }

    #[test]
    fn test_font_policy_uses_fallback_for_specials() {
        let policy = LayoutSettings::default().fonts;
        let styled = policy.style(segment("Iași", &SpecialSet::romanian()));
        let fonts: Vec<&str> = styled.iter().map(|r| r.font.as_str()).collect();
        assert_eq!(fonts, vec!["Lato", "NotoSans", "Lato"]);
    }
}
