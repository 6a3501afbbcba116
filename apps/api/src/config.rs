use std::str::FromStr;

use anyhow::{Context, Result};

use crate::document::{FontPolicy, LayoutSettings};

/// Application configuration loaded from environment variables.
/// Every variable is optional; a value that is present but unparsable fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub layout: LayoutSettings,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = LayoutSettings::default();

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            layout: LayoutSettings {
                fonts: FontPolicy {
                    default_font: lookup("DEFAULT_FONT").unwrap_or(defaults.fonts.default_font),
                    fallback_font: lookup("FALLBACK_FONT").unwrap_or(defaults.fonts.fallback_font),
                },
                url_line_width: parse_or(&lookup, "URL_LINE_WIDTH", defaults.url_line_width)?,
                certification_line_width: parse_or(
                    &lookup,
                    "CERTIFICATION_LINE_WIDTH",
                    defaults.certification_line_width,
                )?,
                first_page_projects: parse_or(
                    &lookup,
                    "FIRST_PAGE_PROJECTS",
                    defaults.first_page_projects,
                )?,
                projects_per_page: parse_or(
                    &lookup,
                    "PROJECTS_PER_PAGE",
                    defaults.projects_per_page,
                )?,
                one_page_achievements: parse_or(
                    &lookup,
                    "ONE_PAGE_ACHIEVEMENTS",
                    defaults.one_page_achievements,
                )?,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
