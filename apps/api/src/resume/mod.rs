// Résumé content store: the ordered project list and the profile data.
// Content is immutable for the lifetime of the process.

pub mod data;
pub mod models;

use std::collections::HashMap;

use crate::document::DocumentVariant;
use crate::errors::AppError;
use crate::resume::models::{Profile, Project};

/// Read-only source of résumé content. Swappable so tests can supply fixtures.
pub trait ResumeStore: Send + Sync {
    fn profile(&self) -> &Profile;

    fn project(&self, key: &str) -> Option<&Project>;

    /// Project keys enabled for `variant`, in display order.
    fn enabled_projects(&self, variant: DocumentVariant) -> &[String];

    /// Resolves the enabled projects of `variant`, failing on unknown keys.
    fn projects_for(&self, variant: DocumentVariant) -> Result<Vec<Project>, AppError> {
        self.enabled_projects(variant)
            .iter()
            .map(|key| {
                self.project(key)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound(format!("Project '{key}' not found")))
            })
            .collect()
    }
}

/// The store backed by the compiled-in résumé data.
pub struct StaticResumeStore {
    profile: Profile,
    projects: HashMap<String, Project>,
    all: Vec<String>,
    one_page: Vec<String>,
}

impl StaticResumeStore {
    pub fn new() -> Self {
        Self::from_parts(
            data::profile(),
            data::projects(),
            data::ENABLED_PROJECTS_ALL,
            data::ENABLED_PROJECTS_ONE_PAGE,
        )
    }

    pub fn from_parts(
        profile: Profile,
        projects: Vec<Project>,
        all: &[&str],
        one_page: &[&str],
    ) -> Self {
        Self {
            profile,
            projects: projects.into_iter().map(|p| (p.key.clone(), p)).collect(),
            all: all.iter().map(|k| k.to_string()).collect(),
            one_page: one_page.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl Default for StaticResumeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeStore for StaticResumeStore {
    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn project(&self, key: &str) -> Option<&Project> {
        self.projects.get(key)
    }

    fn enabled_projects(&self, variant: DocumentVariant) -> &[String] {
        match variant {
            DocumentVariant::Full => &self.all,
            DocumentVariant::OnePage => &self.one_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_store_resolves_all_enabled_projects() {
        let store = StaticResumeStore::new();
        let full = store.projects_for(DocumentVariant::Full).unwrap();
        assert_eq!(full.len(), 11);
        assert_eq!(full[0].key, "mek");
        assert_eq!(full[10].key, "vast");

        let one_page = store.projects_for(DocumentVariant::OnePage).unwrap();
        let keys: Vec<&str> = one_page.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["now", "insite", "woz"]);
    }

    #[test]
    fn test_unknown_key_is_not_found() {
        let store = StaticResumeStore::from_parts(
            data::profile(),
            data::projects(),
            &["mek", "missing"],
            &[],
        );
        let err = store.projects_for(DocumentVariant::Full).unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m.contains("missing")));
    }

    #[test]
    fn test_project_keys_are_unique() {
        let projects = data::projects();
        let store = StaticResumeStore::new();
        assert_eq!(store.projects.len(), projects.len());
    }

    #[test]
    fn test_period_format() {
        let store = StaticResumeStore::new();
        assert_eq!(store.project("mek").unwrap().period(), "Jan 2025 - Present");
    }
}
