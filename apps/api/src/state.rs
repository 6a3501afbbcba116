use std::sync::Arc;

use crate::config::Config;
use crate::layout::SpecialSet;
use crate::resume::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable content store. Default: StaticResumeStore.
    pub store: Arc<dyn ResumeStore>,
    /// Characters rendered with the fallback font. Built once at startup.
    pub special_set: Arc<SpecialSet>,
}
