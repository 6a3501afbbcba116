//! Axum route handlers exposing the layout engine directly.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::layout::segmenter::has_special;
use crate::layout::{
    paginate, segment, word_breaks, wrap, BreakRule, Page, PartitionPlan, Run, SpecialSet,
    WrappedLine,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SegmentRequest {
    pub text: String,
    /// Overrides the configured special set for this call.
    pub special_chars: Option<Vec<char>>,
}

#[derive(Debug, Serialize)]
pub struct SegmentResponse {
    pub runs: Vec<Run>,
}

#[derive(Debug, Deserialize)]
pub struct WrapRequest {
    pub text: String,
    pub max_width: usize,
    /// Defaults to splitting on spaces.
    pub breaks: Option<Vec<BreakRule>>,
}

#[derive(Debug, Serialize)]
pub struct WrapResponse {
    pub lines: Vec<WrappedLine>,
}

#[derive(Debug, Deserialize)]
pub struct PaginateRequest {
    pub entries: Vec<Value>,
    pub plan: PartitionPlan,
}

#[derive(Debug, Serialize)]
pub struct PaginateResponse {
    pub pages: Vec<Page<Value>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/layout/segment
pub async fn handle_segment(
    State(state): State<AppState>,
    Json(request): Json<SegmentRequest>,
) -> Result<Json<SegmentResponse>, AppError> {
    let custom = request.special_chars.map(SpecialSet::new);
    let special = custom.as_ref().unwrap_or(&*state.special_set);

    let runs = segment(&request.text, special);
    debug!(
        chars = request.text.chars().count(),
        has_special = has_special(&request.text, special),
        runs = runs.len(),
        "Segmented text"
    );
    Ok(Json(SegmentResponse { runs }))
}

/// POST /api/v1/layout/wrap
pub async fn handle_wrap(Json(request): Json<WrapRequest>) -> Result<Json<WrapResponse>, AppError> {
    let breaks = request.breaks.unwrap_or_else(|| word_breaks().to_vec());
    let lines = wrap(&request.text, request.max_width, &breaks)?;
    debug!(
        max_width = request.max_width,
        lines = lines.len(),
        widest = lines.iter().map(WrappedLine::width).max().unwrap_or(0),
        "Wrapped text"
    );
    Ok(Json(WrapResponse { lines }))
}

/// POST /api/v1/layout/paginate
pub async fn handle_paginate(
    Json(request): Json<PaginateRequest>,
) -> Result<Json<PaginateResponse>, AppError> {
    let pages = paginate(&request.entries, &request.plan)?;
    debug!(
        entries = request.entries.len(),
        pages = pages.len(),
        largest_page = pages.iter().map(Page::len).max().unwrap_or(0),
        "Paginated entries"
    );
    Ok(Json(PaginateResponse { pages }))
}
