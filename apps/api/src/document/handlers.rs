//! Axum route handlers for the Document API.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::document::{assemble, DocumentLayout, DocumentVariant};
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/documents/:variant
///
/// Returns the page-by-page layout of the `full` or `one-page` résumé.
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(variant): Path<String>,
) -> Result<Json<DocumentLayout>, AppError> {
    let variant: DocumentVariant = variant.parse().map_err(AppError::NotFound)?;

    let layout = assemble(
        variant,
        state.store.as_ref(),
        &state.special_set,
        &state.config.layout,
    )?;

    Ok(Json(layout))
}
