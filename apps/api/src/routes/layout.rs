//! Axum route handlers for the Layout API consumed by the renderer.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::layout::cell::SectionAnchor;
use crate::layout::{resolve_breakpoint, BreakpointConfig, GridLayout};
use crate::state::AppState;

/// Widest grid served for an explicit column count.
pub const MAX_COLS: usize = 400;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ViewportQuery {
    /// Viewport width in CSS pixels.
    pub width: f64,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub breakpoint: BreakpointConfig,
    pub layout: Arc<GridLayout>,
}

#[derive(Debug, Serialize)]
pub struct AnchorResponse {
    pub anchor: SectionAnchor,
    pub cols: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/breakpoint?width=
pub async fn handle_get_breakpoint(Query(query): Query<ViewportQuery>) -> Json<BreakpointConfig> {
    Json(resolve_breakpoint(query.width))
}

/// GET /api/v1/layout?width=
///
/// Resolves the viewport to its breakpoint and returns that breakpoint's precomputed layout.
pub async fn handle_get_layout(
    State(state): State<AppState>,
    Query(query): Query<ViewportQuery>,
) -> Json<LayoutResponse> {
    let breakpoint = resolve_breakpoint(query.width);
    let layout = state.site.layout(breakpoint.cols);
    Json(LayoutResponse { breakpoint, layout })
}

/// GET /api/v1/layout/text?width=
///
/// The same layout as plain text, one grid row per line.
pub async fn handle_get_layout_text(
    State(state): State<AppState>,
    Query(query): Query<ViewportQuery>,
) -> String {
    let breakpoint = resolve_breakpoint(query.width);
    state.site.layout(breakpoint.cols).to_text()
}

/// GET /api/v1/layout/:cols
///
/// Layout for an explicit column count. Non-breakpoint widths are computed on a
/// blocking thread.
pub async fn handle_get_layout_for_cols(
    State(state): State<AppState>,
    Path(cols): Path<usize>,
) -> Result<Json<Arc<GridLayout>>, AppError> {
    if cols == 0 || cols > MAX_COLS {
        return Err(AppError::Validation(format!(
            "cols must be between 1 and {MAX_COLS}, got {cols}"
        )));
    }

    if let Some(layout) = state.site.cached_layout(cols) {
        return Ok(Json(layout));
    }

    let site = Arc::clone(&state.site);
    let layout = tokio::task::spawn_blocking(move || site.layout(cols))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed computing layout: {e}")))?;

    Ok(Json(layout))
}

/// GET /api/v1/anchors/:id?width=
///
/// Row a named section starts on at the viewport's breakpoint.
pub async fn handle_get_anchor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ViewportQuery>,
) -> Result<Json<AnchorResponse>, AppError> {
    let cols = resolve_breakpoint(query.width).cols;
    let layout = state.site.layout(cols);

    let anchor = layout
        .section_anchors
        .iter()
        .find(|a| a.id == id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("No section anchor '{id}'")))?;

    Ok(Json(AnchorResponse { anchor, cols }))
}
