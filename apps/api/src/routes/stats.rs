use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::stats::SiteStats;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Where the snapshot was read from at startup.
    pub source: String,
    pub stats: Arc<SiteStats>,
}

/// GET /api/v1/stats
/// Returns the snapshot the content model was built from.
pub async fn handle_get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        source: state.config.stats_path.display().to_string(),
        stats: state.site.stats(),
    })
}
