use std::sync::Arc;

use crate::config::Config;
use crate::site::Site;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Frozen content model, filler and precomputed breakpoint layouts.
    pub site: Arc<Site>,
}
