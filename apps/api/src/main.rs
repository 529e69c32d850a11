mod config;
mod content;
mod errors;
mod layout;
mod routes;
mod site;
mod state;
mod stats;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::load_filler;
use crate::routes::build_router;
use crate::site::Site;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting code rain API v{}", env!("CARGO_PKG_VERSION"));

    // Static inputs: stats snapshot (stale-on-error) and filler stream
    let stats = stats::load_or_default(&config.stats_path);
    let filler = load_filler(config.filler_path.as_deref());

    // Freeze the content model and precompute every breakpoint layout
    let site = Arc::new(Site::new(stats, filler));

    let state = AppState {
        config: config.clone(),
        site,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
