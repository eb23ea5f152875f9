//! Marquee HTTP/JSON Gateway binary.

use std::time::Duration;

use clap::Parser;
use marquee_core::Catalog;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee_gateway::{create_router, session::cleanup_task, AppState, Args, GatewayConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let log_filter = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "marquee_gateway={0},marquee_core={0},tower_http=info",
                    log_filter
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config: GatewayConfig = args.into();
    if config.max_sessions == 0 {
        anyhow::bail!("max_sessions must be at least 1");
    }

    // A dataset that fails to load leaves the catalog empty rather than aborting
    let catalog = Catalog::load_or_empty(config.data_path.as_deref());
    tracing::info!(
        movies = catalog.len(),
        source = %config
            .data_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "bundled".to_string()),
        "Catalog ready"
    );

    let state = AppState::new(catalog, config.clone());

    // Start session cleanup background task
    let cleanup_manager = state.sessions.clone();
    tokio::spawn(async move {
        cleanup_task(cleanup_manager, Duration::from_secs(60)).await;
    });

    let app = create_router(state);

    let listener = TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("Marquee gateway listening on {}", config.base_url());

    axum::serve(listener, app).await?;

    Ok(())
}
