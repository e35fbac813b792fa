//! Scoreboard Back binary entrypoint wiring configuration, the score store and the REST layer.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scoreboard_back::{
    config::AppConfig,
    dao::score_store::ScoreStore,
    routes,
    state::{AppState, SharedState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    let store = open_store(&config).await?;
    let addr = config.bind_addr();

    let app_state = AppState::new(store, config);
    // Build the HTTP router once the shared state is ready.
    let app = build_router(app_state);

    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

#[cfg(feature = "sqlite-store")]
async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn ScoreStore>> {
    use scoreboard_back::dao::score_store::sqlite::{SqliteConfig, SqliteScoreStore};

    let store = SqliteScoreStore::connect(SqliteConfig::new(config.database_file()))
        .await
        .with_context(|| {
            format!(
                "opening score database `{}`",
                config.database_file().display()
            )
        })?;
    info!(path = %store.path().display(), "using SQLite score store");
    Ok(Arc::new(store))
}

#[cfg(not(feature = "sqlite-store"))]
async fn open_store(_config: &AppConfig) -> anyhow::Result<Arc<dyn ScoreStore>> {
    use scoreboard_back::dao::score_store::memory::MemoryScoreStore;

    tracing::warn!("built without sqlite-store; scores are kept in memory only");
    Ok(Arc::new(MemoryScoreStore::new()))
}

/// Build the top-level router and attach cross-cutting middleware layers.
fn build_router(state: SharedState) -> Router<()> {
    routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
