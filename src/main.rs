use anyhow::Context as _;
use axum::{response::Redirect, routing::{get, get_service}, Router};
use std::sync::Arc;
use tera::Tera;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

mod config;
mod data;
mod db;
mod features;
mod handlers;
mod schema;
mod utils;

use config::AppConfig;
use data::repositories::{DieselEntryRepository, EntryRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // log records are bridged into the tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Database configuration
    let pool = db::build_pool(&config.database_url, config.pool_size)
        .with_context(|| format!("Failed to create DB pool for {}", config.database_url))?;
    db::ensure_schema(&pool).context("Failed to prepare the entries table")?;
    let repo: Arc<dyn EntryRepository> = Arc::new(DieselEntryRepository::new(pool));

    // Templates configuration
    let templates = Tera::new(&config.templates_glob)
        .with_context(|| format!("Template parsing error in {}", config.templates_glob))?;
    let templates = Arc::new(templates);

    let app = Router::new()
        .route("/", get(|| async { Redirect::to(&utils::paths::entries_path()) }))
        .merge(handlers::entries::entries_router(repo, templates))
        .nest_service("/static", get_service(ServeDir::new(&config.static_dir)))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_address))?;

    log::info!("Server running on http://{}", config.bind_address);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
