mod app;
mod config;
mod editor;
mod errors;
mod handlers;
mod middleware;
mod models;
mod services;
mod views;

use anyhow::Context;
use crate::{
    config::Config,
    services::{loader_from_config, Store},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize basic tracing subscriber
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Load the initial state; nothing is persisted after startup
    let seed = loader_from_config(&config.dashboard)
        .load()
        .context("Failed to load seed data")?;
    seed.validate().context("Invalid seed data")?;
    tracing::info!(
        "Seeded store with {} projects and {} activities",
        seed.projects.len(),
        seed.activities.len()
    );
    let store = Store::new(seed);

    let address = format!("{}:{}", config.server.host, config.server.port);
    let app = app::build_router(store, config);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind server to {}", address))?;
    tracing::info!("Freelance dashboard listening on http://{}", address);

    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}
