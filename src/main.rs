// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route-Fuel API Server
//!
//! Plans routes through the HERE routing API and records the estimated
//! fuel consumption of each one.

use route_fuel::{
    config::Config,
    db::ReportStore,
    services::{HereClient, RouteCalculator},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Route-Fuel API");

    // Connect to Postgres and apply migrations
    let store = ReportStore::connect(&config.database_url, config.db_max_connections).await?;

    // Initialize routing provider client
    let here = HereClient::new(
        config.here_base_url.clone(),
        config.here_api_key.clone(),
        config.provider_timeout,
    )?;
    tracing::info!(
        base_url = %config.here_base_url,
        timeout_secs = config.provider_timeout.as_secs(),
        "Routing provider client initialized"
    );

    let route_calculator =
        RouteCalculator::new(here, store.clone(), config.swap_response_labels);

    if !config.require_auth {
        tracing::warn!("REQUIRE_AUTH is off; route and report endpoints are public");
    }

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        route_calculator,
    });

    // Build router
    let app = route_fuel::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("route_fuel=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
