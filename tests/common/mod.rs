// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{extract::Query, http::StatusCode, routing::get, Router};
use route_fuel::config::Config;
use route_fuel::db::ReportStore;
use route_fuel::routes::create_router;
use route_fuel::services::{HereClient, RouteCalculator};
use route_fuel::AppState;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Routing provider stand-in served on an ephemeral local port.
#[allow(dead_code)]
pub struct StubProvider {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<HashMap<String, String>>>>,
}

#[allow(dead_code)]
impl StubProvider {
    /// Number of requests the stub has received.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Query parameters of the most recent request.
    pub fn last_query(&self) -> Option<HashMap<String, String>> {
        self.last_query.lock().unwrap().clone()
    }
}

/// Start a stub provider that answers every request with `status` and `body`.
#[allow(dead_code)]
pub async fn spawn_provider(status: StatusCode, body: String) -> StubProvider {
    spawn_provider_with_delay(status, body, Duration::ZERO).await
}

/// Like `spawn_provider`, but each answer is held back for `delay`.
#[allow(dead_code)]
pub async fn spawn_provider_with_delay(
    status: StatusCode,
    body: String,
    delay: Duration,
) -> StubProvider {
    let hits = Arc::new(AtomicUsize::new(0));
    let last_query = Arc::new(Mutex::new(None));

    let handler_hits = hits.clone();
    let handler_query = last_query.clone();
    let app = Router::new().route(
        "/v8/routes",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let hits = handler_hits.clone();
            let last_query = handler_query.clone();
            let body = body.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                *last_query.lock().unwrap() = Some(params);
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                (status, [("content-type", "application/json")], body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubProvider {
        base_url: format!("http://{}/v8/routes", addr),
        hits,
        last_query,
    }
}

/// A HERE v8 response with a single one-section route.
#[allow(dead_code)]
pub fn route_body(length: f64, departure: (f64, f64), arrival: (f64, f64), mode: &str) -> String {
    serde_json::json!({
        "routes": [{
            "id": "0a4d3b7c",
            "sections": [{
                "id": "s0",
                "type": "vehicle",
                "departure": {
                    "time": "2024-05-01T09:00:00+02:00",
                    "place": {"type": "place", "location": {"lat": departure.0, "lng": departure.1}}
                },
                "arrival": {
                    "time": "2024-05-01T09:42:00+02:00",
                    "place": {"type": "place", "location": {"lat": arrival.0, "lng": arrival.1}}
                },
                "summary": {"duration": 2520, "length": length, "baseDuration": 2400},
                "polyline": "BFoz5xJ67i1B1B7PzIhaxL7Y",
                "transport": {"mode": mode}
            }]
        }]
    })
    .to_string()
}

/// Create a test app backed by an in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(provider_base_url: &str) -> (Router, Arc<AppState>) {
    create_test_app_with(provider_base_url, |_| {})
}

/// Like `create_test_app`, with a hook to adjust the configuration.
#[allow(dead_code)]
pub fn create_test_app_with(
    provider_base_url: &str,
    configure: impl FnOnce(&mut Config),
) -> (Router, Arc<AppState>) {
    let mut config = Config::test_default();
    config.here_base_url = provider_base_url.to_string();
    configure(&mut config);

    build_app(config, ReportStore::in_memory())
}

/// Assemble the router around an explicit store.
#[allow(dead_code)]
pub fn build_app(config: Config, store: ReportStore) -> (Router, Arc<AppState>) {
    let here = HereClient::new(
        config.here_base_url.clone(),
        config.here_api_key.clone(),
        config.provider_timeout,
    )
    .expect("Failed to build HTTP client");
    let route_calculator = RouteCalculator::new(here, store.clone(), config.swap_response_labels);

    let state = Arc::new(AppState {
        config,
        store,
        route_calculator,
    });

    (create_router(state.clone()), state)
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
