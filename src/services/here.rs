// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HERE Routing API (v8) client.
//!
//! Handles:
//! - Route requests with summary and timing fields
//! - Normalizing the response to the first returned route
//! - Surfacing transport, status and parse failures as typed errors

use crate::models::TransportMode;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::time::Duration;

/// Fields requested from the provider for every route.
const RETURN_FIELDS: &str = "polyline,summary,actions,instructions";

/// Routing provider failures.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider unreachable: {0}")]
    Unreachable(String),

    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

/// HERE routing client.
#[derive(Clone)]
pub struct HereClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HereClient {
    /// Create a client whose every request is bounded by `timeout`.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: reqwest::Client::builder().timeout(timeout).build()?,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Request a route and return the first one the provider offers.
    pub async fn fetch_route(
        &self,
        origin: &str,
        destination: &str,
        transport_mode: TransportMode,
    ) -> Result<ProviderRoute, ProviderError> {
        tracing::debug!(origin, destination, mode = %transport_mode, "Requesting route");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("apiKey", self.api_key.as_str()),
                ("return", RETURN_FIELDS),
                ("transportMode", transport_mode.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Unreachable(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Unreachable(e.without_url().to_string()))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Routing provider rejected request");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        parse_route_response(&body)
    }
}

/// Parse a provider response body, keeping only the first route.
pub fn parse_route_response(body: &[u8]) -> Result<ProviderRoute, ProviderError> {
    let parsed: RouteResponse = serde_json::from_slice(body)
        .map_err(|e| ProviderError::MalformedResponse(format!("JSON parse error: {}", e)))?;

    let route = parsed
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::MalformedResponse("no routes returned".to_string()))?;

    if route.sections.is_empty() {
        return Err(ProviderError::MalformedResponse(
            "route has no sections".to_string(),
        ));
    }

    Ok(ProviderRoute {
        id: route.id,
        sections: route.sections,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RouteResponse {
    #[serde(default)]
    routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    #[serde(default)]
    id: String,
    #[serde(default)]
    sections: Vec<Section>,
}

/// A route with at least one section.
#[derive(Debug, Clone)]
pub struct ProviderRoute {
    pub id: String,
    sections: Vec<Section>,
}

impl ProviderRoute {
    /// The leg the fuel estimate is computed from. Later sections (ferries,
    /// transfers) are not aggregated.
    pub fn first_section(&self) -> &Section {
        // Construction guarantees at least one section.
        &self.sections[0]
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

/// One leg of a route.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub departure: Waypoint,
    pub arrival: Waypoint,
    pub summary: Summary,
    #[serde(default)]
    pub transport: Option<Transport>,
}

/// Departure or arrival point of a section.
#[derive(Debug, Clone, Deserialize)]
pub struct Waypoint {
    pub time: DateTime<FixedOffset>,
    pub place: Place,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    /// Location snapped to the road network
    pub location: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// "lat, lng" as stored in reports.
    pub fn to_label(self) -> String {
        format!("{}, {}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Seconds
    pub duration: i64,
    /// Meters
    pub length: f64,
    /// Seconds, ignoring traffic
    #[serde(default)]
    pub base_duration: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Transport {
    pub mode: String,
}
