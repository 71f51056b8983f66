// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Persisted route reports and their API projection.

use chrono::{DateTime, Utc};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Row in the `route_reports` table. Never mutated once written.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct RouteReport {
    pub id: i64,
    /// "lat, lng" of the provider's resolved departure place
    pub origin: String,
    /// "lat, lng" of the provider's resolved arrival place
    pub destination: String,
    pub transport_mode: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub distance_meters: f64,
    pub fuel_used: f64,
    pub created_at: DateTime<Utc>,
}

/// A report not yet written; the store assigns `id` and fills in
/// `created_at` when it is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRouteReport {
    pub origin: String,
    pub destination: String,
    pub transport_mode: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub distance_meters: f64,
    pub fuel_used: f64,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewRouteReport {
    /// Attach an id, stamping `created_at` with `now` if unset.
    pub fn into_report(self, id: i64, now: DateTime<Utc>) -> RouteReport {
        RouteReport {
            id,
            origin: self.origin,
            destination: self.destination,
            transport_mode: self.transport_mode,
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
            distance_meters: self.distance_meters,
            fuel_used: self.fuel_used,
            created_at: self.created_at.unwrap_or(now),
        }
    }
}

/// One entry of `GET /report`.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ReportSummary {
    pub origin: String,
    pub destination: String,
    #[serde(rename = "transportMode")]
    pub transport_mode: String,
    pub distance: f64,
    pub fuel_used: f64,
    pub created_at: DateTime<Utc>,
}

impl From<RouteReport> for ReportSummary {
    fn from(report: RouteReport) -> Self {
        Self {
            origin: report.origin,
            destination: report.destination,
            transport_mode: report.transport_mode,
            distance: report.distance_meters,
            fuel_used: report.fuel_used,
            created_at: report.created_at,
        }
    }
}
