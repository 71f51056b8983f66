// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route calculation service.
//!
//! Handles the core workflow:
//! 1. Resolve the transport mode to a fuel constant
//! 2. Fetch the route from the routing provider
//! 3. Derive the fuel estimate from the first section
//! 4. Store the report and shape the response

use crate::db::ReportStore;
use crate::error::{AppError, Result};
use crate::models::{NewRouteReport, RouteQuery, RouteResult, TransportMode};
use crate::services::fuel;
use crate::services::here::{HereClient, ProviderRoute};
use chrono::Utc;

/// Computes and records route reports.
#[derive(Clone)]
pub struct RouteCalculator {
    here: HereClient,
    store: ReportStore,
    swap_response_labels: bool,
}

impl RouteCalculator {
    pub fn new(here: HereClient, store: ReportStore, swap_response_labels: bool) -> Self {
        Self {
            here,
            store,
            swap_response_labels,
        }
    }

    /// Calculate a route, persist its report and return the response body.
    ///
    /// An unknown transport mode fails before any provider call, and nothing
    /// is written unless the provider call succeeded.
    pub async fn calculate(&self, query: &RouteQuery) -> Result<RouteResult> {
        let mode: TransportMode = query
            .transport_mode
            .parse()
            .map_err(|_| AppError::InvalidTransportMode)?;

        let route = self
            .here
            .fetch_route(&query.origin, &query.destination, mode)
            .await?;

        let section = route.first_section();
        tracing::debug!(
            route_id = %route.id,
            sections = route.sections().len(),
            section_mode = section.transport.as_ref().map(|t| t.mode.as_str()),
            duration = section.summary.duration,
            base_duration = section.summary.base_duration,
            "Route received"
        );

        let report = build_report(&route, mode);
        let saved = self.store.save(report).await?;

        tracing::info!(
            report_id = saved.id,
            mode = %mode,
            distance = saved.distance_meters,
            fuel_used = saved.fuel_used,
            "Route report saved"
        );

        let (origin, destination) = if self.swap_response_labels {
            (saved.destination.clone(), saved.origin.clone())
        } else {
            (saved.origin.clone(), saved.destination.clone())
        };

        Ok(RouteResult {
            origin,
            destination,
            arrival_time: section.arrival.time,
            departure_time: section.departure.time,
            distance: saved.distance_meters,
            fuel_used: saved.fuel_used,
        })
    }
}

/// Build the report for a route's first section.
///
/// The stored transport mode is the requested one, so that `fuel_used` always
/// follows from the row's own mode and distance.
pub fn build_report(route: &ProviderRoute, mode: TransportMode) -> NewRouteReport {
    let section = route.first_section();
    let distance_meters = section.summary.length;

    NewRouteReport {
        origin: section.departure.place.location.to_label(),
        destination: section.arrival.place.location.to_label(),
        transport_mode: mode.as_str().to_string(),
        departure_time: section.departure.time.with_timezone(&Utc),
        arrival_time: section.arrival.time.with_timezone(&Utc),
        distance_meters,
        fuel_used: fuel::fuel_used(distance_meters, mode.fuel_modifier()),
        created_at: None,
    }
}
