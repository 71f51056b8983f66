// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route calculation and report routes.

use crate::error::{AppError, Result};
use crate::models::{ReportSummary, RouteQuery, RouteResult};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Routes optionally guarded by `require_auth` (applied in routes/mod.rs).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/calculateRoute", post(calculate_route))
        .route("/report", get(get_report))
}

// ─── Route Calculation ───────────────────────────────────────

async fn calculate_route(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<RouteQuery>, JsonRejection>,
) -> Result<Json<RouteResult>> {
    let Json(query) = payload?;
    query
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    tracing::info!(mode = %query.transport_mode, "Calculating route");

    let result = state.route_calculator.calculate(&query).await?;
    Ok(Json(result))
}

// ─── Reports ─────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ReportResponse {
    pub report: Vec<ReportSummary>,
}

async fn get_report(State(state): State<Arc<AppState>>) -> Result<Json<ReportResponse>> {
    let reports = state.store.list_all().await?;

    Ok(Json(ReportResponse {
        report: reports.into_iter().map(ReportSummary::from).collect(),
    }))
}
