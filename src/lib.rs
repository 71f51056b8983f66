// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Route-Fuel: route planning with fuel consumption estimates
//!
//! This crate provides the backend API that plans routes through the HERE
//! routing service, estimates fuel use per vehicle type, and keeps a report
//! of every calculation.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::ReportStore;
use services::RouteCalculator;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: ReportStore,
    pub route_calculator: RouteCalculator,
}
