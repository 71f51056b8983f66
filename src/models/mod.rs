// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod report;
pub mod route;
pub mod user;

pub use report::{NewRouteReport, ReportSummary, RouteReport};
pub use route::{RouteQuery, RouteResult, TransportMode};
pub use user::{LoginRequest, User};
