// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Route request/response shapes and transport modes.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Vehicle category used both to pick a fuel constant and to query the
/// routing provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Car,
    Truck,
    Taxi,
    Bus,
    PrivateBus,
}

impl TransportMode {
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Car,
        TransportMode::Truck,
        TransportMode::Taxi,
        TransportMode::Bus,
        TransportMode::PrivateBus,
    ];

    /// Wire name, as accepted by the API and the routing provider.
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Truck => "truck",
            TransportMode::Taxi => "taxi",
            TransportMode::Bus => "bus",
            TransportMode::PrivateBus => "privateBus",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known transport mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode: {0}")]
pub struct UnknownTransportMode(pub String);

impl FromStr for TransportMode {
    type Err = UnknownTransportMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransportMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownTransportMode(s.to_string()))
    }
}

/// Body of `POST /calculateRoute`.
///
/// `transport_mode` stays a plain string so that an unknown mode can be
/// reported as such rather than as a malformed body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RouteQuery {
    /// "lat,lng" or a provider place token
    #[validate(length(min = 1))]
    pub origin: String,
    #[validate(length(min = 1))]
    pub destination: String,
    #[serde(rename = "transportMode")]
    pub transport_mode: String,
}

/// Response of `POST /calculateRoute`.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RouteResult {
    pub origin: String,
    pub destination: String,
    pub arrival_time: DateTime<FixedOffset>,
    pub departure_time: DateTime<FixedOffset>,
    /// Meters
    pub distance: f64,
    pub fuel_used: f64,
}
