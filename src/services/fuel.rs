// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fuel consumption model.

use crate::models::TransportMode;

/// Distance covered by one unit of the consumption constants (100 km).
pub const METERS_PER_CONSUMPTION_UNIT: f64 = 100_000.0;

impl TransportMode {
    /// Fuel consumed per 100 km (liters/100 km).
    pub fn fuel_modifier(self) -> f64 {
        match self {
            TransportMode::Car => 8.2,
            TransportMode::Truck => 13.2,
            TransportMode::Taxi => 7.8,
            TransportMode::Bus => 11.5,
            TransportMode::PrivateBus => 10.7,
        }
    }
}

/// Look up the consumption constant for a wire-format transport mode.
///
/// Returns `None` for unknown modes.
pub fn fuel_modifier(transport_mode: &str) -> Option<f64> {
    transport_mode
        .parse::<TransportMode>()
        .ok()
        .map(TransportMode::fuel_modifier)
}

/// Estimated fuel for a distance in meters.
pub fn fuel_used(distance_meters: f64, modifier: f64) -> f64 {
    (distance_meters / METERS_PER_CONSUMPTION_UNIT) * modifier
}
