// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod fuel;
pub mod here;
pub mod password;
pub mod route;

pub use here::{HereClient, ProviderError, ProviderRoute};
pub use route::RouteCalculator;
