// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route report storage with typed operations.
//!
//! Provides high-level operations for:
//! - Route reports (append-only, listed in insertion order)
//! - Users (lookup for credential checks)
//!
//! Backed by Postgres in production. An in-memory backend serves tests and
//! local runs without a database, and an offline backend fails every call.

use crate::db::tables;
use crate::models::{NewRouteReport, RouteReport, User};
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Column list for `route_reports` queries.
const REPORT_COLUMNS: &str = "\
    id, origin, destination, transport_mode, departure_time, arrival_time, \
    distance_meters, fuel_used, created_at";

/// Storage errors, split by direction so callers can report them apart.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to connect to database: {0}")]
    Connect(String),

    #[error("Write failed: {0}")]
    WriteFailure(String),

    #[error("Read failed: {0}")]
    ReadFailure(String),
}

/// Report and user store. Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct ReportStore {
    backend: Backend,
}

#[derive(Clone)]
enum Backend {
    Postgres(PgPool),
    Memory(Arc<MemoryBackend>),
    Offline,
}

#[derive(Default)]
struct MemoryBackend {
    reports: DashMap<i64, RouteReport>,
    users: DashMap<String, User>,
    next_id: AtomicI64,
}

impl MemoryBackend {
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl ReportStore {
    /// Connect to Postgres and apply pending migrations.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| StoreError::Connect(e.to_string()))?;

        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(|e| StoreError::Connect(format!("Migration failed: {}", e)))?;

        tracing::info!(max_connections, "Connected to Postgres, schema up to date");

        Ok(Self {
            backend: Backend::Postgres(pool),
        })
    }

    /// Create an empty in-memory store.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Arc::new(MemoryBackend::default())),
        }
    }

    /// Create a store with no backing database (offline mode).
    ///
    /// All operations will return an error if called.
    pub fn offline() -> Self {
        Self {
            backend: Backend::Offline,
        }
    }

    // ─── Report Operations ───────────────────────────────────────

    /// Persist a report, returning it with its assigned id and timestamp.
    pub async fn save(&self, report: NewRouteReport) -> Result<RouteReport, StoreError> {
        match &self.backend {
            Backend::Postgres(pool) => {
                let query = format!(
                    "INSERT INTO {} (origin, destination, transport_mode, departure_time, \
                     arrival_time, distance_meters, fuel_used, created_at) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, NOW())) \
                     RETURNING {REPORT_COLUMNS}",
                    tables::ROUTE_REPORTS
                );
                sqlx::query_as::<_, RouteReport>(&query)
                    .bind(&report.origin)
                    .bind(&report.destination)
                    .bind(&report.transport_mode)
                    .bind(report.departure_time)
                    .bind(report.arrival_time)
                    .bind(report.distance_meters)
                    .bind(report.fuel_used)
                    .bind(report.created_at)
                    .fetch_one(pool)
                    .await
                    .map_err(|e| StoreError::WriteFailure(e.to_string()))
            }
            Backend::Memory(mem) => {
                let saved = report.into_report(mem.next_id(), Utc::now());
                mem.reports.insert(saved.id, saved.clone());
                Ok(saved)
            }
            Backend::Offline => Err(StoreError::WriteFailure(offline_message())),
        }
    }

    /// List every persisted report in insertion order.
    pub async fn list_all(&self) -> Result<Vec<RouteReport>, StoreError> {
        match &self.backend {
            Backend::Postgres(pool) => {
                let query = format!(
                    "SELECT {REPORT_COLUMNS} FROM {} ORDER BY id ASC",
                    tables::ROUTE_REPORTS
                );
                sqlx::query_as::<_, RouteReport>(&query)
                    .fetch_all(pool)
                    .await
                    .map_err(|e| StoreError::ReadFailure(e.to_string()))
            }
            Backend::Memory(mem) => {
                let mut reports: Vec<RouteReport> =
                    mem.reports.iter().map(|entry| entry.value().clone()).collect();
                reports.sort_by_key(|r| r.id);
                Ok(reports)
            }
            Backend::Offline => Err(StoreError::ReadFailure(offline_message())),
        }
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Look up a user by username.
    pub async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        match &self.backend {
            Backend::Postgres(pool) => {
                let query = format!(
                    "SELECT id, username, password_hash FROM {} WHERE username = $1",
                    tables::USERS
                );
                sqlx::query_as::<_, User>(&query)
                    .bind(username)
                    .fetch_optional(pool)
                    .await
                    .map_err(|e| StoreError::ReadFailure(e.to_string()))
            }
            Backend::Memory(mem) => Ok(mem.users.get(username).map(|u| u.value().clone())),
            Backend::Offline => Err(StoreError::ReadFailure(offline_message())),
        }
    }

    /// Insert a user with an already-hashed password.
    pub async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        match &self.backend {
            Backend::Postgres(pool) => {
                let query = format!(
                    "INSERT INTO {} (username, password_hash) VALUES ($1, $2) \
                     RETURNING id, username, password_hash",
                    tables::USERS
                );
                sqlx::query_as::<_, User>(&query)
                    .bind(username)
                    .bind(password_hash)
                    .fetch_one(pool)
                    .await
                    .map_err(|e| StoreError::WriteFailure(e.to_string()))
            }
            Backend::Memory(mem) => match mem.users.entry(username.to_string()) {
                Entry::Occupied(_) => Err(StoreError::WriteFailure(format!(
                    "username {} already exists",
                    username
                ))),
                Entry::Vacant(slot) => {
                    let user = User {
                        id: mem.next_id(),
                        username: username.to_string(),
                        password_hash: password_hash.to_string(),
                    };
                    slot.insert(user.clone());
                    Ok(user)
                }
            },
            Backend::Offline => Err(StoreError::WriteFailure(offline_message())),
        }
    }
}

fn offline_message() -> String {
    "Database not connected (offline mode)".to_string()
}
