//! Database layer (Postgres via sqlx).

pub mod reports;

pub use reports::{ReportStore, StoreError};

/// Table names as constants.
pub mod tables {
    pub const USERS: &str = "users";
    pub const ROUTE_REPORTS: &str = "route_reports";
}
