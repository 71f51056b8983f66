// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use crate::db::StoreError;
use crate::services::here::ProviderError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Invalid transport mode")]
    InvalidTransportMode,

    #[error("Routing provider error: {0}")]
    Upstream(#[from] ProviderError),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Credential lookup failed: {0}")]
    CredentialLookup(StoreError),

    #[error("Token signing failed: {0}")]
    TokenSigning(#[from] jsonwebtoken::errors::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthorized | AppError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Invalid request".to_string()),
            AppError::InvalidTransportMode => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "Routing provider error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to get route from routing provider".to_string(),
                )
            }
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Storage error");
                let message = match err {
                    StoreError::ReadFailure(_) => "Failed to fetch report",
                    _ => "Failed to save route request",
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            AppError::CredentialLookup(err) => {
                tracing::error!(error = %err, "Credential lookup error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to verify credentials".to_string(),
                )
            }
            AppError::TokenSigning(err) => {
                tracing::error!(error = %err, "Token signing error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate token".to_string(),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
