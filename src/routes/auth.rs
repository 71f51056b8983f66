// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login route issuing session tokens.

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::middleware::auth::issue_token;
use crate::models::LoginRequest;
use crate::services::password::verify_password;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/login", post(login))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LoginResponse {
    pub token: String,
}

/// Issue a token for the given username.
///
/// The password is only checked when `verify_credentials` is enabled;
/// otherwise any username gets a token.
async fn login(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(request) = payload?;
    request
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if state.config.verify_credentials {
        check_credentials(&state, &request).await?;
    }

    let token = issue_token(
        &request.username,
        &state.config.jwt_signing_key,
        state.config.token_ttl,
    )?;

    tracing::info!(username = %request.username, "Issued token");

    Ok(Json(LoginResponse { token }))
}

async fn check_credentials(state: &AppState, request: &LoginRequest) -> Result<()> {
    let user = state
        .store
        .find_user(&request.username)
        .await
        .map_err(AppError::CredentialLookup)?
        .ok_or(AppError::Unauthorized)?;

    let valid = verify_password(&request.password, &user.password_hash).map_err(|e| {
        AppError::Internal(anyhow::anyhow!(
            "Stored hash for {} unusable: {}",
            user.username,
            e
        ))
    })?;

    if !valid {
        tracing::warn!(username = %request.username, "Rejected login");
        return Err(AppError::Unauthorized);
    }
    Ok(())
}
