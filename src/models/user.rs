// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! User model for storage and login.

use serde::Deserialize;
use validator::Validate;

/// Row in the `users` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    /// Unique login name
    pub username: String,
    /// Argon2id PHC string
    pub password_hash: String,
}

/// Body of `POST /login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 255))]
    pub username: String,
    /// Only checked when credential verification is enabled.
    #[serde(default)]
    pub password: String,
}
