//! User account model.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

use super::UserId;

/// Stored user row. The hash never leaves the credential layer.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Body of both `POST /signup` and `POST /login`.
#[derive(Debug, Deserialize, Validate)]
pub struct Credentials {
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 1, max = 1024, message = "Password is required"))]
    pub password: String,
}
