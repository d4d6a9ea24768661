//! Auth HTTP handlers: signup, login.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::http::AppState;
use crate::models::{Credentials, UserId};

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: &'static str,
    pub user_id: UserId,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
}

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    let Json(body) = payload?;
    body.validate()?;
    let user_id = state.credentials().create_user(&body.email, &body.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created successfully.",
            user_id,
        }),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> AppResult<Json<LoginResponse>> {
    let Json(body) = payload?;
    body.validate()?;
    let user_id = state.credentials().authenticate(&body.email, &body.password).await?;
    let token = state
        .tokens()
        .issue(user_id)
        .map_err(|e| AppError::Internal(e.into()))?;
    info!(user_id, "user logged in");
    Ok(Json(LoginResponse {
        message: "Login successful!",
        token,
    }))
}
