//! Registration HTTP handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::events::{parse_id, MessageResponse};
use super::http::AppState;
use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::models::{Registration, RegistrationOutcome};

/// POST /events/:id/register. 201 on a new registration, 200 if it already existed.
pub async fn register(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let event_id = parse_id(&id)?;
    let status = match state.registrations().register(event_id, user_id).await? {
        RegistrationOutcome::Created => StatusCode::CREATED,
        RegistrationOutcome::AlreadyRegistered => StatusCode::OK,
    };
    Ok((status, Json(MessageResponse { message: "Registered!" })))
}

/// DELETE /events/:id/register
pub async fn cancel(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let event_id = parse_id(&id)?;
    state.registrations().cancel(event_id, user_id).await?;
    Ok(Json(MessageResponse { message: "Cancelled!" }))
}

/// GET /events/:id/registrations
pub async fn list_registrations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Registration>>> {
    let event_id = parse_id(&id)?;
    Ok(Json(state.registrations().list_for_event(event_id).await?))
}
