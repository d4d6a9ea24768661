//! Event HTTP handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use validator::Validate;

use super::http::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::models::{Event, EventId, EventInput};

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub message: &'static str,
    pub event: Event,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Path ids must be positive integers.
pub(crate) fn parse_id(raw: &str) -> AppResult<EventId> {
    match raw.parse::<EventId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::Validation("Could not parse event id.".to_string())),
    }
}

/// GET /events
pub async fn list_events(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    Ok(Json(state.events().list_all().await?))
}

/// GET /events/:id
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Event>> {
    let id = parse_id(&id)?;
    Ok(Json(state.events().get(id).await?))
}

/// POST /events. The owner is always the authenticated caller.
pub async fn create_event(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: Result<Json<EventInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<EventResponse>)> {
    let Json(body) = payload?;
    body.validate()?;
    let event = state.events().create(&body, user_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(EventResponse {
            message: "Event created!",
            event,
        }),
    ))
}

/// PUT /events/:id
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EventInput>, JsonRejection>,
) -> AppResult<Json<EventResponse>> {
    let id = parse_id(&id)?;
    let Json(body) = payload?;
    body.validate()?;
    let event = state.events().update(id, &body).await?;
    Ok(Json(EventResponse {
        message: "Event updated successfully!",
        event,
    }))
}

/// DELETE /events/:id
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    state.events().delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Event deleted successfully!",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("9007199254740993").unwrap(), 9_007_199_254_740_993);
    }

    #[test]
    fn parse_id_rejects_everything_else() {
        for raw in ["0", "-3", "abc", "", "1.5", "99999999999999999999"] {
            assert!(matches!(parse_id(raw), Err(AppError::Validation(_))), "{raw}");
        }
    }
}
