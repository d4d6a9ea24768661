//! Event model and the request payload used to create or replace one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use super::{EventId, UserId};

/// A stored event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub date_time: DateTime<Utc>,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Client-editable event fields for `POST /events` and `PUT /events/:id`.
///
/// Owner and id are not part of the payload; unknown fields such as a
/// client-supplied `owner_id` are ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EventInput {
    #[validate(length(max = 255), custom(function = "non_blank"))]
    pub name: String,
    #[validate(custom(function = "non_blank"))]
    pub description: String,
    #[validate(length(max = 255), custom(function = "non_blank"))]
    pub location: String,
    #[serde(alias = "when", alias = "dateTime")]
    pub date_time: DateTime<Utc>,
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}
