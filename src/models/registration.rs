//! Event registrations: the many-to-many user/event relation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::{EventId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Registration {
    pub event_id: EventId,
    pub user_id: UserId,
    pub registered_at: DateTime<Utc>,
}

/// Result of a register call. Both outcomes are success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Created,
    AlreadyRegistered,
}
