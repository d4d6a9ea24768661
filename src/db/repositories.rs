//! Repository traits: users, events, registrations.
//!
//! Implemented by [`super::PgStore`] and [`super::MemoryStore`]. Every write
//! is a single atomic statement (or transaction) so callers never need to
//! check-then-act.

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{
    Event, EventId, EventInput, Registration, RegistrationOutcome, UserId, UserRow,
};

#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Insert a user. Fails with `DuplicateEmail` on an exact email match.
    async fn user_create(&self, email: &str, password_hash: &str) -> AppResult<UserRow>;

    async fn user_find_by_email(&self, email: &str) -> AppResult<Option<UserRow>>;
}

#[async_trait]
pub trait EventRepository: Send + Sync + 'static {
    async fn event_create(&self, input: &EventInput, owner_id: UserId) -> AppResult<Event>;

    async fn event_get(&self, id: EventId) -> AppResult<Option<Event>>;

    async fn events_list(&self) -> AppResult<Vec<Event>>;

    /// Overwrite the editable fields. `None` if the event does not exist.
    async fn event_update(&self, id: EventId, input: &EventInput) -> AppResult<Option<Event>>;

    /// Delete the event together with its registrations. `false` if absent.
    async fn event_delete(&self, id: EventId) -> AppResult<bool>;
}

#[async_trait]
pub trait RegistrationRepository: Send + Sync + 'static {
    /// Insert-if-absent. Fails with `NotFound` if the event does not exist.
    async fn registration_add(
        &self,
        event_id: EventId,
        user_id: UserId,
    ) -> AppResult<RegistrationOutcome>;

    /// Remove the pair if present. Returns whether a row was removed.
    async fn registration_remove(&self, event_id: EventId, user_id: UserId) -> AppResult<bool>;

    async fn registrations_by_event(&self, event_id: EventId) -> AppResult<Vec<Registration>>;
}
