//! Registration ledger: which users attend which events.

use std::sync::Arc;

use tracing::info;

use crate::db::{EventRepository, RegistrationRepository};
use crate::error::{AppError, AppResult};
use crate::models::{EventId, Registration, RegistrationOutcome, UserId};

#[derive(Clone)]
pub struct RegistrationLedger {
    registrations: Arc<dyn RegistrationRepository>,
    events: Arc<dyn EventRepository>,
}

impl RegistrationLedger {
    pub fn new(
        registrations: Arc<dyn RegistrationRepository>,
        events: Arc<dyn EventRepository>,
    ) -> Self {
        Self {
            registrations,
            events,
        }
    }

    /// Register `user_id` for the event. Registering twice is a no-op success.
    pub async fn register(
        &self,
        event_id: EventId,
        user_id: UserId,
    ) -> AppResult<RegistrationOutcome> {
        let outcome = self.registrations.registration_add(event_id, user_id).await?;
        info!(event_id, user_id, ?outcome, "registered for event");
        Ok(outcome)
    }

    /// Cancel a registration. Cancelling an absent pair succeeds.
    pub async fn cancel(&self, event_id: EventId, user_id: UserId) -> AppResult<()> {
        let removed = self
            .registrations
            .registration_remove(event_id, user_id)
            .await?;
        info!(event_id, user_id, removed, "registration cancelled");
        Ok(())
    }

    pub async fn list_for_event(&self, event_id: EventId) -> AppResult<Vec<Registration>> {
        if self.events.event_get(event_id).await?.is_none() {
            return Err(AppError::NotFound("Event not found"));
        }
        self.registrations.registrations_by_event(event_id).await
    }
}
