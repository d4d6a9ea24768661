//! In-process store with the same contract as the Postgres one.
//!
//! One lock guards all tables, so every operation is atomic with respect to
//! the others. Used for `STORAGE=memory` and in tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{EventRepository, RegistrationRepository, UserRepository};
use crate::error::{AppError, AppResult};
use crate::models::{
    Event, EventId, EventInput, Registration, RegistrationOutcome, UserId, UserRow,
};

#[derive(Default)]
struct Tables {
    users: BTreeMap<UserId, UserRow>,
    events: BTreeMap<EventId, Event>,
    registrations: BTreeMap<(EventId, UserId), Registration>,
    last_user_id: UserId,
    last_event_id: EventId,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn user_create(&self, email: &str, password_hash: &str) -> AppResult<UserRow> {
        let mut t = self.tables.write().await;
        if t.users.values().any(|u| u.email == email) {
            return Err(AppError::DuplicateEmail);
        }
        t.last_user_id += 1;
        let row = UserRow {
            id: t.last_user_id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        t.users.insert(row.id, row.clone());
        Ok(row)
    }

    async fn user_find_by_email(&self, email: &str) -> AppResult<Option<UserRow>> {
        let t = self.tables.read().await;
        Ok(t.users.values().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl EventRepository for MemoryStore {
    async fn event_create(&self, input: &EventInput, owner_id: UserId) -> AppResult<Event> {
        let mut t = self.tables.write().await;
        t.last_event_id += 1;
        let event = Event {
            id: t.last_event_id,
            name: input.name.clone(),
            description: input.description.clone(),
            location: input.location.clone(),
            date_time: input.date_time,
            owner_id,
            created_at: Utc::now(),
        };
        t.events.insert(event.id, event.clone());
        Ok(event)
    }

    async fn event_get(&self, id: EventId) -> AppResult<Option<Event>> {
        Ok(self.tables.read().await.events.get(&id).cloned())
    }

    async fn events_list(&self) -> AppResult<Vec<Event>> {
        Ok(self.tables.read().await.events.values().cloned().collect())
    }

    async fn event_update(&self, id: EventId, input: &EventInput) -> AppResult<Option<Event>> {
        let mut t = self.tables.write().await;
        let Some(event) = t.events.get_mut(&id) else {
            return Ok(None);
        };
        event.name = input.name.clone();
        event.description = input.description.clone();
        event.location = input.location.clone();
        event.date_time = input.date_time;
        Ok(Some(event.clone()))
    }

    async fn event_delete(&self, id: EventId) -> AppResult<bool> {
        let mut t = self.tables.write().await;
        if t.events.remove(&id).is_none() {
            return Ok(false);
        }
        t.registrations.retain(|(event_id, _), _| *event_id != id);
        Ok(true)
    }
}

#[async_trait]
impl RegistrationRepository for MemoryStore {
    async fn registration_add(
        &self,
        event_id: EventId,
        user_id: UserId,
    ) -> AppResult<RegistrationOutcome> {
        let mut t = self.tables.write().await;
        if !t.events.contains_key(&event_id) {
            return Err(AppError::NotFound("Event not found"));
        }
        if t.registrations.contains_key(&(event_id, user_id)) {
            return Ok(RegistrationOutcome::AlreadyRegistered);
        }
        t.registrations.insert(
            (event_id, user_id),
            Registration {
                event_id,
                user_id,
                registered_at: Utc::now(),
            },
        );
        Ok(RegistrationOutcome::Created)
    }

    async fn registration_remove(&self, event_id: EventId, user_id: UserId) -> AppResult<bool> {
        let mut t = self.tables.write().await;
        Ok(t.registrations.remove(&(event_id, user_id)).is_some())
    }

    async fn registrations_by_event(&self, event_id: EventId) -> AppResult<Vec<Registration>> {
        let t = self.tables.read().await;
        Ok(t.registrations
            .range((event_id, UserId::MIN)..=(event_id, UserId::MAX))
            .map(|(_, r)| r.clone())
            .collect())
    }
}
