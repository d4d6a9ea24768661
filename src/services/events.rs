//! Event store: create, read, replace and delete events.

use std::sync::Arc;

use tracing::info;

use crate::db::EventRepository;
use crate::error::{AppError, AppResult};
use crate::models::{Event, EventId, EventInput, UserId};

fn not_found() -> AppError {
    AppError::NotFound("Event not found")
}

#[derive(Clone)]
pub struct EventService {
    events: Arc<dyn EventRepository>,
}

impl EventService {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    /// Create an event owned by `owner_id`, which must come from the auth gate.
    pub async fn create(&self, input: &EventInput, owner_id: UserId) -> AppResult<Event> {
        let event = self.events.event_create(input, owner_id).await?;
        info!(event_id = event.id, owner_id, "event created");
        Ok(event)
    }

    pub async fn get(&self, id: EventId) -> AppResult<Event> {
        self.events.event_get(id).await?.ok_or_else(not_found)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Event>> {
        self.events.events_list().await
    }

    /// Overwrite name, description, location and time. Id and owner never change.
    pub async fn update(&self, id: EventId, input: &EventInput) -> AppResult<Event> {
        let event = self.events.event_update(id, input).await?.ok_or_else(not_found)?;
        info!(event_id = id, "event updated");
        Ok(event)
    }

    /// Permanently delete the event and its registrations.
    pub async fn delete(&self, id: EventId) -> AppResult<()> {
        if !self.events.event_delete(id).await? {
            return Err(not_found());
        }
        info!(event_id = id, "event deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use chrono::{TimeZone, Utc};

    fn input(name: &str) -> EventInput {
        EventInput {
            name: name.into(),
            description: "desc".into(),
            location: "loc".into(),
            date_time: Utc.with_ymd_and_hms(2026, 12, 24, 20, 0, 0).unwrap(),
        }
    }

    fn service() -> EventService {
        EventService::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn create_sets_owner() {
        let events = service();
        let e = events.create(&input("party"), 7).await.unwrap();
        assert_eq!(e.owner_id, 7);
        assert_eq!(events.get(e.id).await.unwrap(), e);
    }

    #[tokio::test]
    async fn missing_event_is_not_found() {
        let events = service();
        assert!(matches!(events.get(1).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            events.update(1, &input("x")).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(events.delete(1).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_returns_all() {
        let events = service();
        events.create(&input("a"), 1).await.unwrap();
        events.create(&input("b"), 2).await.unwrap();
        let names: Vec<String> = events
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"a".to_string()));
        assert!(names.contains(&"b".to_string()));
    }

    #[tokio::test]
    async fn delete_is_permanent() {
        let events = service();
        let e = events.create(&input("a"), 1).await.unwrap();
        events.delete(e.id).await.unwrap();
        assert!(matches!(events.get(e.id).await, Err(AppError::NotFound(_))));
    }
}
