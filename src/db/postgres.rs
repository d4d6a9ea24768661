//! PostgreSQL-backed repositories.

use async_trait::async_trait;

use super::{DbPool, EventRepository, RegistrationRepository, UserRepository};
use crate::error::{AppError, AppResult};
use crate::models::{
    Event, EventId, EventInput, Registration, RegistrationOutcome, UserId, UserRow,
};

const EVENT_COLUMNS: &str = "id, name, description, location, date_time, owner_id, created_at";

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}

// ---- Users ----

#[async_trait]
impl UserRepository for PgStore {
    async fn user_create(&self, email: &str, password_hash: &str) -> AppResult<UserRow> {
        sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::DuplicateEmail
            } else {
                AppError::Storage(e)
            }
        })
    }

    async fn user_find_by_email(&self, email: &str) -> AppResult<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}

// ---- Events ----

#[async_trait]
impl EventRepository for PgStore {
    async fn event_create(&self, input: &EventInput, owner_id: UserId) -> AppResult<Event> {
        let row = sqlx::query_as::<_, Event>(&format!(
            r#"
            INSERT INTO events (name, description, location, date_time, owner_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.location)
        .bind(input.date_time)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn event_get(&self, id: EventId) -> AppResult<Option<Event>> {
        let row = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn events_list(&self) -> AppResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn event_update(&self, id: EventId, input: &EventInput) -> AppResult<Option<Event>> {
        let row = sqlx::query_as::<_, Event>(&format!(
            r#"
            UPDATE events
               SET name = $2, description = $3, location = $4, date_time = $5
             WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.location)
        .bind(input.date_time)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn event_delete(&self, id: EventId) -> AppResult<bool> {
        // registrations.event_id is ON DELETE CASCADE
        let r = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(r.rows_affected() > 0)
    }
}

// ---- Registrations ----

#[async_trait]
impl RegistrationRepository for PgStore {
    async fn registration_add(
        &self,
        event_id: EventId,
        user_id: UserId,
    ) -> AppResult<RegistrationOutcome> {
        let r = sqlx::query(
            r#"
            INSERT INTO registrations (event_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (event_id, user_id) DO NOTHING
            "#,
        )
        .bind(event_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::NotFound("Event not found")
            } else {
                AppError::Storage(e)
            }
        })?;
        Ok(if r.rows_affected() == 0 {
            RegistrationOutcome::AlreadyRegistered
        } else {
            RegistrationOutcome::Created
        })
    }

    async fn registration_remove(&self, event_id: EventId, user_id: UserId) -> AppResult<bool> {
        let r = sqlx::query("DELETE FROM registrations WHERE event_id = $1 AND user_id = $2")
            .bind(event_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(r.rows_affected() > 0)
    }

    async fn registrations_by_event(&self, event_id: EventId) -> AppResult<Vec<Registration>> {
        let rows = sqlx::query_as::<_, Registration>(
            r#"
            SELECT event_id, user_id, registered_at
            FROM registrations
            WHERE event_id = $1
            ORDER BY registered_at, user_id
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
