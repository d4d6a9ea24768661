//! Shared application state and the health probe.

use std::sync::Arc;

use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::auth::{CredentialService, TokenService};
use crate::db::{EventRepository, RegistrationRepository, UserRepository};
use crate::error::AppResult;
use crate::services::{EventService, RegistrationLedger};

/// Services shared by every handler. Built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub credentials: CredentialService,
    pub tokens: TokenService,
    pub events: EventService,
    pub registrations: RegistrationLedger,
}

impl AppState {
    /// Wire every service against one store that implements all repositories.
    pub fn from_store<S>(store: Arc<S>, tokens: TokenService) -> AppResult<Self>
    where
        S: UserRepository + EventRepository + RegistrationRepository + 'static,
    {
        Ok(Self {
            credentials: CredentialService::new(store.clone())?,
            tokens,
            events: EventService::new(store.clone()),
            registrations: RegistrationLedger::new(store.clone(), store),
        })
    }

    pub fn credentials(&self) -> &CredentialService {
        &self.credentials
    }
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }
    pub fn events(&self) -> &EventService {
        &self.events
    }
    pub fn registrations(&self) -> &RegistrationLedger {
        &self.registrations
    }
}

/// GET /health — liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "eventhub" })),
    )
}
