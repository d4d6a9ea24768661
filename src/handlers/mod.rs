//! HTTP request handlers.

pub mod events;
pub mod http;
pub mod registrations;

pub use events::{create_event, delete_event, get_event, list_events, update_event};
pub use http::{health, AppState};
pub use registrations::{cancel, list_registrations, register};
