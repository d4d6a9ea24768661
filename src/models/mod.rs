//! Data models for users, events and registrations.

pub mod event;
pub mod registration;
pub mod user;

pub use event::*;
pub use registration::*;
pub use user::*;

/// Store-assigned user identifier.
pub type UserId = i64;

/// Store-assigned event identifier.
pub type EventId = i64;
