//! HTTP middleware: the auth gate for mutation routes.

pub mod auth;

pub use auth::{require_auth, AuthUser};
