//! Authentication: password hashing, tokens, credential store and the signup/login handlers.

mod handlers;
pub mod jwt;
pub mod password;
mod service;

pub use handlers::{login, signup};
pub use jwt::{Claims, TokenError, TokenService, TOKEN_TTL_SECS};
pub use password::PasswordHasher;
pub use service::CredentialService;
