//! Business logic: event store and registration ledger.

pub mod events;
pub mod registrations;

pub use events::EventService;
pub use registrations::RegistrationLedger;
