//! Database layer: pool, repository traits and their Postgres / in-memory stores.

mod memory;
mod pool;
mod postgres;
mod repositories;

pub use memory::MemoryStore;
pub use pool::{create_pool, run_migrations, DbPool};
pub use postgres::PgStore;
pub use repositories::*;
