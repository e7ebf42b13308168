//! Repository implementations for the checkout domain.
//!
//! - [`postgres`]: `sqlx`-backed repositories over a shared `PgPool`
//! - [`memory`]: in-memory repositories with the same contract, for tests

pub mod error;
pub mod memory;
pub mod postgres;

pub use error::{PersistenceError, Result};
pub use memory::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
    InMemoryRepository,
};
pub use postgres::{
    PgCustomerRepository, PgOrderRepository, PgProductRepository, connect, run_migrations,
};
