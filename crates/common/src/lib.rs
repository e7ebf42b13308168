//! Shared types for the checkout domain.

pub mod types;

pub use types::EntityId;
