//! Application layer for the checkout system.
//!
//! Wires configuration, structured logging, repositories and the event
//! dispatcher into services that persist entities and publish events.

pub mod config;
pub mod error;
pub mod services;
pub mod telemetry;
pub mod wiring;

pub use config::{Config, LogFormat};
pub use error::AppError;
pub use services::{CatalogService, CheckoutService, CustomerService};
pub use wiring::{CheckoutSummary, default_dispatcher, run_sample_checkout};
