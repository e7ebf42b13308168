//! Application services: persist entities, then publish domain events.
//!
//! Publication happens only after the write succeeded. A handler failure
//! is returned to the caller even though the write has already committed.

mod catalog;
mod checkout;
mod customer;

pub use catalog::CatalogService;
pub use checkout::CheckoutService;
pub use customer::CustomerService;
