//! Product entity, events, handlers and price operations.

mod entity;
mod events;
mod handlers;
mod service;

pub use entity::Product;
pub use events::ProductCreatedData;
pub use handlers::SendEmailWhenProductIsCreatedHandler;
pub use service::ProductService;
