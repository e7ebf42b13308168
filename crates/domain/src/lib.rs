//! Domain layer for the checkout system.
//!
//! This crate provides:
//! - Customer, product and order entities with their validation rules
//! - Domain events and the synchronous `EventDispatcher`
//! - Event handlers reacting to customer and product events
//! - Repository traits implemented by the persistence layer

pub mod checkout;
pub mod customer;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod handler;
pub mod product;
pub mod repository;
pub mod value_objects;

pub use common::EntityId;
pub use checkout::{Order, OrderItem, OrderService};
pub use customer::{
    Address, Customer, CustomerAddressChangedData, CustomerCreatedData,
    LogWhenCustomerAddressIsChangedHandler, LogWhenCustomerIsCreatedHandler,
};
pub use dispatcher::EventDispatcher;
pub use error::{DomainError, HandlerError, RepositoryError, ValidationError};
pub use event::{DomainEvent, Event, EventKind, UnknownEventType};
pub use handler::EventHandler;
pub use product::{Product, ProductCreatedData, ProductService, SendEmailWhenProductIsCreatedHandler};
pub use repository::{
    CustomerRepository, OrderRepository, ProductRepository, Repository, RepositoryResult,
};
pub use value_objects::Money;
