//! Domain error types.

use common::EntityId;
use thiserror::Error;

use crate::value_objects::Money;

/// Errors raised when an entity or value object would be constructed or
/// mutated into an invalid state. The invalid value is never produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Id is required")]
    IdRequired,

    #[error("Name is required")]
    NameRequired,

    #[error("CustomerId is required")]
    CustomerIdRequired,

    #[error("ProductId is required")]
    ProductIdRequired,

    #[error("Items are required")]
    ItemsRequired,

    #[error("Quantity must be greater than zero (got {quantity})")]
    InvalidQuantity { quantity: u32 },

    #[error("Price must be greater than zero (got {price})")]
    InvalidPrice { price: Money },

    #[error("Address is mandatory to activate a customer")]
    AddressRequired,

    #[error("{field} is required")]
    AddressFieldRequired { field: &'static str },

    #[error("Item not found: {item_id}")]
    ItemNotFound { item_id: EntityId },

    #[error("Item {item_id} appears more than once")]
    DuplicateItem { item_id: EntityId },

    #[error("Amount is too large")]
    AmountOverflow,
}

/// Error returned by an event handler that could not process an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Handler {handler} failed: {message}")]
pub struct HandlerError {
    pub handler: &'static str,
    pub message: String,
}

impl HandlerError {
    pub fn new(handler: &'static str, message: impl Into<String>) -> Self {
        Self {
            handler,
            message: message.into(),
        }
    }
}

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row exists for the requested id.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: EntityId },

    /// A row with the same id already exists.
    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: &'static str, id: EntityId },

    /// A stored row no longer satisfies the entity's validation rules.
    #[error("Stored data is invalid: {0}")]
    Corrupt(#[from] ValidationError),

    /// The storage backend failed.
    #[error("Storage backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: &EntityId) -> Self {
        RepositoryError::NotFound {
            entity,
            id: id.clone(),
        }
    }

    pub fn already_exists(entity: &'static str, id: &EntityId) -> Self {
        RepositoryError::AlreadyExists {
            entity,
            id: id.clone(),
        }
    }

    /// Returns true if this is a `NotFound` error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Event handling error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
