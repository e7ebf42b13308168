//! Product event payloads.

use common::EntityId;
use serde::{Deserialize, Serialize};

use super::Product;
use crate::value_objects::Money;

/// Data for the ProductCreated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCreatedData {
    /// Set when the event comes from a persisted product.
    pub product_id: Option<EntityId>,
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
}

impl ProductCreatedData {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Money) -> Self {
        Self {
            product_id: None,
            name: name.into(),
            description: Some(description.into()),
            price,
        }
    }

    pub fn from_product(product: &Product, description: Option<String>) -> Self {
        Self {
            product_id: Some(product.id().clone()),
            name: product.name().to_string(),
            description,
            price: product.price(),
        }
    }
}
