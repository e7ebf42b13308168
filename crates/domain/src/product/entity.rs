//! Product entity.

use common::EntityId;
use serde::Serialize;

use crate::error::ValidationError;
use crate::value_objects::Money;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: EntityId,
    name: String,
    price: Money,
}

impl Product {
    /// Creates a product. The price must be strictly positive.
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        price: Money,
    ) -> Result<Self, ValidationError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_blank() {
            return Err(ValidationError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if !self.price.is_positive() {
            return Err(ValidationError::InvalidPrice { price: self.price });
        }
        Ok(())
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: Money) -> Result<(), ValidationError> {
        if !price.is_positive() {
            return Err(ValidationError::InvalidPrice { price });
        }
        self.price = price;
        Ok(())
    }
}
