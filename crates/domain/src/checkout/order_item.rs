use common::EntityId;
use serde::Serialize;

use crate::error::ValidationError;
use crate::value_objects::Money;

/// A line of an order: a product at a unit price and a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    id: EntityId,
    name: String,
    price: Money,
    product_id: EntityId,
    quantity: u32,
    total: Money,
}

impl OrderItem {
    /// Creates an order item. Price and quantity must be strictly positive
    /// and their product must fit in a `Money`.
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        price: Money,
        product_id: impl Into<EntityId>,
        quantity: u32,
    ) -> Result<Self, ValidationError> {
        let mut item = Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
            total: Money::zero(),
        };
        item.validate()?;
        item.total = line_total(item.price, item.quantity)?;
        Ok(item)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_blank() {
            return Err(ValidationError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.product_id.is_blank() {
            return Err(ValidationError::ProductIdRequired);
        }
        if !self.price.is_positive() {
            return Err(ValidationError::InvalidPrice { price: self.price });
        }
        if self.quantity == 0 {
            return Err(ValidationError::InvalidQuantity {
                quantity: self.quantity,
            });
        }
        Ok(())
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn product_id(&self) -> &EntityId {
        &self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price times quantity.
    pub fn total(&self) -> Money {
        self.total
    }

    pub(super) fn set_quantity(&mut self, quantity: u32) -> Result<(), ValidationError> {
        if quantity == 0 {
            return Err(ValidationError::InvalidQuantity { quantity });
        }
        self.total = line_total(self.price, quantity)?;
        self.quantity = quantity;
        Ok(())
    }
}

fn line_total(price: Money, quantity: u32) -> Result<Money, ValidationError> {
    price
        .checked_multiply(quantity)
        .ok_or(ValidationError::AmountOverflow)
}
