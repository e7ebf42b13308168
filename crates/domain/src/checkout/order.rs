//! Order entity.

use common::EntityId;
use serde::Serialize;

use super::OrderItem;
use crate::error::ValidationError;
use crate::value_objects::Money;

/// An order placed by a customer.
///
/// An order always has at least one item and item ids are unique within it.
/// Its total is the sum of the item totals and is recomputed whenever the
/// items change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    id: EntityId,
    customer_id: EntityId,
    items: Vec<OrderItem>,
    total: Money,
}

impl Order {
    pub fn new(
        id: impl Into<EntityId>,
        customer_id: impl Into<EntityId>,
        items: Vec<OrderItem>,
    ) -> Result<Self, ValidationError> {
        let mut order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
            total: Money::zero(),
        };
        order.validate()?;
        order.total = total_of(&order.items)?;
        Ok(order)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_blank() {
            return Err(ValidationError::IdRequired);
        }
        if self.customer_id.is_blank() {
            return Err(ValidationError::CustomerIdRequired);
        }
        validate_items(&self.items)
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn customer_id(&self) -> &EntityId {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// Replaces all items of the order.
    pub fn change_items(&mut self, items: Vec<OrderItem>) -> Result<(), ValidationError> {
        validate_items(&items)?;
        self.total = total_of(&items)?;
        self.items = items;
        Ok(())
    }

    /// Sets the quantity of the item with id `item_id`.
    pub fn change_product_quantity(
        &mut self,
        item_id: &EntityId,
        quantity: u32,
    ) -> Result<(), ValidationError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == item_id)
            .ok_or_else(|| ValidationError::ItemNotFound {
                item_id: item_id.clone(),
            })?;

        let mut items = self.items.clone();
        items[index].set_quantity(quantity)?;
        self.total = total_of(&items)?;
        self.items = items;
        Ok(())
    }
}

fn validate_items(items: &[OrderItem]) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::ItemsRequired);
    }
    for (i, item) in items.iter().enumerate() {
        if items[..i].iter().any(|other| other.id() == item.id()) {
            return Err(ValidationError::DuplicateItem {
                item_id: item.id().clone(),
            });
        }
    }
    Ok(())
}

fn total_of(items: &[OrderItem]) -> Result<Money, ValidationError> {
    items
        .iter()
        .try_fold(Money::zero(), |acc, item| acc.checked_add(item.total()))
        .ok_or(ValidationError::AmountOverflow)
}
