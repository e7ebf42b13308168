//! Customer entity.

use common::EntityId;
use serde::Serialize;

use super::Address;
use crate::error::ValidationError;

/// A customer who can place orders.
///
/// A customer starts inactive and can only be activated once an address
/// has been set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    id: EntityId,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u32,
}

impl Customer {
    /// Creates an inactive customer without an address.
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Result<Self, ValidationError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };
        customer.validate()?;
        Ok(customer)
    }

    /// Rebuilds a customer from stored state, re-running validation.
    pub fn restore(
        id: EntityId,
        name: String,
        address: Option<Address>,
        active: bool,
        reward_points: u32,
    ) -> Result<Self, ValidationError> {
        let customer = Self {
            id,
            name,
            address,
            active,
            reward_points,
        };
        customer.validate()?;
        if customer.active && customer.address.is_none() {
            return Err(ValidationError::AddressRequired);
        }
        Ok(customer)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_blank() {
            return Err(ValidationError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        Ok(())
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> u32 {
        self.reward_points
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Activates the customer. Requires an address.
    pub fn activate(&mut self) -> Result<(), ValidationError> {
        if self.address.is_none() {
            return Err(ValidationError::AddressRequired);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: u32) {
        self.reward_points = self.reward_points.saturating_add(points);
    }
}
