//! Customer event payloads.

use common::EntityId;
use serde::{Deserialize, Serialize};

use super::{Address, Customer};

/// Data for the CustomerCreated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreatedData {
    pub customer_id: EntityId,
    pub name: String,
}

impl From<&Customer> for CustomerCreatedData {
    fn from(customer: &Customer) -> Self {
        Self {
            customer_id: customer.id().clone(),
            name: customer.name().to_string(),
        }
    }
}

/// Data for the CustomerAddressChanged event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAddressChangedData {
    pub customer_id: EntityId,
    pub name: String,

    /// The address the customer now has.
    pub address: Address,
}

impl CustomerAddressChangedData {
    pub fn new(customer: &Customer, address: Address) -> Self {
        Self {
            customer_id: customer.id().clone(),
            name: customer.name().to_string(),
            address,
        }
    }
}
