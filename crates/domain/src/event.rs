//! Domain events and their kinds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::customer::{Address, Customer, CustomerAddressChangedData, CustomerCreatedData};
use crate::product::ProductCreatedData;

/// The kind of a domain event. Handlers are registered per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    ProductCreated,
    CustomerCreated,
    CustomerAddressChanged,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [
        EventKind::ProductCreated,
        EventKind::CustomerCreated,
        EventKind::CustomerAddressChanged,
    ];

    /// Returns the canonical event type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::ProductCreated => "ProductCreatedEvent",
            EventKind::CustomerCreated => "CustomerCreatedEvent",
            EventKind::CustomerAddressChanged => "CustomerAddressChangedEvent",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an event type name that no [`EventKind`] has.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown event type: {0}")]
pub struct UnknownEventType(pub String);

impl std::str::FromStr for EventKind {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEventType(s.to_string()))
    }
}

/// Payload of a domain event, one variant per [`EventKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DomainEvent {
    ProductCreated(ProductCreatedData),
    CustomerCreated(CustomerCreatedData),
    CustomerAddressChanged(CustomerAddressChangedData),
}

impl DomainEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DomainEvent::ProductCreated(_) => EventKind::ProductCreated,
            DomainEvent::CustomerCreated(_) => EventKind::CustomerCreated,
            DomainEvent::CustomerAddressChanged(_) => EventKind::CustomerAddressChanged,
        }
    }

    pub fn product_created(data: ProductCreatedData) -> Self {
        DomainEvent::ProductCreated(data)
    }

    pub fn customer_created(customer: &Customer) -> Self {
        DomainEvent::CustomerCreated(customer.into())
    }

    pub fn customer_address_changed(customer: &Customer, address: Address) -> Self {
        DomainEvent::CustomerAddressChanged(CustomerAddressChangedData::new(customer, address))
    }
}

/// An immutable record of something that happened in the domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    event_id: Uuid,
    occurred_at: DateTime<Utc>,
    payload: DomainEvent,
}

impl Event {
    /// Creates an event stamped with the current time.
    pub fn new(payload: DomainEvent) -> Self {
        Self::at(payload, Utc::now())
    }

    /// Creates an event with an explicit timestamp.
    pub fn at(payload: DomainEvent, occurred_at: DateTime<Utc>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at,
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn payload(&self) -> &DomainEvent {
        &self.payload
    }

    pub fn kind(&self) -> EventKind {
        self.payload.kind()
    }

    /// Returns the canonical event type name.
    pub fn event_type(&self) -> &'static str {
        self.kind().as_str()
    }
}
