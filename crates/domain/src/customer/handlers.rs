//! Handlers reacting to customer events.

use crate::error::HandlerError;
use crate::event::{DomainEvent, Event};
use crate::handler::EventHandler;

/// Logs a line when a customer is created.
///
/// Several instances can be registered side by side; each one carries a
/// sequence number so its output can be told apart.
#[derive(Debug, Clone)]
pub struct LogWhenCustomerIsCreatedHandler {
    sequence: u8,
}

impl LogWhenCustomerIsCreatedHandler {
    pub fn new(sequence: u8) -> Self {
        Self { sequence }
    }

    pub fn sequence(&self) -> u8 {
        self.sequence
    }
}

impl EventHandler for LogWhenCustomerIsCreatedHandler {
    fn name(&self) -> &'static str {
        "LogWhenCustomerIsCreatedHandler"
    }

    fn handle(&self, event: &Event) -> Result<(), HandlerError> {
        let DomainEvent::CustomerCreated(data) = event.payload() else {
            return Err(HandlerError::new(
                self.name(),
                format!("unexpected event {}", event.event_type()),
            ));
        };

        tracing::info!(
            sequence = self.sequence,
            customer_id = %data.customer_id,
            "{} customer created handler notified",
            ordinal(self.sequence)
        );
        Ok(())
    }
}

fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Logs the new address when a customer's address changes.
#[derive(Debug, Clone, Default)]
pub struct LogWhenCustomerAddressIsChangedHandler;

impl EventHandler for LogWhenCustomerAddressIsChangedHandler {
    fn name(&self) -> &'static str {
        "LogWhenCustomerAddressIsChangedHandler"
    }

    fn handle(&self, event: &Event) -> Result<(), HandlerError> {
        let DomainEvent::CustomerAddressChanged(data) = event.payload() else {
            return Err(HandlerError::new(
                self.name(),
                format!("unexpected event {}", event.event_type()),
            ));
        };

        tracing::info!(
            customer_id = %data.customer_id,
            "Customer address changed: {}, {} to {}",
            data.customer_id,
            data.name,
            data.address
        );
        Ok(())
    }
}
