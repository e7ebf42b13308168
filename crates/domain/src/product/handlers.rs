//! Handlers reacting to product events.

use crate::error::HandlerError;
use crate::event::{DomainEvent, Event};
use crate::handler::EventHandler;

/// Notifies interested parties by email when a product is created.
///
/// Delivery is simulated with a log line.
#[derive(Debug, Clone, Default)]
pub struct SendEmailWhenProductIsCreatedHandler;

impl EventHandler for SendEmailWhenProductIsCreatedHandler {
    fn name(&self) -> &'static str {
        "SendEmailWhenProductIsCreatedHandler"
    }

    fn handle(&self, event: &Event) -> Result<(), HandlerError> {
        let DomainEvent::ProductCreated(data) = event.payload() else {
            return Err(HandlerError::new(
                self.name(),
                format!("unexpected event {}", event.event_type()),
            ));
        };

        tracing::info!(
            event_id = %event.event_id(),
            product = %data.name,
            price = %data.price,
            "Sending email to ..."
        );
        Ok(())
    }
}
