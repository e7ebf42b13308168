//! Integration tests for event dispatch across the customer and product
//! domains, using the concrete handlers wrapped in call counters.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use domain::{
    Address, Customer, DomainEvent, Event, EventDispatcher, EventHandler, EventKind,
    HandlerError, LogWhenCustomerAddressIsChangedHandler, LogWhenCustomerIsCreatedHandler, Money,
    Order, OrderItem, ProductCreatedData, SendEmailWhenProductIsCreatedHandler, ValidationError,
};

/// Wraps a handler and counts how often it is invoked.
struct Counting<H> {
    inner: H,
    calls: AtomicUsize,
}

impl<H> Counting<H> {
    fn new(inner: H) -> Arc<Self> {
        Arc::new(Self {
            inner,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<H: EventHandler> EventHandler for Counting<H> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn handle(&self, event: &Event) -> Result<(), HandlerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.handle(event)
    }
}

mod product_events {
    use super::*;

    #[test]
    fn notify_product_created_handler() {
        let mut dispatcher = EventDispatcher::new();
        let handler = Counting::new(SendEmailWhenProductIsCreatedHandler);
        dispatcher.register(EventKind::ProductCreated, handler.clone());

        let event = Event::new(DomainEvent::product_created(ProductCreatedData::new(
            "Product 1",
            "Product 1 description",
            Money::from_dollars(10),
        )));
        dispatcher.notify(&event).unwrap();

        assert_eq!(handler.calls(), 1);
    }

    #[test]
    fn registration_by_event_type_name() {
        let mut dispatcher = EventDispatcher::new();
        let kind: EventKind = "ProductCreatedEvent".parse().unwrap();
        dispatcher.register(kind, Arc::new(SendEmailWhenProductIsCreatedHandler));

        assert_eq!(dispatcher.handlers(EventKind::ProductCreated).unwrap().len(), 1);
    }
}

mod customer_events {
    use super::*;

    #[test]
    fn notify_all_customer_event_handlers() {
        let mut dispatcher = EventDispatcher::new();

        let created_log1 = Counting::new(LogWhenCustomerIsCreatedHandler::new(1));
        let created_log2 = Counting::new(LogWhenCustomerIsCreatedHandler::new(2));
        let address_changed = Counting::new(LogWhenCustomerAddressIsChangedHandler);

        dispatcher.register(EventKind::CustomerCreated, created_log1.clone());
        dispatcher.register(EventKind::CustomerCreated, created_log2.clone());
        dispatcher.register(EventKind::CustomerAddressChanged, address_changed.clone());

        let created = dispatcher.handlers(EventKind::CustomerCreated).unwrap();
        assert_eq!(created.len(), 2);
        let address_handlers = dispatcher
            .handlers(EventKind::CustomerAddressChanged)
            .unwrap();
        assert_eq!(address_handlers.len(), 1);

        // Customer created
        let mut customer = Customer::new("123", "Customer 1").unwrap();
        customer.change_address(Address::new("Street 1", 123, "13330-250", "São Paulo").unwrap());
        dispatcher
            .notify(&Event::new(DomainEvent::customer_created(&customer)))
            .unwrap();

        assert_eq!(created_log1.calls(), 1);
        assert_eq!(created_log2.calls(), 1);
        assert_eq!(address_changed.calls(), 0);

        // Customer address changed
        let address = Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap();
        customer.change_address(address.clone());
        dispatcher
            .notify(&Event::new(DomainEvent::customer_address_changed(
                &customer, address,
            )))
            .unwrap();

        assert_eq!(address_changed.calls(), 1);
        assert_eq!(created_log1.calls(), 1);
    }

    #[test]
    fn mismatched_handler_fails_the_dispatch() {
        let mut dispatcher = EventDispatcher::new();
        let wrong = Counting::new(SendEmailWhenProductIsCreatedHandler);
        dispatcher.register(EventKind::CustomerCreated, wrong.clone());

        let customer = Customer::new("123", "Customer 1").unwrap();
        let err = dispatcher
            .notify(&Event::new(DomainEvent::customer_created(&customer)))
            .unwrap_err();

        assert_eq!(err.handler, "SendEmailWhenProductIsCreatedHandler");
        assert_eq!(wrong.calls(), 1);
    }
}

mod order_validation {
    use super::*;

    #[test]
    fn order_without_items_is_rejected() {
        let result = Order::new("o1", "c1", vec![]);
        assert_eq!(result.unwrap_err(), ValidationError::ItemsRequired);
    }

    #[test]
    fn order_item_with_zero_quantity_is_rejected() {
        let result = OrderItem::new("i1", "Item 1", Money::from_dollars(100), "p1", 0);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with("Quantity must be greater than zero")
        );
    }
}
