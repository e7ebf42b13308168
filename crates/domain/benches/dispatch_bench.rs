use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use domain::{
    Customer, DomainEvent, Event, EventDispatcher, EventHandler, EventKind, HandlerError,
    LogWhenCustomerIsCreatedHandler,
};

struct NoopHandler;

impl EventHandler for NoopHandler {
    fn name(&self) -> &'static str {
        "NoopHandler"
    }

    fn handle(&self, _event: &Event) -> Result<(), HandlerError> {
        Ok(())
    }
}

fn bench_notify_fan_out(c: &mut Criterion) {
    let mut dispatcher = EventDispatcher::new();
    for _ in 0..16 {
        dispatcher.register(EventKind::CustomerCreated, Arc::new(NoopHandler));
    }
    let customer = Customer::new("bench", "Bench Customer").unwrap();
    let event = Event::new(DomainEvent::customer_created(&customer));

    c.bench_function("dispatcher/notify_16_handlers", |b| {
        b.iter(|| dispatcher.notify(&event).unwrap());
    });
}

fn bench_notify_without_handlers(c: &mut Criterion) {
    let dispatcher = EventDispatcher::new();
    let customer = Customer::new("bench", "Bench Customer").unwrap();
    let event = Event::new(DomainEvent::customer_created(&customer));

    c.bench_function("dispatcher/notify_no_handlers", |b| {
        b.iter(|| dispatcher.notify(&event).unwrap());
    });
}

fn bench_register_unregister(c: &mut Criterion) {
    c.bench_function("dispatcher/register_unregister", |b| {
        b.iter(|| {
            let mut dispatcher = EventDispatcher::new();
            let handler: Arc<dyn EventHandler> = Arc::new(LogWhenCustomerIsCreatedHandler::new(1));
            dispatcher.register(EventKind::CustomerCreated, Arc::clone(&handler));
            dispatcher.unregister(EventKind::CustomerCreated, &handler);
        });
    });
}

criterion_group!(
    benches,
    bench_notify_fan_out,
    bench_notify_without_handlers,
    bench_register_unregister
);
criterion_main!(benches);
