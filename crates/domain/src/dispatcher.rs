//! Synchronous event dispatcher.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::HandlerError;
use crate::event::{Event, EventKind};
use crate::handler::EventHandler;

/// Routes events to the handlers registered for their kind.
///
/// Handlers for a kind run in registration order on the calling thread.
/// The same handler may be registered more than once and is then invoked
/// once per registration. Dispatch is fail-fast: the first handler error
/// stops the remaining handlers and is returned to the caller.
///
/// Registration takes `&mut self`; once wired, share the dispatcher as
/// `Arc<EventDispatcher>` so that dispatch never races with registration.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<EventKind, Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `handler` to the handlers of `kind`.
    pub fn register(&mut self, kind: EventKind, handler: Arc<dyn EventHandler>) {
        tracing::debug!(event_type = %kind, handler = handler.name(), "registering handler");
        self.handlers.entry(kind).or_default().push(handler);
    }

    /// Removes the first registration of `handler` for `kind`.
    ///
    /// The kind keeps its (possibly empty) slot. Unknown kinds and
    /// handlers that are not registered are ignored.
    pub fn unregister(&mut self, kind: EventKind, handler: &Arc<dyn EventHandler>) {
        let Some(handlers) = self.handlers.get_mut(&kind) else {
            return;
        };
        if let Some(index) = handlers.iter().position(|h| Arc::ptr_eq(h, handler)) {
            handlers.remove(index);
            tracing::debug!(event_type = %kind, handler = handler.name(), "unregistered handler");
        }
    }

    /// Removes every registration for every kind.
    pub fn unregister_all(&mut self) {
        self.handlers.clear();
    }

    /// Returns the handlers registered for `kind` in dispatch order, or
    /// `None` if the kind has never been registered since the last
    /// [`unregister_all`](Self::unregister_all).
    pub fn handlers(&self, kind: EventKind) -> Option<&[Arc<dyn EventHandler>]> {
        self.handlers.get(&kind).map(Vec::as_slice)
    }

    /// Delivers `event` to every handler registered for its kind.
    #[tracing::instrument(skip(self, event), fields(event_type = %event.event_type(), event_id = %event.event_id()))]
    pub fn notify(&self, event: &Event) -> Result<(), HandlerError> {
        let Some(handlers) = self.handlers.get(&event.kind()) else {
            tracing::debug!("no handlers registered");
            return Ok(());
        };

        for handler in handlers {
            if let Err(error) = handler.handle(event) {
                tracing::warn!(handler = handler.name(), %error, "handler failed, aborting dispatch");
                metrics::counter!("domain_event_handler_failures", "event_type" => event.event_type())
                    .increment(1);
                return Err(error);
            }
        }

        metrics::counter!("domain_events_dispatched", "event_type" => event.event_type())
            .increment(1);
        Ok(())
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (kind, handlers) in &self.handlers {
            let names: Vec<_> = handlers.iter().map(|h| h.name()).collect();
            map.entry(kind, &names);
        }
        map.finish()
    }
}
