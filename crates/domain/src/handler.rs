//! The event handler capability.

use crate::error::HandlerError;
use crate::event::Event;

/// A unit of behavior invoked synchronously when a matching event is
/// dispatched.
///
/// Handlers are shared as `Arc<dyn EventHandler>`; the dispatcher compares
/// them by pointer identity when unregistering.
pub trait EventHandler: Send + Sync {
    /// Returns the handler name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Handles a single event.
    fn handle(&self, event: &Event) -> Result<(), HandlerError>;
}
