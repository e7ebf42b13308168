//! Customer entity, address value object, events and handlers.

mod address;
mod entity;
mod events;
mod handlers;

pub use address::Address;
pub use entity::Customer;
pub use events::{CustomerAddressChangedData, CustomerCreatedData};
pub use handlers::{LogWhenCustomerAddressIsChangedHandler, LogWhenCustomerIsCreatedHandler};
