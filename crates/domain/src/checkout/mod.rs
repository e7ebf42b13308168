//! Orders and order items.

mod order;
mod order_item;
mod service;

pub use order::Order;
pub use order_item::OrderItem;
pub use service::OrderService;
