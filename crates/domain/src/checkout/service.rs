//! Order domain service.

use common::EntityId;

use super::{Order, OrderItem};
use crate::customer::Customer;
use crate::error::ValidationError;
use crate::value_objects::Money;

/// Stateless order operations spanning more than one entity.
pub struct OrderService;

impl OrderService {
    /// Places an order for `customer` and credits reward points equal to
    /// half the order total in whole currency units.
    #[tracing::instrument(skip(customer, items), fields(customer_id = %customer.id()))]
    pub fn place_order(
        customer: &mut Customer,
        items: Vec<OrderItem>,
    ) -> Result<Order, ValidationError> {
        let order = Order::new(EntityId::generate(), customer.id().clone(), items)?;

        customer.add_reward_points(Self::reward_points(&order));

        Ok(order)
    }

    /// Reward points earned by `order`: half its total in whole currency
    /// units.
    pub fn reward_points(order: &Order) -> u32 {
        u32::try_from(order.total().dollars() / 2).unwrap_or(u32::MAX)
    }

    /// Sums the totals of all orders.
    pub fn total(orders: &[Order]) -> Money {
        orders.iter().map(Order::total).sum()
    }
}
