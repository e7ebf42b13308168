use common::EntityId;
use domain::{
    CustomerRepository, DomainError, Money, Order, OrderItem, OrderRepository, OrderService,
};

/// Order placement on behalf of stored customers.
pub struct CheckoutService<C: CustomerRepository, O: OrderRepository> {
    customers: C,
    orders: O,
}

impl<C: CustomerRepository, O: OrderRepository> CheckoutService<C, O> {
    pub fn new(customers: C, orders: O) -> Self {
        Self { customers, orders }
    }

    /// Places an order for the customer, stores it, then credits the
    /// customer's reward points.
    ///
    /// The credit is a single atomic increment in the customer store, so
    /// concurrent checkouts for the same customer all count. The order and
    /// the credit are separate writes: if the credit fails the order stays
    /// stored and the error is returned.
    #[tracing::instrument(skip(self, items), fields(items = items.len()))]
    pub async fn place_order(
        &self,
        customer_id: &EntityId,
        items: Vec<OrderItem>,
    ) -> Result<Order, DomainError> {
        let mut customer = self.customers.find(customer_id).await?;
        let order = OrderService::place_order(&mut customer, items)?;

        self.orders.create(&order).await?;
        let reward_points = self
            .customers
            .credit_reward_points(customer.id(), OrderService::reward_points(&order))
            .await
            .inspect_err(|error| {
                tracing::error!(order_id = %order.id(), %error, "order stored but reward credit failed");
            })?;

        metrics::counter!("orders_placed").increment(1);
        tracing::info!(
            order_id = %order.id(),
            total = %order.total(),
            reward_points,
            "order placed"
        );
        Ok(order)
    }

    pub async fn find(&self, order_id: &EntityId) -> Result<Order, DomainError> {
        Ok(self.orders.find(order_id).await?)
    }

    /// Sums the totals of every stored order.
    pub async fn total_sales(&self) -> Result<Money, DomainError> {
        let orders = self.orders.find_all().await?;
        Ok(OrderService::total(&orders))
    }
}
