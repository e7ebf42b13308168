//! Dispatcher and sample checkout wiring shared by the binary and tests.

use std::sync::Arc;

use common::EntityId;
use domain::{
    Address, Customer, CustomerRepository, DomainError, EventDispatcher, EventKind,
    LogWhenCustomerAddressIsChangedHandler, LogWhenCustomerIsCreatedHandler, Money, OrderItem,
    OrderRepository, Product, ProductRepository, SendEmailWhenProductIsCreatedHandler,
};

use crate::services::{CatalogService, CheckoutService, CustomerService};

/// Builds a dispatcher with the standard handlers registered.
pub fn default_dispatcher() -> EventDispatcher {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(
        EventKind::ProductCreated,
        Arc::new(SendEmailWhenProductIsCreatedHandler),
    );
    dispatcher.register(
        EventKind::CustomerCreated,
        Arc::new(LogWhenCustomerIsCreatedHandler::new(1)),
    );
    dispatcher.register(
        EventKind::CustomerCreated,
        Arc::new(LogWhenCustomerIsCreatedHandler::new(2)),
    );
    dispatcher.register(
        EventKind::CustomerAddressChanged,
        Arc::new(LogWhenCustomerAddressIsChangedHandler),
    );
    dispatcher
}

/// Outcome of [`run_sample_checkout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub customer_id: EntityId,
    pub order_id: EntityId,
    pub order_total: Money,
    pub reward_points: u32,
    pub total_sales: Money,
}

/// Registers a customer and two products, then places an order for both.
pub async fn run_sample_checkout<C, P, O>(
    customers: C,
    products: P,
    orders: O,
    dispatcher: Arc<EventDispatcher>,
) -> Result<CheckoutSummary, DomainError>
where
    C: CustomerRepository + Clone,
    P: ProductRepository,
    O: OrderRepository,
{
    let customer_service = CustomerService::new(customers.clone(), Arc::clone(&dispatcher));
    let catalog = CatalogService::new(products, Arc::clone(&dispatcher));
    let checkout = CheckoutService::new(customers, orders);

    let customer = Customer::new(EntityId::generate(), "Customer 1")?;
    customer_service.create(&customer).await?;
    customer_service
        .change_address(customer.id(), Address::new("Street 1", 123, "13330-250", "São Paulo")?)
        .await?;
    customer_service.activate(customer.id()).await?;

    let keyboard = Product::new(EntityId::generate(), "Keyboard", Money::from_dollars(40))?;
    let mouse = Product::new(EntityId::generate(), "Mouse", Money::from_dollars(15))?;
    catalog
        .create(&keyboard, Some("Mechanical keyboard".to_string()))
        .await?;
    catalog.create(&mouse, None).await?;

    let items = vec![
        OrderItem::new(EntityId::generate(), keyboard.name(), keyboard.price(), keyboard.id().clone(), 1)?,
        OrderItem::new(EntityId::generate(), mouse.name(), mouse.price(), mouse.id().clone(), 2)?,
    ];
    let order = checkout.place_order(customer.id(), items).await?;
    let customer = customer_service.find(customer.id()).await?;

    Ok(CheckoutSummary {
        customer_id: customer.id().clone(),
        order_id: order.id().clone(),
        order_total: order.total(),
        reward_points: customer.reward_points(),
        total_sales: checkout.total_sales().await?,
    })
}
