//! Integration tests for the application services over in-memory
//! repositories.

use std::sync::{Arc, Mutex};

use app::{CatalogService, CheckoutService, CustomerService};
use async_trait::async_trait;
use common::EntityId;
use domain::{
    Address, Customer, CustomerRepository, DomainError, DomainEvent, Event, EventDispatcher,
    EventHandler, EventKind, HandlerError, Money, OrderItem, Product, Repository, RepositoryError,
    RepositoryResult, ValidationError,
};
use persistence::{InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository};

/// Records every event it is handed.
#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<Event>>,
}

impl Recorder {
    fn kinds(&self) -> Vec<EventKind> {
        self.events.lock().unwrap().iter().map(Event::kind).collect()
    }

    fn last(&self) -> Option<Event> {
        self.events.lock().unwrap().last().cloned()
    }
}

impl EventHandler for Recorder {
    fn name(&self) -> &'static str {
        "Recorder"
    }

    fn handle(&self, event: &Event) -> Result<(), HandlerError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

struct Rejecting;

impl EventHandler for Rejecting {
    fn name(&self) -> &'static str {
        "Rejecting"
    }

    fn handle(&self, _event: &Event) -> Result<(), HandlerError> {
        Err(HandlerError::new(self.name(), "mail server unavailable"))
    }
}

/// Customer store that yields to the scheduler before every call, so
/// concurrent services interleave between reads and writes.
#[derive(Clone, Default)]
struct YieldingCustomers(InMemoryCustomerRepository);

#[async_trait]
impl Repository<Customer> for YieldingCustomers {
    async fn create(&self, entity: &Customer) -> RepositoryResult<()> {
        tokio::task::yield_now().await;
        self.0.create(entity).await
    }

    async fn update(&self, entity: &Customer) -> RepositoryResult<()> {
        tokio::task::yield_now().await;
        self.0.update(entity).await
    }

    async fn find(&self, id: &EntityId) -> RepositoryResult<Customer> {
        tokio::task::yield_now().await;
        self.0.find(id).await
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Customer>> {
        tokio::task::yield_now().await;
        self.0.find_all().await
    }
}

#[async_trait]
impl CustomerRepository for YieldingCustomers {
    async fn credit_reward_points(&self, id: &EntityId, points: u32) -> RepositoryResult<u32> {
        tokio::task::yield_now().await;
        self.0.credit_reward_points(id, points).await
    }
}

fn recording_dispatcher() -> (Arc<EventDispatcher>, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let mut dispatcher = EventDispatcher::new();
    for kind in EventKind::ALL {
        dispatcher.register(kind, recorder.clone());
    }
    (Arc::new(dispatcher), recorder)
}

fn address() -> Address {
    Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap()
}

mod customer_service {
    use super::*;

    #[tokio::test]
    async fn create_persists_then_publishes() {
        let (dispatcher, recorder) = recording_dispatcher();
        let repo = InMemoryCustomerRepository::new();
        let service = CustomerService::new(repo.clone(), dispatcher);

        let customer = Customer::new("123", "Customer 1").unwrap();
        service.create(&customer).await.unwrap();

        assert_eq!(repo.find(customer.id()).await.unwrap(), customer);
        assert_eq!(recorder.kinds(), vec![EventKind::CustomerCreated]);
    }

    #[tokio::test]
    async fn change_address_publishes_new_address() {
        let (dispatcher, recorder) = recording_dispatcher();
        let service = CustomerService::new(InMemoryCustomerRepository::new(), dispatcher);
        let customer = Customer::new("123", "Customer 1").unwrap();
        service.create(&customer).await.unwrap();

        let updated = service
            .change_address(customer.id(), address())
            .await
            .unwrap();

        assert_eq!(updated.address(), Some(&address()));
        let event = recorder.last().unwrap();
        match event.payload() {
            DomainEvent::CustomerAddressChanged(data) => {
                assert_eq!(data.customer_id, EntityId::new("123"));
                assert_eq!(data.address, address());
            }
            other => panic!("Expected CustomerAddressChanged, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn change_address_of_unknown_customer_publishes_nothing() {
        let (dispatcher, recorder) = recording_dispatcher();
        let service = CustomerService::new(InMemoryCustomerRepository::new(), dispatcher);

        let err = service
            .change_address(&EntityId::new("missing"), address())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::Repository(RepositoryError::NotFound { .. })
        ));
        assert!(recorder.kinds().is_empty());
    }

    #[tokio::test]
    async fn activate_requires_address() {
        let (dispatcher, _) = recording_dispatcher();
        let service = CustomerService::new(InMemoryCustomerRepository::new(), dispatcher);
        let customer = Customer::new("123", "Customer 1").unwrap();
        service.create(&customer).await.unwrap();

        let err = service.activate(customer.id()).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::AddressRequired)
        ));

        service.change_address(customer.id(), address()).await.unwrap();
        assert!(service.activate(customer.id()).await.unwrap().is_active());
    }

    #[tokio::test]
    async fn handler_failure_is_reported_after_the_write() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(EventKind::CustomerCreated, Arc::new(Rejecting));
        let repo = InMemoryCustomerRepository::new();
        let service = CustomerService::new(repo.clone(), Arc::new(dispatcher));

        let customer = Customer::new("123", "Customer 1").unwrap();
        let err = service.create(&customer).await.unwrap_err();

        assert!(matches!(err, DomainError::Handler(_)));
        assert!(repo.find(customer.id()).await.is_ok());
    }
}

mod catalog_service {
    use super::*;

    #[tokio::test]
    async fn create_publishes_product_created() {
        let (dispatcher, recorder) = recording_dispatcher();
        let service = CatalogService::new(InMemoryProductRepository::new(), dispatcher);
        let product = Product::new("p1", "Product 1", Money::from_dollars(10)).unwrap();

        service
            .create(&product, Some("Product 1 description".to_string()))
            .await
            .unwrap();

        let event = recorder.last().unwrap();
        match event.payload() {
            DomainEvent::ProductCreated(data) => {
                assert_eq!(data.product_id, Some(EntityId::new("p1")));
                assert_eq!(data.name, "Product 1");
                assert_eq!(data.description.as_deref(), Some("Product 1 description"));
                assert_eq!(data.price, Money::from_dollars(10));
            }
            other => panic!("Expected ProductCreated, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn increase_prices_updates_every_product() {
        let (dispatcher, _) = recording_dispatcher();
        let repo = InMemoryProductRepository::new();
        let service = CatalogService::new(repo.clone(), dispatcher);
        service
            .create(&Product::new("p1", "Product 1", Money::from_dollars(10)).unwrap(), None)
            .await
            .unwrap();
        service
            .create(&Product::new("p2", "Product 2", Money::from_dollars(20)).unwrap(), None)
            .await
            .unwrap();

        service.increase_prices(50).await.unwrap();

        let prices: Vec<_> = service
            .list()
            .await
            .unwrap()
            .iter()
            .map(Product::price)
            .collect();
        assert_eq!(prices, vec![Money::from_dollars(15), Money::from_dollars(30)]);
    }
}

mod checkout_service {
    use super::*;

    #[tokio::test]
    async fn place_order_stores_order_and_reward_points() {
        let customers = InMemoryCustomerRepository::new();
        let orders = InMemoryOrderRepository::new();
        customers
            .create(&Customer::new("c1", "Customer 1").unwrap())
            .await
            .unwrap();
        let service = CheckoutService::new(customers.clone(), orders.clone());

        let items = vec![
            OrderItem::new("i1", "Item 1", Money::from_dollars(100), "p1", 2).unwrap(),
            OrderItem::new("i2", "Item 2", Money::from_dollars(50), "p2", 1).unwrap(),
        ];
        let order = service
            .place_order(&EntityId::new("c1"), items)
            .await
            .unwrap();

        assert_eq!(order.total(), Money::from_dollars(250));
        assert_eq!(service.find(order.id()).await.unwrap(), order);
        assert_eq!(
            customers
                .find(&EntityId::new("c1"))
                .await
                .unwrap()
                .reward_points(),
            125
        );
        assert_eq!(service.total_sales().await.unwrap(), Money::from_dollars(250));
    }

    #[tokio::test]
    async fn concurrent_orders_credit_every_reward() {
        let customers = YieldingCustomers::default();
        let orders = InMemoryOrderRepository::new();
        customers
            .create(&Customer::new("c1", "Customer 1").unwrap())
            .await
            .unwrap();
        let service = CheckoutService::new(customers.clone(), orders.clone());
        let customer_id = EntityId::new("c1");
        let items = |id: &str| {
            vec![OrderItem::new(id, "Item", Money::from_dollars(100), "p1", 1).unwrap()]
        };

        let (first, second) = tokio::join!(
            service.place_order(&customer_id, items("i1")),
            service.place_order(&customer_id, items("i2")),
        );
        first.unwrap();
        second.unwrap();

        assert_eq!(orders.len().await, 2);
        assert_eq!(customers.find(&customer_id).await.unwrap().reward_points(), 100);
    }

    #[tokio::test]
    async fn place_order_for_unknown_customer_stores_nothing() {
        let orders = InMemoryOrderRepository::new();
        let service = CheckoutService::new(InMemoryCustomerRepository::new(), orders.clone());
        let items = vec![OrderItem::new("i1", "Item", Money::from_dollars(10), "p1", 1).unwrap()];

        let err = service
            .place_order(&EntityId::new("missing"), items)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::Repository(RepositoryError::NotFound { .. })
        ));
        assert!(orders.is_empty().await);
    }

    #[tokio::test]
    async fn place_order_without_items_stores_nothing() {
        let customers = InMemoryCustomerRepository::new();
        let orders = InMemoryOrderRepository::new();
        customers
            .create(&Customer::new("c1", "Customer 1").unwrap())
            .await
            .unwrap();
        let service = CheckoutService::new(customers, orders.clone());

        let err = service
            .place_order(&EntityId::new("c1"), vec![])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::ItemsRequired)
        ));
        assert!(orders.is_empty().await);
    }
}

#[tokio::test]
async fn sample_checkout_runs_end_to_end() {
    let summary = app::run_sample_checkout(
        InMemoryCustomerRepository::new(),
        InMemoryProductRepository::new(),
        InMemoryOrderRepository::new(),
        Arc::new(app::default_dispatcher()),
    )
    .await
    .unwrap();

    assert_eq!(summary.order_total, Money::from_dollars(70));
    assert_eq!(summary.reward_points, 35);
    assert_eq!(summary.total_sales, Money::from_dollars(70));
}
