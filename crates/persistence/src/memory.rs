use std::sync::Arc;

use async_trait::async_trait;
use common::EntityId;
use domain::{
    Customer, CustomerRepository, Order, OrderRepository, Product, ProductRepository, Repository,
    RepositoryError, RepositoryResult,
};
use tokio::sync::RwLock;

/// Entities the in-memory repository can store.
pub trait Stored: Clone + Send + Sync + 'static {
    /// Entity name used in errors.
    const ENTITY: &'static str;

    fn stored_id(&self) -> &EntityId;
}

impl Stored for Customer {
    const ENTITY: &'static str = "Customer";

    fn stored_id(&self) -> &EntityId {
        self.id()
    }
}

impl Stored for Product {
    const ENTITY: &'static str = "Product";

    fn stored_id(&self) -> &EntityId {
        self.id()
    }
}

impl Stored for Order {
    const ENTITY: &'static str = "Order";

    fn stored_id(&self) -> &EntityId {
        self.id()
    }
}

/// In-memory repository implementation for testing.
///
/// Entities are kept in insertion order and cloned in and out, so callers
/// never share state with the store. Clones of the repository share the
/// same storage.
#[derive(Clone)]
pub struct InMemoryRepository<T> {
    rows: Arc<RwLock<Vec<T>>>,
}

pub type InMemoryCustomerRepository = InMemoryRepository<Customer>;
pub type InMemoryProductRepository = InMemoryRepository<Product>;
pub type InMemoryOrderRepository = InMemoryRepository<Order>;

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Stored> InMemoryRepository<T> {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entities.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Removes every stored entity.
    pub async fn clear(&self) {
        self.rows.write().await.clear();
    }
}

#[async_trait]
impl<T: Stored> Repository<T> for InMemoryRepository<T> {
    async fn create(&self, entity: &T) -> RepositoryResult<()> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|r| r.stored_id() == entity.stored_id()) {
            return Err(RepositoryError::already_exists(T::ENTITY, entity.stored_id()));
        }
        rows.push(entity.clone());
        Ok(())
    }

    async fn update(&self, entity: &T) -> RepositoryResult<()> {
        let mut rows = self.rows.write().await;
        let slot = rows
            .iter_mut()
            .find(|r| r.stored_id() == entity.stored_id())
            .ok_or_else(|| RepositoryError::not_found(T::ENTITY, entity.stored_id()))?;
        *slot = entity.clone();
        Ok(())
    }

    async fn find(&self, id: &EntityId) -> RepositoryResult<T> {
        let rows = self.rows.read().await;
        rows.iter()
            .find(|r| r.stored_id() == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(T::ENTITY, id))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<T>> {
        Ok(self.rows.read().await.clone())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryRepository<Customer> {
    async fn credit_reward_points(&self, id: &EntityId, points: u32) -> RepositoryResult<u32> {
        let mut rows = self.rows.write().await;
        let customer = rows
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or_else(|| RepositoryError::not_found(Customer::ENTITY, id))?;
        customer.add_reward_points(points);
        Ok(customer.reward_points())
    }
}
impl ProductRepository for InMemoryRepository<Product> {}
impl OrderRepository for InMemoryRepository<Order> {}
