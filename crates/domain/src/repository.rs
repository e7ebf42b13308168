//! Persistence boundary for entities.

use async_trait::async_trait;
use common::EntityId;

use crate::checkout::Order;
use crate::customer::Customer;
use crate::error::RepositoryError;
use crate::product::Product;

/// Result type for repository operations.
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// CRUD access to one kind of entity.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Send + Sync,
{
    /// Persists a new entity. Fails with `AlreadyExists` if the id is taken.
    async fn create(&self, entity: &T) -> RepositoryResult<()>;

    /// Overwrites an existing entity. Fails with `NotFound` if absent.
    async fn update(&self, entity: &T) -> RepositoryResult<()>;

    /// Loads an entity by id. Fails with `NotFound` if absent.
    async fn find(&self, id: &EntityId) -> RepositoryResult<T>;

    /// Loads every entity, in insertion order.
    async fn find_all(&self) -> RepositoryResult<Vec<T>>;
}

#[async_trait]
pub trait CustomerRepository: Repository<Customer> {
    /// Adds `points` to the stored reward balance in a single atomic step
    /// and returns the new balance. The balance saturates at `u32::MAX`.
    /// Fails with `NotFound` if the customer is absent.
    async fn credit_reward_points(&self, id: &EntityId, points: u32) -> RepositoryResult<u32>;
}

pub trait ProductRepository: Repository<Product> {}

pub trait OrderRepository: Repository<Order> {}
