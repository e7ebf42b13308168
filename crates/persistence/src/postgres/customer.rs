use async_trait::async_trait;
use common::EntityId;
use domain::{Address, Customer, CustomerRepository, Repository, RepositoryResult};
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::error::{PersistenceError, Result, to_u32};

const ENTITY: &str = "Customer";

/// PostgreSQL-backed customer repository.
#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_customer(row: PgRow) -> Result<Customer> {
        let street: Option<String> = row.try_get("street")?;
        let address = match street {
            Some(street) => {
                let number: i64 = row.try_get("number")?;
                let zip: Option<String> = row.try_get("zipcode")?;
                let city: Option<String> = row.try_get("city")?;
                Some(Address::new(
                    street,
                    to_u32("number", number)?,
                    zip.unwrap_or_default(),
                    city.unwrap_or_default(),
                )?)
            }
            None => None,
        };

        let reward_points: i64 = row.try_get("reward_points")?;
        let customer = Customer::restore(
            EntityId::new(row.try_get::<String, _>("id")?),
            row.try_get("name")?,
            address,
            row.try_get("active")?,
            to_u32("reward_points", reward_points)?,
        )?;
        Ok(customer)
    }

    async fn insert(&self, customer: &Customer) -> Result<()> {
        let address = customer.address();
        sqlx::query(
            r#"
            INSERT INTO customers (id, name, street, number, zipcode, city, active, reward_points)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(customer.id().as_str())
        .bind(customer.name())
        .bind(address.map(Address::street))
        .bind(address.map(|a| i64::from(a.number())))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(customer.is_active())
        .bind(i64::from(customer.reward_points()))
        .execute(&self.pool)
        .await
        .map_err(|e| PersistenceError::on_insert(e, ENTITY, customer.id()))?;

        Ok(())
    }

    async fn overwrite(&self, customer: &Customer) -> Result<()> {
        let address = customer.address();
        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = $2, street = $3, number = $4, zipcode = $5, city = $6,
                active = $7, reward_points = $8
            WHERE id = $1
            "#,
        )
        .bind(customer.id().as_str())
        .bind(customer.name())
        .bind(address.map(Address::street))
        .bind(address.map(|a| i64::from(a.number())))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(customer.is_active())
        .bind(i64::from(customer.reward_points()))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound {
                entity: ENTITY,
                id: customer.id().clone(),
            });
        }
        Ok(())
    }

    async fn increment_reward_points(&self, id: &EntityId, points: u32) -> Result<u32> {
        let row = sqlx::query(
            r#"
            UPDATE customers
            SET reward_points = LEAST(reward_points + $2, 4294967295)
            WHERE id = $1
            RETURNING reward_points
            "#,
        )
        .bind(id.as_str())
        .bind(i64::from(points))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| PersistenceError::NotFound {
            entity: ENTITY,
            id: id.clone(),
        })?;

        let balance: i64 = row.try_get("reward_points")?;
        to_u32("reward_points", balance)
    }

    async fn select(&self, id: &EntityId) -> Result<Customer> {
        let row = sqlx::query(
            r#"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| PersistenceError::NotFound {
            entity: ENTITY,
            id: id.clone(),
        })?;

        Self::row_to_customer(row)
    }

    async fn select_all(&self) -> Result<Vec<Customer>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_customer).collect()
    }
}

#[async_trait]
impl Repository<Customer> for PgCustomerRepository {
    #[tracing::instrument(skip(self, entity), fields(customer_id = %entity.id()))]
    async fn create(&self, entity: &Customer) -> RepositoryResult<()> {
        self.insert(entity).await?;
        metrics::counter!("repository_rows_written", "entity" => ENTITY).increment(1);
        Ok(())
    }

    #[tracing::instrument(skip(self, entity), fields(customer_id = %entity.id()))]
    async fn update(&self, entity: &Customer) -> RepositoryResult<()> {
        self.overwrite(entity).await?;
        metrics::counter!("repository_rows_written", "entity" => ENTITY).increment(1);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self, id: &EntityId) -> RepositoryResult<Customer> {
        Ok(self.select(id).await?)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Customer>> {
        Ok(self.select_all().await?)
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    #[tracing::instrument(skip(self))]
    async fn credit_reward_points(&self, id: &EntityId, points: u32) -> RepositoryResult<u32> {
        let balance = self.increment_reward_points(id, points).await?;
        metrics::counter!("repository_rows_written", "entity" => ENTITY).increment(1);
        Ok(balance)
    }
}
