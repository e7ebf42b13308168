use async_trait::async_trait;
use common::EntityId;
use domain::{Money, Product, ProductRepository, Repository, RepositoryResult};
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::error::{PersistenceError, Result};

const ENTITY: &str = "Product";

/// PostgreSQL-backed product repository.
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_product(row: PgRow) -> Result<Product> {
        let product = Product::new(
            EntityId::new(row.try_get::<String, _>("id")?),
            row.try_get::<String, _>("name")?,
            Money::from_cents(row.try_get("price_cents")?),
        )?;
        Ok(product)
    }

    async fn insert(&self, product: &Product) -> Result<()> {
        sqlx::query("INSERT INTO products (id, name, price_cents) VALUES ($1, $2, $3)")
            .bind(product.id().as_str())
            .bind(product.name())
            .bind(product.price().cents())
            .execute(&self.pool)
            .await
            .map_err(|e| PersistenceError::on_insert(e, ENTITY, product.id()))?;
        Ok(())
    }

    async fn overwrite(&self, product: &Product) -> Result<()> {
        let result = sqlx::query("UPDATE products SET name = $2, price_cents = $3 WHERE id = $1")
            .bind(product.id().as_str())
            .bind(product.name())
            .bind(product.price().cents())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound {
                entity: ENTITY,
                id: product.id().clone(),
            });
        }
        Ok(())
    }

    async fn select(&self, id: &EntityId) -> Result<Product> {
        let row = sqlx::query("SELECT id, name, price_cents FROM products WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PersistenceError::NotFound {
                entity: ENTITY,
                id: id.clone(),
            })?;

        Self::row_to_product(row)
    }

    async fn select_all(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query("SELECT id, name, price_cents FROM products ORDER BY seq ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Self::row_to_product).collect()
    }
}

#[async_trait]
impl Repository<Product> for PgProductRepository {
    #[tracing::instrument(skip(self, entity), fields(product_id = %entity.id()))]
    async fn create(&self, entity: &Product) -> RepositoryResult<()> {
        self.insert(entity).await?;
        metrics::counter!("repository_rows_written", "entity" => ENTITY).increment(1);
        Ok(())
    }

    #[tracing::instrument(skip(self, entity), fields(product_id = %entity.id()))]
    async fn update(&self, entity: &Product) -> RepositoryResult<()> {
        self.overwrite(entity).await?;
        metrics::counter!("repository_rows_written", "entity" => ENTITY).increment(1);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self, id: &EntityId) -> RepositoryResult<Product> {
        Ok(self.select(id).await?)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Product>> {
        Ok(self.select_all().await?)
    }
}

impl ProductRepository for PgProductRepository {}
