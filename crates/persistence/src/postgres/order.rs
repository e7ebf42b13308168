use std::collections::HashMap;

use async_trait::async_trait;
use common::EntityId;
use domain::{Money, Order, OrderItem, OrderRepository, Repository, RepositoryResult};
use sqlx::{PgPool, Postgres, Row, Transaction, postgres::PgRow};

use crate::error::{PersistenceError, Result, to_u32};

const ENTITY: &str = "Order";

/// PostgreSQL-backed order repository.
///
/// Orders and their items live in separate tables; every write touches
/// both inside one transaction.
#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_item(row: &PgRow) -> Result<OrderItem> {
        let quantity: i64 = row.try_get("quantity")?;
        let item = OrderItem::new(
            EntityId::new(row.try_get::<String, _>("id")?),
            row.try_get::<String, _>("name")?,
            Money::from_cents(row.try_get("price_cents")?),
            EntityId::new(row.try_get::<String, _>("product_id")?),
            to_u32("quantity", quantity)?,
        )?;
        Ok(item)
    }

    fn build_order(row: &PgRow, items: Vec<OrderItem>) -> Result<Order> {
        let order = Order::new(
            EntityId::new(row.try_get::<String, _>("id")?),
            EntityId::new(row.try_get::<String, _>("customer_id")?),
            items,
        )?;
        Ok(order)
    }

    async fn insert_items(tx: &mut Transaction<'_, Postgres>, order: &Order) -> Result<()> {
        for (position, item) in order.items().iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, id, product_id, name, price_cents, quantity, position)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(order.id().as_str())
            .bind(item.id().as_str())
            .bind(item.product_id().as_str())
            .bind(item.name())
            .bind(item.price().cents())
            .bind(i64::from(item.quantity()))
            .bind(position as i32)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    async fn insert(&self, order: &Order) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO orders (id, customer_id, total_cents) VALUES ($1, $2, $3)")
            .bind(order.id().as_str())
            .bind(order.customer_id().as_str())
            .bind(order.total().cents())
            .execute(&mut *tx)
            .await
            .map_err(|e| PersistenceError::on_insert(e, ENTITY, order.id()))?;

        Self::insert_items(&mut tx, order).await?;

        tx.commit().await?;
        Ok(())
    }

    /// Replaces the order's items and updates its customer and total.
    async fn overwrite(&self, order: &Order) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let result =
            sqlx::query("UPDATE orders SET customer_id = $2, total_cents = $3 WHERE id = $1")
                .bind(order.id().as_str())
                .bind(order.customer_id().as_str())
                .bind(order.total().cents())
                .execute(&mut *tx)
                .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound {
                entity: ENTITY,
                id: order.id().clone(),
            });
        }

        sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(order.id().as_str())
            .execute(&mut *tx)
            .await?;

        Self::insert_items(&mut tx, order).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn select(&self, id: &EntityId) -> Result<Order> {
        let row = sqlx::query("SELECT id, customer_id FROM orders WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PersistenceError::NotFound {
                entity: ENTITY,
                id: id.clone(),
            })?;

        let item_rows = sqlx::query(
            r#"
            SELECT id, product_id, name, price_cents, quantity
            FROM order_items
            WHERE order_id = $1
            ORDER BY position ASC
            "#,
        )
        .bind(id.as_str())
        .fetch_all(&self.pool)
        .await?;

        let items = item_rows
            .iter()
            .map(Self::row_to_item)
            .collect::<Result<Vec<_>>>()?;

        Self::build_order(&row, items)
    }

    async fn select_all(&self) -> Result<Vec<Order>> {
        let order_rows = sqlx::query("SELECT id, customer_id FROM orders ORDER BY seq ASC")
            .fetch_all(&self.pool)
            .await?;

        let item_rows = sqlx::query(
            r#"
            SELECT order_id, id, product_id, name, price_cents, quantity
            FROM order_items
            ORDER BY order_id, position ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut items_by_order: HashMap<String, Vec<OrderItem>> = HashMap::new();
        for row in &item_rows {
            let order_id: String = row.try_get("order_id")?;
            items_by_order
                .entry(order_id)
                .or_default()
                .push(Self::row_to_item(row)?);
        }

        order_rows
            .iter()
            .map(|row| {
                let order_id: String = row.try_get("id")?;
                let items = items_by_order.remove(&order_id).unwrap_or_default();
                Self::build_order(row, items)
            })
            .collect()
    }
}

#[async_trait]
impl Repository<Order> for PgOrderRepository {
    #[tracing::instrument(skip(self, entity), fields(order_id = %entity.id(), items = entity.items().len()))]
    async fn create(&self, entity: &Order) -> RepositoryResult<()> {
        self.insert(entity).await?;
        metrics::counter!("repository_rows_written", "entity" => ENTITY).increment(1);
        Ok(())
    }

    #[tracing::instrument(skip(self, entity), fields(order_id = %entity.id(), items = entity.items().len()))]
    async fn update(&self, entity: &Order) -> RepositoryResult<()> {
        self.overwrite(entity).await?;
        metrics::counter!("repository_rows_written", "entity" => ENTITY).increment(1);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self, id: &EntityId) -> RepositoryResult<Order> {
        Ok(self.select(id).await?)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Order>> {
        Ok(self.select_all().await?)
    }
}

impl OrderRepository for PgOrderRepository {}
