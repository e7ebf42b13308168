//! PostgreSQL-backed repositories.

mod customer;
mod order;
mod product;

pub use customer::PgCustomerRepository;
pub use order::PgOrderRepository;
pub use product::PgProductRepository;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::Result;

/// Opens a connection pool to `database_url`.
#[tracing::instrument(skip(database_url))]
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Runs the database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    tracing::info!("database migrations applied");
    Ok(())
}
