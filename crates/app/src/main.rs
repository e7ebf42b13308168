//! Checkout entry point: runs a sample checkout against PostgreSQL when
//! `DATABASE_URL` is set, otherwise against in-memory repositories.

use std::sync::Arc;

use app::{AppError, CheckoutSummary, Config};
use persistence::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
    PgCustomerRepository, PgOrderRepository, PgProductRepository,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;
    app::telemetry::init(&config)?;

    let dispatcher = Arc::new(app::default_dispatcher());

    let summary: CheckoutSummary = match &config.database_url {
        Some(url) => {
            let pool = persistence::connect(url, config.max_connections).await?;
            persistence::run_migrations(&pool).await?;
            tracing::info!(max_connections = config.max_connections, "using PostgreSQL repositories");

            app::run_sample_checkout(
                PgCustomerRepository::new(pool.clone()),
                PgProductRepository::new(pool.clone()),
                PgOrderRepository::new(pool),
                dispatcher,
            )
            .await?
        }
        None => {
            tracing::info!("DATABASE_URL not set, using in-memory repositories");

            app::run_sample_checkout(
                InMemoryCustomerRepository::new(),
                InMemoryProductRepository::new(),
                InMemoryOrderRepository::new(),
                dispatcher,
            )
            .await?
        }
    };

    tracing::info!(
        customer_id = %summary.customer_id,
        order_id = %summary.order_id,
        order_total = %summary.order_total,
        reward_points = summary.reward_points,
        total_sales = %summary.total_sales,
        "sample checkout complete"
    );
    Ok(())
}
