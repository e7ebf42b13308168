use std::sync::Arc;

use domain::{
    DomainError, DomainEvent, Event, EventDispatcher, Product, ProductCreatedData,
    ProductRepository, ProductService,
};

/// Product catalog maintenance.
pub struct CatalogService<R: ProductRepository> {
    repository: R,
    dispatcher: Arc<EventDispatcher>,
}

impl<R: ProductRepository> CatalogService<R> {
    pub fn new(repository: R, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// Persists a new product and publishes ProductCreated.
    #[tracing::instrument(skip(self, product, description), fields(product_id = %product.id()))]
    pub async fn create(
        &self,
        product: &Product,
        description: Option<String>,
    ) -> Result<(), DomainError> {
        self.repository.create(product).await?;
        metrics::counter!("products_created").increment(1);

        let data = ProductCreatedData::from_product(product, description);
        self.dispatcher
            .notify(&Event::new(DomainEvent::product_created(data)))?;
        Ok(())
    }

    /// Raises every catalog price by `percentage` percent and stores the
    /// result. Nothing is written if any new price would be invalid or
    /// overflow. Products are then updated one at a time, so a storage
    /// failure partway through leaves the earlier products raised.
    #[tracing::instrument(skip(self))]
    pub async fn increase_prices(&self, percentage: i64) -> Result<Vec<Product>, DomainError> {
        let mut products = self.repository.find_all().await?;
        ProductService::increase_price(&mut products, percentage)?;

        for product in &products {
            self.repository.update(product).await?;
        }
        Ok(products)
    }

    pub async fn list(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.repository.find_all().await?)
    }
}
