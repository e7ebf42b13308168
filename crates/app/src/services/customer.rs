use std::sync::Arc;

use common::EntityId;
use domain::{Address, Customer, CustomerRepository, DomainError, DomainEvent, Event, EventDispatcher};

/// Customer registration and address changes.
pub struct CustomerService<R: CustomerRepository> {
    repository: R,
    dispatcher: Arc<EventDispatcher>,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repository: R, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// Persists a new customer and publishes CustomerCreated.
    #[tracing::instrument(skip(self, customer), fields(customer_id = %customer.id()))]
    pub async fn create(&self, customer: &Customer) -> Result<(), DomainError> {
        self.repository.create(customer).await?;
        metrics::counter!("customers_created").increment(1);

        self.dispatcher
            .notify(&Event::new(DomainEvent::customer_created(customer)))?;
        Ok(())
    }

    /// Moves a customer to `address` and publishes CustomerAddressChanged.
    #[tracing::instrument(skip(self, address))]
    pub async fn change_address(
        &self,
        customer_id: &EntityId,
        address: Address,
    ) -> Result<Customer, DomainError> {
        let mut customer = self.repository.find(customer_id).await?;
        customer.change_address(address.clone());
        self.repository.update(&customer).await?;

        self.dispatcher.notify(&Event::new(DomainEvent::customer_address_changed(
            &customer, address,
        )))?;
        Ok(customer)
    }

    /// Activates a customer that already has an address.
    #[tracing::instrument(skip(self))]
    pub async fn activate(&self, customer_id: &EntityId) -> Result<Customer, DomainError> {
        let mut customer = self.repository.find(customer_id).await?;
        customer.activate()?;
        self.repository.update(&customer).await?;
        Ok(customer)
    }

    pub async fn find(&self, customer_id: &EntityId) -> Result<Customer, DomainError> {
        Ok(self.repository.find(customer_id).await?)
    }
}
