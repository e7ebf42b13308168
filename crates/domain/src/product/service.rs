//! Domain service operating on collections of products.

use super::Product;
use crate::error::ValidationError;

/// Stateless operations over several products at once.
pub struct ProductService;

impl ProductService {
    /// Raises the price of every product by `percentage` percent.
    ///
    /// All new prices are computed and validated before any product is
    /// changed, so a rejected price leaves the slice untouched.
    #[tracing::instrument(skip(products), fields(count = products.len()))]
    pub fn increase_price(products: &mut [Product], percentage: i64) -> Result<(), ValidationError> {
        let new_prices = products
            .iter()
            .map(|p| {
                p.price()
                    .increase_by_percent(percentage)
                    .ok_or(ValidationError::AmountOverflow)
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(price) = new_prices.iter().find(|p| !p.is_positive()) {
            return Err(ValidationError::InvalidPrice { price: *price });
        }

        for (product, price) in products.iter_mut().zip(new_prices) {
            product.change_price(price)?;
        }
        Ok(())
    }
}
