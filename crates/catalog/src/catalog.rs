use serde::{Deserialize, Serialize};

use stocktally_core::{DomainError, DomainResult, ProductId};

use crate::activity_log::ActivityLog;
use crate::forecast::{StockoutReport, stockout_forecast};
use crate::product::{Product, ProductSummary};

/// Confirmation of a completed sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub product_name: String,
    pub units: i64,
}

/// Ordered collection of products; owns all mutation logic and the activity
/// log that successful registrations and adjustments feed.
///
/// Insertion order is preserved and ids are not deduplicated: lookups are
/// linear scans that stop at the first matching id. There is no delete
/// operation; products live as long as the catalog.
#[derive(Debug)]
pub struct ProductCatalog {
    products: Vec<Product>,
    log: ActivityLog,
}

impl ProductCatalog {
    pub fn new(log: ActivityLog) -> Self {
        Self {
            products: Vec::new(),
            log,
        }
    }

    /// Register a product. Always succeeds; duplicate ids are retained.
    pub fn add(&mut self, product: Product) {
        self.log.record(&format!(
            "Added product: {} (ID: {}), Quantity: {}",
            product.name, product.id, product.quantity
        ));
        tracing::debug!(id = %product.id, quantity = product.quantity, "product added");
        self.products.push(product);
    }

    /// Add `delta` to the stock of the first product matching `id` and
    /// return the new quantity.
    ///
    /// Negative deltas are allowed and may drive the quantity negative; only
    /// the sell path enforces a floor.
    pub fn adjust_quantity(&mut self, id: &ProductId, delta: i64) -> DomainResult<i64> {
        let product = self
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(DomainError::not_found)?;

        product.quantity += delta;
        self.log.record(&format!(
            "Updated product: {} (ID: {}), Quantity: {}",
            product.name, product.id, product.quantity
        ));
        tracing::debug!(id = %id, delta, quantity = product.quantity, "quantity adjusted");
        Ok(product.quantity)
    }

    /// Sell `units` of the first product matching `id`.
    ///
    /// `units` must be positive. A sale never drives stock negative: if the
    /// product holds fewer units than requested, nothing is mutated.
    pub fn sell(&mut self, id: &ProductId, units: i64) -> DomainResult<Sale> {
        if units <= 0 {
            return Err(DomainError::validation("sale quantity must be positive"));
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(DomainError::not_found)?;

        if product.quantity < units {
            return Err(DomainError::insufficient_stock(
                product.name.clone(),
                units,
                product.quantity,
            ));
        }

        product.quantity -= units;
        product.orders_sold += units;
        tracing::debug!(id = %id, units, remaining = product.quantity, "sale recorded");
        Ok(Sale {
            product_name: product.name.clone(),
            units,
        })
    }

    /// Point-in-time listing of every product, in insertion order.
    pub fn list_all(&self) -> Vec<ProductSummary> {
        self.products.iter().map(ProductSummary::from).collect()
    }

    /// Naive stockout estimate for the first product matching `id`.
    pub fn predict_stockout(&self, id: &ProductId) -> DomainResult<StockoutReport> {
        let product = self
            .products
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(DomainError::not_found)?;

        Ok(StockoutReport {
            product_name: product.name.clone(),
            product_id: product.id.clone(),
            outcome: stockout_forecast(product),
        })
    }
}
