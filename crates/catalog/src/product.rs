use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stocktally_core::ProductId;

/// One stocked item.
///
/// `quantity` is the stock currently on hand; quantity adjustments may drive
/// it negative, only the sell path enforces a floor. `orders_sold` counts
/// cumulative units sold and never decreases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: i64,
    pub orders_sold: i64,
    /// Unit cost. Stored for the record; no margin logic reads it.
    pub cost: Decimal,
    /// Unit sell price. Stored for the record; no margin logic reads it.
    pub sell_price: Decimal,
}

impl Product {
    /// Create a product with no sales recorded yet.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        quantity: i64,
        cost: Decimal,
        sell_price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            orders_sold: 0,
            cost,
            sell_price,
        }
    }
}

/// One row of a catalog listing: a point-in-time copy, not a live view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub name: String,
    pub id: ProductId,
    pub quantity: i64,
    pub orders_sold: i64,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            id: product.id.clone(),
            quantity: product.quantity,
            orders_sold: product.orders_sold,
        }
    }
}
