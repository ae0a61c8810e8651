//! Naive stockout estimation.

use serde::{Deserialize, Serialize};

use stocktally_core::ProductId;

use crate::product::Product;

/// Assumed sales window, in days.
///
/// The average sales rate treats every recorded sale as having happened
/// within the last 30 days; no elapsed time is actually tracked.
const SALES_WINDOW_DAYS: f64 = 30.0;

/// Outcome of a stockout estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockoutForecast {
    /// No sales recorded yet: the average rate is zero, so no estimate exists.
    NoSalesHistory,
    /// Stock is expected to last approximately this many days.
    RunsOutInDays(i64),
    /// Stock is already exhausted.
    AlreadyOut,
}

/// Stockout estimate for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockoutReport {
    pub product_name: String,
    pub product_id: ProductId,
    pub outcome: StockoutForecast,
}

/// Estimate how long a product's stock will last at its average sales rate.
///
/// A product with no sales history gets an explicit outcome instead of the
/// divide-by-zero the naive arithmetic would produce.
pub fn stockout_forecast(product: &Product) -> StockoutForecast {
    if product.orders_sold == 0 {
        return StockoutForecast::NoSalesHistory;
    }

    let average_sales_rate = product.orders_sold as f64 / SALES_WINDOW_DAYS;
    let days = (product.quantity as f64 / average_sales_rate).ceil() as i64;
    if days > 0 {
        StockoutForecast::RunsOutInDays(days)
    } else {
        StockoutForecast::AlreadyOut
    }
}
