//! `stocktally-catalog` — the product catalog and its operations.
//!
//! **Responsibility:** own the ordered product collection and every mutation
//! of it (registration, quantity adjustment, sales, listing, stockout
//! estimation), plus the append-only activity log those mutations feed.
//!
//! The catalog is a single-owner, single-threaded structure: no interior
//! mutability, no locking. Callers hold it by `&mut` and operations run to
//! completion before the next one starts.

pub mod activity_log;
pub mod catalog;
pub mod forecast;
pub mod product;

pub use activity_log::ActivityLog;
pub use catalog::{ProductCatalog, Sale};
pub use forecast::{StockoutForecast, StockoutReport};
pub use product::{Product, ProductSummary};
