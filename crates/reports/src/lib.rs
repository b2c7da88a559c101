//! `vettrack-reports` — the aggregation engine behind dashboard and reports.
//!
//! Pure, synchronous functions over already-fetched record sets: no IO, no
//! store handle, total over empty input. Every figure a view shows (revenue
//! buckets, month-over-month delta, inventory valuation, date-range rollups,
//! stock and expiry flags) is computed here and nowhere else, so overlapping
//! views can never disagree about the same range.

pub mod revenue;
pub mod rollup;
pub mod stock;
pub mod valuation;

pub use revenue::{MonthlyRevenue, monthly_revenue, revenue_delta, total_revenue};
pub use rollup::{DatedAmount, Rollup, date_range_rollup, net_profit};
pub use stock::{ExpiryRisk, expiry_risk, low_stock};
pub use valuation::{InventoryValuation, ItemValuation, inventory_valuation};
