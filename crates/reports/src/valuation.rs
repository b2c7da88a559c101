//! Inventory valuation.

use serde::Serialize;

use vettrack_core::{Money, RecordId};
use vettrack_records::InventoryItem;

/// Valuation of a single item: quantity × sale price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemValuation {
    pub item_id: RecordId,
    pub name: String,
    pub quantity: u32,
    pub sale_price: Money,
    pub total_value: Money,
}

/// Total stock value with a per-item breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryValuation {
    pub total: Money,
    pub items: Vec<ItemValuation>,
}

/// Value the whole inventory at current sale prices.
///
/// Total over empty input (zero), saturating on overflow rather than
/// panicking in a report view.
pub fn inventory_valuation(items: &[InventoryItem]) -> InventoryValuation {
    let items: Vec<ItemValuation> = items
        .iter()
        .map(|item| {
            let total_value = item
                .sale_price
                .checked_mul_quantity(item.quantity)
                .unwrap_or(Money::from_minor_units(u64::MAX));
            ItemValuation {
                item_id: item.id,
                name: item.name.clone(),
                quantity: item.quantity,
                sale_price: item.sale_price,
                total_value,
            }
        })
        .collect();

    let total = items.iter().map(|i| i.total_value).sum();
    InventoryValuation { total, items }
}
