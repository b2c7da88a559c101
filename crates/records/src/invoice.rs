//! Invoice records composed of snapshot-priced inventory line items.

use chrono::NaiveDate;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use vettrack_core::{DomainResult, FieldErrors, Money, Record, RecordId, TenantId};

use crate::form;
use crate::inventory::InventoryItem;

/// One invoice line referencing an inventory item.
///
/// `unit_price` is copied from the catalog when the line is added and never
/// re-read, so later price changes cannot retroactively alter historical
/// invoice totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    pub item_id: RecordId,
    pub quantity: u32,
    pub unit_price: Money,
}

impl InvoiceLine {
    /// Line total; `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.checked_mul_quantity(self.quantity)
    }
}

/// An issued invoice. `total_amount` is derived from the lines at creation
/// and must always equal the recomputed sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: RecordId,
    pub customer_id: RecordId,
    pub items: Vec<InvoiceLine>,
    pub total_amount: Money,
    pub date: NaiveDate,
    #[serde(rename = "userId")]
    pub tenant_id: TenantId,
}

impl Invoice {
    /// Recompute the total from the lines (the stored total must match).
    pub fn recomputed_total(&self) -> Option<Money> {
        let mut total = Money::ZERO;
        for line in &self.items {
            total = total.checked_add(line.line_total()?)?;
        }
        Some(total)
    }
}

/// One line as staged in the invoice dialog. The price was snapshotted from
/// the inventory item when the line was added; the quantity is still the raw
/// form string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceLineDraft {
    pub item_id: String,
    pub quantity: String,
    pub unit_price: Money,
}

impl InvoiceLineDraft {
    /// Stage a line for `item`, snapshotting its current sale price.
    pub fn snapshot(item: &InventoryItem, quantity: impl Into<String>) -> Self {
        Self {
            item_id: item.id.to_string(),
            quantity: quantity.into(),
            unit_price: item.sale_price,
        }
    }
}

/// Raw invoice form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceDraft {
    pub customer_id: String,
    pub date: String,
    pub items: Vec<InvoiceLineDraft>,
}

impl Record for Invoice {
    type Draft = InvoiceDraft;

    const COLLECTION: &'static str = "invoices";

    fn id(&self) -> RecordId {
        self.id
    }

    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn from_draft(id: RecordId, tenant_id: TenantId, draft: InvoiceDraft) -> DomainResult<Self> {
        let mut errors = FieldErrors::new();

        let customer_id = match RecordId::from_str(draft.customer_id.trim()) {
            Ok(cid) => Some(cid),
            Err(_) => {
                if draft.customer_id.trim().is_empty() {
                    errors.push("customerId", "is required");
                } else {
                    errors.push("customerId", "is not a valid customer reference");
                }
                None
            }
        };

        let date = form::parse_date(&mut errors, "date", &draft.date);

        if draft.items.is_empty() {
            errors.push("items", "add at least one item");
        }

        let mut lines = Vec::with_capacity(draft.items.len());
        for (index, line) in draft.items.iter().enumerate() {
            let field = format!("items[{index}]");
            let Ok(item_id) = RecordId::from_str(line.item_id.trim()) else {
                errors.push(field, "select an inventory item");
                continue;
            };
            let Some(quantity) = form::parse_count(&mut errors, &field, &line.quantity) else {
                continue;
            };
            if quantity == 0 {
                errors.push(field, "quantity must be at least 1");
                continue;
            }
            lines.push(InvoiceLine {
                item_id,
                quantity,
                unit_price: line.unit_price,
            });
        }

        let mut total = Money::ZERO;
        for line in &lines {
            total = match line.line_total().and_then(|t| total.checked_add(t)) {
                Some(t) => t,
                None => {
                    errors.push("items", "invoice total is too large");
                    break;
                }
            };
        }

        errors.into_result()?;

        Ok(Self {
            id,
            customer_id: customer_id.unwrap_or_default(),
            items: lines,
            total_amount: total,
            date: date.unwrap_or_default(),
            tenant_id,
        })
    }
}
