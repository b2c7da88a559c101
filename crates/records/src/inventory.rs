//! Inventory item records with expiry and reorder tracking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use vettrack_core::{DomainResult, FieldErrors, Money, Record, RecordId, TenantId};

use crate::form;

/// A stocked item: medicine, consumable, or retail product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: RecordId,
    pub name: String,
    pub quantity: u32,
    pub sale_price: Money,
    /// Stock is flagged low at or below this threshold.
    pub reorder_level: u32,
    pub expiry_date: NaiveDate,
    #[serde(rename = "userId")]
    pub tenant_id: TenantId,
}

/// Raw inventory form input (numeric and date fields still strings).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryItemDraft {
    pub name: String,
    pub quantity: String,
    pub sale_price: String,
    pub reorder_level: String,
    pub expiry_date: String,
}

impl Record for InventoryItem {
    type Draft = InventoryItemDraft;

    const COLLECTION: &'static str = "inventory";

    fn id(&self) -> RecordId {
        self.id
    }

    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn from_draft(
        id: RecordId,
        tenant_id: TenantId,
        draft: InventoryItemDraft,
    ) -> DomainResult<Self> {
        let mut errors = FieldErrors::new();
        errors.require("name", &draft.name);
        let quantity = form::parse_count(&mut errors, "quantity", &draft.quantity);
        let sale_price = form::parse_money(&mut errors, "salePrice", &draft.sale_price);
        let reorder_level = form::parse_count(&mut errors, "reorderLevel", &draft.reorder_level);
        let expiry_date = form::parse_date(&mut errors, "expiryDate", &draft.expiry_date);
        errors.into_result()?;

        Ok(Self {
            id,
            name: draft.name.trim().to_string(),
            quantity: quantity.unwrap_or_default(),
            sale_price: sale_price.unwrap_or_default(),
            reorder_level: reorder_level.unwrap_or_default(),
            expiry_date: expiry_date.unwrap_or_default(),
            tenant_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vettrack_core::DomainError;

    fn draft() -> InventoryItemDraft {
        InventoryItemDraft {
            name: "Amoxicillin".into(),
            quantity: "50".into(),
            sale_price: "15.99".into(),
            reorder_level: "10".into(),
            expiry_date: "2026-12-01".into(),
        }
    }

    #[test]
    fn valid_draft_parses_numeric_fields() {
        let item = InventoryItem::from_draft(RecordId::new(), TenantId::new(), draft()).unwrap();
        assert_eq!(item.quantity, 50);
        assert_eq!(item.sale_price, Money::from_minor_units(1599));
        assert_eq!(item.reorder_level, 10);
        assert_eq!(
            item.expiry_date,
            NaiveDate::from_ymd_opt(2026, 12, 1).unwrap()
        );
    }

    #[test]
    fn unparseable_numbers_are_field_errors_not_writes() {
        let mut bad = draft();
        bad.quantity = "fifty".into();
        bad.sale_price = "-2".into();
        let err = InventoryItem::from_draft(RecordId::new(), TenantId::new(), bad).unwrap_err();
        match err {
            DomainError::Validation(fields) => {
                assert!(fields.contains_field("quantity"));
                assert!(fields.contains_field("salePrice"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn all_fields_are_required() {
        let err = InventoryItem::from_draft(
            RecordId::new(),
            TenantId::new(),
            InventoryItemDraft::default(),
        )
        .unwrap_err();
        match err {
            DomainError::Validation(fields) => assert_eq!(fields.errors().len(), 5),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
