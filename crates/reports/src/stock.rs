//! Stock-level and expiry classification.

use chrono::NaiveDate;
use serde::Serialize;

use vettrack_records::InventoryItem;

/// How many days ahead an expiry date counts as "expiring soon".
pub const EXPIRY_WARNING_DAYS: i64 = 30;

/// Expiry classification for an inventory item against a fixed "today".
///
/// Exactly one variant holds for any item and date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpiryRisk {
    Ok,
    /// Expiry within the next `EXPIRY_WARNING_DAYS` days (today inclusive).
    ExpiringSoon,
    /// Expiry date already passed.
    Expired,
}

pub fn expiry_risk(item: &InventoryItem, today: NaiveDate) -> ExpiryRisk {
    let days_left = (item.expiry_date - today).num_days();
    if days_left < 0 {
        ExpiryRisk::Expired
    } else if days_left <= EXPIRY_WARNING_DAYS {
        ExpiryRisk::ExpiringSoon
    } else {
        ExpiryRisk::Ok
    }
}

/// Stock is low at or below the item's reorder level.
pub fn low_stock(item: &InventoryItem) -> bool {
    item.quantity <= item.reorder_level
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use proptest::prelude::*;
    use vettrack_core::{Money, RecordId, TenantId};

    fn item(quantity: u32, reorder_level: u32, expiry: NaiveDate) -> InventoryItem {
        InventoryItem {
            id: RecordId::new(),
            name: "Amoxicillin".into(),
            quantity,
            sale_price: Money::from_minor_units(1599),
            reorder_level,
            expiry_date: expiry,
            tenant_id: TenantId::new(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()
    }

    #[test]
    fn expiry_boundaries() {
        let cases: [(i64, ExpiryRisk); 5] = [
            (-1, ExpiryRisk::Expired),
            (0, ExpiryRisk::ExpiringSoon),
            (1, ExpiryRisk::ExpiringSoon),
            (30, ExpiryRisk::ExpiringSoon),
            (31, ExpiryRisk::Ok),
        ];
        for (offset, expected) in cases {
            let expiry = if offset >= 0 {
                today() + Days::new(offset as u64)
            } else {
                today() - Days::new(offset.unsigned_abs())
            };
            assert_eq!(
                expiry_risk(&item(10, 5, expiry), today()),
                expected,
                "offset {offset}"
            );
        }
    }

    #[test]
    fn low_stock_boundary_is_inclusive() {
        let expiry = today() + Days::new(365);
        assert!(low_stock(&item(10, 10, expiry)));
        assert!(low_stock(&item(9, 10, expiry)));
        assert!(!low_stock(&item(11, 10, expiry)));
        assert!(low_stock(&item(0, 0, expiry)));
    }

    proptest! {
        #[test]
        fn low_stock_matches_its_definition(quantity in 0u32..10_000, reorder in 0u32..10_000) {
            let expiry = today() + Days::new(365);
            prop_assert_eq!(
                low_stock(&item(quantity, reorder, expiry)),
                quantity <= reorder
            );
        }

        #[test]
        fn exactly_one_expiry_class_holds(offset in -4000i64..4000) {
            let expiry = if offset >= 0 {
                today() + Days::new(offset as u64)
            } else {
                today() - Days::new(offset.unsigned_abs())
            };
            let risk = expiry_risk(&item(10, 5, expiry), today());

            let expired = offset < 0;
            let soon = (0..=EXPIRY_WARNING_DAYS).contains(&offset);
            let ok = offset > EXPIRY_WARNING_DAYS;
            // The three predicates are mutually exclusive by construction;
            // the classification must agree with whichever holds.
            prop_assert_eq!(risk == ExpiryRisk::Expired, expired);
            prop_assert_eq!(risk == ExpiryRisk::ExpiringSoon, soon);
            prop_assert_eq!(risk == ExpiryRisk::Ok, ok);
        }
    }
}
