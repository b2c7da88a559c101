//! Full-tenant JSON backup.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use vettrack_auth::AppUser;
use vettrack_core::TenantId;
use vettrack_records::{Customer, Expense, InventoryItem, Invoice, Supplier};
use vettrack_store::{RecordStore, StoreError, UserDirectory};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("backup serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("backup read failed: {0}")]
    Store(#[from] StoreError),
}

/// Everything a tenant owns, in one document.
///
/// Field names and record shapes match the backing document store, so a
/// backup taken here can be re-imported by the store's own tooling without a
/// translation step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantBackup {
    pub exported_at: DateTime<Utc>,
    pub customers: Vec<Customer>,
    pub suppliers: Vec<Supplier>,
    pub inventory: Vec<InventoryItem>,
    pub invoices: Vec<Invoice>,
    pub expenses: Vec<Expense>,
    pub users: Vec<AppUser>,
}

impl TenantBackup {
    /// Serialize to pretty-printed JSON, the shape handed to the download.
    pub fn to_json(&self) -> Result<String, ExportError> {
        let json = serde_json::to_string_pretty(self)?;
        info!(
            customers = self.customers.len(),
            suppliers = self.suppliers.len(),
            inventory = self.inventory.len(),
            invoices = self.invoices.len(),
            expenses = self.expenses.len(),
            users = self.users.len(),
            "tenant backup serialized"
        );
        Ok(json)
    }

    /// Suggested download name, e.g. `vettrack-backup-2025-07-15.json`.
    pub fn suggested_filename(&self) -> String {
        format!(
            "vettrack-backup-{}.json",
            self.exported_at.format("%Y-%m-%d")
        )
    }
}

/// Collect everything `tenant_id` owns into one backup document, stamped with
/// the current time.
///
/// Reads each collection through its store handle; the user list is the whole
/// staff directory (it is not tenant-scoped). Any failing read aborts the
/// backup, so a produced document is always complete.
pub fn tenant_backup(
    tenant_id: TenantId,
    customers: &dyn RecordStore<Customer>,
    suppliers: &dyn RecordStore<Supplier>,
    inventory: &dyn RecordStore<InventoryItem>,
    invoices: &dyn RecordStore<Invoice>,
    expenses: &dyn RecordStore<Expense>,
    users: &dyn UserDirectory,
) -> Result<TenantBackup, ExportError> {
    Ok(TenantBackup {
        exported_at: Utc::now(),
        customers: customers.list(tenant_id)?,
        suppliers: suppliers.list(tenant_id)?,
        inventory: inventory.list(tenant_id)?,
        invoices: invoices.list(tenant_id)?,
        expenses: expenses.list(tenant_id)?,
        users: users.list()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use vettrack_core::{Record, RecordId, TenantId};
    use vettrack_records::CustomerDraft;

    fn backup_at(exported_at: DateTime<Utc>, customers: Vec<Customer>) -> TenantBackup {
        TenantBackup {
            exported_at,
            customers,
            suppliers: Vec::new(),
            inventory: Vec::new(),
            invoices: Vec::new(),
            expenses: Vec::new(),
            users: Vec::new(),
        }
    }

    #[test]
    fn backup_document_has_all_six_collections() {
        let when = Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap();
        let json = backup_at(when, Vec::new()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        for key in [
            "exportedAt",
            "customers",
            "suppliers",
            "inventory",
            "invoices",
            "expenses",
            "users",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn records_keep_their_document_field_names() {
        let customer = Customer::from_draft(
            RecordId::new(),
            TenantId::new(),
            CustomerDraft {
                owner_name: "Ayesha Khan".into(),
                pet_name: "Milo".into(),
                pet_breed: "Beagle".into(),
            },
        )
        .unwrap();
        let when = Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap();

        let json = backup_at(when, vec![customer]).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let exported = &value["customers"][0];
        assert_eq!(exported["ownerName"], "Ayesha Khan");
        assert!(exported.get("userId").is_some());
    }

    #[test]
    fn filename_carries_the_export_date() {
        let when = Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap();
        assert_eq!(
            backup_at(when, Vec::new()).suggested_filename(),
            "vettrack-backup-2025-07-15.json"
        );
    }

    #[test]
    fn tenant_backup_collects_only_the_tenants_records() {
        use vettrack_core::UserId;
        use vettrack_records::{
            ExpenseDraft, InventoryItem, Invoice, Supplier, SupplierDraft,
        };
        use vettrack_store::{InMemoryStore, InMemoryUserDirectory};

        let customers = InMemoryStore::<Customer>::new();
        let suppliers = InMemoryStore::<Supplier>::new();
        let inventory = InMemoryStore::<InventoryItem>::new();
        let invoices = InMemoryStore::<Invoice>::new();
        let expenses = InMemoryStore::<Expense>::new();
        let directory = InMemoryUserDirectory::new();

        let owner = UserId::new();
        directory.sign_in(owner, "vet@example.com").unwrap();
        let tenant = TenantId::from(owner);
        let other = TenantId::new();

        customers
            .create(
                tenant,
                CustomerDraft {
                    owner_name: "Ayesha Khan".into(),
                    pet_name: "Milo".into(),
                    pet_breed: "Beagle".into(),
                },
            )
            .unwrap();
        suppliers
            .create(
                other,
                SupplierDraft {
                    name: "MedVet Distributors".into(),
                    contact: "0300-0000000".into(),
                },
            )
            .unwrap();
        expenses
            .create(
                tenant,
                ExpenseDraft {
                    category: "Utilities".into(),
                    amount: "120.50".into(),
                    date: "2025-07-01".into(),
                },
            )
            .unwrap();

        let backup = tenant_backup(
            tenant,
            &customers,
            &suppliers,
            &inventory,
            &invoices,
            &expenses,
            &directory,
        )
        .unwrap();

        assert_eq!(backup.customers.len(), 1);
        assert_eq!(backup.expenses.len(), 1);
        // The other tenant's supplier must not leak into this backup.
        assert!(backup.suppliers.is_empty());
        assert!(backup.inventory.is_empty());
        assert!(backup.invoices.is_empty());
        assert_eq!(backup.users.len(), 1);
        assert!(backup.to_json().is_ok());
    }
}
