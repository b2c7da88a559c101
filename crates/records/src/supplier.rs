//! Supplier records.

use serde::{Deserialize, Serialize};

use vettrack_core::{DomainResult, FieldErrors, Record, RecordId, TenantId};

/// A supplier of inventory stock. Same create-only lifecycle as customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: RecordId,
    pub name: String,
    pub contact: String,
    #[serde(rename = "userId")]
    pub tenant_id: TenantId,
}

/// Raw supplier form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierDraft {
    pub name: String,
    pub contact: String,
}

impl Record for Supplier {
    type Draft = SupplierDraft;

    const COLLECTION: &'static str = "suppliers";

    fn id(&self) -> RecordId {
        self.id
    }

    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn from_draft(id: RecordId, tenant_id: TenantId, draft: SupplierDraft) -> DomainResult<Self> {
        let mut errors = FieldErrors::new();
        errors.require("name", &draft.name);
        errors.require("contact", &draft.contact);
        errors.into_result()?;

        Ok(Self {
            id,
            name: draft.name.trim().to_string(),
            contact: draft.contact.trim().to_string(),
            tenant_id,
        })
    }
}
