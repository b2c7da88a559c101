//! Customer records (pet owner + patient).

use serde::{Deserialize, Serialize};

use vettrack_core::{DomainResult, FieldErrors, Record, RecordId, TenantId};

/// A registered customer: the pet's owner plus the patient itself.
///
/// Created via the customers form; never updated or deleted in the current
/// scope. Field names mirror the backing document schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: RecordId,
    pub owner_name: String,
    pub pet_name: String,
    pub pet_breed: String,
    /// Owning tenant; stored as `userId` in the document store.
    #[serde(rename = "userId")]
    pub tenant_id: TenantId,
}

/// Raw customer form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDraft {
    pub owner_name: String,
    pub pet_name: String,
    pub pet_breed: String,
}

impl Record for Customer {
    type Draft = CustomerDraft;

    const COLLECTION: &'static str = "customers";

    fn id(&self) -> RecordId {
        self.id
    }

    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn from_draft(id: RecordId, tenant_id: TenantId, draft: CustomerDraft) -> DomainResult<Self> {
        let mut errors = FieldErrors::new();
        errors.require("ownerName", &draft.owner_name);
        errors.require("petName", &draft.pet_name);
        errors.require("petBreed", &draft.pet_breed);
        errors.into_result()?;

        Ok(Self {
            id,
            owner_name: draft.owner_name.trim().to_string(),
            pet_name: draft.pet_name.trim().to_string(),
            pet_breed: draft.pet_breed.trim().to_string(),
            tenant_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vettrack_core::DomainError;

    fn draft() -> CustomerDraft {
        CustomerDraft {
            owner_name: "Ayesha Khan".into(),
            pet_name: "Milo".into(),
            pet_breed: "Beagle".into(),
        }
    }

    #[test]
    fn valid_draft_builds_a_customer() {
        let tenant = TenantId::new();
        let customer = Customer::from_draft(RecordId::new(), tenant, draft()).unwrap();
        assert_eq!(customer.owner_name, "Ayesha Khan");
        assert_eq!(customer.tenant_id, tenant);
    }

    #[test]
    fn every_missing_field_is_reported() {
        let err =
            Customer::from_draft(RecordId::new(), TenantId::new(), CustomerDraft::default())
                .unwrap_err();
        match err {
            DomainError::Validation(fields) => {
                assert!(fields.contains_field("ownerName"));
                assert!(fields.contains_field("petName"));
                assert!(fields.contains_field("petBreed"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn serializes_with_document_field_names() {
        let customer = Customer::from_draft(RecordId::new(), TenantId::new(), draft()).unwrap();
        let json = serde_json::to_value(&customer).unwrap();
        assert!(json.get("ownerName").is_some());
        assert!(json.get("userId").is_some());
    }
}
