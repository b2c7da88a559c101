//! Record contract shared by all stored collection types.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::DomainResult;
use crate::id::{RecordId, TenantId};

/// A tenant-scoped document stored in a named collection.
///
/// Records are created from a `Draft` (raw form input, numeric and date
/// fields still strings), never constructed field-by-field by callers. The
/// draft-to-record step is where all required-field and parse validation
/// happens, so an invalid submission can never reach a store.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Unvalidated creation payload, as submitted by a form.
    type Draft;

    /// Backing collection name (matches the document store's collection).
    const COLLECTION: &'static str;

    /// Document identifier.
    fn id(&self) -> RecordId;

    /// Owning tenant. Assigned by the store at creation; callers cannot
    /// override it.
    fn tenant_id(&self) -> TenantId;

    /// Validate a draft and build the record.
    ///
    /// Must be deterministic and side-effect free. On failure returns
    /// `DomainError::Validation` carrying every offending field.
    fn from_draft(id: RecordId, tenant_id: TenantId, draft: Self::Draft) -> DomainResult<Self>;
}
