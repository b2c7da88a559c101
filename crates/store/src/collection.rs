//! Typed, tenant-scoped collection access.

use std::collections::HashMap;
use std::sync::{Mutex, RwLock, mpsc};

use tracing::debug;

use vettrack_core::{Record, RecordId, TenantId};

use crate::error::StoreError;
use crate::subscription::WatchHandle;

/// Tenant-scoped CRUD + live subscription access to one collection.
///
/// Every method takes the caller's `TenantId` and filters to it; there is no
/// unscoped read or write path. `watch` snapshots follow replace-on-change
/// semantics: the full current matching set is delivered on subscribe and
/// again after every write, never a partial delta.
pub trait RecordStore<R: Record>: Send + Sync {
    /// Validate `draft` and store the resulting record.
    ///
    /// Validation failures return `StoreError::Validation` without touching
    /// the store or any subscription.
    fn create(&self, tenant_id: TenantId, draft: R::Draft) -> Result<RecordId, StoreError>;

    fn get(&self, tenant_id: TenantId, id: RecordId) -> Result<R, StoreError>;

    fn list(&self, tenant_id: TenantId) -> Result<Vec<R>, StoreError>;

    /// Subscribe to the tenant's records. The current snapshot is delivered
    /// immediately; a fresh full snapshot follows every subsequent write.
    fn watch(&self, tenant_id: TenantId) -> WatchHandle<Vec<R>>;
}

impl<R, S> RecordStore<R> for std::sync::Arc<S>
where
    R: Record,
    S: RecordStore<R> + ?Sized,
{
    fn create(&self, tenant_id: TenantId, draft: R::Draft) -> Result<RecordId, StoreError> {
        (**self).create(tenant_id, draft)
    }

    fn get(&self, tenant_id: TenantId, id: RecordId) -> Result<R, StoreError> {
        (**self).get(tenant_id, id)
    }

    fn list(&self, tenant_id: TenantId) -> Result<Vec<R>, StoreError> {
        (**self).list(tenant_id)
    }

    fn watch(&self, tenant_id: TenantId) -> WatchHandle<Vec<R>> {
        (**self).watch(tenant_id)
    }
}

/// In-memory collection store.
///
/// Backs tests and local/dev runs; in production the same contract is served
/// by the managed document database, with this type holding the latest
/// delivered snapshots.
#[derive(Debug)]
pub struct InMemoryStore<R: Record> {
    records: RwLock<HashMap<(TenantId, RecordId), R>>,
    watchers: Mutex<Vec<(TenantId, mpsc::Sender<Vec<R>>)>>,
}

impl<R: Record> InMemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            watchers: Mutex::new(Vec::new()),
        }
    }

    /// Current full snapshot for a tenant, ordered by record id
    /// (UUIDv7 ids make this creation order).
    fn snapshot(&self, tenant_id: TenantId) -> Result<Vec<R>, StoreError> {
        let map = self
            .records
            .read()
            .map_err(|_| StoreError::unavailable("record store lock poisoned"))?;

        let mut records: Vec<R> = map
            .iter()
            .filter_map(|((t, _), r)| (*t == tenant_id).then(|| r.clone()))
            .collect();
        records.sort_by_key(|r| *r.id().as_uuid());
        Ok(records)
    }

    /// Re-deliver the tenant's full snapshot to its live watchers, pruning
    /// any whose handle was dropped.
    fn publish(&self, tenant_id: TenantId) {
        let Ok(snapshot) = self.snapshot(tenant_id) else {
            return;
        };
        if let Ok(mut watchers) = self.watchers.lock() {
            watchers.retain(|(t, tx)| {
                if *t != tenant_id {
                    return true;
                }
                tx.send(snapshot.clone()).is_ok()
            });
        }
    }
}

impl<R: Record> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordStore<R> for InMemoryStore<R> {
    fn create(&self, tenant_id: TenantId, draft: R::Draft) -> Result<RecordId, StoreError> {
        let id = RecordId::new();
        let record = R::from_draft(id, tenant_id, draft)?;

        {
            let mut map = self
                .records
                .write()
                .map_err(|_| StoreError::unavailable("record store lock poisoned"))?;
            map.insert((tenant_id, id), record);
        }

        debug!(collection = R::COLLECTION, %tenant_id, %id, "record created");
        self.publish(tenant_id);
        Ok(id)
    }

    fn get(&self, tenant_id: TenantId, id: RecordId) -> Result<R, StoreError> {
        let map = self
            .records
            .read()
            .map_err(|_| StoreError::unavailable("record store lock poisoned"))?;
        map.get(&(tenant_id, id)).cloned().ok_or(StoreError::NotFound)
    }

    fn list(&self, tenant_id: TenantId) -> Result<Vec<R>, StoreError> {
        self.snapshot(tenant_id)
    }

    fn watch(&self, tenant_id: TenantId) -> WatchHandle<Vec<R>> {
        let (tx, rx) = mpsc::channel();

        // Initial snapshot first, so subscribers always start complete.
        // An unavailable store degrades to an empty snapshot here; the
        // subscription stays live for later deliveries.
        let initial = self.snapshot(tenant_id).unwrap_or_default();
        let _ = tx.send(initial);

        if let Ok(mut watchers) = self.watchers.lock() {
            watchers.push((tenant_id, tx));
        }

        debug!(collection = R::COLLECTION, %tenant_id, "watch subscription opened");
        WatchHandle::new(rx)
    }
}
