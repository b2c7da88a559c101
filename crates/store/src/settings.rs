//! The `settings/app` singleton document.

use std::sync::{Mutex, RwLock, mpsc};

use tracing::debug;

use vettrack_records::{AppSettings, SettingsForm};

use crate::error::StoreError;
use crate::subscription::WatchHandle;

/// Access to the process-wide settings document.
///
/// Settings are tenant-global (one document per deployment). `load` returns
/// the built-in defaults when the document has never been written; `update`
/// replaces it in place — an explicit reload, not ambient mutation.
pub trait SettingsStore: Send + Sync {
    fn load(&self) -> Result<AppSettings, StoreError>;

    fn update(&self, form: SettingsForm) -> Result<AppSettings, StoreError>;

    /// Subscribe to settings changes; the current value arrives immediately.
    fn watch(&self) -> WatchHandle<AppSettings>;
}

/// In-memory settings document.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    current: RwLock<Option<AppSettings>>,
    watchers: Mutex<Vec<mpsc::Sender<AppSettings>>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn publish(&self, settings: &AppSettings) {
        if let Ok(mut watchers) = self.watchers.lock() {
            watchers.retain(|tx| tx.send(settings.clone()).is_ok());
        }
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn load(&self) -> Result<AppSettings, StoreError> {
        let current = self
            .current
            .read()
            .map_err(|_| StoreError::unavailable("settings lock poisoned"))?;
        Ok(current.clone().unwrap_or_default())
    }

    fn update(&self, form: SettingsForm) -> Result<AppSettings, StoreError> {
        let settings = form.into_settings()?;
        {
            let mut current = self
                .current
                .write()
                .map_err(|_| StoreError::unavailable("settings lock poisoned"))?;
            *current = Some(settings.clone());
        }
        debug!(app_name = %settings.app_name, "settings updated");
        self.publish(&settings);
        Ok(settings)
    }

    fn watch(&self) -> WatchHandle<AppSettings> {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(self.load().unwrap_or_default());
        if let Ok(mut watchers) = self.watchers.lock() {
            watchers.push(tx);
        }
        WatchHandle::new(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_before_any_write_returns_defaults() {
        let store = InMemorySettingsStore::new();
        let settings = store.load().unwrap();
        assert_eq!(settings.app_name, "VetTrack");
        assert_eq!(settings.currency, "$");
    }

    #[test]
    fn update_replaces_the_document_and_notifies_watchers() {
        let store = InMemorySettingsStore::new();
        let watch = store.watch();
        assert_eq!(watch.recv().unwrap().app_name, "VetTrack");

        store
            .update(SettingsForm {
                app_name: "Paws Clinic".into(),
                currency: "Rs".into(),
                payment_gateway: Default::default(),
            })
            .unwrap();

        assert_eq!(watch.recv().unwrap().app_name, "Paws Clinic");
        assert_eq!(store.load().unwrap().currency, "Rs");
    }

    #[test]
    fn invalid_form_leaves_settings_untouched() {
        let store = InMemorySettingsStore::new();
        let err = store.update(SettingsForm::default()).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.load().unwrap().app_name, "VetTrack");
    }
}
