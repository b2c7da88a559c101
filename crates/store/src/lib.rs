//! `vettrack-store` — tenant-scoped record access.
//!
//! Every page talks to the backing document database through this layer:
//! typed create/get/list per collection, plus live `watch` subscriptions that
//! re-deliver the full matching set on every change (replace-on-change, never
//! a diff). Tenant scoping is structural — no caller can opt out of it.
//!
//! The in-memory implementations here double as the local snapshot cache and
//! the test substitute for the managed store.

pub mod collection;
pub mod error;
pub mod settings;
pub mod subscription;
pub mod users;

pub use collection::{InMemoryStore, RecordStore};
pub use error::StoreError;
pub use settings::{InMemorySettingsStore, SettingsStore};
pub use subscription::WatchHandle;
pub use users::{InMemoryUserDirectory, UserDirectory};
