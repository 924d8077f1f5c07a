//! Persistence boundary and on-device cache.
//!
//! The remote store is a collaborator reached through [`ResumeStore`];
//! the [`cache::LocalCache`] mirrors the same data on device so the app
//! is usable before (or without) any remote round trip. The explicit
//! save-on-change ordering lives in [`sync`].

mod cache;
pub mod sync;

pub use cache::LocalCache;

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::generate::ResumeForm;

/// One user's persisted resume state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub form_data: ResumeForm,
    pub resume_content: String,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ResumeRecord {
    /// Build a record stamped with the current time.
    pub fn new(form_data: ResumeForm, resume_content: impl Into<String>) -> Self {
        Self {
            form_data,
            resume_content: resume_content.into(),
            updated_at: Some(Utc::now()),
        }
    }
}

/// The remote persistence collaborator, keyed by user identity.
///
/// An absent document is not an error: `load` returns `Ok(None)` and
/// callers treat it as empty state. Implementations map "not found" and
/// "permission denied" reads to `Ok(None)` themselves; only genuine
/// failures surface as `Error::Persistence`.
pub trait ResumeStore {
    fn load(&self, user_id: &str) -> Result<Option<ResumeRecord>>;
    fn save(&self, user_id: &str, record: &ResumeRecord) -> Result<()>;
}

/// In-memory store for tests and offline use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, ResumeRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResumeStore for MemoryStore {
    fn load(&self, user_id: &str) -> Result<Option<ResumeRecord>> {
        let records = self
            .records
            .lock()
            .map_err(|_| crate::Error::Persistence("store lock poisoned".to_string()))?;
        Ok(records.get(user_id).cloned())
    }

    fn save(&self, user_id: &str, record: &ResumeRecord) -> Result<()> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| crate::Error::Persistence("store lock poisoned".to_string()))?;
        records.insert(user_id.to_string(), record.clone());
        Ok(())
    }
}
