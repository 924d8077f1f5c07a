//! Explicit save-on-change synchronization between store and cache.
//!
//! Ordering contract: the cache is read first at startup so the UI has
//! data before any remote call resolves; a successful remote load then
//! overwrites the cache. On change, the cache is always written and the
//! remote save is best-effort. Remote failures degrade the session to
//! cache-only operation instead of surfacing to the user.

use log::{info, warn};

use super::{LocalCache, ResumeRecord, ResumeStore};
use crate::error::Result;
use crate::generate::ResumeForm;

/// The working state loaded for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub form: ResumeForm,
    pub content: String,
    /// False when the remote store failed and only cached data is live.
    pub remote_synced: bool,
}

/// Load session state: cache first, then the remote store.
///
/// A found remote record wins and is mirrored back into the cache; an
/// absent record resets both to defaults (not an error); a store failure
/// is logged and the cached state is kept.
pub fn startup_load(store: &dyn ResumeStore, cache: &LocalCache, user_id: &str) -> SessionState {
    let mut state = SessionState {
        form: cache.load_form(),
        content: cache.load_content(),
        remote_synced: false,
    };

    match store.load(user_id) {
        Ok(Some(record)) => {
            if let Err(err) = cache.save_form(&record.form_data) {
                warn!("failed to mirror remote form to cache: {err}");
            }
            if let Err(err) = cache.save_content(&record.resume_content) {
                warn!("failed to mirror remote content to cache: {err}");
            }
            state.form = record.form_data;
            state.content = record.resume_content;
            state.remote_synced = true;
        }
        Ok(None) => {
            info!("no stored resume for {user_id}, starting from defaults");
            state = SessionState {
                form: ResumeForm::default(),
                content: String::new(),
                remote_synced: true,
            };
            if let Err(err) = cache.save_form(&state.form) {
                warn!("failed to reset cached form: {err}");
            }
            if let Err(err) = cache.save_content(&state.content) {
                warn!("failed to reset cached content: {err}");
            }
        }
        Err(err) => {
            // Degrade to cache-only; the session stays usable.
            warn!("remote load failed, using cached data: {err}");
        }
    }

    state
}

/// Persist a change: cache unconditionally, remote best-effort.
///
/// The cache write is the one that must succeed; a remote failure is
/// logged and reported through the returned state, not raised.
pub fn save_all(
    store: &dyn ResumeStore,
    cache: &LocalCache,
    user_id: &str,
    form: &ResumeForm,
    content: &str,
) -> Result<SessionState> {
    cache.save_form(form)?;
    cache.save_content(content)?;

    let record = ResumeRecord::new(form.clone(), content);
    let remote_synced = match store.save(user_id, &record) {
        Ok(()) => true,
        Err(err) => {
            warn!("remote save failed, continuing with cache only: {err}");
            false
        }
    };

    Ok(SessionState {
        form: form.clone(),
        content: content.to_string(),
        remote_synced,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::store::MemoryStore;
    use tempfile::tempdir;

    struct FailingStore;

    impl ResumeStore for FailingStore {
        fn load(&self, _user_id: &str) -> Result<Option<ResumeRecord>> {
            Err(Error::Persistence("backend unavailable".to_string()))
        }

        fn save(&self, _user_id: &str, _record: &ResumeRecord) -> Result<()> {
            Err(Error::Persistence("backend unavailable".to_string()))
        }
    }

    fn named_form(name: &str) -> ResumeForm {
        ResumeForm {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_startup_remote_overwrites_cache() {
        let dir = tempdir().unwrap();
        let cache = LocalCache::open(dir.path()).unwrap();
        cache.save_form(&named_form("Stale")).unwrap();

        let store = MemoryStore::new();
        store
            .save("u1", &ResumeRecord::new(named_form("Fresh"), "CONTENT"))
            .unwrap();

        let state = startup_load(&store, &cache, "u1");
        assert_eq!(state.form.name, "Fresh");
        assert_eq!(state.content, "CONTENT");
        assert!(state.remote_synced);
        assert_eq!(cache.load_form().name, "Fresh");
    }

    #[test]
    fn test_startup_absent_record_resets_to_defaults() {
        let dir = tempdir().unwrap();
        let cache = LocalCache::open(dir.path()).unwrap();
        cache.save_content("leftover").unwrap();

        let state = startup_load(&MemoryStore::new(), &cache, "u1");
        assert_eq!(state, SessionState {
            form: ResumeForm::default(),
            content: String::new(),
            remote_synced: true,
        });
        assert_eq!(cache.load_content(), "");
    }

    #[test]
    fn test_startup_store_failure_keeps_cache() {
        let dir = tempdir().unwrap();
        let cache = LocalCache::open(dir.path()).unwrap();
        cache.save_form(&named_form("Cached")).unwrap();
        cache.save_content("cached content").unwrap();

        let state = startup_load(&FailingStore, &cache, "u1");
        assert_eq!(state.form.name, "Cached");
        assert_eq!(state.content, "cached content");
        assert!(!state.remote_synced);
    }

    #[test]
    fn test_save_all_remote_failure_is_non_fatal() {
        let dir = tempdir().unwrap();
        let cache = LocalCache::open(dir.path()).unwrap();

        let state = save_all(&FailingStore, &cache, "u1", &named_form("Jane"), "text").unwrap();
        assert!(!state.remote_synced);
        assert_eq!(cache.load_form().name, "Jane");
        assert_eq!(cache.load_content(), "text");
    }

    #[test]
    fn test_save_all_stamps_updated_at() {
        let dir = tempdir().unwrap();
        let cache = LocalCache::open(dir.path()).unwrap();
        let store = MemoryStore::new();

        save_all(&store, &cache, "u1", &named_form("Jane"), "text").unwrap();
        let record = store.load("u1").unwrap().unwrap();
        assert!(record.updated_at.is_some());
    }
}
