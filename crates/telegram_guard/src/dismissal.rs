//! Durable "continue anyway" record.
//!
//! The guard writes a JSON `true` under the configured key, but any non-empty value found there
//! suppresses the prompt. Storage is best-effort in both directions: read failures count as "not
//! dismissed" and write failures are only logged. The guard never deletes the record.

use leptos::logging;
use platform_host::{save_pref_with, PrefsStore};

/// Returns whether a non-empty dismissal record exists under `key`.
pub fn is_dismissed<S: PrefsStore + ?Sized>(store: &S, key: &str) -> bool {
    match store.load_pref(key) {
        Ok(raw) => matches!(raw, Some(value) if !value.is_empty()),
        Err(err) => {
            logging::warn!("telegram guard dismissal read failed for `{key}`: {err}");
            false
        }
    }
}

/// Writes the dismissal record under `key`.
pub fn record_dismissal<S: PrefsStore + ?Sized>(store: &S, key: &str) {
    if let Err(err) = save_pref_with(store, key, &true) {
        logging::warn!("telegram guard dismissal write failed for `{key}`: {err}");
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{MemoryPrefsStore, NoopPrefsStore};

    use super::*;

    const KEY: &str = "telegram-browser-dismissed";

    struct BrokenPrefsStore;

    impl PrefsStore for BrokenPrefsStore {
        fn load_pref(&self, _key: &str) -> Result<Option<String>, String> {
            Err("localStorage unavailable".to_string())
        }

        fn save_pref(&self, _key: &str, _raw_json: &str) -> Result<(), String> {
            Err("quota exceeded".to_string())
        }
    }

    #[test]
    fn record_writes_bare_true_literal() {
        let store = MemoryPrefsStore::default();
        assert!(!is_dismissed(&store, KEY));

        record_dismissal(&store, KEY);
        assert_eq!(store.load_pref(KEY).expect("load"), Some("true".to_string()));
        assert!(is_dismissed(&store, KEY));
    }

    #[test]
    fn record_is_idempotent() {
        let store = MemoryPrefsStore::default();
        record_dismissal(&store, KEY);
        record_dismissal(&store, KEY);
        assert_eq!(store.snapshot().len(), 1);
        assert!(is_dismissed(&store, KEY));
    }

    #[test]
    fn any_non_empty_record_counts() {
        let store = MemoryPrefsStore::default();
        for raw in ["true", "1", "yes", "false", "True", "\"true\"", " true "] {
            store.save_pref(KEY, raw).expect("seed");
            assert!(is_dismissed(&store, KEY), "{raw} should count");
        }
    }

    #[test]
    fn empty_record_counts_as_absent() {
        let store = MemoryPrefsStore::default();
        store.save_pref(KEY, "").expect("seed");
        assert!(!is_dismissed(&store, KEY));
    }

    #[test]
    fn storage_failures_degrade_silently() {
        assert!(!is_dismissed(&BrokenPrefsStore, KEY));
        record_dismissal(&BrokenPrefsStore, KEY);

        record_dismissal(&NoopPrefsStore, KEY);
        assert!(!is_dismissed(&NoopPrefsStore, KEY));
    }

    #[test]
    fn works_through_trait_objects() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;
        record_dismissal(store_obj, KEY);
        assert!(is_dismissed(store_obj, KEY));
    }
}
