//! One JSON array per local-storage key; the whole list is rewritten on
//! every mutation so memory and storage never diverge.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// User-authored predictions (see `SavedPrediction`).
pub const SAVED_PREDICTIONS_KEY: &str = "predictions";
/// Server-acknowledged submissions (see `SubmittedPrediction`).
pub const SUBMITTED_PREDICTIONS_KEY: &str = "savedPredictions";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Missing key, unreadable storage, or stale JSON all load as empty.
pub fn load_list<T: DeserializeOwned>(key: &str) -> Vec<T> {
    let Some(store) = local_storage() else {
        return Vec::new();
    };
    let Ok(Some(raw)) = store.get_item(key) else {
        return Vec::new();
    };
    serde_json::from_str(&raw).unwrap_or_default()
}

pub fn store_list<T: Serialize>(key: &str, items: &[T]) {
    if let Some(store) = local_storage() {
        if let Ok(raw) = serde_json::to_string(items) {
            let _ = store.set_item(key, &raw);
        }
    }
}
