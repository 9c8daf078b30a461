pub mod store;
pub mod watcher;

pub use store::HistoryStore;
pub use watcher::HistoryWatcher;

use serde::Serialize;

/// One persisted record linking a user to a past transcription. Created
/// once, never mutated; deletion only happens through the bulk clear.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub user_id: String,
    pub filename: String,
    pub text: String,
    /// RFC3339 creation timestamp as stored.
    pub created_at: String,
}

/// What the webview renders for the history list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySnapshot {
    pub loading: bool,
    pub entries: Vec<HistoryEntry>,
}

impl HistorySnapshot {
    pub fn empty() -> Self {
        Self {
            loading: false,
            entries: Vec::new(),
        }
    }

    pub fn loading() -> Self {
        Self {
            loading: true,
            entries: Vec::new(),
        }
    }

    pub fn ready(entries: Vec<HistoryEntry>) -> Self {
        Self {
            loading: false,
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_is_not_loading() {
        let snapshot = HistorySnapshot::empty();
        assert!(!snapshot.loading);
        assert!(snapshot.entries.is_empty());
    }

    #[test]
    fn test_ready_snapshot_keeps_store_order() {
        let entries = vec![
            HistoryEntry {
                id: "b".into(),
                user_id: "u1".into(),
                filename: "second.mp3".into(),
                text: "".into(),
                created_at: "2026-08-02T00:00:00Z".into(),
            },
            HistoryEntry {
                id: "a".into(),
                user_id: "u1".into(),
                filename: "first.mp3".into(),
                text: "".into(),
                created_at: "2026-08-01T00:00:00Z".into(),
            },
        ];
        let snapshot = HistorySnapshot::ready(entries.clone());
        // Newest-first as delivered; no client-side reordering.
        assert_eq!(snapshot.entries, entries);
    }
}
