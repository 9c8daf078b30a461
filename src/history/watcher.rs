//! Live history subscription.
//!
//! One polling task per signed-in identity, emitting `history-changed`
//! events to the webview. Changing identity (including to none) tears the
//! previous task down first, so a watcher for a prior or foreign identity
//! never delivers again.

use crate::history::store::HistoryStore;
use crate::history::{HistoryEntry, HistorySnapshot};
use crate::session::SessionManager;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tauri::{AppHandle, Emitter};
use tracing::{debug, warn};

pub const HISTORY_CHANGED_EVENT: &str = "history-changed";
const POLL_INTERVAL: Duration = Duration::from_secs(5);

struct WatcherTask {
    uid: String,
    handle: tauri::async_runtime::JoinHandle<()>,
}

#[derive(Default)]
pub struct HistoryWatcher {
    current: Mutex<Option<WatcherTask>>,
}

impl HistoryWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the subscription at `uid`, or at nobody. Idempotent for an
    /// unchanged uid; any previous task is aborted before the new one starts.
    pub fn set_user(
        &self,
        app: AppHandle,
        store: Arc<HistoryStore>,
        sessions: Arc<SessionManager>,
        uid: Option<String>,
    ) {
        let mut current = self.current.lock();

        if let (Some(task), Some(new_uid)) = (current.as_ref(), uid.as_deref()) {
            if task.uid == new_uid {
                return;
            }
        }

        if let Some(task) = current.take() {
            debug!("Tearing down history subscription for uid={}", task.uid);
            task.handle.abort();
        }

        let Some(uid) = uid else {
            // No session: immediately-empty, non-loading snapshot.
            emit_snapshot(&app, HistorySnapshot::empty());
            return;
        };

        debug!("Starting history subscription for uid={}", uid);
        let handle = tauri::async_runtime::spawn(poll_loop(
            app,
            store,
            sessions,
            uid.clone(),
        ));
        *current = Some(WatcherTask { uid, handle });
    }
}

/// Collapses successive poll outcomes into the snapshots worth emitting.
/// An unchanged list emits nothing; a failed poll keeps the last good list,
/// except that a failure before any success emits an empty ready snapshot
/// so the pane does not stay on its loading indicator.
#[derive(Default)]
struct SnapshotTracker {
    last: Option<Vec<HistoryEntry>>,
}

impl SnapshotTracker {
    fn on_poll(&mut self, outcome: Option<Vec<HistoryEntry>>) -> Option<HistorySnapshot> {
        match outcome {
            Some(entries) => {
                if self.last.as_ref() == Some(&entries) {
                    return None;
                }
                self.last = Some(entries.clone());
                Some(HistorySnapshot::ready(entries))
            }
            None if self.last.is_none() => {
                self.last = Some(Vec::new());
                Some(HistorySnapshot::ready(Vec::new()))
            }
            None => None,
        }
    }
}

async fn poll_loop(
    app: AppHandle,
    store: Arc<HistoryStore>,
    sessions: Arc<SessionManager>,
    uid: String,
) {
    emit_snapshot(&app, HistorySnapshot::loading());

    let mut tracker = SnapshotTracker::default();
    loop {
        let outcome = match sessions.id_token() {
            Some(token) => match store.list(&token, &uid).await {
                Ok(entries) => Some(entries),
                Err(e) => {
                    warn!("History poll failed: {}", e);
                    None
                }
            },
            None => {
                warn!("History poll skipped: no access token");
                None
            }
        };

        if let Some(snapshot) = tracker.on_poll(outcome) {
            emit_snapshot(&app, snapshot);
        }

        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

fn emit_snapshot(app: &AppHandle, snapshot: HistorySnapshot) {
    if let Err(e) = app.emit(HISTORY_CHANGED_EVENT, snapshot) {
        warn!("Could not emit history snapshot: {}", e);
    }
}
