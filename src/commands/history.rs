use crate::commands::session::SessionState;
use crate::error::{AppError, Result};
use crate::history::{HistoryEntry, HistoryStore, HistoryWatcher};
use std::sync::Arc;
use tauri::State;

pub struct HistoryState {
    pub store: Arc<HistoryStore>,
    pub watcher: HistoryWatcher,
}

/// One-shot read of the signed-in user's history, newest first. Without a
/// session this is the empty list, not an error.
#[tauri::command]
pub async fn list_history(
    history: State<'_, HistoryState>,
    sessions: State<'_, SessionState>,
) -> Result<Vec<HistoryEntry>> {
    let Some((uid, token)) = sessions.0.credentials() else {
        return Ok(Vec::new());
    };
    history.store.list(&token, &uid).await
}

/// Bulk-delete the signed-in user's history. Returns the number of entries
/// removed.
#[tauri::command]
pub async fn clear_history(
    history: State<'_, HistoryState>,
    sessions: State<'_, SessionState>,
) -> Result<usize> {
    let Some((uid, token)) = sessions.0.credentials() else {
        return Err(AppError::InvalidState(
            "Inicia sesi\u{f3}n para administrar el historial".into(),
        ));
    };
    history.store.clear(&token, &uid).await
}
