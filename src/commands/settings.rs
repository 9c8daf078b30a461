use crate::error::Result;
use crate::storage::{self, Settings, Theme};
use tauri::Emitter;

pub const THEME_CHANGED_EVENT: &str = "theme-changed";

#[tauri::command]
pub fn get_settings() -> Result<Settings> {
    storage::with_db(storage::get_settings)
}

#[tauri::command]
pub fn update_settings(settings: Settings) -> Result<()> {
    storage::with_db(|conn| storage::update_settings(conn, &settings))
}

/// Flip the persisted theme and tell the webview, which swaps the marker
/// class on the document root.
#[tauri::command]
pub fn toggle_theme(app: tauri::AppHandle) -> Result<Theme> {
    let next = storage::with_db(|conn| {
        let next = storage::get_settings(conn)?.theme.toggle();
        storage::set_theme(conn, next)?;
        Ok(next)
    })?;
    let _ = app.emit(THEME_CHANGED_EVENT, next);
    Ok(next)
}
