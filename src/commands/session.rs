use crate::error::Result;
use crate::session::{Identity, Session, SessionManager};
use std::sync::Arc;
use tauri::State;

pub struct SessionState(pub Arc<SessionManager>);

#[tauri::command]
pub fn get_session(state: State<'_, SessionState>) -> Session {
    state.0.current()
}

/// Login failures come back as an error string for a transient notification;
/// the session stays anonymous.
#[tauri::command]
pub async fn login(
    state: State<'_, SessionState>,
    email: String,
    password: String,
) -> Result<Identity> {
    state.0.login(&email, &password).await
}

#[tauri::command]
pub fn logout(state: State<'_, SessionState>) {
    state.0.logout();
}
