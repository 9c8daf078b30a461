mod commands;
mod error;
mod export;
mod history;
mod session;
mod storage;
mod transcription;

use commands::{ClientState, HistoryState, PipelineState, SessionState};
use history::{HistoryStore, HistoryWatcher};
use session::auth::AuthClient;
use session::SessionManager;
use std::fs::File;
use std::sync::Arc;
use tauri::{Emitter, Manager};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use transcription::{Pipeline, TranscriberClient};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Logging to both console and file
    let log_file = File::create(std::env::temp_dir().join("transcriba.log"))
        .expect("Failed to create log file");

    tracing_subscriber::registry()
        .with(fmt::layer()) // Console output
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(log_file)),
        ) // File output
        .with(
            EnvFilter::from_default_env()
                .add_directive("transcriba_lib=debug".parse().unwrap()),
        )
        .init();

    info!("Starting Transcriba...");

    if let Err(e) = storage::init_database() {
        eprintln!("Failed to initialize database: {}", e);
    }

    let sessions = Arc::new(SessionManager::new(AuthClient::new()));
    let store = Arc::new(HistoryStore::new());

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_fs::init())
        .plugin(tauri_plugin_clipboard_manager::init())
        .manage(ClientState(TranscriberClient::new()))
        .manage(PipelineState(Pipeline::new()))
        .manage(SessionState(sessions.clone()))
        .manage(HistoryState {
            store: store.clone(),
            watcher: HistoryWatcher::new(),
        })
        .setup(move |app| {
            let handle = app.handle().clone();

            // Resolve the initial Unknown state from the persisted session.
            let restore_sessions = sessions.clone();
            tauri::async_runtime::spawn(async move {
                restore_sessions.restore().await;
            });

            // Push every session transition to the webview and keep the
            // history subscription pointed at whoever is signed in.
            tauri::async_runtime::spawn(async move {
                let mut rx = sessions.subscribe();
                loop {
                    let current = rx.borrow_and_update().clone();
                    if let Err(e) = handle.emit(session::SESSION_CHANGED_EVENT, &current) {
                        warn!("Could not emit session state: {}", e);
                    }
                    let uid = current.user_id().map(String::from);
                    let history = handle.state::<HistoryState>();
                    history
                        .watcher
                        .set_user(handle.clone(), store.clone(), sessions.clone(), uid);
                    if rx.changed().await.is_err() {
                        break;
                    }
                }
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Transcription commands
            commands::transcribe_file,
            commands::get_active_result,
            commands::get_speaker_turns,
            // Session commands
            commands::get_session,
            commands::login,
            commands::logout,
            // History commands
            commands::list_history,
            commands::clear_history,
            // Settings commands
            commands::get_settings,
            commands::update_settings,
            commands::toggle_theme,
            // Export commands
            commands::export_to_txt,
            commands::export_to_srt,
            commands::export_to_doc,
            commands::copy_to_clipboard,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
