use crate::commands::history::HistoryState;
use crate::commands::session::SessionState;
use crate::error::{AppError, Result};
use crate::storage;
use crate::transcription::{
    group_by_speaker, ActiveResult, Completion, Pipeline, SpeakerTurn, TranscriberClient,
    UploadRequest,
};
use std::path::PathBuf;
use tauri::State;
use tracing::info;

pub struct ClientState(pub TranscriberClient);
pub struct PipelineState(pub Pipeline);

/// Submit one audio file to the transcription service.
///
/// The previous result is cleared up front; the response is installed only
/// while its submission is still the latest one. A superseded submission
/// reports the live result (possibly none) instead of its own, so the
/// webview never renders stale text. After an installed result, a history
/// record is written fire-and-forget when a session is signed in.
#[tauri::command]
pub async fn transcribe_file(
    client: State<'_, ClientState>,
    pipeline: State<'_, PipelineState>,
    sessions: State<'_, SessionState>,
    history: State<'_, HistoryState>,
    file_path: String,
) -> Result<Option<ActiveResult>> {
    let path = PathBuf::from(&file_path);
    if !path.exists() {
        return Err(AppError::NotFound(format!("File not found: {}", file_path)));
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("audio")
        .to_string();

    info!("Transcribing file: {:?}", path);

    let api_token = storage::with_db(storage::get_settings)?.api_token;
    let upload = UploadRequest::new(file_name.clone(), std::fs::read(&path)?, api_token)?;

    let token = pipeline.0.begin();
    let result = client.0.transcribe(upload).await?;

    match pipeline.0.complete(token, file_name, result) {
        Completion::Installed(active) => {
            if let Some((uid, id_token)) = sessions.0.credentials() {
                let store = history.store.clone();
                let filename = active.file_name.clone();
                let text = active.result.transcription.clone();
                tauri::async_runtime::spawn(async move {
                    store.append(&id_token, &uid, &filename, &text).await;
                });
            }
            Ok(Some(active))
        }
        Completion::Superseded(live) => Ok(live),
    }
}

#[tauri::command]
pub fn get_active_result(pipeline: State<'_, PipelineState>) -> Option<ActiveResult> {
    pipeline.0.active()
}

/// Active result's segments grouped into per-speaker paragraphs, for the
/// diarized view. Empty when there is no active result or no segments.
#[tauri::command]
pub fn get_speaker_turns(pipeline: State<'_, PipelineState>) -> Vec<SpeakerTurn> {
    pipeline
        .0
        .active()
        .map(|active| group_by_speaker(&active.result.segments))
        .unwrap_or_default()
}
