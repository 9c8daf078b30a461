use crate::commands::transcription::PipelineState;
use crate::error::{AppError, Result};
use crate::export;
use crate::transcription::ActiveResult;
use std::path::PathBuf;
use tauri::State;
use tauri_plugin_clipboard_manager::ClipboardExt;

fn active_result(pipeline: &PipelineState) -> Result<ActiveResult> {
    pipeline
        .0
        .active()
        .ok_or_else(|| AppError::NotFound("No hay una transcripci\u{f3}n activa".into()))
}

#[tauri::command]
pub fn export_to_txt(pipeline: State<'_, PipelineState>, path: String) -> Result<()> {
    let active = active_result(&pipeline)?;
    export::export_to_txt(&active.result.transcription, &PathBuf::from(path))
}

#[tauri::command]
pub fn export_to_srt(pipeline: State<'_, PipelineState>, path: String) -> Result<()> {
    let active = active_result(&pipeline)?;
    export::export_to_srt(&active.result.segments, &PathBuf::from(path))
}

#[tauri::command]
pub fn export_to_doc(pipeline: State<'_, PipelineState>, path: String) -> Result<()> {
    let active = active_result(&pipeline)?;
    export::export_to_doc(
        &active.result.transcription,
        &active.file_name,
        &PathBuf::from(path),
    )
}

#[tauri::command]
pub fn copy_to_clipboard(app: tauri::AppHandle, text: String) -> Result<()> {
    app.clipboard()
        .write_text(text)
        .map_err(|e| AppError::Export(e.to_string()))
}
