//! Submission lifecycle for the upload-to-result pipeline.
//!
//! Exactly one result is live at a time. Starting a submission clears the
//! previous result and bumps a monotonic generation counter; a completion is
//! only installed while its generation is still current, so a slow response
//! that was superseded by a newer submission is dropped instead of
//! overwriting fresher state.

use crate::transcription::result::TranscriptionResult;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveResult {
    pub file_name: String,
    pub result: TranscriptionResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// What a finished submission should report back to its caller.
#[derive(Debug, Clone)]
pub enum Completion {
    /// The submission was still the latest one; its result is now live.
    Installed(ActiveResult),
    /// A newer submission started while this one was in flight. The stale
    /// result was dropped; the live one (possibly none yet) is carried so
    /// the caller reports that instead.
    Superseded(Option<ActiveResult>),
}

#[derive(Default)]
pub struct Pipeline {
    generation: AtomicU64,
    active: Mutex<Option<ActiveResult>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a submission: clear the live result and hand out the token the
    /// eventual completion must present.
    pub fn begin(&self) -> Generation {
        let gen = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.active.lock().take();
        Generation(gen)
    }

    /// Install a completed result. When a newer submission has started since
    /// `token` was issued, nothing is installed and the caller gets the live
    /// result instead of its own.
    pub fn complete(
        &self,
        token: Generation,
        file_name: String,
        result: TranscriptionResult,
    ) -> Completion {
        if self.generation.load(Ordering::SeqCst) != token.0 {
            info!("Dropping stale transcription result for {}", file_name);
            return Completion::Superseded(self.active());
        }
        let active = ActiveResult { file_name, result };
        *self.active.lock() = Some(active.clone());
        Completion::Installed(active)
    }

    pub fn active(&self) -> Option<ActiveResult> {
        self.active.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_text(text: &str) -> TranscriptionResult {
        TranscriptionResult {
            transcription: text.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_begin_clears_previous_result() {
        let pipeline = Pipeline::new();
        let gen = pipeline.begin();
        let completion = pipeline.complete(gen, "a.mp3".into(), result_with_text("first"));
        assert!(matches!(completion, Completion::Installed(_)));
        assert!(pipeline.active().is_some());

        pipeline.begin();
        assert!(pipeline.active().is_none());
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let pipeline = Pipeline::new();
        let old = pipeline.begin();
        let new = pipeline.begin();

        let completion = pipeline.complete(new, "new.mp3".into(), result_with_text("fresh"));
        assert!(matches!(completion, Completion::Installed(_)));
        // Slow response from the superseded submission arrives afterwards.
        let completion = pipeline.complete(old, "old.mp3".into(), result_with_text("stale"));
        assert!(matches!(completion, Completion::Superseded(_)));

        let active = pipeline.active().unwrap();
        assert_eq!(active.file_name, "new.mp3");
        assert_eq!(active.result.transcription, "fresh");
    }

    #[test]
    fn test_superseded_completion_reports_live_result_not_its_own() {
        let pipeline = Pipeline::new();
        let old = pipeline.begin();
        let new = pipeline.begin();
        pipeline.complete(new, "new.mp3".into(), result_with_text("fresh"));

        match pipeline.complete(old, "old.mp3".into(), result_with_text("stale")) {
            Completion::Superseded(Some(live)) => {
                assert_eq!(live.file_name, "new.mp3");
                assert_eq!(live.result.transcription, "fresh");
            }
            other => panic!("expected the newer live result, got {:?}", other),
        }
    }

    #[test]
    fn test_superseded_completion_before_newer_finishes_reports_nothing() {
        let pipeline = Pipeline::new();
        let old = pipeline.begin();
        pipeline.begin();

        let completion = pipeline.complete(old, "old.mp3".into(), result_with_text("stale"));
        assert!(matches!(completion, Completion::Superseded(None)));
        assert!(pipeline.active().is_none());
    }

    #[test]
    fn test_result_fully_replaced_on_new_completion() {
        let pipeline = Pipeline::new();
        let gen = pipeline.begin();
        let mut first = result_with_text("first");
        first.segments.push(crate::transcription::Segment {
            start: 0.0,
            end: 1.0,
            text: "first".into(),
            speaker: None,
        });
        pipeline.complete(gen, "a.mp3".into(), first);

        let gen = pipeline.begin();
        pipeline.complete(gen, "b.mp3".into(), result_with_text("second"));

        let active = pipeline.active().unwrap();
        assert_eq!(active.result.transcription, "second");
        assert!(active.result.segments.is_empty());
    }
}
