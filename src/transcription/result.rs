use serde::{Deserialize, Serialize};

/// A time-bounded slice of the transcript, optionally attributed to a speaker.
///
/// Times are floating-point seconds as delivered by the service; ordering is
/// chronological by start time and never changed client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

/// Parsed body of a successful `/transcribe` response.
///
/// Everything beyond `transcription` is optional on the wire; missing fields
/// default instead of erroring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptionResult {
    pub transcription: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default, alias = "speaker_count")]
    pub speaker_count: usize,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, alias = "duration")]
    pub duration_secs: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_body_defaults_optionals() {
        let result: TranscriptionResult =
            serde_json::from_str(r#"{"transcription":"hola mundo"}"#).unwrap();
        assert_eq!(result.transcription, "hola mundo");
        assert!(result.segments.is_empty());
        assert_eq!(result.speaker_count, 0);
        assert!(result.language.is_none());
    }

    #[test]
    fn test_full_body_parses_segments() {
        let body = r#"{
            "transcription": "hola mundo",
            "language": "es",
            "duration": 3.5,
            "speaker_count": 2,
            "segments": [
                {"start": 0.0, "end": 1.5, "text": "hola", "speaker": "SPEAKER_00"},
                {"start": 1.5, "end": 3.5, "text": "mundo"}
            ]
        }"#;
        let result: TranscriptionResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.segments.len(), 2);
        assert_eq!(result.speaker_count, 2);
        assert_eq!(result.segments[0].speaker.as_deref(), Some("SPEAKER_00"));
        assert!(result.segments[1].speaker.is_none());
        assert_eq!(result.duration_secs, Some(3.5));
    }
}
