//! Speaker grouping for diarized transcripts.
//!
//! Consecutive segments attributed to the same speaker collapse into a single
//! turn. Adjacency is decided purely by speaker label equality; the elapsed
//! time between segments is not consulted.

use crate::transcription::result::Segment;
use serde::Serialize;

/// A run of consecutive segments from one speaker, merged into a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeakerTurn {
    pub speaker: Option<String>,
    pub start: f64,
    pub end: f64,
    pub text: String,
}

pub fn group_by_speaker(segments: &[Segment]) -> Vec<SpeakerTurn> {
    let mut turns: Vec<SpeakerTurn> = Vec::new();

    for segment in segments {
        match turns.last_mut() {
            Some(turn) if turn.speaker == segment.speaker => {
                if !turn.text.is_empty() && !segment.text.trim().is_empty() {
                    turn.text.push(' ');
                }
                turn.text.push_str(segment.text.trim());
                turn.end = segment.end;
            }
            _ => turns.push(SpeakerTurn {
                speaker: segment.speaker.clone(),
                start: segment.start,
                end: segment.end,
                text: segment.text.trim().to_string(),
            }),
        }
    }

    turns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: f64, end: f64, text: &str, speaker: Option<&str>) -> Segment {
        Segment {
            start,
            end,
            text: text.to_string(),
            speaker: speaker.map(String::from),
        }
    }

    #[test]
    fn test_consecutive_same_speaker_merges() {
        let segments = vec![
            seg(0.0, 1.0, "hola", Some("A")),
            seg(1.0, 2.0, "mundo", Some("A")),
            seg(2.0, 3.0, "adios", Some("B")),
        ];
        let turns = group_by_speaker(&segments);
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].text, "hola mundo");
        assert_eq!(turns[0].start, 0.0);
        assert_eq!(turns[0].end, 2.0);
        assert_eq!(turns[1].speaker.as_deref(), Some("B"));
    }

    #[test]
    fn test_alternating_speakers_never_merge() {
        let segments = vec![
            seg(0.0, 1.0, "a", Some("A")),
            seg(1.0, 2.0, "b", Some("B")),
            seg(2.0, 3.0, "c", Some("A")),
        ];
        let turns = group_by_speaker(&segments);
        assert_eq!(turns.len(), segments.len());
    }

    #[test]
    fn test_time_gap_does_not_break_a_turn() {
        // Same speaker across a long silence still merges; adjacency is by
        // label equality only.
        let segments = vec![
            seg(0.0, 1.0, "before", Some("A")),
            seg(60.0, 61.0, "after", Some("A")),
        ];
        let turns = group_by_speaker(&segments);
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].end, 61.0);
    }

    #[test]
    fn test_grouped_count_never_exceeds_input() {
        let segments = vec![
            seg(0.0, 1.0, "a", Some("A")),
            seg(1.0, 2.0, "b", Some("A")),
            seg(2.0, 3.0, "c", Some("B")),
            seg(3.0, 4.0, "d", Some("B")),
        ];
        let turns = group_by_speaker(&segments);
        assert!(turns.len() <= segments.len());
        assert_eq!(turns.len(), 2);
    }

    #[test]
    fn test_unlabelled_segments_group_together() {
        let segments = vec![seg(0.0, 1.0, "a", None), seg(1.0, 2.0, "b", None)];
        let turns = group_by_speaker(&segments);
        assert_eq!(turns.len(), 1);
        assert!(turns[0].speaker.is_none());
    }

    #[test]
    fn test_empty_input_yields_no_turns() {
        assert!(group_by_speaker(&[]).is_empty());
    }
}
