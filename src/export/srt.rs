//! SRT (SubRip) subtitle writer.
//!
//! Blocks are numbered from 1 in segment order. Timestamps are
//! `HH:MM:SS,mmm` with milliseconds truncated (not rounded) from the
//! floating-point seconds; subtitle players are strict about this layout.

use crate::error::{AppError, Result};
use crate::transcription::Segment;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn srt_timestamp(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0) as u64;
    let hours = total_ms / 3_600_000;
    let mins = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;
    format!("{:02}:{:02}:{:02},{:03}", hours, mins, secs, millis)
}

/// Render the segment list as SRT text. Errors when there are no segments:
/// there is nothing meaningful to produce and the caller must tell the user
/// instead of writing an empty file.
pub fn render_srt(segments: &[Segment]) -> Result<String> {
    if segments.is_empty() {
        return Err(AppError::Export(
            "No hay segmentos con marcas de tiempo para exportar a SRT".into(),
        ));
    }

    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        out.push_str(&format!("{}\n", i + 1));
        out.push_str(&format!(
            "{} --> {}\n",
            srt_timestamp(segment.start),
            srt_timestamp(segment.end)
        ));
        out.push_str(segment.text.trim());
        out.push_str("\n\n");
    }
    Ok(out)
}

pub fn export_to_srt(segments: &[Segment], path: &Path) -> Result<()> {
    let content = render_srt(segments)?;
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: f64, end: f64, text: &str) -> Segment {
        Segment {
            start,
            end,
            text: text.to_string(),
            speaker: None,
        }
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(srt_timestamp(0.0), "00:00:00,000");
        assert_eq!(srt_timestamp(1.5), "00:00:01,500");
        assert_eq!(srt_timestamp(3661.25), "01:01:01,250");
    }

    #[test]
    fn test_milliseconds_truncate_not_round() {
        // 1.9996s rounds to 2.000 but must truncate to 1,999.
        assert_eq!(srt_timestamp(1.9996), "00:00:01,999");
    }

    #[test]
    fn test_block_layout() {
        let content = render_srt(&[seg(1.5, 3.2, "hi")]).unwrap();
        assert_eq!(content, "1\n00:00:01,500 --> 00:00:03,200\nhi\n\n");
    }

    #[test]
    fn test_one_block_per_segment_in_order() {
        let content = render_srt(&[seg(0.0, 1.0, "uno"), seg(1.0, 2.0, "dos")]).unwrap();
        let blocks: Vec<&str> = content.trim_end().split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("1\n"));
        assert!(blocks[1].starts_with("2\n"));
        assert!(blocks[0].ends_with("uno"));
        assert!(blocks[1].ends_with("dos"));
    }

    #[test]
    fn test_empty_segments_refused() {
        assert!(render_srt(&[]).is_err());
    }
}
