//! Word-compatible export.
//!
//! Not a real binary Word file: a minimal UTF-8 HTML document saved with a
//! `.doc` suffix, which word processors open and render. Paragraph breaks
//! follow newline boundaries in the transcript.

use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Build the HTML document wrapping the transcript.
pub fn render_doc(text: &str, filename: &str) -> String {
    let title = escape_html(filename);
    let paragraphs: String = text
        .split('\n')
        .map(|line| format!("    <p>{}</p>\n", escape_html(line)))
        .collect();

    format!(
        "<!DOCTYPE html>\n<html>\n  <head>\n    <meta charset=\"utf-8\">\n    \
         <title>{title}</title>\n  </head>\n  <body>\n    <h1>Transcripci\u{f3}n: {title}</h1>\n\
         {paragraphs}  </body>\n</html>\n"
    )
}

pub fn export_to_doc(text: &str, filename: &str, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(render_doc(text, filename).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_split_at_newlines() {
        let html = render_doc("uno\ndos", "audio.mp3");
        assert!(html.contains("<p>uno</p>"));
        assert!(html.contains("<p>dos</p>"));
    }

    #[test]
    fn test_title_is_filename() {
        let html = render_doc("texto", "reunion.mp3");
        assert!(html.contains("<title>reunion.mp3</title>"));
    }

    #[test]
    fn test_utf8_declared() {
        assert!(render_doc("", "a").contains("<meta charset=\"utf-8\">"));
    }

    #[test]
    fn test_markup_characters_escaped() {
        let html = render_doc("a < b & c", "x<y.mp3");
        assert!(html.contains("<p>a &lt; b &amp; c</p>"));
        assert!(html.contains("<title>x&lt;y.mp3</title>"));
    }
}
