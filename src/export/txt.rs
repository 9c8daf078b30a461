use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Raw transcript bytes, verbatim. No header, no trailing newline added.
pub fn export_to_txt(text: &str, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_txt_is_verbatim() {
        let dir = std::env::temp_dir().join("transcriba-txt-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.txt");

        export_to_txt("hola\nmundo", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hola\nmundo");
    }
}
