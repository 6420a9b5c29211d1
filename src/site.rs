use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// Tells GitHub Pages to serve the directory as-is.
pub const MARKER_FILE: &str = ".nojekyll";
pub const DOCUMENT_FILE: &str = "index.html";

/// Create the output directory if needed and write the empty marker file.
pub fn write_marker(out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;
    let path = out_dir.join(MARKER_FILE);
    fs::write(&path, "").with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

pub fn write_document(out_dir: &Path, html: &str) -> Result<PathBuf> {
    let path = out_dir.join(DOCUMENT_FILE);
    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} ({} bytes)", path.display(), html.len());
    Ok(path)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_is_empty_and_truncates() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MARKER_FILE), "stale").unwrap();
        let path = write_marker(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), ".nojekyll");
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn marker_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("site/public");
        write_marker(&nested).unwrap();
        assert!(nested.join(MARKER_FILE).is_file());
    }

    #[test]
    fn document_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_document(dir.path(), "<p>電話帳</p>").unwrap();
        assert_eq!(path.file_name().unwrap(), "index.html");
        assert_eq!(fs::read_to_string(path).unwrap(), "<p>電話帳</p>");
    }
}
