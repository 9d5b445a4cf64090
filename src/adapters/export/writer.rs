//! Filesystem writer for exported documents.
//!
//! The browser original triggered a download; the terminal front end drops
//! the document into a directory instead.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::ports::{ExportError, ExportedDocument};

/// Writes the document into `directory`, creating it if needed.
///
/// Returns the full path of the written file.
pub fn write_document(
    document: &ExportedDocument,
    directory: &Path,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(directory).map_err(|e| {
        ExportError::io_error(format!("cannot create {}: {}", directory.display(), e))
    })?;
    let path = directory.join(&document.filename);
    fs::write(&path, &document.content)
        .map_err(|e| ExportError::io_error(format!("cannot write {}: {}", path.display(), e)))?;
    info!(path = %path.display(), "document written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ExportFormat;

    #[test]
    fn writes_document_to_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("exports");
        let doc = ExportedDocument::new(b"body\n".to_vec(), ExportFormat::Text, "screening");

        let path = write_document(&doc, &target).unwrap();
        assert_eq!(path, target.join("screening.txt"));
        assert_eq!(fs::read(path).unwrap(), b"body\n");
    }
}
