//! Status-directory enumeration.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists the per-cancer-type files in a status directory.
///
/// Every regular file counts; the upstream clustering step writes one file per
/// cancer type with no shared extension. Hidden files are skipped. Returns
/// files sorted by filename so runs process and report in a stable order.
pub fn list_status_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with('.'));
        if hidden {
            continue;
        }

        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in &["Colorectal_Cancer.tsv", "Endometrial_Cancer.tsv", "Glioma.tsv"] {
            std::fs::write(dir.path().join(name), "header\ndata").unwrap();
        }
        std::fs::write(dir.path().join(".DS_Store"), "junk").unwrap();
        std::fs::create_dir(dir.path().join("archive")).unwrap();
        dir
    }

    #[test]
    fn lists_files_sorted_by_name() {
        let dir = create_test_dir();
        let files = list_status_files(dir.path()).unwrap();

        let names: Vec<&str> = files
            .iter()
            .map(|path| path.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["Colorectal_Cancer.tsv", "Endometrial_Cancer.tsv", "Glioma.tsv"]
        );
    }

    #[test]
    fn skips_directories_and_hidden_files() {
        let dir = create_test_dir();
        let files = list_status_files(dir.path()).unwrap();

        assert!(files.iter().all(|path| path.is_file()));
        assert!(
            files
                .iter()
                .all(|path| !path.file_name().unwrap().to_str().unwrap().starts_with('.'))
        );
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let error = list_status_files(&missing).unwrap_err();
        assert!(matches!(error, IngestError::DirectoryNotFound { .. }));
    }
}
