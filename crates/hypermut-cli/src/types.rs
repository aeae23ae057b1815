use std::path::PathBuf;

use serde::Serialize;

use hypermut_core::AdjustOutcome;

/// One processed (or failed) per-cancer-type file.
#[derive(Debug, Clone, Serialize)]
pub struct FileSummary {
    /// Filename, for display and report keys.
    pub file: String,
    pub path: PathBuf,
    /// Present when the file was processed.
    pub outcome: Option<AdjustOutcome>,
    /// Present when the file failed under `--keep-going`.
    pub error: Option<String>,
}

/// Result of a full adjustment run.
#[derive(Debug, Serialize)]
pub struct AdjustResult {
    pub status_dir: PathBuf,
    /// Barcodes with a usable dominant-signature call.
    pub signature_count: usize,
    pub dry_run: bool,
    pub files: Vec<FileSummary>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}
