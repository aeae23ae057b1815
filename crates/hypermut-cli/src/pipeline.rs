//! Adjustment pipeline with explicit stages.
//!
//! 1. **Index**: read the signatures table, build the barcode lookup
//! 2. **Discover**: enumerate per-cancer-type files in the status directory
//! 3. **Adjust**: annotate signatures, compare cohort modes, relabel, rewrite
//!    each file in place
//! 4. **Report**: optionally dump per-file outcomes as JSON

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use hypermut_core::{
    AdjustOutcome, CorrectionStatus, ReclassifyOptions, SignatureIndex, reclassify_table,
};
use hypermut_ingest::{list_status_files, read_tsv_table, write_tsv_table};

use crate::types::{AdjustResult, FileSummary};

/// Inputs for one adjustment run.
pub struct AdjustConfig<'a> {
    pub status_dir: &'a Path,
    pub signatures_file: &'a Path,
    pub options: ReclassifyOptions,
    /// Compute outcomes without rewriting any file.
    pub dry_run: bool,
    /// Record per-file failures instead of aborting the run.
    pub keep_going: bool,
    /// Optional JSON report destination.
    pub report: Option<&'a Path>,
}

/// Runs the full adjustment over a status directory.
///
/// Files are processed sequentially in filename order; the only state shared
/// between them is the read-only signature index. Without `keep_going` the
/// first file error aborts the run, leaving earlier files already rewritten.
pub fn run_adjust(config: AdjustConfig<'_>) -> Result<AdjustResult> {
    let run_start = Instant::now();

    let signatures = load_signature_index(config.signatures_file)?;

    let files = list_status_files(config.status_dir).context("list status files")?;
    info!(
        status_dir = %config.status_dir.display(),
        file_count = files.len(),
        "discovered status files"
    );

    let mut summaries = Vec::new();
    let mut errors = Vec::new();
    for path in files {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("unknown")
            .to_string();
        let span = info_span!("adjust_file", file = %file_name);
        let _guard = span.enter();
        let file_start = Instant::now();

        match adjust_file(&path, &signatures, config.options, config.dry_run) {
            Ok(outcome) => {
                debug!(
                    rows = outcome.rows,
                    hypermutated = outcome.hypermutated,
                    normal = outcome.normal,
                    reclassified = outcome.reclassified,
                    status = ?outcome.status,
                    duration_ms = file_start.elapsed().as_millis(),
                    "file processed"
                );
                summaries.push(FileSummary {
                    file: file_name,
                    path,
                    outcome: Some(outcome),
                    error: None,
                });
            }
            Err(error) if config.keep_going => {
                let chain = format!("{error:#}");
                warn!(error = %chain, "file skipped");
                errors.push(format!("{}: {chain}", path.display()));
                summaries.push(FileSummary {
                    file: file_name,
                    path,
                    outcome: None,
                    error: Some(chain),
                });
            }
            Err(error) => return Err(error),
        }
    }

    let corrected = summaries
        .iter()
        .filter_map(|summary| summary.outcome.as_ref())
        .filter(|outcome| outcome.status == CorrectionStatus::Corrected)
        .count();
    let reclassified: usize = summaries
        .iter()
        .filter_map(|summary| summary.outcome.as_ref())
        .map(|outcome| outcome.reclassified)
        .sum();
    info!(
        file_count = summaries.len(),
        corrected,
        reclassified,
        failed = errors.len(),
        duration_ms = run_start.elapsed().as_millis(),
        "adjustment complete"
    );

    let has_errors = !errors.is_empty();
    let result = AdjustResult {
        status_dir: config.status_dir.to_path_buf(),
        signature_count: signatures.len(),
        dry_run: config.dry_run,
        files: summaries,
        errors,
        has_errors,
    };

    if let Some(report_path) = config.report {
        write_report_json(report_path, &result)?;
        info!(report = %report_path.display(), "report written");
    }

    Ok(result)
}

/// Builds the shared barcode lookup from the signatures table.
fn load_signature_index(path: &Path) -> Result<SignatureIndex> {
    let span = info_span!("signature_index");
    let _guard = span.enter();
    let start = Instant::now();

    let table =
        read_tsv_table(path).with_context(|| format!("read signatures {}", path.display()))?;
    let index = SignatureIndex::from_table(&table)
        .with_context(|| format!("index signatures {}", path.display()))?;
    info!(
        signatures_file = %path.display(),
        rows = table.rows.len(),
        indexed = index.len(),
        duration_ms = start.elapsed().as_millis(),
        "signature index built"
    );
    Ok(index)
}

/// Reads, corrects, and (unless `dry_run`) rewrites one file in place.
///
/// The file is rewritten even when no row changed, so every processed file
/// carries the `dominantSignature` annotation column afterward.
fn adjust_file(
    path: &Path,
    signatures: &SignatureIndex,
    options: ReclassifyOptions,
    dry_run: bool,
) -> Result<AdjustOutcome> {
    let mut table = read_tsv_table(path).with_context(|| format!("read {}", path.display()))?;
    let outcome = reclassify_table(&mut table, signatures, options)
        .with_context(|| format!("reclassify {}", path.display()))?;
    if !dry_run {
        write_tsv_table(path, &table).with_context(|| format!("write {}", path.display()))?;
    }
    Ok(outcome)
}

fn write_report_json(path: &Path, result: &AdjustResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("serialize report")?;
    std::fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    Ok(())
}
