//! Per-file correction pass.

use serde::Serialize;

use hypermut_ingest::TsvTable;

use crate::classification::{HIGH_MUTATION_BURDEN, HYPERMUTATED, NORMAL};
use crate::error::{AdjustError, Result};
use crate::signatures::{
    BACKGROUND_SIGNATURE, DOMINANT_SIGNATURE, MMR_SIGNATURE, SignatureIndex,
    TUMOR_SAMPLE_BARCODE, dominant_mode,
};

/// Classification column in per-cancer-type files.
pub const HYPERMUTANT_CLASSIFICATION: &str = "hypermutantClassification";

/// Default for [`ReclassifyOptions::min_normal_cases`].
pub const DEFAULT_MIN_NORMAL_CASES: usize = 25;

#[derive(Debug, Clone, Copy)]
pub struct ReclassifyOptions {
    /// The normal cohort's dominant signature is only trusted when strictly
    /// more than this many normal samples carry a signature call.
    pub min_normal_cases: usize,
}

impl Default for ReclassifyOptions {
    fn default() -> Self {
        Self {
            min_normal_cases: DEFAULT_MIN_NORMAL_CASES,
        }
    }
}

/// Whether a table's correction applied, and if not, why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionStatus {
    /// Cohort modes matched; matching hypermutated rows were relabeled.
    Corrected,
    /// No hypermutated sample had a signature call.
    NoHypermutatedSignatures,
    /// Too few normal samples with signature calls to trust their mode.
    NormalCohortTooSmall,
    /// Cohort modes differ; every hypermutated label stands.
    ModesDiffer,
}

/// Statistics for one processed table.
#[derive(Debug, Clone, Serialize)]
pub struct AdjustOutcome {
    pub rows: usize,
    pub hypermutated: usize,
    pub normal: usize,
    pub hypermutated_mode: Option<String>,
    pub normal_mode: Option<String>,
    pub reclassified: usize,
    pub status: CorrectionStatus,
}

/// Runs the correction pass over one per-cancer-type table, in place.
///
/// Every row gains (or refreshes) a `dominantSignature` annotation column.
/// When the hypermutated and normal cohorts share a dominant signature and the
/// normal cohort is large enough to trust, hypermutated rows carrying that
/// signature are relabeled `highMutationBurden`. All other rows keep their
/// classification verbatim.
pub fn reclassify_table(
    table: &mut TsvTable,
    signatures: &SignatureIndex,
    options: ReclassifyOptions,
) -> Result<AdjustOutcome> {
    let barcode_idx = table
        .column_index(TUMOR_SAMPLE_BARCODE)
        .ok_or(AdjustError::MissingColumn(TUMOR_SAMPLE_BARCODE))?;
    let class_idx = table
        .column_index(HYPERMUTANT_CLASSIFICATION)
        .ok_or(AdjustError::MissingColumn(HYPERMUTANT_CLASSIFICATION))?;
    let signature_idx = table.ensure_column(DOMINANT_SIGNATURE);

    let width = table.headers.len();
    for row in &mut table.rows {
        row.resize(width, String::new());
    }

    // Annotate every row; barcodes without a signature call stay blank.
    for row in &mut table.rows {
        let annotated = signatures.get(&row[barcode_idx]).unwrap_or("");
        row[signature_idx] = annotated.to_string();
    }

    let mut hypermutated = 0usize;
    let mut normal = 0usize;
    let mut hyper_signatures: Vec<&str> = Vec::new();
    let mut normal_signatures: Vec<&str> = Vec::new();
    for row in &table.rows {
        match row[class_idx].as_str() {
            HYPERMUTATED => {
                hypermutated += 1;
                if let Some(signature) = signatures.get(&row[barcode_idx]) {
                    hyper_signatures.push(signature);
                }
            }
            NORMAL => {
                normal += 1;
                if let Some(signature) = signatures.get(&row[barcode_idx]) {
                    normal_signatures.push(signature);
                }
            }
            _ => {}
        }
    }

    let rows = table.rows.len();
    let hyper_mode = dominant_mode(hyper_signatures.iter().copied());
    let normal_mode = dominant_mode(normal_signatures.iter().copied());

    let (hyper_mode, normal_mode) = match (hyper_mode, normal_mode) {
        (Some(hyper_mode), Some(normal_mode))
            if normal_signatures.len() > options.min_normal_cases =>
        {
            (hyper_mode, normal_mode)
        }
        (hyper_mode, normal_mode) => {
            let status = if hyper_mode.is_none() {
                CorrectionStatus::NoHypermutatedSignatures
            } else {
                CorrectionStatus::NormalCohortTooSmall
            };
            return Ok(AdjustOutcome {
                rows,
                hypermutated,
                normal,
                hypermutated_mode: hyper_mode.map(str::to_string),
                normal_mode: normal_mode.map(str::to_string),
                reclassified: 0,
                status,
            });
        }
    };

    let normal_mode = if normal_mode == MMR_SIGNATURE {
        BACKGROUND_SIGNATURE
    } else {
        normal_mode
    };

    if normal_mode != hyper_mode {
        return Ok(AdjustOutcome {
            rows,
            hypermutated,
            normal,
            hypermutated_mode: Some(hyper_mode.to_string()),
            normal_mode: Some(normal_mode.to_string()),
            reclassified: 0,
            status: CorrectionStatus::ModesDiffer,
        });
    }

    let mut reclassified = 0usize;
    for row in &mut table.rows {
        if row[class_idx] == HYPERMUTATED && row[signature_idx] == normal_mode {
            row[class_idx] = HIGH_MUTATION_BURDEN.to_string();
            reclassified += 1;
        }
    }

    Ok(AdjustOutcome {
        rows,
        hypermutated,
        normal,
        hypermutated_mode: Some(hyper_mode.to_string()),
        normal_mode: Some(normal_mode.to_string()),
        reclassified,
        status: CorrectionStatus::Corrected,
    })
}
