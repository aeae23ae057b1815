//! Barcode to dominant-signature index and cohort mode computation.

use std::collections::{BTreeMap, HashMap};

use hypermut_ingest::TsvTable;

use crate::error::{AdjustError, Result};

/// Sample identifier column shared by the signatures table and every
/// per-cancer-type file.
pub const TUMOR_SAMPLE_BARCODE: &str = "Tumor_Sample_Barcode";

/// Signature column: input in the signatures table, annotation in the
/// rewritten per-cancer-type files.
pub const DOMINANT_SIGNATURE: &str = "dominantSignature";

/// Sentinel emitted upstream for samples with too few mutations to call a
/// dominant signature. Rows carrying it never enter the index.
pub const INSUFFICIENT_MUT_BURDEN: &str = "insufficientMutBurden";

/// An MMR-dominant non-hypermutated population points at an upstream
/// signature-combination mix-up, so a normal-cohort mode of [`MMR_SIGNATURE`]
/// is compared as [`BACKGROUND_SIGNATURE`] instead.
pub const MMR_SIGNATURE: &str = "mean_MMR";

/// Neutral background signature substituted for [`MMR_SIGNATURE`].
pub const BACKGROUND_SIGNATURE: &str = "mean_1";

/// Read-only lookup from sample barcode to its precomputed dominant
/// mutational signature.
#[derive(Debug, Clone, Default)]
pub struct SignatureIndex {
    by_barcode: HashMap<String, String>,
}

impl SignatureIndex {
    /// Builds the index from the signatures table.
    ///
    /// Rows whose signature is [`INSUFFICIENT_MUT_BURDEN`], or that lack a
    /// barcode or signature value, are dropped. A barcode appearing more than
    /// once keeps its last value; upstream output is deduplicated.
    pub fn from_table(table: &TsvTable) -> Result<Self> {
        let barcode_idx = table
            .column_index(TUMOR_SAMPLE_BARCODE)
            .ok_or(AdjustError::MissingColumn(TUMOR_SAMPLE_BARCODE))?;
        let signature_idx = table
            .column_index(DOMINANT_SIGNATURE)
            .ok_or(AdjustError::MissingColumn(DOMINANT_SIGNATURE))?;

        let mut by_barcode = HashMap::new();
        for row in &table.rows {
            let barcode = row.get(barcode_idx).map(String::as_str).unwrap_or("");
            let signature = row.get(signature_idx).map(String::as_str).unwrap_or("");
            if barcode.is_empty() || signature.is_empty() || signature == INSUFFICIENT_MUT_BURDEN {
                continue;
            }
            by_barcode.insert(barcode.to_string(), signature.to_string());
        }

        Ok(Self { by_barcode })
    }

    /// Dominant signature for `barcode`, if the signatures table had a usable
    /// row for it. Absent barcodes are expected and never an error.
    pub fn get(&self, barcode: &str) -> Option<&str> {
        self.by_barcode.get(barcode).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_barcode.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_barcode.is_empty()
    }
}

/// Most frequent label in `labels`, or `None` when empty.
///
/// Ties resolve to the lexicographically smallest label, so the result is
/// stable across runs and platforms.
pub fn dominant_mode<'a, I>(labels: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for (label, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label)
}
