//! Correction pass over per-cancer-type mutation-burden classifications.
//!
//! Samples labeled `Hypermutated` whose dominant mutational signature matches
//! the dominant signature of the `Normal` cohort in the same cancer type are
//! relabeled `highMutationBurden`: their elevated mutation count points at the
//! same mutagenic process as the baseline population, not a distinct
//! hypermutation mechanism.

pub mod classification;
pub mod error;
pub mod reclassify;
pub mod signatures;

pub use classification::{HIGH_MUTATION_BURDEN, HYPERMUTATED, NORMAL};
pub use error::{AdjustError, Result};
pub use reclassify::{
    AdjustOutcome, CorrectionStatus, DEFAULT_MIN_NORMAL_CASES, HYPERMUTANT_CLASSIFICATION,
    ReclassifyOptions, reclassify_table,
};
pub use signatures::{
    DOMINANT_SIGNATURE, INSUFFICIENT_MUT_BURDEN, SignatureIndex, TUMOR_SAMPLE_BARCODE,
    dominant_mode,
};
