//! Mutation-burden classification labels.
//!
//! Only the two cohort labels participate in the correction; any other value
//! in the classification column passes through untouched.

/// Upstream label for samples the clustering step flagged as anomalously
/// mutated.
pub const HYPERMUTATED: &str = "Hypermutated";

/// Upstream label for samples the clustering step did not flag.
pub const NORMAL: &str = "Normal";

/// Corrected label for flagged samples whose dominant signature matches the
/// normal cohort's dominant signature.
pub const HIGH_MUTATION_BURDEN: &str = "highMutationBurden";
