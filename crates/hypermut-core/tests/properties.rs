//! Property tests for the correction pass.

use proptest::prelude::*;

use hypermut_core::{
    DOMINANT_SIGNATURE, HIGH_MUTATION_BURDEN, HYPERMUTANT_CLASSIFICATION, HYPERMUTATED,
    ReclassifyOptions, SignatureIndex, TUMOR_SAMPLE_BARCODE, reclassify_table,
};
use hypermut_ingest::TsvTable;

const SIGNATURES: &[&str] = &["mean_1", "mean_2", "mean_4", "mean_MMR", "mean_APOBEC"];
const CLASSIFICATIONS: &[&str] = &["Hypermutated", "Normal", "Indeterminate"];

/// One generated sample: classification choice and an optional signature
/// call for the signatures table.
type SampleSeed = (usize, Option<usize>);

fn arb_samples() -> impl Strategy<Value = Vec<SampleSeed>> {
    prop::collection::vec(
        (0..CLASSIFICATIONS.len(), prop::option::of(0..SIGNATURES.len())),
        0..80,
    )
}

fn build_tables(samples: &[SampleSeed]) -> (TsvTable, SignatureIndex) {
    let mut status = TsvTable {
        headers: vec![
            TUMOR_SAMPLE_BARCODE.to_string(),
            HYPERMUTANT_CLASSIFICATION.to_string(),
            "Nmut".to_string(),
        ],
        rows: Vec::new(),
    };
    let mut calls = Vec::new();
    for (idx, (class_idx, signature_idx)) in samples.iter().enumerate() {
        let barcode = format!("P-{idx:04}");
        status.rows.push(vec![
            barcode.clone(),
            CLASSIFICATIONS[*class_idx].to_string(),
            (idx * 3).to_string(),
        ]);
        if let Some(signature_idx) = signature_idx {
            calls.push(vec![barcode, SIGNATURES[*signature_idx].to_string()]);
        }
    }
    let signature_table = TsvTable {
        headers: vec![
            TUMOR_SAMPLE_BARCODE.to_string(),
            DOMINANT_SIGNATURE.to_string(),
        ],
        rows: calls,
    };
    let index = SignatureIndex::from_table(&signature_table).unwrap();
    (status, index)
}

proptest! {
    #[test]
    fn rows_and_barcodes_are_conserved(samples in arb_samples()) {
        let (mut table, index) = build_tables(&samples);
        let before: Vec<String> = table.rows.iter().map(|row| row[0].clone()).collect();

        reclassify_table(&mut table, &index, ReclassifyOptions::default()).unwrap();

        let after: Vec<String> = table.rows.iter().map(|row| row[0].clone()).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn only_hypermutated_rows_narrow(samples in arb_samples()) {
        let (mut table, index) = build_tables(&samples);
        let before: Vec<String> = table.rows.iter().map(|row| row[1].clone()).collect();

        reclassify_table(&mut table, &index, ReclassifyOptions::default()).unwrap();

        for (old, row) in before.iter().zip(&table.rows) {
            let new = &row[1];
            if old != new {
                prop_assert_eq!(old.as_str(), HYPERMUTATED);
                prop_assert_eq!(new.as_str(), HIGH_MUTATION_BURDEN);
            }
        }
    }

    #[test]
    fn second_pass_is_a_no_op(samples in arb_samples()) {
        let (mut table, index) = build_tables(&samples);
        reclassify_table(&mut table, &index, ReclassifyOptions::default()).unwrap();
        let first = table.clone();

        reclassify_table(&mut table, &index, ReclassifyOptions::default()).unwrap();

        prop_assert_eq!(first, table);
    }

    #[test]
    fn unreachable_threshold_changes_no_classification(samples in arb_samples()) {
        let (mut table, index) = build_tables(&samples);
        let before: Vec<String> = table.rows.iter().map(|row| row[1].clone()).collect();
        let options = ReclassifyOptions { min_normal_cases: samples.len() };

        reclassify_table(&mut table, &index, options).unwrap();

        let after: Vec<String> = table.rows.iter().map(|row| row[1].clone()).collect();
        prop_assert_eq!(before, after);
    }
}
