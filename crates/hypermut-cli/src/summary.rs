use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hypermut_cli::types::{AdjustResult, FileSummary};
use hypermut_core::CorrectionStatus;

pub fn print_summary(result: &AdjustResult) {
    println!("Status directory: {}", result.status_dir.display());
    println!("Signatures indexed: {}", result.signature_count);
    if result.dry_run {
        println!("Dry run: no files were rewritten");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Hypermutated"),
        header_cell("Normal"),
        header_cell("Hyper mode"),
        header_cell("Normal mode"),
        header_cell("Reclassified"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 6, CellAlignment::Right);

    let mut total_rows = 0usize;
    let mut total_reclassified = 0usize;
    for summary in &result.files {
        table.add_row(summary_row(summary));
        if let Some(outcome) = &summary.outcome {
            total_rows += outcome.rows;
            total_reclassified += outcome.reclassified;
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_reclassified).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn summary_row(summary: &FileSummary) -> Vec<Cell> {
    let Some(outcome) = &summary.outcome else {
        return vec![
            Cell::new(&summary.file),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new("failed").fg(Color::Red).add_attribute(Attribute::Bold),
        ];
    };
    vec![
        Cell::new(&summary.file),
        Cell::new(outcome.rows),
        Cell::new(outcome.hypermutated),
        Cell::new(outcome.normal),
        mode_cell(outcome.hypermutated_mode.as_deref()),
        mode_cell(outcome.normal_mode.as_deref()),
        count_cell(outcome.reclassified),
        status_cell(outcome.status),
    ]
}

fn status_cell(status: CorrectionStatus) -> Cell {
    match status {
        CorrectionStatus::Corrected => Cell::new("corrected")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        CorrectionStatus::ModesDiffer => Cell::new("modes differ").fg(Color::DarkGrey),
        CorrectionStatus::NoHypermutatedSignatures => {
            Cell::new("no hypermutated signatures").fg(Color::DarkGrey)
        }
        CorrectionStatus::NormalCohortTooSmall => {
            Cell::new("normal cohort too small").fg(Color::Yellow)
        }
    }
}

fn mode_cell(mode: Option<&str>) -> Cell {
    match mode {
        Some(mode) => Cell::new(mode),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
