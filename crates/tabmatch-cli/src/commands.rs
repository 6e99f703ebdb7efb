use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{info, info_span};

use tabmatch_cli::pipeline::{Comparison, compare, load_inputs};
use tabmatch_model::Dataset;
use tabmatch_report::{
    PromptTemplate, TableLabels, render_table, write_alignment_report, write_document,
};

use crate::cli::{AlignArgs, ExplainArgs, InputArgs};
use crate::summary::{align_column, apply_table_style, dim_cell, header_cell};

/// What `align` produced, for the summary table.
#[derive(Debug)]
pub struct AlignResult {
    pub left_rows: usize,
    pub right_rows: usize,
    pub mapped_fields: usize,
    pub weak_pairs: usize,
    pub document: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

pub fn run_align(args: &AlignArgs) -> Result<AlignResult> {
    let span = info_span!("align_command");
    let _guard = span.enter();

    // Fail on a bad template before doing any work.
    let template = match &args.template {
        Some(path) => PromptTemplate::from_file(path)
            .with_context(|| format!("load template {}", path.display()))?,
        None => PromptTemplate::default(),
    };

    let inputs = load_inputs(&args.inputs.left, &args.inputs.right)?;
    let comparison = compare(inputs);

    if !args.quiet_tables {
        print_aligned_tables(&comparison);
    }

    let labels = TableLabels {
        left: args.left_label.clone(),
        right: args.right_label.clone(),
    };
    let document = comparison.prompt_document(labels).render(&template);
    let document_path = if args.no_write {
        info!("prompt document not written (--no-write)");
        None
    } else {
        write_document(&args.output, &document)
            .with_context(|| format!("write prompt document {}", args.output.display()))?;
        Some(args.output.clone())
    };

    if let Some(path) = &args.report {
        write_alignment_report(path, &comparison.report())
            .with_context(|| format!("write alignment report {}", path.display()))?;
    }

    Ok(AlignResult {
        left_rows: comparison.pairing.len(),
        right_rows: comparison.inputs.right.len(),
        mapped_fields: comparison.mapping().len(),
        weak_pairs: comparison.pairing.weak_pair_count(),
        document: document_path,
        report: args.report.clone(),
    })
}

fn print_aligned_tables(comparison: &Comparison) {
    let (left_block, right_block) = comparison.pairing.to_blocks();
    println!("--------- [1] ---------");
    println!("{}", render_table(&comparison.inputs.left.header, &left_block));
    println!("--------- [2] ---------");
    println!("{}", render_table(&comparison.inputs.right.header, &right_block));
}

pub fn run_mapping(args: &InputArgs) -> Result<()> {
    let inputs = load_inputs(&args.left, &args.right)?;
    let comparison = compare(inputs);
    let left = &comparison.inputs.left;
    let right = &comparison.inputs.right;

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Left #"),
        header_cell("Left column"),
        header_cell("Sample"),
        header_cell("Right #"),
        header_cell("Right column"),
        header_cell("Sample"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    for found in &comparison.matches {
        table.add_row(vec![
            Cell::new(found.kind),
            Cell::new(found.left),
            column_cell(left, found.left),
            sample_cell(left, found.left),
            Cell::new(found.right),
            column_cell(right, found.right),
            sample_cell(right, found.right),
        ]);
    }
    if comparison.matches.is_empty() {
        println!("No fields could be mapped from the first data rows.");
    } else {
        println!("{table}");
    }

    let unmapped: Vec<String> = (0..left.header.field_count())
        .filter(|index| !comparison.mapping().contains_left(*index))
        .map(|index| left.column_name(index).unwrap_or("?").to_string())
        .collect();
    if !unmapped.is_empty() {
        println!("Unmapped left columns: {}", unmapped.join(", "));
    }
    Ok(())
}

pub fn run_explain(args: &ExplainArgs) -> Result<()> {
    let inputs = load_inputs(&args.inputs.left, &args.inputs.right)?;
    let comparison = compare(inputs);
    let left_index = usize::try_from(args.row - 1).context("row number out of range")?;
    let pair = comparison.pairing.pairs.get(left_index).ok_or_else(|| {
        anyhow!(
            "row {} does not exist; the left table has {} data rows",
            args.row,
            comparison.pairing.len()
        )
    })?;
    let Some(best) = &pair.best else {
        println!("Row {} has no partner: the right table has no data rows.", args.row);
        return Ok(());
    };
    let score = comparison
        .explain(left_index)
        .ok_or_else(|| anyhow!("no score for row {}", args.row))?;

    println!("Left row {}: {}", args.row, pair.left);
    println!("Paired with right row {}: {}", best.index + 1, best.row);

    let left = &comparison.inputs.left;
    let right = &comparison.inputs.right;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Agreement"),
        header_cell("Left column"),
        header_cell("Right column"),
        header_cell("Value"),
        header_cell("Points"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    for component in &score.components {
        table.add_row(vec![
            Cell::new(component.kind.label()),
            column_cell(left, component.left),
            column_cell(right, component.right),
            Cell::new(pair.left.field(component.left).unwrap_or_default()),
            Cell::new(format!("+{}", component.value())),
        ]);
    }
    table.add_row(vec![
        header_cell("TOTAL"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        header_cell(&score.total.to_string()),
    ]);
    println!("{table}");
    Ok(())
}

fn column_cell(dataset: &Dataset, index: usize) -> Cell {
    match dataset.column_name(index) {
        Some(name) if !name.is_empty() => Cell::new(name),
        _ => dim_cell(format!("#{index}")),
    }
}

fn sample_cell(dataset: &Dataset, index: usize) -> Cell {
    match dataset.sample().and_then(|row| row.field(index)) {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}
