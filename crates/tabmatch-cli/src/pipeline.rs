//! Load, align and render stages shared by the subcommands.

use std::path::Path;

use anyhow::{Context, Result};
use tabmatch_ingest::load_dataset;
use tabmatch_map::{FieldMatch, RowAligner, RowScore, detect_field_matches, explain_score};
use tabmatch_model::{AlignedPairing, Dataset, FieldMapping};
use tabmatch_report::{AlignmentReport, PromptDocument, TableLabels};
use tracing::{info, info_span, warn};

/// Both datasets of one comparison.
#[derive(Debug, Clone)]
pub struct InputPair {
    pub left: Dataset,
    pub right: Dataset,
}

/// Loads the two input tables.
pub fn load_inputs(left: &Path, right: &Path) -> Result<InputPair> {
    let span = info_span!("ingest", left = %left.display(), right = %right.display());
    let _guard = span.enter();

    let left_data =
        load_dataset(left).with_context(|| format!("load left table {}", left.display()))?;
    let right_data =
        load_dataset(right).with_context(|| format!("load right table {}", right.display()))?;
    for (side, path, dataset) in [("left", left, &left_data), ("right", right, &right_data)] {
        if dataset.is_empty() {
            warn!(side, path = %path.display(), "table has a header but no data rows");
        }
    }
    info!(
        left_rows = left_data.len(),
        right_rows = right_data.len(),
        "tables loaded"
    );
    Ok(InputPair {
        left: left_data,
        right: right_data,
    })
}

/// Result of aligning one input pair.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub inputs: InputPair,
    /// Field mapping detected on the first data rows, with the shape of each entry.
    pub matches: Vec<FieldMatch>,
    pub aligner: RowAligner,
    pub pairing: AlignedPairing,
}

impl Comparison {
    pub fn mapping(&self) -> &FieldMapping {
        self.aligner.mapping()
    }

    pub fn prompt_document(&self, labels: TableLabels) -> PromptDocument {
        PromptDocument::from_pairing(&self.inputs.left, &self.inputs.right, &self.pairing, labels)
    }

    pub fn report(&self) -> AlignmentReport {
        AlignmentReport::new(
            self.inputs.right.len(),
            self.matches.clone(),
            &self.pairing,
        )
    }

    /// Score breakdown between a left row and the right row it was paired with.
    ///
    /// `None` when the left row does not exist or has no partner.
    pub fn explain(&self, left_index: usize) -> Option<RowScore> {
        let pair = self.pairing.pairs.get(left_index)?;
        let best = pair.best.as_ref()?;
        Some(explain_score(&pair.left, &best.row, self.mapping()))
    }
}

/// Detects the field mapping and aligns every left row.
pub fn compare(inputs: InputPair) -> Comparison {
    let span = info_span!("compare");
    let _guard = span.enter();

    let matches = match (inputs.left.sample(), inputs.right.sample()) {
        (Some(left), Some(right)) => detect_field_matches(left, right),
        _ => Vec::new(),
    };
    let mapping: FieldMapping = matches.iter().map(|m| (m.left, m.right)).collect();
    info!(mapped_fields = mapping.len(), "field mapping detected");

    let aligner = RowAligner::new(mapping);
    let pairing = aligner.align(&inputs.left.rows, &inputs.right.rows);
    Comparison {
        inputs,
        matches,
        aligner,
        pairing,
    }
}
