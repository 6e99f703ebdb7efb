//! Machine-readable alignment report.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tabmatch_map::FieldMatch;
use tabmatch_model::AlignedPairing;

use crate::error::{ReportError, Result};

/// Where one left row ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSummary {
    pub left_index: usize,
    /// `None` when the right table had no rows.
    pub right_index: Option<usize>,
    pub score: Option<u32>,
}

/// Field mapping and per-row match outcome for one comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentReport {
    pub left_rows: usize,
    pub right_rows: usize,
    pub mapping: Vec<FieldMatch>,
    pub pairs: Vec<PairSummary>,
}

impl AlignmentReport {
    pub fn new(right_rows: usize, mapping: Vec<FieldMatch>, pairing: &AlignedPairing) -> Self {
        let pairs = pairing
            .iter()
            .map(|pair| PairSummary {
                left_index: pair.left_index,
                right_index: pair.best.as_ref().map(|best| best.index),
                score: pair.score(),
            })
            .collect();
        Self {
            left_rows: pairing.len(),
            right_rows,
            mapping,
            pairs,
        }
    }
}

/// Writes the report as pretty-printed JSON.
pub fn write_alignment_report(path: &Path, report: &AlignmentReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json).map_err(|e| ReportError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabmatch_map::FieldKind;
    use tabmatch_model::{AlignedPair, Row};

    #[test]
    fn unmatched_rows_serialize_as_null() {
        let pairing = AlignedPairing {
            pairs: vec![AlignedPair {
                left_index: 0,
                left: Row::parse("X,1"),
                best: None,
            }],
        };
        let mapping = vec![FieldMatch {
            left: 1,
            right: 0,
            kind: FieldKind::Date,
        }];
        let report = AlignmentReport::new(0, mapping, &pairing);
        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["mapping"][0]["kind"], "date");
        assert!(json["pairs"][0]["right_index"].is_null());
        assert!(json["pairs"][0]["score"].is_null());
    }
}
