//! Best-match row alignment.

use tabmatch_model::{AlignedPair, AlignedPairing, Dataset, FieldMapping, MatchCandidate, Row};
use tracing::{debug, info, info_span, trace};

use crate::detect::detect_field_mapping;
use crate::score::score_rows;

/// Pairs every left row with its highest-scoring right row.
///
/// Each left row is matched independently: two left rows may pick the same
/// right row, and a pairing is always produced, even at score zero.
///
/// # Example
///
/// ```
/// use tabmatch_map::RowAligner;
/// use tabmatch_model::Row;
///
/// let left = vec![Row::parse("X,1")];
/// let aligner = RowAligner::detect(&left, &[]);
/// let pairing = aligner.align(&left, &[]);
/// assert_eq!(pairing.to_blocks(), ("X,1".to_string(), String::new()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RowAligner {
    mapping: FieldMapping,
}

impl RowAligner {
    /// Creates an aligner that scores with an already known mapping.
    pub fn new(mapping: FieldMapping) -> Self {
        Self { mapping }
    }

    /// Infers the mapping from the first non-blank row of each side.
    ///
    /// The mapping is empty when either side has no rows.
    pub fn detect(left: &[Row], right: &[Row]) -> Self {
        let sample = |rows: &[Row]| rows.iter().find(|row| !row.is_blank()).cloned();
        let mapping = match (sample(left), sample(right)) {
            (Some(left_sample), Some(right_sample)) => {
                detect_field_mapping(&left_sample, &right_sample)
            }
            _ => FieldMapping::new(),
        };
        Self::new(mapping)
    }

    pub fn mapping(&self) -> &FieldMapping {
        &self.mapping
    }

    /// Highest-scoring candidate for `row`; the earliest wins ties.
    ///
    /// Returns `None` only when `candidates` is empty.
    pub fn best_match(&self, row: &Row, candidates: &[Row]) -> Option<MatchCandidate> {
        let mut best: Option<(u32, usize)> = None;
        for (index, candidate) in candidates.iter().enumerate() {
            let score = score_rows(row, candidate, &self.mapping);
            if best.is_none_or(|(best_score, _)| score > best_score) {
                best = Some((score, index));
            }
        }
        best.map(|(score, index)| MatchCandidate {
            score,
            index,
            row: candidates[index].clone(),
        })
    }

    /// Aligns `left` against `right`, in `left` order.
    ///
    /// Blank rows on either side are ignored; `left_index` and the candidate
    /// `index` count non-blank rows only.
    pub fn align(&self, left: &[Row], right: &[Row]) -> AlignedPairing {
        let left: Vec<&Row> = left.iter().filter(|row| !row.is_blank()).collect();
        let right: Vec<Row> = right.iter().filter(|row| !row.is_blank()).cloned().collect();

        let span = info_span!(
            "align",
            left_rows = left.len(),
            right_rows = right.len(),
            mapped_fields = self.mapping.len()
        );
        let _guard = span.enter();

        if right.is_empty() && !left.is_empty() {
            debug!("right side has no rows; every left row is left unmatched");
        }

        let pairs: Vec<AlignedPair> = left
            .into_iter()
            .enumerate()
            .map(|(left_index, row)| {
                let best = self.best_match(row, &right);
                if let Some(candidate) = &best {
                    trace!(
                        left = left_index,
                        right = candidate.index,
                        score = candidate.score,
                        "best match"
                    );
                }
                AlignedPair {
                    left_index,
                    left: row.clone(),
                    best,
                }
            })
            .collect();

        let pairing = AlignedPairing { pairs };
        info!(
            pairs = pairing.len(),
            weak_pairs = pairing.weak_pair_count(),
            "alignment complete"
        );
        pairing
    }
}

/// Detects the mapping from the first rows and aligns.
pub fn align_rows(left: &[Row], right: &[Row]) -> AlignedPairing {
    RowAligner::detect(left, right).align(left, right)
}

/// Aligns the data rows of two datasets. Headers are not consulted.
pub fn align_datasets(left: &Dataset, right: &Dataset) -> AlignedPairing {
    align_rows(&left.rows, &right.rows)
}

/// Text-level alignment: returns the left and right row blocks, newline-joined
/// and line-for-line aligned.
pub fn align_lines<'a, L, R>(left: L, right: R) -> (String, String)
where
    L: IntoIterator<Item = &'a str>,
    R: IntoIterator<Item = &'a str>,
{
    let left: Vec<Row> = left.into_iter().map(Row::parse).collect();
    let right: Vec<Row> = right.into_iter().map(Row::parse).collect();
    align_rows(&left, &right).to_blocks()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(lines: &[&str]) -> Vec<Row> {
        lines.iter().copied().map(Row::parse).collect()
    }

    #[test]
    fn picks_highest_score() {
        let left = rows(&["A1,2024-01-02,Alice"]);
        let right = rows(&["B2,2024-05-05,Bob", "A1,2024/01/02,Alicia"]);
        let pairing = align_rows(&left, &right);
        assert_eq!(pairing.len(), 1);
        assert_eq!(pairing.pairs[0].right_line(), "A1,2024/01/02,Alicia");
        assert_eq!(pairing.pairs[0].best.as_ref().map(|b| b.index), Some(1));
    }

    #[test]
    fn ties_go_to_first_candidate() {
        let aligner = RowAligner::default();
        let best = aligner
            .best_match(&Row::parse("x"), &rows(&["a", "b", "c"]))
            .expect("candidate");
        assert_eq!(best.index, 0);
        assert_eq!(best.score, 0);
    }

    #[test]
    fn same_right_row_can_be_chosen_twice() {
        let left = rows(&["A1,1", "A1,2"]);
        let right = rows(&["A1,9", "Z9,9"]);
        let pairing = align_rows(&left, &right);
        assert_eq!(pairing.right_block(), "A1,9\nA1,9");
    }

    #[test]
    fn blank_rows_are_ignored() {
        let left = rows(&["", "X,1", "   "]);
        let right = rows(&[" ", "1,X"]);
        let pairing = align_rows(&left, &right);
        assert_eq!(pairing.len(), 1);
        assert_eq!(pairing.pairs[0].left_index, 0);
        assert_eq!(pairing.to_blocks(), ("X,1".to_string(), "1,X".to_string()));
    }

    #[test]
    fn detect_uses_first_rows() {
        let aligner = RowAligner::detect(&rows(&["A1,x", "B2,y"]), &rows(&["z,A1", "B2,w"]));
        assert_eq!(aligner.mapping().iter().collect::<Vec<_>>(), vec![(0, 1)]);
        assert!(RowAligner::detect(&[], &rows(&["A1"])).mapping().is_empty());
    }

    #[test]
    fn empty_left_gives_empty_pairing() {
        let pairing = align_rows(&[], &rows(&["a,b"]));
        assert!(pairing.is_empty());
        assert_eq!(pairing.to_blocks(), (String::new(), String::new()));
    }
}
