//! Match candidates and the final aligned pairing.

use serde::{Deserialize, Serialize};

use crate::row::Row;

/// Best right row found so far for one left row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub score: u32,
    /// Position of `row` among the right dataset's data rows.
    pub index: usize,
    pub row: Row,
}

/// One left row and the right row it was paired with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedPair {
    pub left_index: usize,
    pub left: Row,
    /// `None` only when the right dataset has no rows.
    pub best: Option<MatchCandidate>,
}

impl AlignedPair {
    /// Text of the paired right row; empty when there was nothing to pair.
    pub fn right_line(&self) -> &str {
        self.best.as_ref().map_or("", |best| best.row.as_line())
    }

    pub fn score(&self) -> Option<u32> {
        self.best.as_ref().map(|best| best.score)
    }
}

/// Every left row, in original order, with its best right row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedPairing {
    pub pairs: Vec<AlignedPair>,
}

impl AlignedPairing {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AlignedPair> {
        self.pairs.iter()
    }

    /// Left rows joined by newlines.
    pub fn left_block(&self) -> String {
        self.pairs
            .iter()
            .map(|pair| pair.left.as_line())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Paired right rows joined by newlines, line-for-line with [`Self::left_block`].
    pub fn right_block(&self) -> String {
        self.pairs
            .iter()
            .map(AlignedPair::right_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_blocks(&self) -> (String, String) {
        (self.left_block(), self.right_block())
    }

    /// Number of pairs whose best score was zero or that had no candidate.
    pub fn weak_pair_count(&self) -> usize {
        self.pairs
            .iter()
            .filter(|pair| pair.score().is_none_or(|score| score == 0))
            .count()
    }
}

impl<'a> IntoIterator for &'a AlignedPairing {
    type Item = &'a AlignedPair;
    type IntoIter = std::slice::Iter<'a, AlignedPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(index: usize, left: &str, best: Option<(u32, usize, &str)>) -> AlignedPair {
        AlignedPair {
            left_index: index,
            left: Row::parse(left),
            best: best.map(|(score, index, row)| MatchCandidate {
                score,
                index,
                row: Row::parse(row),
            }),
        }
    }

    #[test]
    fn blocks_keep_line_counts_equal() {
        let pairing = AlignedPairing {
            pairs: vec![pair(0, "a,1", None), pair(1, "b,2", None)],
        };
        let (left, right) = pairing.to_blocks();
        assert_eq!(left, "a,1\nb,2");
        assert_eq!(right, "\n");
        assert_eq!(left.split('\n').count(), right.split('\n').count());
    }

    #[test]
    fn weak_pairs_are_counted() {
        let pairing = AlignedPairing {
            pairs: vec![
                pair(0, "a", Some((20, 1, "a"))),
                pair(1, "b", Some((0, 0, "z"))),
                pair(2, "c", None),
            ],
        };
        assert_eq!(pairing.weak_pair_count(), 2);
        assert_eq!(pairing.right_block(), "a\nz\n");
    }
}
