//! Pairwise row similarity.
//!
//! A score is the sum of per-field agreements between a left row and a right
//! row. Fields confirmed by the field mapping are trusted most; remaining left
//! fields are matched greedily against unclaimed right fields.

use serde::{Deserialize, Serialize};
use tabmatch_model::{FieldMapping, Row};

use crate::classify::{dates_equal, is_date_shaped, numeric_equal};

/// Mapped field with identical text on both sides.
pub const MAPPED_FIELD_WEIGHT: u32 = 20;
/// Unmapped field with identical text on both sides.
pub const EXACT_MATCH_WEIGHT: u32 = 10;
/// Unmapped date fields that are date-equal.
pub const DATE_MATCH_WEIGHT: u32 = 15;
/// Unmapped numeric fields with equal values.
pub const NUMERIC_MATCH_WEIGHT: u32 = 8;

/// Kind of agreement that contributed to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    MappedEqual,
    ExactMatch,
    DateMatch,
    NumericMatch,
}

impl ScoreKind {
    pub fn weight(self) -> u32 {
        match self {
            Self::MappedEqual => MAPPED_FIELD_WEIGHT,
            Self::ExactMatch => EXACT_MATCH_WEIGHT,
            Self::DateMatch => DATE_MATCH_WEIGHT,
            Self::NumericMatch => NUMERIC_MATCH_WEIGHT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MappedEqual => "Mapped field equal",
            Self::ExactMatch => "Exact match",
            Self::DateMatch => "Date match",
            Self::NumericMatch => "Numeric match",
        }
    }
}

/// A single field agreement between the two rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub kind: ScoreKind,
    pub left: usize,
    pub right: usize,
}

impl ScoreComponent {
    pub fn value(&self) -> u32 {
        self.kind.weight()
    }
}

/// Score with its breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowScore {
    pub total: u32,
    pub components: Vec<ScoreComponent>,
}

impl RowScore {
    /// Human-readable explanation of the score.
    pub fn explain(&self) -> String {
        if self.components.is_empty() {
            return "no agreeing fields".to_string();
        }
        self.components
            .iter()
            .map(|c| format!("{} [{}->{}]: +{}", c.kind.label(), c.left, c.right, c.value()))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Similarity of `left` to `right` under `mapping`. Higher is more similar.
pub fn score_rows(left: &Row, right: &Row, mapping: &FieldMapping) -> u32 {
    let mut total = 0;
    for_each_agreement(left, right, mapping, |component| total += component.value());
    total
}

/// [`score_rows`] with every contributing field pair listed.
pub fn explain_score(left: &Row, right: &Row, mapping: &FieldMapping) -> RowScore {
    let mut score = RowScore::default();
    for_each_agreement(left, right, mapping, |component| {
        score.total += component.value();
        score.components.push(component);
    });
    score
}

fn for_each_agreement<F>(left: &Row, right: &Row, mapping: &FieldMapping, mut visit: F)
where
    F: FnMut(ScoreComponent),
{
    // Right fields already credited; local so scoring has no shared state.
    let mut consumed = vec![false; right.field_count()];

    // Mapped fields only count on identical text. Date and numeric
    // tolerance is not applied here.
    for (left_index, right_index) in mapping.iter() {
        if let (Some(a), Some(b)) = (left.field(left_index), right.field(right_index))
            && a == b
        {
            consumed[right_index] = true;
            visit(ScoreComponent {
                kind: ScoreKind::MappedEqual,
                left: left_index,
                right: right_index,
            });
        }
    }

    for (left_index, a) in left.fields().iter().enumerate() {
        if mapping.contains_left(left_index) {
            continue;
        }
        for (right_index, b) in right.fields().iter().enumerate() {
            if consumed[right_index] {
                continue;
            }
            let Some(kind) = field_agreement(a, b) else {
                continue;
            };
            consumed[right_index] = true;
            visit(ScoreComponent {
                kind,
                left: left_index,
                right: right_index,
            });
            break;
        }
    }
}

fn field_agreement(a: &str, b: &str) -> Option<ScoreKind> {
    if a == b {
        Some(ScoreKind::ExactMatch)
    } else if is_date_shaped(a) && is_date_shaped(b) && dates_equal(a, b) {
        Some(ScoreKind::DateMatch)
    } else if numeric_equal(a, b) {
        Some(ScoreKind::NumericMatch)
    } else {
        None
    }
}
