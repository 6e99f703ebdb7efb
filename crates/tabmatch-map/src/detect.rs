//! Field-mapping inference from one representative row per side.
//!
//! Column names differ between the two tables (often by language), so
//! headers cannot be joined. Instead the first data row of each side is
//! fingerprinted: a left field that looks like a date, a code or a number is
//! mapped to the first right field carrying the same value. The result is
//! computed once per table pair and reused for every row comparison.

use serde::{Deserialize, Serialize};
use tabmatch_model::{FieldMapping, Row};
use tracing::{debug, trace};

use crate::classify::{dates_equal, is_code_shaped, is_date_shaped, is_numeric};

/// Shape that caused a left field to be mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Date-shaped, matched by date equality.
    Date,
    /// Alphanumeric code, matched by exact text.
    Code,
    /// Number, matched by exact text.
    Numeric,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Code => "code",
            Self::Numeric => "numeric",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inferred left-to-right field correspondence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMatch {
    pub left: usize,
    pub right: usize,
    pub kind: FieldKind,
}

/// Infers the field mapping between two sample rows.
pub fn detect_field_mapping(left: &Row, right: &Row) -> FieldMapping {
    detect_field_matches(left, right)
        .into_iter()
        .map(|found| (found.left, found.right))
        .collect()
}

/// Same as [`detect_field_mapping`], keeping the shape behind each entry.
///
/// Left fields are visited in order and blank ones are skipped. The first
/// applicable rule decides the field; a date-shaped field never falls
/// through to the code or number rules, even when no date matched. A right
/// field already claimed by an earlier left field is not offered again.
pub fn detect_field_matches(left: &Row, right: &Row) -> Vec<FieldMatch> {
    let mut claimed = FieldMapping::new();
    let mut matches = Vec::new();

    for (index, value) in left.fields().iter().enumerate() {
        if value.trim().is_empty() {
            continue;
        }
        let (kind, found) = if is_date_shaped(value) {
            let found = first_unclaimed(right, &claimed, |candidate| {
                is_date_shaped(candidate) && dates_equal(value, candidate)
            });
            (FieldKind::Date, found)
        } else if is_code_shaped(value) {
            let found = first_unclaimed(right, &claimed, |candidate| candidate == value);
            (FieldKind::Code, found)
        } else if is_numeric(value) {
            let found = first_unclaimed(right, &claimed, |candidate| candidate == value);
            (FieldKind::Numeric, found)
        } else {
            continue;
        };

        match found {
            Some(target) => {
                trace!(left = index, right = target, kind = %kind, "mapped field");
                claimed.insert(index, target);
                matches.push(FieldMatch {
                    left: index,
                    right: target,
                    kind,
                });
            }
            None => trace!(left = index, kind = %kind, "no counterpart for field"),
        }
    }

    debug!(mapped = matches.len(), fields = left.field_count(), "detected field mapping");
    matches
}

fn first_unclaimed<F>(right: &Row, claimed: &FieldMapping, accept: F) -> Option<usize>
where
    F: Fn(&str) -> bool,
{
    right
        .fields()
        .iter()
        .enumerate()
        .find(|(index, candidate)| !claimed.contains_right(*index) && accept(candidate))
        .map(|(index, _)| index)
}
