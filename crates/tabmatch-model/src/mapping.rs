//! Sparse field-position mapping between two datasets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A mapping that would give one right index two left indices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("right field {right} is mapped from both left field {first} and left field {second}")]
pub struct MappingError {
    pub right: usize,
    pub first: usize,
    pub second: usize,
}

/// Partial function from a left field index to a right field index.
///
/// A left index maps to at most one right index, and a right index is used by
/// at most one left index. An index with no entry is unmapped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<usize, usize>",
    into = "BTreeMap<usize, usize>"
)]
pub struct FieldMapping {
    entries: BTreeMap<usize, usize>,
}

impl FieldMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `left -> right`.
    ///
    /// Returns `false` and leaves the mapping untouched when `left` is already
    /// mapped or `right` is already the target of another entry.
    pub fn insert(&mut self, left: usize, right: usize) -> bool {
        if self.entries.contains_key(&left) || self.contains_right(right) {
            return false;
        }
        self.entries.insert(left, right);
        true
    }

    pub fn get(&self, left: usize) -> Option<usize> {
        self.entries.get(&left).copied()
    }

    pub fn contains_left(&self, left: usize) -> bool {
        self.entries.contains_key(&left)
    }

    pub fn contains_right(&self, right: usize) -> bool {
        self.entries.values().any(|&target| target == right)
    }

    /// Entries in ascending left-index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries.iter().map(|(&left, &right)| (left, right))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(usize, usize)> for FieldMapping {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (left, right) in iter {
            mapping.insert(left, right);
        }
        mapping
    }
}

impl TryFrom<BTreeMap<usize, usize>> for FieldMapping {
    type Error = MappingError;

    fn try_from(entries: BTreeMap<usize, usize>) -> Result<Self, Self::Error> {
        let mut mapping = Self::new();
        for (left, right) in entries {
            if !mapping.insert(left, right) {
                let first = mapping
                    .iter()
                    .find_map(|(l, r)| (r == right).then_some(l))
                    .unwrap_or(left);
                return Err(MappingError {
                    right,
                    first,
                    second: left,
                });
            }
        }
        Ok(mapping)
    }
}

impl From<FieldMapping> for BTreeMap<usize, usize> {
    fn from(mapping: FieldMapping) -> Self {
        mapping.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_refuses_reused_indices() {
        let mut mapping = FieldMapping::new();
        assert!(mapping.insert(1, 3));
        assert!(!mapping.insert(1, 4), "left index already mapped");
        assert!(!mapping.insert(2, 3), "right index already consumed");
        assert!(mapping.insert(2, 4));
        assert_eq!(mapping.get(1), Some(3));
        assert_eq!(mapping.get(0), None);
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn iterates_in_left_order() {
        let mapping: FieldMapping = [(5, 0), (0, 2), (2, 1)].into_iter().collect();
        let entries: Vec<_> = mapping.iter().collect();
        assert_eq!(entries, vec![(0, 2), (2, 1), (5, 0)]);
        assert!(mapping.contains_right(1));
        assert!(!mapping.contains_right(3));
    }

    #[test]
    fn serializes_as_object() {
        let mapping: FieldMapping = [(1, 1), (2, 0)].into_iter().collect();
        let json = serde_json::to_string(&mapping).expect("serialize mapping");
        assert_eq!(json, r#"{"1":1,"2":0}"#);
        let back: FieldMapping = serde_json::from_str(&json).expect("deserialize mapping");
        assert_eq!(back, mapping);
    }

    #[test]
    fn deserialize_rejects_shared_right_index() {
        let error = serde_json::from_str::<FieldMapping>(r#"{"0":1,"2":1}"#).unwrap_err();
        assert!(
            error.to_string().contains("right field 1"),
            "unexpected error: {error}"
        );
    }

    #[test]
    fn try_from_reports_both_left_indices() {
        let entries = BTreeMap::from([(0, 1), (2, 1)]);
        assert_eq!(
            FieldMapping::try_from(entries),
            Err(MappingError {
                right: 1,
                first: 0,
                second: 2,
            })
        );
    }
}
