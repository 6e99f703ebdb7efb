//! Data model shared by the tabmatch crates.
//!
//! Rows are positional: a [`Row`] is the comma-split form of one line of text,
//! with no named access. A [`FieldMapping`] relates field positions of the
//! left dataset to field positions of the right dataset, and an
//! [`AlignedPairing`] is the ordered result of matching every left row to its
//! best right row.

#![deny(unsafe_code)]

pub mod dataset;
pub mod mapping;
pub mod pairing;
pub mod row;

pub use dataset::Dataset;
pub use mapping::{FieldMapping, MappingError};
pub use pairing::{AlignedPair, AlignedPairing, MatchCandidate};
pub use row::{FIELD_DELIMITER, Row};
