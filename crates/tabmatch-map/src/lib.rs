//! Row alignment between two independently produced tables.
//!
//! The two tables may name and order their columns differently, so columns
//! are related by content instead of by header:
//!
//! 1. [`detect_field_mapping`] fingerprints the first data row of each side
//!    (dates, alphanumeric codes, numbers) and records which left field
//!    corresponds to which right field.
//! 2. [`score_rows`] rates how alike two rows are under that mapping.
//! 3. [`RowAligner`] pairs every left row with its highest-scoring right row.
//!
//! Nothing here fails: malformed rows, empty inputs and an empty mapping all
//! degrade to weaker (possibly zero) scores instead of errors.
//!
//! # Example
//!
//! ```
//! use tabmatch_map::align_lines;
//!
//! let (left, right) = align_lines(
//!     ["A100,2024-01-02,5", "B200,2024-02-03,7"],
//!     ["7,B200,2024/02/03", "5,A100,2024/01/02"],
//! );
//! assert_eq!(left, "A100,2024-01-02,5\nB200,2024-02-03,7");
//! assert_eq!(right, "5,A100,2024/01/02\n7,B200,2024/02/03");
//! ```

#![deny(unsafe_code)]

pub mod classify;
pub mod detect;
pub mod engine;
pub mod score;

pub use classify::{
    date_key, dates_equal, is_code_shaped, is_date_shaped, is_numeric, numeric_equal,
    parse_number,
};
pub use detect::{FieldKind, FieldMatch, detect_field_mapping, detect_field_matches};
pub use engine::{RowAligner, align_datasets, align_lines, align_rows};
pub use score::{
    DATE_MATCH_WEIGHT, EXACT_MATCH_WEIGHT, MAPPED_FIELD_WEIGHT, NUMERIC_MATCH_WEIGHT, RowScore,
    ScoreComponent, ScoreKind, explain_score, score_rows,
};
