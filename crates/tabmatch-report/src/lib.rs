//! Output documents for tabmatch.
//!
//! The aligned tables are handed to a downstream text-generation step as a
//! single prompt document. This crate renders that document from a template,
//! writes it to disk, and produces a machine-readable alignment report.

mod error;
mod json;
mod prompt;

pub use error::{ReportError, Result};
pub use json::{AlignmentReport, PairSummary, write_alignment_report};
pub use prompt::{
    DEFAULT_LEFT_LABEL, DEFAULT_RIGHT_LABEL, LEFT_LABEL, LEFT_TABLE, PromptDocument,
    PromptTemplate, RIGHT_LABEL, RIGHT_TABLE, TableLabels, render_table, write_document,
};
