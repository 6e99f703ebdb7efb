//! CLI library components for tabmatch.

pub mod logging;
pub mod pipeline;
