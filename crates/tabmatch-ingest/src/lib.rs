//! Table loading for tabmatch.
//!
//! Input files are plain comma-delimited text: the first line is the header,
//! every other non-blank line is a data row. Quoting is not interpreted.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tabmatch_ingest::load_dataset;
//!
//! let dataset = load_dataset(Path::new("data1.csv"))?;
//! println!("{} rows", dataset.len());
//! ```

mod error;
mod reader;

pub use error::{IngestError, Result};
pub use reader::{UTF8_BOM, load_dataset, parse_table_text, read_table_text};
