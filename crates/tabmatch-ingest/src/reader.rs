//! Reading table files into datasets.

use std::path::Path;

use tabmatch_model::Dataset;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Byte-order mark some editors put at the start of UTF-8 files.
pub const UTF8_BOM: char = '\u{feff}';

/// Reads a table file as text, without the BOM and surrounding whitespace.
///
/// Fails with [`IngestError::EmptyFile`] when nothing is left.
pub fn read_table_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let text = String::from_utf8(bytes).map_err(|e| IngestError::InvalidUtf8 {
        path: path.to_path_buf(),
        source: e,
    })?;

    let cleaned = clean_text(&text);
    if cleaned.is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    Ok(cleaned.to_string())
}

/// Loads a table file: header line plus non-blank data lines.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let text = read_table_text(path)?;
    let dataset = parse_table_text(&text);
    debug!(
        path = %path.display(),
        columns = dataset.header.field_count(),
        rows = dataset.len(),
        "loaded table"
    );
    Ok(dataset)
}

/// Splits table text into a header and data rows.
///
/// Accepts `\n` and `\r\n` line endings. Text with no lines yields an empty
/// header and no rows.
pub fn parse_table_text(text: &str) -> Dataset {
    let mut lines = clean_text(text).lines();
    let header = lines.next().unwrap_or_default();
    Dataset::from_lines(header, lines)
}

fn clean_text(text: &str) -> &str {
    text.strip_prefix(UTF8_BOM).unwrap_or(text).trim()
}
