use serde::{Deserialize, Serialize};

use crate::row::Row;

/// A header row plus its data rows.
///
/// The header is carried for re-emission only; matching never looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub header: Row,
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Builds a dataset, dropping blank data lines.
    pub fn from_lines<'a, I>(header: &str, lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let rows = lines
            .into_iter()
            .map(Row::parse)
            .filter(|row| !row.is_blank())
            .collect();
        Self {
            header: Row::parse(header),
            rows,
        }
    }

    /// First data row, used as the representative sample for field mapping.
    pub fn sample(&self) -> Option<&Row> {
        self.rows.first()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header name for a field position, if the header is that wide.
    pub fn column_name(&self, index: usize) -> Option<&str> {
        self.header.field(index).map(str::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_dropped() {
        let dataset = Dataset::from_lines("name,age", ["Alice,30", "", "  ", "Bob,40"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows[1].as_line(), "Bob,40");
        assert_eq!(dataset.sample().map(Row::as_line), Some("Alice,30"));
    }

    #[test]
    fn column_names_come_from_header() {
        let dataset = Dataset::from_lines("name, age", std::iter::empty());
        assert!(dataset.is_empty());
        assert_eq!(dataset.column_name(1), Some("age"));
        assert_eq!(dataset.column_name(2), None);
    }
}
