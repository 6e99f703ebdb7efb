use serde::{Deserialize, Serialize};

/// Delimiter between fields of a row. Quoting is not supported.
pub const FIELD_DELIMITER: char = ',';

/// One line of a dataset, split into positional fields.
///
/// The original line is kept so the row can be emitted exactly as it was read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Row {
    line: String,
    fields: Vec<String>,
}

impl Row {
    /// Splits a line on [`FIELD_DELIMITER`].
    pub fn parse(line: impl Into<String>) -> Self {
        let line = line.into();
        let fields = line.split(FIELD_DELIMITER).map(str::to_string).collect();
        Self { line, fields }
    }

    pub fn as_line(&self) -> &str {
        &self.line
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Field at `index`, or `None` when the row is shorter than that.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Number of fields. An empty line still has one (empty) field.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// True when the line holds only whitespace.
    pub fn is_blank(&self) -> bool {
        self.line.trim().is_empty()
    }
}

impl From<String> for Row {
    fn from(line: String) -> Self {
        Self::parse(line)
    }
}

impl From<&str> for Row {
    fn from(line: &str) -> Self {
        Self::parse(line)
    }
}

impl From<Row> for String {
    fn from(row: Row) -> Self {
        row.line
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_comma() {
        let row = Row::parse("Alice,2024-01-02,100");
        assert_eq!(row.field_count(), 3);
        assert_eq!(row.field(0), Some("Alice"));
        assert_eq!(row.field(2), Some("100"));
        assert_eq!(row.field(3), None);
        assert_eq!(row.as_line(), "Alice,2024-01-02,100");
    }

    #[test]
    fn parse_keeps_empty_fields() {
        let row = Row::parse("a,,c,");
        assert_eq!(row.fields(), &["a", "", "c", ""]);
    }

    #[test]
    fn quoted_delimiters_are_not_special() {
        let row = Row::parse("\"x,y\",z");
        assert_eq!(row.fields(), &["\"x", "y\"", "z"]);
    }

    #[test]
    fn blank_detection() {
        assert!(Row::parse("   ").is_blank());
        assert!(Row::parse("").is_blank());
        assert!(!Row::parse(",").is_blank());
    }

    #[test]
    fn empty_line_has_one_field() {
        let row = Row::parse("");
        assert_eq!(row.field_count(), 1);
        assert_eq!(row.field(0), Some(""));
        assert_eq!(row.field(1), None);
    }

    #[test]
    fn serializes_as_line() {
        let row = Row::parse("X,1");
        let json = serde_json::to_string(&row).expect("serialize row");
        assert_eq!(json, "\"X,1\"");
        let back: Row = serde_json::from_str(&json).expect("deserialize row");
        assert_eq!(back, row);
    }
}
