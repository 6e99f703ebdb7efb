//! Prompt document rendering.

use std::path::Path;

use tabmatch_model::{AlignedPairing, Dataset, Row};
use tracing::{debug, info};

use crate::error::{ReportError, Result};

pub const LEFT_LABEL: &str = "{{left_label}}";
pub const LEFT_TABLE: &str = "{{left_table}}";
pub const RIGHT_LABEL: &str = "{{right_label}}";
pub const RIGHT_TABLE: &str = "{{right_table}}";

pub const DEFAULT_LEFT_LABEL: &str = "TableData_JA";
pub const DEFAULT_RIGHT_LABEL: &str = "TableData_US";

const DEFAULT_TEMPLATE: &str = include_str!("../templates/prompt.md");

/// Names under which the two tables appear in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLabels {
    pub left: String,
    pub right: String,
}

impl Default for TableLabels {
    fn default() -> Self {
        Self {
            left: DEFAULT_LEFT_LABEL.to_string(),
            right: DEFAULT_RIGHT_LABEL.to_string(),
        }
    }
}

/// Document template with `{{left_label}}`, `{{left_table}}`,
/// `{{right_label}}` and `{{right_table}}` placeholders.
///
/// Both table placeholders are required; labels are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplate {
    pub fn parse(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        for placeholder in [LEFT_TABLE, RIGHT_TABLE] {
            if !text.contains(placeholder) {
                return Err(ReportError::MissingPlaceholder { placeholder });
            }
        }
        Ok(Self { text })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ReportError::TemplateRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), "loaded prompt template");
        Self::parse(text)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Substitutes placeholders in one pass, so placeholder-like text inside
    /// the tables is left alone.
    fn render(&self, values: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text.as_str();
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            match values.iter().find(|(key, _)| tail.starts_with(key)) {
                Some((key, value)) => {
                    out.push_str(value);
                    rest = &tail[key.len()..];
                }
                None => {
                    out.push_str("{{");
                    rest = &tail[2..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// The two labelled tables to embed in the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDocument {
    pub labels: TableLabels,
    pub left_table: String,
    pub right_table: String,
}

impl PromptDocument {
    /// Re-attaches each dataset's header to its aligned row block.
    pub fn from_pairing(
        left: &Dataset,
        right: &Dataset,
        pairing: &AlignedPairing,
        labels: TableLabels,
    ) -> Self {
        let (left_block, right_block) = pairing.to_blocks();
        Self {
            labels,
            left_table: render_table(&left.header, &left_block),
            right_table: render_table(&right.header, &right_block),
        }
    }

    pub fn render(&self, template: &PromptTemplate) -> String {
        template.render(&[
            (LEFT_LABEL, self.labels.left.as_str()),
            (LEFT_TABLE, self.left_table.as_str()),
            (RIGHT_LABEL, self.labels.right.as_str()),
            (RIGHT_TABLE, self.right_table.as_str()),
        ])
    }
}

/// Header line followed by the row block.
pub fn render_table(header: &Row, block: &str) -> String {
    format!("{}\n{}", header.as_line(), block)
}

/// Writes a rendered document, creating missing parent directories.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    let write_error = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, contents).map_err(write_error)?;
    info!(path = %path.display(), bytes = contents.len(), "wrote document");
    Ok(())
}
