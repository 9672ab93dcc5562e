use std::fs;
use std::path::Path;

use crate::domain::common::entities::app_errors::CoreError;

/// Ordered list of localized class names, index-aligned with the
/// classifier's output vector. Loaded once at startup and read-only for the
/// process lifetime.
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    labels: Vec<String>,
}

impl LabelTable {
    /// Parses the label file format: one class per line as
    /// `<english-name>|<localized-name>`, blank lines and `#` comments
    /// ignored. Line order defines the classifier output index.
    pub fn parse(content: &str) -> Result<Self, CoreError> {
        let mut labels = Vec::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (_english, localized) = line.split_once('|').ok_or_else(|| {
                CoreError::LabelTable(format!(
                    "line {}: expected '<english-name>|<localized-name>', got {:?}",
                    line_no + 1,
                    line
                ))
            })?;

            labels.push(localized.trim().to_string());
        }

        Ok(Self { labels })
    }

    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::LabelTable(format!("failed to read {}: {}", path.display(), e))
        })?;

        Self::parse(&content)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Index of the maximum classifier score and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub index: usize,
    pub confidence: f32,
}
