//! Tabular export of a computed cloud.
//!
//! One row per cloud, keyed by cloud name, with four parallel string
//! columns: words, font sizes, cluster ids, and sequence numbers.

use serde::{Deserialize, Serialize};
use tagcloud_core::errors::{CloudError, CloudResult};

use super::words::CloudOutput;

/// One exported cloud. All columns have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudTableRow {
    pub name: String,
    pub words: Vec<String>,
    pub font_sizes: Vec<String>,
    pub clusters: Vec<String>,
    /// 0-based position of each word in the output ordering.
    pub sequence: Vec<String>,
}

impl CloudTableRow {
    pub fn from_output(name: impl Into<String>, output: &CloudOutput) -> Self {
        let n = output.words.len();
        let mut row = Self {
            name: name.into(),
            words: Vec::with_capacity(n),
            font_sizes: Vec::with_capacity(n),
            clusters: Vec::with_capacity(n),
            sequence: Vec::with_capacity(n),
        };
        for (position, word) in output.words.iter().enumerate() {
            row.words.push(word.word.clone());
            row.font_sizes.push(word.font_size.to_string());
            row.clusters.push(word.cluster.to_string());
            row.sequence.push(position.to_string());
        }
        row
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn to_json(&self) -> CloudResult<String> {
        serde_json::to_string(self).map_err(|e| CloudError::Serialization {
            what: format!("cloud table row {:?}", self.name),
            message: e.to_string(),
        })
    }

    pub fn from_json(json: &str) -> CloudResult<Self> {
        let row: Self = serde_json::from_str(json).map_err(|e| CloudError::Serialization {
            what: "cloud table row".to_string(),
            message: e.to_string(),
        })?;
        let n = row.words.len();
        if row.font_sizes.len() != n || row.clusters.len() != n || row.sequence.len() != n {
            return Err(CloudError::invalid(
                "cloud table row",
                format!("columns of {:?} differ in length", row.name),
            ));
        }
        Ok(row)
    }
}

/// Serialize several rows as a JSON array.
pub fn rows_to_json(rows: &[CloudTableRow]) -> CloudResult<String> {
    serde_json::to_string_pretty(rows).map_err(|e| CloudError::Serialization {
        what: "cloud table".to_string(),
        message: e.to_string(),
    })
}
