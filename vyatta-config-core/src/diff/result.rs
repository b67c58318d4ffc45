use serde::Serialize;

use crate::Node;

/// A single diff outcome for a label path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum DiffEntry {
    /// Node exists in both with identical content.
    Identical { path: String },
    /// Leaf values or section comments differ.
    Modified {
        path: String,
        left: String,
        right: String,
    },
    /// Node only in the left input.
    OnlyLeft { path: String, node: Node },
    /// Node only in the right input.
    OnlyRight { path: String, node: Node },
    /// One side holds a section where the other holds a leaf.
    Structural { path: String, description: String },
}

impl DiffEntry {
    pub fn path(&self) -> &str {
        match self {
            DiffEntry::Identical { path }
            | DiffEntry::Modified { path, .. }
            | DiffEntry::OnlyLeft { path, .. }
            | DiffEntry::OnlyRight { path, .. }
            | DiffEntry::Structural { path, .. } => path,
        }
    }
}
