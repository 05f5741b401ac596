//! Groups of imports as decided by an external sorter

use serde::{Deserialize, Serialize};

use crate::parsing::ImportElement;

/// Consecutive imports rendered without blank lines between them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportElementGroup {
    pub elements: Vec<ImportElement>,
    /// Blank lines separating this group from the next one
    #[serde(default)]
    pub blank_lines_after: usize,
}

impl ImportElementGroup {
    pub fn new(elements: Vec<ImportElement>, blank_lines_after: usize) -> Self {
        Self {
            elements,
            blank_lines_after,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
