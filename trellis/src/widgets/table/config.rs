//! Table configuration.

use serde::{Deserialize, Serialize};

/// Flags a table is rendered with.
///
/// - `loading` replaces the rows with a loading indicator.
/// - `selectable` adds a selection cell to every row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub loading: bool,
    pub selectable: bool,
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }
}
