//! Errors surfaced by the demo binary.

use std::io;
use std::path::PathBuf;

use trellis::widgets::table::TableError;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read user fixture '{}': {source}", path.display())]
    ReadFixture { path: PathBuf, source: io::Error },

    #[error("Invalid user fixture '{origin}': {source}")]
    ParseFixture {
        origin: String,
        source: serde_json::Error,
    },

    #[error("Invalid table columns: {0}")]
    Columns(#[from] TableError),

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl DemoError {
    pub fn parse_fixture(origin: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ParseFixture {
            origin: origin.into(),
            source,
        }
    }
}
