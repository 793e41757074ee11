//! Table view configuration loading errors

use std::path::PathBuf;

/// Errors that can occur while loading a table view definition.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The definition file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The definition is not valid JSON or does not match the expected shape.
    #[error("Invalid table view definition: {0}")]
    Parse(#[from] serde_json::Error),
}
