// src/error.rs

use std::path::PathBuf;

use rmcp::ErrorData;
use thiserror::Error;

/// Failures while locating or reading the widget HTML.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error(
        "Widget HTML for kitchen-sink-lite not found in {}. \
         Run `pnpm run build` from the repo root to generate assets.",
        .dir.display()
    )]
    Missing { dir: PathBuf },

    #[error("Failed to read widget HTML from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<AssetError> for ErrorData {
    fn from(err: AssetError) -> Self {
        match err {
            AssetError::Missing { .. } => ErrorData::resource_not_found(err.to_string(), None),
            AssetError::Read { .. } => ErrorData::internal_error(err.to_string(), None),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
