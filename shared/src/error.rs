//! Error types for catalog loading and input parsing

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a rule catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog contains no valid plant entries")]
    Empty,
}

/// Errors raised when parsing user-supplied identifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown plant type: {0}")]
    UnknownPlantType(String),

    #[error("Unknown season: {0}")]
    UnknownSeason(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown duration type: {0}")]
    UnknownDurationType(String),
}
