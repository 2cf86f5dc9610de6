use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Invalid path token '{token}' in '{path}': {reason}")]
    PathSyntax {
        path: String,
        token: String,
        reason: String,
    },

    #[error("Path resolution failed: '{path}', reason: {reason}")]
    PathNotFound {
        path: String,
        reason: String,
    },

    #[error("Invalid tree document format: {0}")]
    DocumentFormat(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type TreeResult<T> = Result<T, TreeError>;
