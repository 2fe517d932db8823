//! Error handling for the resume screener application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document conversion error: {0}")]
    Conversion(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("LLM service error: {0}")]
    LlmService(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Workflow error: {0}")]
    Workflow(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, ScreenerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ScreenerError {
    fn from(err: anyhow::Error) -> Self {
        ScreenerError::Conversion(err.to_string())
    }
}

impl From<reqwest::Error> for ScreenerError {
    fn from(err: reqwest::Error) -> Self {
        ScreenerError::LlmService(err.to_string())
    }
}

impl From<csv::Error> for ScreenerError {
    fn from(err: csv::Error) -> Self {
        ScreenerError::Export(err.to_string())
    }
}
