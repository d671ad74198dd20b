use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Unknown report variant: {0}")]
    UnknownVariant(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
