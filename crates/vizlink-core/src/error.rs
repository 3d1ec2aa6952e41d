use thiserror::Error;

pub type Result<T> = std::result::Result<T, VizError>;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("wire error: {0}")]
    Wire(String),

    #[error("sequence format error: {0}")]
    SequenceFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
