use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScamError {
    #[error("Model loading failed: {0}")]
    ModelUnavailable(String),

    #[error("No content provided")]
    EmptyContent,

    #[error("Analysis failed: {0}")]
    Analysis(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScamError>;
