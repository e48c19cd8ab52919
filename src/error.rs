use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhysCalcError {
    #[error("Unknown constant: {0}")]
    UnknownConstant(String),

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PhysCalcResult<T> = Result<T, PhysCalcError>;
