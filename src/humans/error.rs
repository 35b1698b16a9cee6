use thiserror::Error;

#[derive(Error, Debug)]
pub enum HumansError {
    #[error("The data file name is absent")]
    MissingDataPath,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, HumansError>;
