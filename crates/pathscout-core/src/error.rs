use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config structure: {0}")]
    InvalidStructure(String),
}

pub type Result<T> = std::result::Result<T, Error>;
