use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown browser '{name}'. Supported: {supported}")]
    UnknownBrowser { name: String, supported: String },

    #[error("Registry error: {0}")]
    Registry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
