use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Could not find bundled data file at {}", .0.display())]
    ResourceNotFound(PathBuf),

    #[error("AnkiConnect error: {0}")]
    AnkiConnect(String),

    #[error("ImportError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for ImportError {
    fn from(error: std::io::Error) -> Self {
        ImportError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for ImportError {
    fn from(error: reqwest::Error) -> Self {
        ImportError::Reqwest(Box::new(error))
    }
}
