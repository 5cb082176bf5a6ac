use std::io;
use thiserror::Error;

pub type HalResult<T> = Result<T, HalError>;
pub type OaiResult<T> = Result<T, OaiError>;

#[derive(Error, Debug)]
pub enum HalError {
    #[error("Failed to open {url} in the external browser: {source}")]
    OpenExternal {
        url: String,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum OaiError {
    #[error(transparent)]
    Hal(#[from] HalError),

    #[error("An addon file picker is already open")]
    PickPending,

    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}
