use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
    #[error("clipboard worker stopped")]
    WorkerGone,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
    #[error("failed to set up logging: {0}")]
    Logging(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
