use thiserror::Error;

use ts_core::CoreError;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("input parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type QueueResult<T> = Result<T, QueueError>;
