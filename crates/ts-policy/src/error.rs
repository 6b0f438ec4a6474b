use thiserror::Error;

use crate::PriorityRule;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("{0} rule invoked with no one waiting in either lane")]
    NoCandidates(PriorityRule),
}

pub type PolicyResult<T> = Result<T, PolicyError>;
