//! Shared error types for the engine crate.

use thiserror::Error;

use exam_core::model::{Category, ResultError};

/// Errors raised while composing a test from an item pool.
///
/// These are configuration problems: the requested session shape does not
/// fit the pool. Composition fails outright rather than silently returning
/// a thinner exam than the format asked for.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ComposeError {
    #[error("no category quotas given")]
    EmptyQuotas,

    #[error("quota for {category} asks for {requested} items but the pool only has {available}")]
    QuotaExceedsPool {
        category: Category,
        requested: usize,
        available: usize,
    },
}

/// Errors raised by the session state machine.
///
/// All of these are programmer or integration errors in the caller; the
/// session refuses the call instead of silently repairing its state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot build a session with no items")]
    Empty,

    #[error("session has already been started")]
    AlreadyStarted,

    #[error("session has not been started")]
    NotStarted,

    #[error("session is already completed")]
    Completed,

    #[error("item {index} already has an answer recorded")]
    AlreadyAnswered { index: usize },

    #[error("no answer recorded for item {index}")]
    NoAnswer { index: usize },

    #[error("option index {option} out of range for {len} options")]
    OptionOutOfRange { option: usize, len: usize },
}

/// Errors raised while scoring.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("answer count ({answers}) does not match item count ({items})")]
    AnswerCountMismatch { answers: usize, items: usize },

    #[error("no pass threshold defined for {category}")]
    MissingThreshold { category: Category },

    #[error("session is not completed")]
    SessionNotComplete,

    #[error(transparent)]
    Result(#[from] ResultError),
}
