#![forbid(unsafe_code)]

pub mod error;
pub mod exam;

pub use exam_core::Clock;

pub use error::{ComposeError, ScoreError, SessionError};
pub use exam::{
    Advance, ExamSession, SessionProgress, SessionState, compose, compose_with_rng, sample,
    sample_with_rng, score, score_session,
};
