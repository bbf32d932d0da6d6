mod composer;
mod progress;
mod sampler;
mod scorer;
mod session;

// Public API of the exam subsystem.
pub use composer::{compose, compose_with_rng};
pub use progress::SessionProgress;
pub use sampler::{sample, sample_with_rng};
pub use scorer::{score, score_session};
pub use session::{Advance, ExamSession, SessionState};
