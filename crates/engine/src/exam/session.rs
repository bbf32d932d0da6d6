use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use exam_core::model::Item;

use crate::error::SessionError;
use super::progress::SessionProgress;

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// Lifecycle of a candidate's attempt. There is no cancelled state; an
/// abandoned session is simply dropped by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    NotStarted,
    InProgress,
    Completed,
}

/// Outcome of [`ExamSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved the cursor to the given item index.
    Next(usize),
    /// The last item was answered; the session is now complete and ready to
    /// be scored.
    Completed,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One candidate's attempt at a composed test.
///
/// The item order is fixed at construction and never reshuffled. Recording an
/// answer and moving to the next item are separate operations so the caller
/// can show feedback between them; an answer cannot be revised once recorded.
/// The whole value serializes, so a caller may persist and resume an attempt,
/// but the engine itself never does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamSession {
    items: Vec<Item>,
    answers: Vec<usize>,
    current: usize,
    state: SessionState,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl ExamSession {
    /// Create a session over a composed, fixed-order item sequence.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no items are provided.
    pub fn new(items: Vec<Item>) -> Result<Self, SessionError> {
        if items.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            items,
            answers: Vec::new(),
            current: 0,
            state: SessionState::NotStarted,
            started_at: None,
            completed_at: None,
        })
    }

    /// Begin the attempt.
    ///
    /// `started_at` should come from the caller's clock to keep time
    /// deterministic in tests.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyStarted` unless the session is fresh.
    pub fn start(&mut self, started_at: DateTime<Utc>) -> Result<(), SessionError> {
        if self.state != SessionState::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }

        self.state = SessionState::InProgress;
        self.current = 0;
        self.answers.clear();
        self.started_at = Some(started_at);
        Ok(())
    }

    /// Record the candidate's answer for the current item.
    ///
    /// Does not move the cursor; call [`ExamSession::advance`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns a `SessionError` when called outside `InProgress`, when the
    /// current item already has an answer, or when `option` does not address
    /// one of the item's options. Double submits fail loudly instead of
    /// overwriting.
    pub fn submit_answer(&mut self, option: usize) -> Result<(), SessionError> {
        self.require_in_progress()?;
        if self.answers.len() > self.current {
            return Err(SessionError::AlreadyAnswered {
                index: self.current,
            });
        }

        let len = self.items[self.current].options().len();
        if option >= len {
            return Err(SessionError::OptionOutOfRange { option, len });
        }

        self.answers.push(option);
        Ok(())
    }

    /// Move past the current item once it has a recorded answer.
    ///
    /// On the last item this completes the session instead of moving the
    /// cursor; `completed_at` should come from the caller's clock.
    ///
    /// # Errors
    ///
    /// Returns a `SessionError` when called outside `InProgress` or before an
    /// answer has been recorded for the current item.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<Advance, SessionError> {
        self.require_in_progress()?;
        if self.answers.len() != self.current + 1 {
            return Err(SessionError::NoAnswer {
                index: self.current,
            });
        }

        if self.current + 1 == self.items.len() {
            self.state = SessionState::Completed;
            self.completed_at = Some(now);
            return Ok(Advance::Completed);
        }

        self.current += 1;
        Ok(Advance::Next(self.current))
    }

    fn require_in_progress(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::InProgress => Ok(()),
            SessionState::NotStarted => Err(SessionError::NotStarted),
            SessionState::Completed => Err(SessionError::Completed),
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Recorded answers, one option index per answered item, in item order.
    #[must_use]
    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    /// 0-based cursor into the item sequence. Monotonic while in progress.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The item the candidate is currently facing, if the session is active.
    #[must_use]
    pub fn current_item(&self) -> Option<&Item> {
        if self.state == SessionState::InProgress {
            self.items.get(self.current)
        } else {
            None
        }
    }

    /// True once an answer is recorded for the current item but the cursor
    /// has not moved yet.
    #[must_use]
    pub fn current_answered(&self) -> bool {
        self.answers.len() > self.current
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.items.len().saturating_sub(self.answers.len())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Completed
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_items(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
