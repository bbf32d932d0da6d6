use std::collections::BTreeMap;

use exam_core::model::{Category, CategoryScore, CategoryThresholds, ExamResult, Item};

use crate::error::ScoreError;
use super::session::ExamSession;

/// Score a completed answer vector against per-category pass thresholds.
///
/// Pure and deterministic: the same inputs always yield the same result.
/// Each item counts toward its own category; a category passes when its
/// correct count reaches the threshold, and the exam passes only when every
/// category present in the session passes. Difficulty and context metadata
/// never enter the tally.
///
/// # Errors
///
/// Returns `ScoreError::AnswerCountMismatch` unless every item has exactly
/// one answer, and `ScoreError::MissingThreshold` if a sampled category has
/// no configured pass mark.
pub fn score(
    items: &[Item],
    answers: &[usize],
    thresholds: &CategoryThresholds,
) -> Result<ExamResult, ScoreError> {
    if answers.len() != items.len() {
        return Err(ScoreError::AnswerCountMismatch {
            answers: answers.len(),
            items: items.len(),
        });
    }

    let mut tallies: BTreeMap<Category, (usize, usize)> = BTreeMap::new();
    for (item, &answer) in items.iter().zip(answers) {
        let (correct, total) = tallies.entry(item.category()).or_default();
        *total += 1;
        if item.is_correct(answer) {
            *correct += 1;
        }
    }

    let mut categories = BTreeMap::new();
    for (category, (correct, total)) in tallies {
        let required = thresholds
            .get(category)
            .ok_or(ScoreError::MissingThreshold { category })?;
        let section = CategoryScore::new(category, correct, total, required)?;
        categories.insert(category, section);
    }

    Ok(ExamResult::new(categories)?)
}

/// Score a session once it has run to completion.
///
/// # Errors
///
/// Returns `ScoreError::SessionNotComplete` for an unfinished session,
/// otherwise behaves like [`score`].
pub fn score_session(
    session: &ExamSession,
    thresholds: &CategoryThresholds,
) -> Result<ExamResult, ScoreError> {
    if !session.is_complete() {
        return Err(ScoreError::SessionNotComplete);
    }
    score(session.items(), session.answers(), thresholds)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
