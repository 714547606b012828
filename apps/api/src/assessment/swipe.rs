use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::assessment::questions::{SwipeQuestion, SWIPE_QUESTIONS};
use crate::models::career::CareerPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeChoice {
    Left,
    Right,
    Skip,
}

/// Question id → choice. Serializes with string keys: `{"1": "right", "2": "skip"}`.
pub type SwipeAnswers = BTreeMap<u32, SwipeChoice>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Complete,
}

#[derive(Debug, Error, PartialEq)]
pub enum AssessmentError {
    #[error("Assessment is already complete")]
    AlreadyComplete,

    #[error("Assessment is not complete: {answered}/{total} questions answered")]
    Incomplete { answered: usize, total: usize },
}

/// One pass through the swipe quiz.
///
/// Questions are presented in order. Each `answer` records exactly one choice for the
/// current question and moves on; the session is complete once the last card is answered.
#[derive(Debug, Clone)]
pub struct SwipeSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    questions: &'static [SwipeQuestion],
    current: usize,
    answers: SwipeAnswers,
    /// Careers from the last results call, so their ids resolve in later requests.
    recommended: Vec<CareerPath>,
}

impl Default for SwipeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeSession {
    pub fn new() -> Self {
        Self::with_questions(SWIPE_QUESTIONS)
    }

    pub fn with_questions(questions: &'static [SwipeQuestion]) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            questions,
            current: 0,
            answers: SwipeAnswers::new(),
            recommended: Vec::new(),
        }
    }

    pub fn status(&self) -> SessionStatus {
        if self.current >= self.questions.len() {
            SessionStatus::Complete
        } else {
            SessionStatus::InProgress
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status() == SessionStatus::Complete
    }

    pub fn current_question(&self) -> Option<&'static SwipeQuestion> {
        self.questions.get(self.current)
    }

    /// Records `choice` for the current question and advances.
    pub fn answer(&mut self, choice: SwipeChoice) -> Result<SessionStatus, AssessmentError> {
        let question = self
            .current_question()
            .ok_or(AssessmentError::AlreadyComplete)?;
        self.answers.insert(question.id, choice);
        self.current += 1;
        Ok(self.status())
    }

    #[cfg(test)]
    pub fn answers(&self) -> &SwipeAnswers {
        &self.answers
    }

    /// The answers, but only once every question has been answered or skipped.
    pub fn completed_answers(&self) -> Result<&SwipeAnswers, AssessmentError> {
        if self.is_complete() {
            Ok(&self.answers)
        } else {
            Err(AssessmentError::Incomplete {
                answered: self.answers.len(),
                total: self.questions.len(),
            })
        }
    }

    pub fn record_results(&mut self, careers: Vec<CareerPath>) {
        self.recommended = careers;
    }

    pub fn recommended_career(&self, career_id: &str) -> Option<&CareerPath> {
        self.recommended.iter().find(|c| c.id == career_id)
    }

    /// 1-based position of the card on screen, capped at the total once complete.
    pub fn position(&self) -> usize {
        (self.current + 1).min(self.questions.len())
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn progress_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 100.0;
        }
        self.answers.len() as f64 / self.questions.len() as f64 * 100.0
    }

    pub fn view(&self) -> SwipeSessionView {
        SwipeSessionView {
            id: self.id,
            status: self.status(),
            position: self.position(),
            total: self.total(),
            answered: self.answers.len(),
            progress_percent: self.progress_percent(),
            current_question: self.current_question().cloned(),
            created_at: self.created_at,
        }
    }
}

/// Snapshot returned to callers after every interaction.
#[derive(Debug, Clone, Serialize)]
pub struct SwipeSessionView {
    pub id: Uuid,
    pub status: SessionStatus,
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub progress_percent: f64,
    pub current_question: Option<SwipeQuestion>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_at_first_question() {
        let session = SwipeSession::new();
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.current_question().unwrap().id, 1);
        assert_eq!(session.position(), 1);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn test_each_answer_records_one_entry_for_current_id() {
        let mut session = SwipeSession::new();
        session.answer(SwipeChoice::Right).unwrap();
        session.answer(SwipeChoice::Skip).unwrap();

        assert_eq!(session.answers().len(), 2);
        assert_eq!(session.answers()[&1], SwipeChoice::Right);
        assert_eq!(session.answers()[&2], SwipeChoice::Skip);
        assert_eq!(session.current_question().unwrap().id, 3);
    }

    #[test]
    fn test_complete_only_after_every_question() {
        let mut session = SwipeSession::new();
        let total = session.total();

        for i in 0..total - 1 {
            let status = session.answer(SwipeChoice::Left).unwrap();
            assert_eq!(status, SessionStatus::InProgress, "after answer {}", i + 1);
        }
        assert!(!session.is_complete());

        let status = session.answer(SwipeChoice::Skip).unwrap();
        assert_eq!(status, SessionStatus::Complete);
        assert_eq!(session.answers().len(), total);
        assert_eq!(session.position(), total);
        assert_eq!(session.progress_percent(), 100.0);
    }

    #[test]
    fn test_answer_after_completion_is_rejected() {
        let mut session = SwipeSession::new();
        for _ in 0..session.total() {
            session.answer(SwipeChoice::Right).unwrap();
        }
        assert_eq!(
            session.answer(SwipeChoice::Left),
            Err(AssessmentError::AlreadyComplete)
        );
        assert_eq!(session.answers().len(), session.total());
    }

    #[test]
    fn test_completed_answers_requires_completion() {
        let mut session = SwipeSession::new();
        session.answer(SwipeChoice::Right).unwrap();
        assert_eq!(
            session.completed_answers(),
            Err(AssessmentError::Incomplete {
                answered: 1,
                total: 15
            })
        );
    }

    #[test]
    fn test_answers_serialize_with_string_keys() {
        let mut session = SwipeSession::new();
        session.answer(SwipeChoice::Right).unwrap();
        session.answer(SwipeChoice::Skip).unwrap();
        let json = serde_json::to_value(session.answers()).unwrap();
        assert_eq!(json, serde_json::json!({ "1": "right", "2": "skip" }));
    }

    #[test]
    fn test_recorded_results_resolve_by_id() {
        let mut session = SwipeSession::new();
        assert!(session.recommended_career("game-designer").is_none());

        let career = crate::catalog::mapping::from_backend(
            &crate::backend::stub::backend_career("Game Designer", "Arts", Some(90.0)),
        );
        session.record_results(vec![career]);
        assert_eq!(
            session.recommended_career("game-designer").unwrap().title,
            "Game Designer"
        );
    }

    #[test]
    fn test_view_of_complete_session_has_no_current_question() {
        let mut session = SwipeSession::new();
        for _ in 0..session.total() {
            session.answer(SwipeChoice::Left).unwrap();
        }
        let view = session.view();
        assert_eq!(view.status, SessionStatus::Complete);
        assert!(view.current_question.is_none());
        assert_eq!(view.answered, 15);
    }
}
