//! Quiz content supplied by external configuration.

use serde::{Deserialize, Serialize};
use waystone_core::error::EngineError;
use waystone_core::locale::LocaleId;

/// Question and answer texts for one question in one locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionText {
    /// The question text.
    pub question: String,
    /// Answer options, in display order.
    pub answers: Vec<String>,
}

/// One quiz question with its locale-indexed texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Index of the correct answer, shared across locales.
    pub correct_answer_index: usize,
    /// Texts, indexed by locale id.
    pub texts: Vec<QuestionText>,
}

impl QuizQuestion {
    /// Returns the texts for `locale`, if configured.
    #[must_use]
    pub fn text(&self, locale: LocaleId) -> Option<&QuestionText> {
        self.texts.get(locale as usize)
    }
}

/// A complete quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizData {
    /// Stable identifier used in statistics submissions.
    pub quiz_id: String,
    /// Questions in presentation order.
    pub questions: Vec<QuizQuestion>,
}

impl QuizData {
    /// Checks structural consistency: at least one question, every
    /// question has texts with a uniform non-zero answer count, and the
    /// correct index is in range.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ContractViolation` describing the first
    /// inconsistency found.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.questions.is_empty() {
            return Err(EngineError::ContractViolation(format!(
                "quiz {:?} has no questions",
                self.quiz_id
            )));
        }
        for (i, question) in self.questions.iter().enumerate() {
            let Some(first) = question.texts.first() else {
                return Err(EngineError::ContractViolation(format!(
                    "question {i} has no texts"
                )));
            };
            if first.answers.is_empty() {
                return Err(EngineError::ContractViolation(format!(
                    "question {i} has no answers"
                )));
            }
            if question
                .texts
                .iter()
                .any(|t| t.answers.len() != first.answers.len())
            {
                return Err(EngineError::ContractViolation(format!(
                    "question {i} has differing answer counts across locales"
                )));
            }
            if question.correct_answer_index >= first.answers.len() {
                return Err(EngineError::ContractViolation(format!(
                    "question {i} correct answer index {} out of range",
                    question.correct_answer_index
                )));
            }
        }
        Ok(())
    }

    /// Stable question identifier used in statistics submissions
    /// ("Q1", "Q2", ...).
    #[must_use]
    pub fn question_id(index: usize) -> String {
        format!("Q{}", index + 1)
    }
}
