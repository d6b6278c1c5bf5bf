//! Gateway traits for external asynchronous collaborators.
//!
//! Remote statistics aggregation and hint retrieval live outside this
//! core; engines reach them only through these narrow contracts. Every
//! method fails independently with a [`GatewayError`], and no failure is
//! allowed to abort an engine flow — callers degrade to "no data" or a
//! cached fallback.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GatewayError;
use crate::locale::LocaleId;

/// One answered quiz question, submitted to the statistics backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerSubmission {
    /// Unique submission identifier.
    pub submission_id: Uuid,
    /// The quiz the question belongs to.
    pub quiz_id: String,
    /// The question that was answered.
    pub question_id: String,
    /// Whether the chosen answer was the correct one.
    pub is_correct: bool,
    /// Timestamp of the answer.
    pub occurred_at: DateTime<Utc>,
}

/// One finished quiz run, submitted to the statistics backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSubmission {
    /// Unique submission identifier.
    pub submission_id: Uuid,
    /// The quiz that was completed.
    pub quiz_id: String,
    /// Number of correctly answered questions.
    pub score: u32,
    /// Timestamp of completion.
    pub occurred_at: DateTime<Utc>,
}

/// Async access to aggregate answer and score statistics.
#[async_trait]
pub trait StatsGateway: Send + Sync {
    /// Records one answered question.
    async fn submit_answer(&self, submission: AnswerSubmission) -> Result<(), GatewayError>;

    /// Returns the percentage of participants that answered `question_id`
    /// correctly, in `0.0..=100.0`.
    async fn question_correct_percent(
        &self,
        quiz_id: &str,
        question_id: &str,
    ) -> Result<f64, GatewayError>;

    /// Records one completed quiz run.
    async fn submit_score(&self, submission: ScoreSubmission) -> Result<(), GatewayError>;

    /// Returns the percentage of participants that finished with exactly
    /// `score`, in `0.0..=100.0`.
    async fn score_percent(&self, quiz_id: &str, score: u32) -> Result<f64, GatewayError>;
}

/// Async hint text retrieval for puzzle symbols.
#[async_trait]
pub trait HintGateway: Send + Sync {
    /// Returns a one-sentence hint for `symbol_key` in the language
    /// identified by `locale`.
    async fn request_hint(&self, symbol_key: &str, locale: LocaleId)
    -> Result<String, GatewayError>;
}
