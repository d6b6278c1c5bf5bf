//! Test gateways — mock `StatsGateway` and `HintGateway` implementations.

use std::sync::Mutex;

use async_trait::async_trait;
use waystone_core::error::GatewayError;
use waystone_core::gateway::{AnswerSubmission, HintGateway, ScoreSubmission, StatsGateway};
use waystone_core::locale::LocaleId;

/// A stats gateway that records every submission and returns configured
/// results from the percentage queries.
#[derive(Debug)]
pub struct RecordingStatsGateway {
    question_percent: Result<f64, GatewayError>,
    score_percent: Result<f64, GatewayError>,
    answers: Mutex<Vec<AnswerSubmission>>,
    scores: Mutex<Vec<ScoreSubmission>>,
}

impl RecordingStatsGateway {
    /// Creates a gateway whose percentage queries always succeed with the
    /// given values.
    #[must_use]
    pub fn new(question_percent: f64, score_percent: f64) -> Self {
        Self::with_results(Ok(question_percent), Ok(score_percent))
    }

    /// Creates a gateway with explicit per-query results, for scenarios
    /// where only one of the queries fails.
    #[must_use]
    pub fn with_results(
        question_percent: Result<f64, GatewayError>,
        score_percent: Result<f64, GatewayError>,
    ) -> Self {
        Self {
            question_percent,
            score_percent,
            answers: Mutex::new(Vec::new()),
            scores: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all submitted answers.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn submitted_answers(&self) -> Vec<AnswerSubmission> {
        self.answers.lock().unwrap().clone()
    }

    /// Returns a snapshot of all submitted scores.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn submitted_scores(&self) -> Vec<ScoreSubmission> {
        self.scores.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatsGateway for RecordingStatsGateway {
    async fn submit_answer(&self, submission: AnswerSubmission) -> Result<(), GatewayError> {
        self.answers.lock().unwrap().push(submission);
        Ok(())
    }

    async fn question_correct_percent(
        &self,
        _quiz_id: &str,
        _question_id: &str,
    ) -> Result<f64, GatewayError> {
        self.question_percent.clone()
    }

    async fn submit_score(&self, submission: ScoreSubmission) -> Result<(), GatewayError> {
        self.scores.lock().unwrap().push(submission);
        Ok(())
    }

    async fn score_percent(&self, _quiz_id: &str, _score: u32) -> Result<f64, GatewayError> {
        self.score_percent.clone()
    }
}

/// A stats gateway where every method fails with `Unavailable`.
#[derive(Debug, Clone, Copy)]
pub struct FailingStatsGateway;

#[async_trait]
impl StatsGateway for FailingStatsGateway {
    async fn submit_answer(&self, _submission: AnswerSubmission) -> Result<(), GatewayError> {
        Err(GatewayError::Unavailable("stats offline".to_owned()))
    }

    async fn question_correct_percent(
        &self,
        _quiz_id: &str,
        _question_id: &str,
    ) -> Result<f64, GatewayError> {
        Err(GatewayError::Unavailable("stats offline".to_owned()))
    }

    async fn submit_score(&self, _submission: ScoreSubmission) -> Result<(), GatewayError> {
        Err(GatewayError::Unavailable("stats offline".to_owned()))
    }

    async fn score_percent(&self, _quiz_id: &str, _score: u32) -> Result<f64, GatewayError> {
        Err(GatewayError::Unavailable("stats offline".to_owned()))
    }
}

/// A hint gateway that always returns the configured hint and records
/// every request it receives.
#[derive(Debug)]
pub struct StaticHintGateway {
    hint: String,
    requests: Mutex<Vec<(String, LocaleId)>>,
}

impl StaticHintGateway {
    /// Creates a gateway that answers every request with `hint`.
    #[must_use]
    pub fn new(hint: impl Into<String>) -> Self {
        Self {
            hint: hint.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all `(symbol_key, locale)` requests.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<(String, LocaleId)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HintGateway for StaticHintGateway {
    async fn request_hint(
        &self,
        symbol_key: &str,
        locale: LocaleId,
    ) -> Result<String, GatewayError> {
        self.requests
            .lock()
            .unwrap()
            .push((symbol_key.to_owned(), locale));
        Ok(self.hint.clone())
    }
}

/// A hint gateway that always fails.
#[derive(Debug, Clone, Copy)]
pub struct FailingHintGateway;

#[async_trait]
impl HintGateway for FailingHintGateway {
    async fn request_hint(
        &self,
        _symbol_key: &str,
        _locale: LocaleId,
    ) -> Result<String, GatewayError> {
        Err(GatewayError::Unavailable("hint service offline".to_owned()))
    }
}
