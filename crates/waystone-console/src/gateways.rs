//! Offline gateway implementations for the walkthrough.
//!
//! They stand in for the real statistics and hint backends: submissions
//! are logged and percentage queries answer with plausible random values,
//! so the flows behave exactly as they would against a live service.

use async_trait::async_trait;
use rand::Rng;
use waystone_core::error::GatewayError;
use waystone_core::gateway::{
    AnswerSubmission, HintGateway, ScoreSubmission, StatsGateway,
};
use waystone_core::locale::LocaleId;

/// Stats gateway that accepts everything and invents aggregate numbers.
#[derive(Debug, Clone, Copy)]
pub struct CannedStatsGateway;

#[async_trait]
impl StatsGateway for CannedStatsGateway {
    async fn submit_answer(&self, submission: AnswerSubmission) -> Result<(), GatewayError> {
        tracing::info!(
            quiz_id = %submission.quiz_id,
            question_id = %submission.question_id,
            is_correct = submission.is_correct,
            "answer recorded"
        );
        Ok(())
    }

    async fn question_correct_percent(
        &self,
        _quiz_id: &str,
        _question_id: &str,
    ) -> Result<f64, GatewayError> {
        Ok(rand::rng().random_range(20.0..95.0))
    }

    async fn submit_score(&self, submission: ScoreSubmission) -> Result<(), GatewayError> {
        tracing::info!(quiz_id = %submission.quiz_id, score = submission.score, "score recorded");
        Ok(())
    }

    async fn score_percent(&self, _quiz_id: &str, _score: u32) -> Result<f64, GatewayError> {
        Ok(rand::rng().random_range(5.0..60.0))
    }
}

/// Hint gateway with a built-in hint per known symbol.
#[derive(Debug, Clone, Copy)]
pub struct CannedHintGateway;

#[async_trait]
impl HintGateway for CannedHintGateway {
    async fn request_hint(
        &self,
        symbol_key: &str,
        locale: LocaleId,
    ) -> Result<String, GatewayError> {
        let hint = match (symbol_key, locale) {
            ("menorah", 0) => "A seven-branched lampstand.",
            ("menorah", _) => "כלי מאור בעל שבעה קנים.",
            ("rosette", 0) => "A flower-shaped ornament.",
            ("rosette", _) => "עיטור בצורת פרח.",
            _ => {
                return Err(GatewayError::Backend(format!(
                    "no hint recorded for symbol {symbol_key:?}"
                )));
            }
        };
        Ok(hint.to_owned())
    }
}
