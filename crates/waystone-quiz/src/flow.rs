//! Async orchestration between the quiz engine and the stats gateway.
//!
//! The engine itself is synchronous; these functions bracket its pending
//! states around the gateway calls. Gateway failures are logged and
//! degrade to missing statistics, never to an error for the caller.

use uuid::Uuid;
use waystone_core::clock::Clock;
use waystone_core::error::EngineError;
use waystone_core::gateway::{AnswerSubmission, ScoreSubmission, StatsGateway};

use crate::engine::QuizEngine;

/// Submits the chosen answer, fetches the per-question statistics, and
/// resolves the engine into its result phase.
///
/// # Errors
///
/// Returns `EngineError::ContractViolation` when the engine is not
/// awaiting an answer or `answer_index` is out of range. Gateway
/// failures are not errors: the result is shown without statistics.
pub async fn answer_question(
    engine: &mut QuizEngine,
    gateway: &dyn StatsGateway,
    clock: &dyn Clock,
    answer_index: usize,
) -> Result<(), EngineError> {
    let pending = engine.answer(answer_index)?;

    let submission = AnswerSubmission {
        submission_id: Uuid::new_v4(),
        quiz_id: pending.quiz_id.clone(),
        question_id: pending.question_id.clone(),
        is_correct: pending.is_correct,
        occurred_at: clock.now(),
    };
    if let Err(error) = gateway.submit_answer(submission).await {
        tracing::warn!(
            quiz_id = %pending.quiz_id,
            question_id = %pending.question_id,
            %error,
            "answer submission failed"
        );
    }

    let percent = match gateway
        .question_correct_percent(&pending.quiz_id, &pending.question_id)
        .await
    {
        Ok(percent) => Some(percent),
        Err(error) => {
            tracing::warn!(
                quiz_id = %pending.quiz_id,
                question_id = %pending.question_id,
                %error,
                "question statistics unavailable"
            );
            None
        }
    };
    engine.record_question_percent(percent)
}

/// Submits the final score and fetches the score-distribution
/// percentage for the finished run.
///
/// # Errors
///
/// Returns `EngineError::ContractViolation` when no finished run is
/// awaiting its statistics. Gateway failures are not errors: the final
/// score is shown without a percentage.
pub async fn resolve_finish(
    engine: &mut QuizEngine,
    gateway: &dyn StatsGateway,
    clock: &dyn Clock,
) -> Result<(), EngineError> {
    let Some(pending) = engine.pending_score() else {
        return Err(EngineError::ContractViolation(
            "no finished run is awaiting statistics".to_owned(),
        ));
    };

    let submission = ScoreSubmission {
        submission_id: Uuid::new_v4(),
        quiz_id: pending.quiz_id.clone(),
        score: pending.score,
        occurred_at: clock.now(),
    };
    if let Err(error) = gateway.submit_score(submission).await {
        tracing::warn!(quiz_id = %pending.quiz_id, %error, "score submission failed");
    }

    let percent = match gateway.score_percent(&pending.quiz_id, pending.score).await {
        Ok(percent) => Some(percent),
        Err(error) => {
            tracing::warn!(quiz_id = %pending.quiz_id, %error, "score statistics unavailable");
            None
        }
    };
    engine.record_score_percent(percent)
}
