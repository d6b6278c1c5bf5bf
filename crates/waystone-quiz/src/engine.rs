//! The quiz progression state machine.
//!
//! Phases: `NotStarted → AwaitingAnswer → ShowingResult → AwaitingAnswer →
//! … → Finished`. The question index only moves forward. Gateway results
//! enter through `record_question_percent`/`record_score_percent`, called
//! by the async flow in [`crate::flow`]; while one is outstanding the
//! engine exposes an explicit busy flag and refuses forward transitions.

use serde::{Deserialize, Serialize};
use waystone_core::error::EngineError;
use waystone_core::event::{EngineEvent, EventQueue};
use waystone_core::locale::LocaleId;

use crate::content::QuizData;
use crate::messages;

/// Observable phase of the quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// No run is active.
    NotStarted,
    /// A question is presented and an answer is expected.
    AwaitingAnswer,
    /// The result of the last answer is on display, waiting for an
    /// explicit "next".
    ShowingResult,
    /// The run is over and the final score is on display.
    Finished,
}

/// Events produced by the engine, drained by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizEvent {
    /// A question entered display.
    QuestionPresented {
        /// Zero-based question index.
        index: usize,
    },
    /// The last answer was resolved and its result is on display.
    ResultShown {
        /// Whether the answer was correct.
        correct: bool,
    },
    /// The run finished and the final score is known.
    Finished {
        /// Number of correctly answered questions.
        score: u32,
    },
    /// The first run ever finished. Fires at most once per engine
    /// lifetime, after the corresponding [`QuizEvent::Finished`].
    FirstCompletion,
    /// The locale changed; displayed text must be re-rendered from state.
    ViewInvalidated,
}

impl EngineEvent for QuizEvent {
    fn event_type(&self) -> &'static str {
        match self {
            QuizEvent::QuestionPresented { .. } => "quiz.question_presented",
            QuizEvent::ResultShown { .. } => "quiz.result_shown",
            QuizEvent::Finished { .. } => "quiz.finished",
            QuizEvent::FirstCompletion => "quiz.first_completion",
            QuizEvent::ViewInvalidated => "quiz.view_invalidated",
        }
    }
}

/// An answer accepted by the engine, to be submitted to the stats
/// gateway by the async flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAnswer {
    /// Quiz identifier for the submission.
    pub quiz_id: String,
    /// Question identifier for the submission.
    pub question_id: String,
    /// Whether the chosen answer was correct.
    pub is_correct: bool,
}

/// A finished run, to be submitted to the stats gateway by the async
/// flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingScore {
    /// Quiz identifier for the submission.
    pub quiz_id: String,
    /// Number of correctly answered questions.
    pub score: u32,
}

/// Ordered multiple-choice quiz flow with cached statistics.
pub struct QuizEngine {
    data: QuizData,
    phase: QuizPhase,
    question_index: Option<usize>,
    correct_count: u32,
    last_answer_index: Option<usize>,
    last_answer_correct: bool,
    last_question_stat_percent: Option<f64>,
    final_score_percent: Option<f64>,
    stats_pending: bool,
    ever_completed: bool,
    events: EventQueue<QuizEvent>,
}

impl QuizEngine {
    /// Creates an engine over validated quiz content.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ContractViolation` when the content is
    /// structurally inconsistent (see [`QuizData::validate`]).
    pub fn new(data: QuizData) -> Result<Self, EngineError> {
        data.validate()?;
        Ok(Self {
            data,
            phase: QuizPhase::NotStarted,
            question_index: None,
            correct_count: 0,
            last_answer_index: None,
            last_answer_correct: false,
            last_question_stat_percent: None,
            final_score_percent: None,
            stats_pending: false,
            ever_completed: false,
            events: EventQueue::new(),
        })
    }

    /// Starts (or restarts) a run: resets all bookkeeping and presents
    /// the first question.
    pub fn start(&mut self) {
        self.phase = QuizPhase::NotStarted;
        self.question_index = None;
        self.correct_count = 0;
        self.last_answer_index = None;
        self.last_answer_correct = false;
        self.last_question_stat_percent = None;
        self.final_score_percent = None;
        self.stats_pending = false;
        tracing::debug!(quiz_id = %self.data.quiz_id, "quiz run started");
        self.step_forward();
    }

    /// Moves forward: from `NotStarted` to the first question, or from a
    /// displayed result to the next question (to `Finished` past the last
    /// one).
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ContractViolation` unless the phase is
    /// `NotStarted` or `ShowingResult` with no gateway call outstanding.
    pub fn advance(&mut self) -> Result<(), EngineError> {
        let can_advance = matches!(self.phase, QuizPhase::NotStarted | QuizPhase::ShowingResult);
        if !can_advance || self.stats_pending {
            return Err(EngineError::ContractViolation(format!(
                "advance is not valid in phase {:?}",
                self.phase
            )));
        }
        self.step_forward();
        Ok(())
    }

    /// Accepts the chosen answer for the current question and suspends
    /// the run until the statistics flow resolves via
    /// [`QuizEngine::record_question_percent`].
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ContractViolation` unless the phase is
    /// `AwaitingAnswer` with no call outstanding, or when `answer_index`
    /// is out of range. State is untouched on error.
    pub fn answer(&mut self, answer_index: usize) -> Result<PendingAnswer, EngineError> {
        if self.phase != QuizPhase::AwaitingAnswer || self.stats_pending {
            return Err(EngineError::ContractViolation(format!(
                "answer is not valid in phase {:?}",
                self.phase
            )));
        }
        let index = self.question_index.unwrap_or_default();
        let question = &self.data.questions[index];
        let answer_count = question.texts.first().map_or(0, |t| t.answers.len());
        if answer_index >= answer_count {
            return Err(EngineError::ContractViolation(format!(
                "answer index {answer_index} out of range for {answer_count} answers"
            )));
        }

        let is_correct = answer_index == question.correct_answer_index;
        if is_correct {
            self.correct_count += 1;
        }
        self.last_answer_index = Some(answer_index);
        self.last_answer_correct = is_correct;
        self.last_question_stat_percent = None;
        self.stats_pending = true;
        Ok(PendingAnswer {
            quiz_id: self.data.quiz_id.clone(),
            question_id: QuizData::question_id(index),
            is_correct,
        })
    }

    /// Delivers the per-question statistics result (or `None` on gateway
    /// failure) and moves to `ShowingResult`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ContractViolation` when no answer is
    /// awaiting resolution.
    pub fn record_question_percent(&mut self, percent: Option<f64>) -> Result<(), EngineError> {
        if self.phase != QuizPhase::AwaitingAnswer || !self.stats_pending {
            return Err(EngineError::ContractViolation(
                "no answer is awaiting statistics".to_owned(),
            ));
        }
        self.stats_pending = false;
        self.last_question_stat_percent = percent;
        self.phase = QuizPhase::ShowingResult;
        self.events.record(QuizEvent::ResultShown {
            correct: self.last_answer_correct,
        });
        Ok(())
    }

    /// Delivers the final score statistics result (or `None` on gateway
    /// failure). Raises the one-shot first-completion event the first
    /// time a run resolves its final score.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ContractViolation` when the run is not
    /// awaiting its final statistics.
    pub fn record_score_percent(&mut self, percent: Option<f64>) -> Result<(), EngineError> {
        if self.phase != QuizPhase::Finished || !self.stats_pending {
            return Err(EngineError::ContractViolation(
                "no finished run is awaiting statistics".to_owned(),
            ));
        }
        self.stats_pending = false;
        self.final_score_percent = percent;
        if !self.ever_completed {
            self.ever_completed = true;
            self.events.record(QuizEvent::FirstCompletion);
        }
        Ok(())
    }

    /// Reacts to a locale change: display text is re-rendered from
    /// cached state in every phase; no bookkeeping changes and no
    /// gateway is re-queried.
    pub fn on_locale_changed(&mut self) {
        if self.phase != QuizPhase::NotStarted {
            self.events.record(QuizEvent::ViewInvalidated);
        }
    }

    /// The pending score submission, available once the run finished.
    #[must_use]
    pub fn pending_score(&self) -> Option<PendingScore> {
        if self.phase == QuizPhase::Finished && self.stats_pending {
            Some(PendingScore {
                quiz_id: self.data.quiz_id.clone(),
                score: self.correct_count,
            })
        } else {
            None
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Whether a gateway call is outstanding. The caller UI shows a busy
    /// indicator while this is set.
    #[must_use]
    pub fn busy(&self) -> bool {
        self.stats_pending
    }

    /// Zero-based index of the current question.
    #[must_use]
    pub fn question_index(&self) -> Option<usize> {
        self.question_index
    }

    /// Total number of questions in the quiz.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.data.questions.len()
    }

    /// Correctly answered questions so far.
    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    /// Index of the last submitted answer.
    #[must_use]
    pub fn last_answer_index(&self) -> Option<usize> {
        self.last_answer_index
    }

    /// Index of the correct answer for the current question.
    #[must_use]
    pub fn correct_answer_index(&self) -> Option<usize> {
        self.question_index
            .map(|i| self.data.questions[i].correct_answer_index)
    }

    /// Cached per-question percentage from the last resolved answer.
    #[must_use]
    pub fn last_question_stat_percent(&self) -> Option<f64> {
        self.last_question_stat_percent
    }

    /// Cached final score percentage.
    #[must_use]
    pub fn final_score_percent(&self) -> Option<f64> {
        self.final_score_percent
    }

    /// Question text for the current question in `locale`.
    #[must_use]
    pub fn question_text(&self, locale: LocaleId) -> Option<&str> {
        let index = self.question_index?;
        if self.phase == QuizPhase::Finished {
            return None;
        }
        self.data.questions[index]
            .text(locale)
            .map(|t| t.question.as_str())
    }

    /// Answer texts for the current question in `locale`.
    #[must_use]
    pub fn answer_texts(&self, locale: LocaleId) -> Option<&[String]> {
        let index = self.question_index?;
        if self.phase == QuizPhase::Finished {
            return None;
        }
        self.data.questions[index]
            .text(locale)
            .map(|t| t.answers.as_slice())
    }

    /// Progress label, e.g. `3/10`.
    #[must_use]
    pub fn progress_label(&self) -> Option<String> {
        let index = self.question_index?;
        if self.phase == QuizPhase::Finished {
            return None;
        }
        Some(format!("{}/{}", index + 1, self.total_questions()))
    }

    /// The per-question statistics line, rendered for `locale` from the
    /// cached percentage. `None` while no resolved result is on display
    /// or the gateway yielded no data.
    #[must_use]
    pub fn stats_text(&self, locale: LocaleId) -> Option<String> {
        if self.phase != QuizPhase::ShowingResult {
            return None;
        }
        self.last_question_stat_percent
            .map(|percent| messages::question_stats_text(locale, percent))
    }

    /// The final score message, rendered for `locale` from cached state.
    /// `None` until the run finished and its statistics resolved.
    #[must_use]
    pub fn final_score_text(&self, locale: LocaleId) -> Option<String> {
        if self.phase != QuizPhase::Finished || self.stats_pending {
            return None;
        }
        let total = u32::try_from(self.total_questions()).unwrap_or(u32::MAX);
        Some(messages::final_score_text(
            locale,
            self.correct_count,
            total,
            self.final_score_percent,
        ))
    }

    /// Removes and returns all pending events.
    pub fn take_events(&mut self) -> Vec<QuizEvent> {
        self.events.drain()
    }

    fn step_forward(&mut self) {
        let next = self.question_index.map_or(0, |i| i + 1);
        self.question_index = Some(next);
        if next == self.total_questions() {
            self.phase = QuizPhase::Finished;
            self.stats_pending = true;
            self.events.record(QuizEvent::Finished {
                score: self.correct_count,
            });
            tracing::debug!(
                quiz_id = %self.data.quiz_id,
                score = self.correct_count,
                "quiz run finished"
            );
        } else {
            self.phase = QuizPhase::AwaitingAnswer;
            self.last_question_stat_percent = None;
            self.events.record(QuizEvent::QuestionPresented { index: next });
        }
    }
}
