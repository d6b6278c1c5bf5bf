//! The word-puzzle state machine.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use waystone_core::error::EngineError;
use waystone_core::event::{EngineEvent, EventQueue};
use waystone_core::locale::LocaleId;
use waystone_core::scheduler::{Scheduler, TimerId};

use crate::content::PuzzleEntry;

/// Configuration for one puzzle engine instance.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleConfig {
    /// Number of damage stages before the round is lost.
    pub max_damage_stages: u32,
    /// How long a finished round stays visible before the round-closed
    /// signal fires and the engine returns to idle.
    pub end_display_delay: Duration,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            max_damage_stages: 6,
            end_display_delay: Duration::from_secs(1),
        }
    }
}

/// Outcome of the active round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleOutcome {
    /// Guesses are still being accepted.
    InProgress,
    /// Every non-space character was revealed.
    Won,
    /// The maximum number of damage stages was reached.
    Lost,
}

/// Timer tokens the engine schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleTimer {
    /// Close the finished round after the end-display delay.
    CloseRound {
        /// Round the timer belongs to.
        round: u64,
    },
}

/// Events produced by the engine, drained by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleEvent {
    /// A new round began; the word display and keyboard should be reset.
    RoundStarted,
    /// The externally rendered keyboard should be shown or hidden. A
    /// hide-then-show pulse clears per-letter disabled state.
    KeyboardVisibility {
        /// Whether the keyboard should be visible.
        visible: bool,
    },
    /// One damage stage was applied after enough wrong guesses.
    DamageStageApplied {
        /// Total stages applied so far.
        stages_applied: u32,
    },
    /// The round left the board — won, lost, or dismissed mid-round. Fires
    /// exactly once per round; the engine is idle afterwards.
    RoundClosed {
        /// Outcome at the moment the round closed (`InProgress` means the
        /// round was dismissed).
        outcome: PuzzleOutcome,
    },
}

impl EngineEvent for PuzzleEvent {
    fn event_type(&self) -> &'static str {
        match self {
            PuzzleEvent::RoundStarted => "puzzle.round_started",
            PuzzleEvent::KeyboardVisibility { .. } => "puzzle.keyboard_visibility",
            PuzzleEvent::DamageStageApplied { .. } => "puzzle.damage_stage_applied",
            PuzzleEvent::RoundClosed { .. } => "puzzle.round_closed",
        }
    }
}

#[derive(Debug)]
struct Round {
    entry: PuzzleEntry,
    target: Vec<char>,
    revealed: Vec<bool>,
    correct_count: usize,
    incorrect_count: u32,
    stages_applied: u32,
    stage_size: u32,
    outcome: PuzzleOutcome,
}

/// Hangman-style word-guessing state machine.
///
/// States: idle, in-progress, terminal (won/lost, still displayed), then
/// idle again once the round-closed timer fires or the round is dismissed.
pub struct WordPuzzleEngine {
    config: PuzzleConfig,
    round: Option<Round>,
    epoch: u64,
    pending_close: Option<TimerId>,
    hint_busy: bool,
    hint_text: Option<String>,
    events: EventQueue<PuzzleEvent>,
}

impl WordPuzzleEngine {
    /// Creates an idle engine.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ContractViolation` when `max_damage_stages`
    /// is zero.
    pub fn new(config: PuzzleConfig) -> Result<Self, EngineError> {
        if config.max_damage_stages == 0 {
            return Err(EngineError::ContractViolation(
                "at least one damage stage is required".to_owned(),
            ));
        }
        Ok(Self {
            config,
            round: None,
            epoch: 0,
            pending_close: None,
            hint_busy: false,
            hint_text: None,
            events: EventQueue::new(),
        })
    }

    /// Starts a round over `entry`'s title in the given locale.
    ///
    /// Resets all counters, pre-reveals spaces (they count toward
    /// `correct_count` immediately), and derives the damage stage size
    /// from the number of letters left to guess. Any previous round is
    /// discarded, including a pending round-closed timer.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ContractViolation` when `entry` has no
    /// non-blank title for `locale`.
    pub fn start<T: From<PuzzleTimer>>(
        &mut self,
        sched: &mut Scheduler<T>,
        entry: PuzzleEntry,
        locale: LocaleId,
    ) -> Result<(), EngineError> {
        let target = Self::target_word(&entry, locale)?;
        if let Some(id) = self.pending_close.take() {
            sched.cancel(id);
        }
        self.epoch += 1;
        self.hint_busy = false;
        self.hint_text = None;

        let revealed: Vec<bool> = target.iter().map(|c| *c == ' ').collect();
        let space_count = revealed.iter().filter(|r| **r).count();
        let letters_to_guess = target.len() - space_count;
        let stage_size = u32::try_from(letters_to_guess.div_ceil(
            self.config.max_damage_stages as usize,
        ))
        .unwrap_or(u32::MAX)
        .max(1);

        self.round = Some(Round {
            entry,
            target,
            revealed,
            correct_count: space_count,
            incorrect_count: 0,
            stages_applied: 0,
            stage_size,
            outcome: PuzzleOutcome::InProgress,
        });
        self.events.record(PuzzleEvent::RoundStarted);
        self.events
            .record(PuzzleEvent::KeyboardVisibility { visible: true });
        tracing::debug!(round = self.epoch, "puzzle round started");
        Ok(())
    }

    /// Submits one guessed letter.
    ///
    /// Reveals every unrevealed occurrence of the letter; a letter absent
    /// from the word counts as one wrong guess, applying a damage stage at
    /// every `stage_size`-th wrong guess. A no-op when no round is active
    /// or the round already ended.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ContractViolation` when `letter` is not
    /// alphabetic. State is untouched.
    pub fn guess<T: From<PuzzleTimer>>(
        &mut self,
        sched: &mut Scheduler<T>,
        letter: char,
    ) -> Result<(), EngineError> {
        if !letter.is_alphabetic() {
            return Err(EngineError::ContractViolation(format!(
                "guessed character {letter:?} is not a letter"
            )));
        }
        let max_stages = self.config.max_damage_stages;
        let Some(round) = self.round.as_mut() else {
            return Ok(());
        };
        if round.outcome != PuzzleOutcome::InProgress {
            return Ok(());
        }
        let letter = letter.to_uppercase().next().unwrap_or(letter);

        let in_word = round.target.contains(&letter);
        if in_word {
            for (i, c) in round.target.iter().enumerate() {
                if *c == letter && !round.revealed[i] {
                    round.revealed[i] = true;
                    round.correct_count += 1;
                }
            }
        } else {
            round.incorrect_count += 1;
            if round.incorrect_count % round.stage_size == 0 && round.stages_applied < max_stages {
                round.stages_applied += 1;
                self.events.record(PuzzleEvent::DamageStageApplied {
                    stages_applied: round.stages_applied,
                });
            }
        }

        // Won before Lost: a final correct guess wins even with damage
        // simultaneously maxed.
        if round.correct_count == round.target.len() {
            round.outcome = PuzzleOutcome::Won;
        } else if round.stages_applied == max_stages {
            round.outcome = PuzzleOutcome::Lost;
            // The failed word is shown in full.
            round.revealed.iter_mut().for_each(|r| *r = true);
        }

        if round.outcome != PuzzleOutcome::InProgress {
            let outcome = round.outcome;
            tracing::debug!(round = self.epoch, ?outcome, "puzzle round ended");
            self.pending_close = Some(sched.schedule(
                self.config.end_display_delay,
                PuzzleTimer::CloseRound { round: self.epoch }.into(),
            ));
        }
        Ok(())
    }

    /// Handles a fired timer previously scheduled by this engine. Fires
    /// for a superseded round are ignored.
    pub fn on_timer(&mut self, timer: PuzzleTimer) {
        match timer {
            PuzzleTimer::CloseRound { round } => {
                if round != self.epoch {
                    return;
                }
                self.pending_close = None;
                self.close_round();
            }
        }
    }

    /// Dismisses the round immediately, whatever its outcome. No-op when
    /// idle.
    pub fn dismiss<T: From<PuzzleTimer>>(&mut self, sched: &mut Scheduler<T>) {
        if self.round.is_none() {
            return;
        }
        if let Some(id) = self.pending_close.take() {
            sched.cancel(id);
        }
        self.close_round();
    }

    /// Reacts to a locale change.
    ///
    /// A terminal round only re-renders the displayed word from the new
    /// locale's title and pulses the keyboard; the outcome stays terminal.
    /// An in-progress round is restarted from scratch in the new locale —
    /// the word differs per language, so guess progress is discarded by
    /// design. Idle: nothing happens.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ContractViolation` when the entry has no
    /// non-blank title for `locale`.
    pub fn on_locale_changed<T: From<PuzzleTimer>>(
        &mut self,
        sched: &mut Scheduler<T>,
        locale: LocaleId,
    ) -> Result<(), EngineError> {
        let Some(round) = self.round.as_mut() else {
            return Ok(());
        };
        if round.outcome == PuzzleOutcome::InProgress {
            let entry = round.entry.clone();
            self.events
                .record(PuzzleEvent::KeyboardVisibility { visible: false });
            self.start(sched, entry, locale)?;
        } else {
            let target = Self::target_word(&round.entry, locale)?;
            round.revealed = vec![true; target.len()];
            round.target = target;
            self.events
                .record(PuzzleEvent::KeyboardVisibility { visible: false });
            self.events
                .record(PuzzleEvent::KeyboardVisibility { visible: true });
        }
        Ok(())
    }

    /// Marks the hint request as in flight and returns the symbol key to
    /// request a hint for. The caller UI shows a busy indicator while the
    /// flag is set.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ContractViolation` when no round is active or
    /// a hint request is already pending.
    pub fn begin_hint_request(&mut self) -> Result<String, EngineError> {
        if self.hint_busy {
            return Err(EngineError::ContractViolation(
                "a hint request is already pending".to_owned(),
            ));
        }
        let Some(round) = self.round.as_ref() else {
            return Err(EngineError::ContractViolation(
                "no active round to hint".to_owned(),
            ));
        };
        self.hint_busy = true;
        self.hint_text = None;
        Ok(round.entry.symbol_key.clone())
    }

    /// Records the resolved hint text and clears the busy indicator.
    pub fn complete_hint_request(&mut self, text: String) {
        self.hint_busy = false;
        self.hint_text = Some(text);
    }

    /// Whether a hint request is in flight.
    #[must_use]
    pub fn hint_busy(&self) -> bool {
        self.hint_busy
    }

    /// The last resolved hint text, if any.
    #[must_use]
    pub fn hint_text(&self) -> Option<&str> {
        self.hint_text.as_deref()
    }

    /// Whether a round is on the board (in progress or terminal).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.round.is_some()
    }

    /// Outcome of the round on the board, if any.
    #[must_use]
    pub fn outcome(&self) -> Option<PuzzleOutcome> {
        self.round.as_ref().map(|r| r.outcome)
    }

    /// The visible word: revealed characters shown, the rest underscores.
    #[must_use]
    pub fn display_word(&self) -> String {
        self.round.as_ref().map_or_else(String::new, |round| {
            round
                .target
                .iter()
                .zip(&round.revealed)
                .map(|(c, revealed)| if *revealed { *c } else { '_' })
                .collect()
        })
    }

    /// Count of revealed characters, spaces included.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.round.as_ref().map_or(0, |r| r.correct_count)
    }

    /// Count of wrong guesses.
    #[must_use]
    pub fn incorrect_count(&self) -> u32 {
        self.round.as_ref().map_or(0, |r| r.incorrect_count)
    }

    /// Damage stages applied so far.
    #[must_use]
    pub fn damage_stages_applied(&self) -> u32 {
        self.round.as_ref().map_or(0, |r| r.stages_applied)
    }

    /// Wrong guesses per damage stage for the current round.
    #[must_use]
    pub fn damage_stage_size(&self) -> u32 {
        self.round.as_ref().map_or(0, |r| r.stage_size)
    }

    /// Removes and returns all pending events.
    pub fn take_events(&mut self) -> Vec<PuzzleEvent> {
        self.events.drain()
    }

    fn close_round(&mut self) {
        let Some(round) = self.round.take() else {
            return;
        };
        self.hint_busy = false;
        self.hint_text = None;
        self.events.record(PuzzleEvent::RoundClosed {
            outcome: round.outcome,
        });
        self.events
            .record(PuzzleEvent::KeyboardVisibility { visible: false });
        tracing::debug!(round = self.epoch, "puzzle round closed");
    }

    fn target_word(entry: &PuzzleEntry, locale: LocaleId) -> Result<Vec<char>, EngineError> {
        let title = entry.title(locale).unwrap_or_default();
        if title.trim().is_empty() {
            return Err(EngineError::ContractViolation(format!(
                "entry {:?} has no title for locale {locale}",
                entry.symbol_key
            )));
        }
        Ok(title.to_uppercase().chars().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(titles: &[&str]) -> PuzzleEntry {
        PuzzleEntry {
            symbol_key: "menorah".to_owned(),
            titles: titles.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    fn started(
        titles: &[&str],
        locale: LocaleId,
    ) -> (WordPuzzleEngine, Scheduler<PuzzleTimer>) {
        let mut sched = Scheduler::new();
        let mut engine = WordPuzzleEngine::new(PuzzleConfig::default()).unwrap();
        engine.start(&mut sched, entry(titles), locale).unwrap();
        engine.take_events();
        (engine, sched)
    }

    fn close_events(engine: &mut WordPuzzleEngine, sched: &mut Scheduler<PuzzleTimer>) -> Vec<PuzzleEvent> {
        for fired in sched.advance(Duration::from_secs(1)) {
            engine.on_timer(fired.token);
        }
        engine.take_events()
    }

    #[test]
    fn test_start_pre_reveals_spaces_and_sizes_damage_stages() {
        let (engine, _sched) = started(&["holy city"], 0);

        assert_eq!(engine.display_word(), "____ ____");
        assert_eq!(engine.correct_count(), 1);
        // 8 letters across 6 stages.
        assert_eq!(engine.damage_stage_size(), 2);
        assert_eq!(engine.outcome(), Some(PuzzleOutcome::InProgress));
    }

    #[test]
    fn test_guess_reveals_every_occurrence() {
        let (mut engine, mut sched) = started(&["banana"], 0);

        engine.guess(&mut sched, 'a').unwrap();
        assert_eq!(engine.display_word(), "_A_A_A");
        assert_eq!(engine.correct_count(), 3);
        assert_eq!(engine.incorrect_count(), 0);
    }

    #[test]
    fn test_lowercase_guess_matches_uppercased_word() {
        let (mut engine, mut sched) = started(&["Cat"], 0);
        engine.guess(&mut sched, 'c').unwrap();
        assert_eq!(engine.display_word(), "C__");
    }

    #[test]
    fn test_winning_word_cat() {
        let (mut engine, mut sched) = started(&["cat"], 0);
        assert_eq!(engine.damage_stage_size(), 1);

        engine.guess(&mut sched, 'C').unwrap();
        assert_eq!(engine.correct_count(), 1);
        engine.guess(&mut sched, 'A').unwrap();
        assert_eq!(engine.correct_count(), 2);
        engine.guess(&mut sched, 'T').unwrap();
        assert_eq!(engine.correct_count(), 3);

        assert_eq!(engine.outcome(), Some(PuzzleOutcome::Won));
        assert_eq!(engine.damage_stages_applied(), 0);
        assert_eq!(engine.display_word(), "CAT");
    }

    #[test]
    fn test_wrong_guesses_apply_damage_stages() {
        let (mut engine, mut sched) = started(&["dog"], 0);
        assert_eq!(engine.damage_stage_size(), 1);

        for letter in ['X', 'Y', 'Z'] {
            engine.guess(&mut sched, letter).unwrap();
        }

        assert_eq!(engine.incorrect_count(), 3);
        assert_eq!(engine.damage_stages_applied(), 3);
        assert_eq!(engine.outcome(), Some(PuzzleOutcome::InProgress));
        let stages: Vec<PuzzleEvent> = engine
            .take_events()
            .into_iter()
            .filter(|e| matches!(e, PuzzleEvent::DamageStageApplied { .. }))
            .collect();
        assert_eq!(stages.len(), 3);
    }

    #[test]
    fn test_damage_stage_applied_only_at_stage_size_multiples() {
        // 12 letters / 6 stages = 2 wrong guesses per stage.
        let (mut engine, mut sched) = started(&["synagogue art"], 0);
        assert_eq!(engine.damage_stage_size(), 2);

        engine.guess(&mut sched, 'z').unwrap();
        assert_eq!(engine.damage_stages_applied(), 0);
        engine.guess(&mut sched, 'x').unwrap();
        assert_eq!(engine.damage_stages_applied(), 1);
        engine.guess(&mut sched, 'q').unwrap();
        assert_eq!(engine.damage_stages_applied(), 1);
    }

    #[test]
    fn test_losing_reveals_full_word_and_closes_after_delay() {
        let (mut engine, mut sched) = started(&["dog"], 0);

        for letter in ['Q', 'W', 'X', 'Y', 'Z', 'K'] {
            engine.guess(&mut sched, letter).unwrap();
        }

        assert_eq!(engine.outcome(), Some(PuzzleOutcome::Lost));
        assert_eq!(engine.display_word(), "DOG");

        let events = close_events(&mut engine, &mut sched);
        assert!(events.contains(&PuzzleEvent::RoundClosed {
            outcome: PuzzleOutcome::Lost
        }));
        assert!(!engine.is_active());
    }

    #[test]
    fn test_guesses_rejected_after_terminal_outcome() {
        let (mut engine, mut sched) = started(&["cat"], 0);
        for letter in ['C', 'A', 'T'] {
            engine.guess(&mut sched, letter).unwrap();
        }
        assert_eq!(engine.outcome(), Some(PuzzleOutcome::Won));

        engine.guess(&mut sched, 'Z').unwrap();
        assert_eq!(engine.incorrect_count(), 0);
        assert_eq!(engine.outcome(), Some(PuzzleOutcome::Won));
    }

    #[test]
    fn test_non_letter_guess_is_a_contract_violation() {
        let (mut engine, mut sched) = started(&["cat"], 0);
        assert!(engine.guess(&mut sched, '3').is_err());
        assert!(engine.guess(&mut sched, '!').is_err());
        assert_eq!(engine.incorrect_count(), 0);
    }

    #[test]
    fn test_correct_count_never_exceeds_word_length() {
        let (mut engine, mut sched) = started(&["abba"], 0);
        engine.guess(&mut sched, 'a').unwrap();
        engine.guess(&mut sched, 'a').unwrap();
        engine.guess(&mut sched, 'b').unwrap();
        assert_eq!(engine.correct_count(), 4);
        assert_eq!(engine.outcome(), Some(PuzzleOutcome::Won));
    }

    #[test]
    fn test_locale_change_mid_round_restarts_with_new_word() {
        let (mut engine, mut sched) = started(&["cat", "dog house"], 0);
        engine.guess(&mut sched, 'c').unwrap();
        engine.guess(&mut sched, 'z').unwrap();
        engine.take_events();

        engine.on_locale_changed(&mut sched, 1).unwrap();

        assert_eq!(engine.display_word(), "___ _____");
        assert_eq!(engine.correct_count(), 1); // the pre-revealed space
        assert_eq!(engine.incorrect_count(), 0);
        assert_eq!(engine.outcome(), Some(PuzzleOutcome::InProgress));

        let events = engine.take_events();
        assert_eq!(
            events,
            vec![
                PuzzleEvent::KeyboardVisibility { visible: false },
                PuzzleEvent::RoundStarted,
                PuzzleEvent::KeyboardVisibility { visible: true },
            ]
        );
    }

    #[test]
    fn test_locale_change_after_win_re_renders_without_reset() {
        let (mut engine, mut sched) = started(&["cat", "chatul"], 0);
        for letter in ['C', 'A', 'T'] {
            engine.guess(&mut sched, letter).unwrap();
        }
        engine.take_events();

        engine.on_locale_changed(&mut sched, 1).unwrap();

        assert_eq!(engine.outcome(), Some(PuzzleOutcome::Won));
        assert_eq!(engine.display_word(), "CHATUL");
        assert_eq!(
            engine.take_events(),
            vec![
                PuzzleEvent::KeyboardVisibility { visible: false },
                PuzzleEvent::KeyboardVisibility { visible: true },
            ]
        );

        // Still terminal: guesses stay rejected.
        engine.guess(&mut sched, 'Z').unwrap();
        assert_eq!(engine.incorrect_count(), 0);
    }

    #[test]
    fn test_locale_change_when_idle_is_a_noop() {
        let mut sched: Scheduler<PuzzleTimer> = Scheduler::new();
        let mut engine = WordPuzzleEngine::new(PuzzleConfig::default()).unwrap();
        engine.on_locale_changed(&mut sched, 1).unwrap();
        assert!(engine.take_events().is_empty());
    }

    #[test]
    fn test_dismiss_cancels_pending_close() {
        let (mut engine, mut sched) = started(&["cat"], 0);
        for letter in ['C', 'A', 'T'] {
            engine.guess(&mut sched, letter).unwrap();
        }

        engine.dismiss(&mut sched);
        let events = engine.take_events();
        assert!(events.contains(&PuzzleEvent::RoundClosed {
            outcome: PuzzleOutcome::Won
        }));

        // The already-scheduled close timer must not fire a second signal.
        let events = close_events(&mut engine, &mut sched);
        assert!(events.is_empty());
    }

    #[test]
    fn test_stale_close_timer_is_ignored_after_restart() {
        let (mut engine, mut sched) = started(&["cat", "dog"], 0);
        for letter in ['C', 'A', 'T'] {
            engine.guess(&mut sched, letter).unwrap();
        }
        // Restart before the close timer fires.
        engine.start(&mut sched, entry(&["cat", "dog"]), 1).unwrap();
        engine.take_events();

        // Even a fire that slipped past cancellation is epoch-checked.
        engine.on_timer(PuzzleTimer::CloseRound { round: 1 });
        assert!(engine.is_active());
        assert!(engine.take_events().is_empty());
    }

    #[test]
    fn test_start_requires_title_for_locale() {
        let mut sched: Scheduler<PuzzleTimer> = Scheduler::new();
        let mut engine = WordPuzzleEngine::new(PuzzleConfig::default()).unwrap();
        assert!(engine.start(&mut sched, entry(&["cat"]), 1).is_err());
        assert!(engine.start(&mut sched, entry(&["   "]), 0).is_err());
        assert!(!engine.is_active());
    }

    #[test]
    fn test_hint_busy_flag_brackets_request() {
        let (mut engine, _sched) = started(&["cat"], 0);
        assert!(!engine.hint_busy());

        let symbol = engine.begin_hint_request().unwrap();
        assert_eq!(symbol, "menorah");
        assert!(engine.hint_busy());
        assert!(engine.begin_hint_request().is_err());

        engine.complete_hint_request("A lamp.".to_owned());
        assert!(!engine.hint_busy());
        assert_eq!(engine.hint_text(), Some("A lamp."));
    }

    #[test]
    fn test_hint_request_requires_active_round() {
        let mut engine = WordPuzzleEngine::new(PuzzleConfig::default()).unwrap();
        assert!(engine.begin_hint_request().is_err());
    }

    #[test]
    fn test_won_takes_precedence_over_simultaneous_damage() {
        // One letter left and damage one stage short of max: a correct
        // final guess must win.
        let mut sched: Scheduler<PuzzleTimer> = Scheduler::new();
        let mut engine = WordPuzzleEngine::new(PuzzleConfig {
            max_damage_stages: 1,
            end_display_delay: Duration::from_secs(1),
        })
        .unwrap();
        engine.start(&mut sched, entry(&["hi"]), 0).unwrap();

        engine.guess(&mut sched, 'h').unwrap();
        engine.guess(&mut sched, 'i').unwrap();
        assert_eq!(engine.outcome(), Some(PuzzleOutcome::Won));
    }
}
