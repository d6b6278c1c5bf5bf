//! The text-reveal state machine.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use waystone_core::error::EngineError;
use waystone_core::event::{EngineEvent, EventQueue};
use waystone_core::scheduler::{Scheduler, TimerId};

/// Characters followed by the longer interpunctuation delay.
const PUNCTUATION: [char; 7] = ['.', ',', ';', ':', '!', '?', '-'];

/// How `request_skip` finishes a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipPolicy {
    /// Cancel the timed session and complete immediately.
    Quick,
    /// Keep revealing with shortened delays until natural completion.
    Gradual,
}

/// Pacing and skip configuration for one engine instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Characters revealed per second.
    pub chars_per_second: f64,
    /// Fixed delay after punctuation characters.
    pub interpunctuation_delay: Duration,
    /// Delay divisor while skipping gradually (minimum 1).
    pub skip_multiplier: u32,
    /// Skip policy for this widget.
    pub skip_policy: SkipPolicy,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            chars_per_second: 20.0,
            interpunctuation_delay: Duration::from_millis(500),
            skip_multiplier: 5,
            skip_policy: SkipPolicy::Gradual,
        }
    }
}

/// Observable mode of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// No text has been assigned yet.
    Idle,
    /// A reveal session is advancing.
    Revealing,
    /// A reveal session is advancing with shortened delays.
    Skipping,
    /// The assigned text is fully visible. Terminal until the next
    /// `set_text`.
    Complete,
}

/// Timer tokens the engine schedules. The host's scheduler token type must
/// implement `From<RevealTimer>` and route fires back via `on_timer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTimer {
    /// Reveal the next character of the given session.
    Advance {
        /// Session the timer belongs to.
        session: u64,
    },
    /// Deliver the completion event of a session that completed without
    /// animation, one yield after `set_text`.
    DeferredComplete {
        /// Session the timer belongs to.
        session: u64,
    },
}

/// Events produced by the engine, drained by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealEvent {
    /// The session's text is fully revealed. Fires at most once per
    /// session and never for a superseded session.
    Completed {
        /// The session that completed.
        session: u64,
    },
}

impl EngineEvent for RevealEvent {
    fn event_type(&self) -> &'static str {
        match self {
            RevealEvent::Completed { .. } => "reveal.completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Idle,
    Revealing,
    Complete,
}

/// Timed character-by-character text reveal with skip and pacing control.
pub struct TextRevealEngine {
    config: RevealConfig,
    full_text: Vec<char>,
    visible: usize,
    mode: Mode,
    skipping: bool,
    session: u64,
    pending: Option<TimerId>,
    events: EventQueue<RevealEvent>,
}

impl TextRevealEngine {
    /// Creates an idle engine.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ContractViolation` when `chars_per_second` is
    /// not a positive finite number or `skip_multiplier` is zero.
    pub fn new(config: RevealConfig) -> Result<Self, EngineError> {
        validate_pace(config.chars_per_second)?;
        if config.skip_multiplier == 0 {
            return Err(EngineError::ContractViolation(
                "skip multiplier must be at least 1".to_owned(),
            ));
        }
        Ok(Self {
            config,
            full_text: Vec::new(),
            visible: 0,
            mode: Mode::Idle,
            skipping: false,
            session: 0,
            pending: None,
            events: EventQueue::new(),
        })
    }

    /// Assigns `text` and starts a new reveal session.
    ///
    /// Any in-flight session is abandoned: its timer is cancelled and its
    /// completion will never fire. With animations disabled (or empty
    /// text) the text becomes fully visible at once and the completion
    /// event is delivered on the next scheduler dispatch, so subscribers
    /// attached in the same call tick still observe it.
    pub fn set_text<T: From<RevealTimer>>(
        &mut self,
        sched: &mut Scheduler<T>,
        text: &str,
        animations_enabled: bool,
    ) {
        if let Some(id) = self.pending.take() {
            sched.cancel(id);
        }
        self.session += 1;
        self.full_text = text.chars().collect();
        self.skipping = false;
        if animations_enabled && !self.full_text.is_empty() {
            self.visible = 0;
            self.mode = Mode::Revealing;
            self.pending = Some(sched.schedule(
                self.simple_delay(),
                RevealTimer::Advance {
                    session: self.session,
                }
                .into(),
            ));
        } else {
            self.visible = self.full_text.len();
            self.mode = Mode::Complete;
            self.pending = Some(sched.schedule(
                Duration::ZERO,
                RevealTimer::DeferredComplete {
                    session: self.session,
                }
                .into(),
            ));
        }
        tracing::debug!(session = self.session, animations_enabled, "reveal session started");
    }

    /// Handles a fired timer previously scheduled by this engine.
    ///
    /// Fires belonging to a superseded session are ignored: cancellation
    /// normally prevents them, the session check catches the race where
    /// one was already delivered.
    pub fn on_timer<T: From<RevealTimer>>(&mut self, sched: &mut Scheduler<T>, timer: RevealTimer) {
        match timer {
            RevealTimer::Advance { session } => {
                if session != self.session || self.mode != Mode::Revealing {
                    return;
                }
                self.pending = None;
                if self.visible + 1 >= self.full_text.len() {
                    // The final character carries no delay of its own.
                    self.visible = self.full_text.len();
                    self.complete();
                    return;
                }
                self.visible += 1;
                let revealed = self.full_text[self.visible - 1];
                self.pending = Some(sched.schedule(
                    self.delay_after(revealed),
                    RevealTimer::Advance {
                        session: self.session,
                    }
                    .into(),
                ));
            }
            RevealTimer::DeferredComplete { session } => {
                if session != self.session {
                    return;
                }
                self.pending = None;
                self.events.record(RevealEvent::Completed { session });
            }
        }
    }

    /// Requests that the current session finish early.
    ///
    /// No-op when the session is already complete, already skipping, or no
    /// session exists. Under [`SkipPolicy::Quick`] the session completes
    /// synchronously; under [`SkipPolicy::Gradual`] the remaining delays
    /// are shortened until the session completes on its own.
    pub fn request_skip<T: From<RevealTimer>>(&mut self, sched: &mut Scheduler<T>) {
        if self.mode != Mode::Revealing || self.skipping {
            return;
        }
        match self.config.skip_policy {
            SkipPolicy::Quick => {
                if let Some(id) = self.pending.take() {
                    sched.cancel(id);
                }
                self.visible = self.full_text.len();
                self.complete();
            }
            SkipPolicy::Gradual => {
                self.skipping = true;
            }
        }
    }

    /// Updates the reveal pace. Delays already in flight are unaffected.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ContractViolation` when `chars_per_second` is
    /// not a positive finite number.
    pub fn change_pace(&mut self, chars_per_second: f64) -> Result<(), EngineError> {
        validate_pace(chars_per_second)?;
        self.config.chars_per_second = chars_per_second;
        Ok(())
    }

    /// Returns the currently visible prefix of the assigned text.
    #[must_use]
    pub fn visible_text(&self) -> String {
        self.full_text[..self.visible].iter().collect()
    }

    /// Returns the number of visible characters.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible
    }

    /// Returns the full assigned text.
    #[must_use]
    pub fn full_text(&self) -> String {
        self.full_text.iter().collect()
    }

    /// Returns the observable mode.
    #[must_use]
    pub fn mode(&self) -> RevealMode {
        match self.mode {
            Mode::Idle => RevealMode::Idle,
            Mode::Revealing if self.skipping => RevealMode::Skipping,
            Mode::Revealing => RevealMode::Revealing,
            Mode::Complete => RevealMode::Complete,
        }
    }

    /// Removes and returns all pending events.
    pub fn take_events(&mut self) -> Vec<RevealEvent> {
        self.events.drain()
    }

    fn complete(&mut self) {
        self.mode = Mode::Complete;
        self.skipping = false;
        self.pending = None;
        self.events.record(RevealEvent::Completed {
            session: self.session,
        });
    }

    fn simple_delay(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.config.chars_per_second)
    }

    fn skip_delay(&self) -> Duration {
        Duration::from_secs_f64(
            1.0 / (self.config.chars_per_second * f64::from(self.config.skip_multiplier)),
        )
    }

    fn delay_after(&self, revealed: char) -> Duration {
        if self.skipping {
            self.skip_delay()
        } else if PUNCTUATION.contains(&revealed) {
            self.config.interpunctuation_delay
        } else {
            self.simple_delay()
        }
    }
}

fn validate_pace(chars_per_second: f64) -> Result<(), EngineError> {
    if chars_per_second.is_finite() && chars_per_second > 0.0 {
        Ok(())
    } else {
        Err(EngineError::ContractViolation(format!(
            "chars per second must be positive and finite, got {chars_per_second}"
        )))
    }
}
