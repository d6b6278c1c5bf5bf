//! Engine event vocabulary.
//!
//! Engines never call back into presentation. Each engine pushes the
//! events it produces into its own queue; the host drains the queue after
//! every operation or scheduler dispatch and renders from state snapshots.

use std::fmt::Debug;

/// Trait implemented by every engine's event enum.
pub trait EngineEvent: Debug {
    /// Returns the event type name (used for logging).
    fn event_type(&self) -> &'static str;
}

/// Ordered queue of pending engine events, drained by the host.
#[derive(Debug)]
pub struct EventQueue<E: EngineEvent> {
    pending: Vec<E>,
}

impl<E: EngineEvent> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EngineEvent> EventQueue<E> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Appends an event.
    pub fn record(&mut self, event: E) {
        tracing::debug!(event = event.event_type(), "engine event");
        self.pending.push(event);
    }

    /// Removes and returns all pending events in the order produced.
    pub fn drain(&mut self) -> Vec<E> {
        std::mem::take(&mut self.pending)
    }

    /// Returns `true` when no events are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
