//! Waystone — timed text-reveal ("typewriter") engine.
//!
//! One engine instance drives one text widget. Each `set_text` call opens
//! a fresh reveal session; the previous session is abandoned and its
//! completion never fires. The presentation layer derives visuals from
//! [`engine::TextRevealEngine::visible_text`] and the drained events,
//! never the reverse.

pub mod engine;

pub use engine::{RevealConfig, RevealEvent, RevealMode, RevealTimer, SkipPolicy, TextRevealEngine};
