//! Waystone — scored quiz engine.
//!
//! An ordered multiple-choice flow over locale-indexed questions, with
//! best-effort aggregate statistics fetched from an external gateway. A
//! locale change at any phase re-renders text from cached state and never
//! re-queries the gateway.

pub mod content;
pub mod engine;
pub mod flow;
pub mod messages;

pub use content::{QuestionText, QuizData, QuizQuestion};
pub use engine::{QuizEngine, QuizEvent, QuizPhase};
