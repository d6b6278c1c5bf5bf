//! Waystone — word-guessing puzzle engine.
//!
//! A hangman-style round over a word derived from the active locale's
//! title for a tour symbol. A locale change mid-round restarts the round
//! (words differ per language, so progress cannot be translated); a
//! locale change after the round ended only re-renders the displayed word.

pub mod content;
pub mod engine;
pub mod hint;

pub use content::PuzzleEntry;
pub use engine::{PuzzleConfig, PuzzleEvent, PuzzleOutcome, PuzzleTimer, WordPuzzleEngine};
pub use hint::HintFlow;
