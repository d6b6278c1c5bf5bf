//! Puzzle content supplied by external configuration.

use serde::{Deserialize, Serialize};
use waystone_core::locale::LocaleId;

/// One guessable tour symbol: a stable key plus its locale-indexed titles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleEntry {
    /// Locale-independent key identifying the symbol (used for hints).
    pub symbol_key: String,
    /// Display titles, indexed by locale id.
    pub titles: Vec<String>,
}

impl PuzzleEntry {
    /// Returns the title for `locale`, if one is configured.
    #[must_use]
    pub fn title(&self, locale: LocaleId) -> Option<&str> {
        self.titles.get(locale as usize).map(String::as_str)
    }
}
