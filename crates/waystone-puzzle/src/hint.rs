//! Hint retrieval flow.
//!
//! Hints come from an external gateway and are best-effort: a successful
//! hint is cached per symbol and locale; on failure a previously cached
//! hint is served (picked at random, so repeated failures vary), and with
//! a cold cache a hard-coded localized error string is returned. Nothing
//! in this flow can fail outward.
//!
//! The engine's `begin_hint_request`/`complete_hint_request` pair brackets
//! the await so the UI can show a busy indicator off the engine's
//! explicit flag.

use std::collections::HashMap;

use rand::Rng;
use waystone_core::gateway::HintGateway;
use waystone_core::locale::LocaleId;

/// Localized hard-coded fallback when no hint can be produced at all.
fn fallback_error(locale: LocaleId) -> &'static str {
    if locale == 0 {
        "There was an error, please try again"
    } else {
        "אירעה שגיאה, נסו שוב"
    }
}

/// Caching wrapper around the hint gateway.
#[derive(Debug, Default)]
pub struct HintFlow {
    cache: HashMap<(String, LocaleId), Vec<String>>,
}

impl HintFlow {
    /// Creates a flow with a cold cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches a hint for `symbol_key` in `locale`. Infallible: gateway
    /// errors degrade to a cached hint or the localized error string.
    pub async fn fetch(
        &mut self,
        gateway: &dyn HintGateway,
        symbol_key: &str,
        locale: LocaleId,
    ) -> String {
        match gateway.request_hint(symbol_key, locale).await {
            Ok(hint) => {
                self.remember(symbol_key, locale, &hint);
                hint
            }
            Err(err) => {
                tracing::warn!(symbol_key, locale, %err, "hint request failed, using fallback");
                self.cached(symbol_key, locale)
                    .unwrap_or_else(|| fallback_error(locale).to_owned())
            }
        }
    }

    fn remember(&mut self, symbol_key: &str, locale: LocaleId, hint: &str) {
        let hints = self
            .cache
            .entry((symbol_key.to_owned(), locale))
            .or_default();
        if !hints.iter().any(|h| h.to_lowercase() == hint.to_lowercase()) {
            hints.push(hint.to_owned());
        }
    }

    fn cached(&self, symbol_key: &str, locale: LocaleId) -> Option<String> {
        let hints = self.cache.get(&(symbol_key.to_owned(), locale))?;
        if hints.is_empty() {
            return None;
        }
        let index = rand::rng().random_range(0..hints.len());
        Some(hints[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waystone_test_support::{FailingHintGateway, StaticHintGateway};

    #[tokio::test]
    async fn test_successful_hint_is_returned_and_cached() {
        let gateway = StaticHintGateway::new("A seven-branched lampstand.");
        let mut flow = HintFlow::new();

        let hint = flow.fetch(&gateway, "menorah", 0).await;
        assert_eq!(hint, "A seven-branched lampstand.");
        assert_eq!(gateway.requests(), vec![("menorah".to_owned(), 0)]);
    }

    #[tokio::test]
    async fn test_failure_with_warm_cache_serves_cached_hint() {
        let mut flow = HintFlow::new();
        let hint = flow
            .fetch(&StaticHintGateway::new("A ceremonial lamp."), "menorah", 0)
            .await;
        assert_eq!(hint, "A ceremonial lamp.");

        let fallback = flow.fetch(&FailingHintGateway, "menorah", 0).await;
        assert_eq!(fallback, "A ceremonial lamp.");
    }

    #[tokio::test]
    async fn test_failure_with_cold_cache_yields_localized_error() {
        let mut flow = HintFlow::new();

        let english = flow.fetch(&FailingHintGateway, "menorah", 0).await;
        assert_eq!(english, "There was an error, please try again");

        let hebrew = flow.fetch(&FailingHintGateway, "menorah", 1).await;
        assert_eq!(hebrew, "אירעה שגיאה, נסו שוב");
    }

    #[tokio::test]
    async fn test_cache_is_keyed_by_symbol_and_locale() {
        let mut flow = HintFlow::new();
        flow.fetch(&StaticHintGateway::new("English hint."), "menorah", 0)
            .await;

        // Same symbol, different locale: cache miss.
        let other_locale = flow.fetch(&FailingHintGateway, "menorah", 1).await;
        assert_eq!(other_locale, fallback_error(1));

        // Different symbol, same locale: cache miss.
        let other_symbol = flow.fetch(&FailingHintGateway, "rosette", 0).await;
        assert_eq!(other_symbol, fallback_error(0));
    }

    #[tokio::test]
    async fn test_duplicate_hints_are_cached_once() {
        let gateway = StaticHintGateway::new("Same hint.");
        let mut flow = HintFlow::new();
        flow.fetch(&gateway, "menorah", 0).await;
        flow.fetch(&gateway, "menorah", 0).await;

        assert_eq!(flow.cache[&("menorah".to_owned(), 0)].len(), 1);
    }
}
