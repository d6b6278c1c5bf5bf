//! Locale broadcast bus.
//!
//! One process-wide value — the active locale id — with synchronous
//! fan-out to every subscribed engine. Changes are idempotent: setting the
//! id that is already active emits nothing. Every effective change is
//! persisted to the settings store and then broadcast, in subscription
//! order, before `change` returns. A `change` issued from inside a
//! notification handler is queued and applied only after the in-flight
//! broadcast has finished, so broadcasts never interleave.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::error::EngineError;
use crate::settings::SettingsStore;

/// Identifier of a display/spoken language. Valid ids are dense and
/// zero-based: `0..locale_count`.
pub type LocaleId = u32;

/// Settings key the active locale id is persisted under.
pub const LOCALE_SETTING_KEY: &str = "locale";

/// Payload delivered to locale subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleChange {
    /// The id that was active before this change, if any was.
    pub previous: Option<LocaleId>,
    /// The id that is now active.
    pub current: LocaleId,
}

type Handler = Rc<RefCell<dyn FnMut(LocaleChange)>>;

struct HandlerEntry {
    token: u64,
    handler: Handler,
}

struct BusInner {
    current: LocaleId,
    handlers: Vec<HandlerEntry>,
    next_token: u64,
    notifying: bool,
    queued: VecDeque<LocaleId>,
}

/// Process-wide broadcast of the active locale id.
///
/// Single-writer, multi-reader: the host scheduler is single-threaded, so
/// interior mutability via `RefCell` is sufficient and no locking exists.
pub struct LocaleBus {
    inner: RefCell<BusInner>,
    settings: Rc<dyn SettingsStore>,
    locale_count: u32,
}

impl LocaleBus {
    /// Creates a bus for `locale_count` languages, restoring the persisted
    /// id (default 0). A persisted id outside the valid range falls back
    /// to 0 rather than poisoning the bus.
    ///
    /// # Panics
    ///
    /// Panics if `locale_count` is 0.
    #[must_use]
    pub fn new(settings: Rc<dyn SettingsStore>, locale_count: u32) -> Rc<Self> {
        assert!(locale_count > 0, "at least one locale must exist");
        let persisted = settings.get_int(LOCALE_SETTING_KEY, 0);
        let current = u32::try_from(persisted)
            .ok()
            .filter(|id| *id < locale_count)
            .unwrap_or(0);
        Rc::new(Self {
            inner: RefCell::new(BusInner {
                current,
                handlers: Vec::new(),
                next_token: 0,
                notifying: false,
                queued: VecDeque::new(),
            }),
            settings,
            locale_count,
        })
    }

    /// Returns the active locale id.
    #[must_use]
    pub fn current(&self) -> LocaleId {
        self.inner.borrow().current
    }

    /// Returns the number of configured locales.
    #[must_use]
    pub fn locale_count(&self) -> u32 {
        self.locale_count
    }

    /// Changes the active locale.
    ///
    /// No-op when `id` is already active. Otherwise persists the id and
    /// synchronously notifies every subscriber before returning. Re-entrant
    /// calls from inside a handler are deferred until the in-flight
    /// broadcast completes.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ContractViolation` when `id` is outside
    /// `0..locale_count`. The active locale is left untouched.
    pub fn change(&self, id: LocaleId) -> Result<(), EngineError> {
        if id >= self.locale_count {
            return Err(EngineError::ContractViolation(format!(
                "locale id {id} out of range (locale count {})",
                self.locale_count
            )));
        }
        {
            let mut inner = self.inner.borrow_mut();
            if inner.current == id {
                return Ok(());
            }
            if inner.notifying {
                inner.queued.push_back(id);
                return Ok(());
            }
            inner.notifying = true;
        }
        self.run_broadcasts(id);
        Ok(())
    }

    /// Subscribes `handler` to locale changes.
    ///
    /// The returned guard must be held for as long as deliveries are
    /// wanted; dropping it unsubscribes. Handlers registered during a
    /// broadcast are first called on the next broadcast.
    pub fn subscribe(
        self: &Rc<Self>,
        handler: impl FnMut(LocaleChange) + 'static,
    ) -> LocaleSubscription {
        let mut inner = self.inner.borrow_mut();
        let token = inner.next_token;
        inner.next_token += 1;
        inner.handlers.push(HandlerEntry {
            token,
            handler: Rc::new(RefCell::new(handler)),
        });
        LocaleSubscription {
            bus: Rc::downgrade(self),
            token,
        }
    }

    fn run_broadcasts(&self, first: LocaleId) {
        let mut next = Some(first);
        while let Some(id) = next {
            let (previous, handlers) = {
                let mut inner = self.inner.borrow_mut();
                let previous = inner.current;
                inner.current = id;
                // Snapshot the handler list: handlers may subscribe or
                // unsubscribe while the broadcast is running.
                let handlers: Vec<Handler> =
                    inner.handlers.iter().map(|e| e.handler.clone()).collect();
                (previous, handlers)
            };
            self.settings.set_int(LOCALE_SETTING_KEY, i64::from(id));
            tracing::debug!(from = previous, to = id, "locale changed");
            let change = LocaleChange {
                previous: Some(previous),
                current: id,
            };
            for handler in handlers {
                (handler.borrow_mut())(change);
            }
            next = {
                let mut inner = self.inner.borrow_mut();
                loop {
                    match inner.queued.pop_front() {
                        // Idempotence also applies to queued changes.
                        Some(q) if q == inner.current => {}
                        Some(q) => break Some(q),
                        None => {
                            inner.notifying = false;
                            break None;
                        }
                    }
                }
            };
        }
    }

    fn remove(&self, token: u64) {
        let mut inner = self.inner.borrow_mut();
        inner.handlers.retain(|e| e.token != token);
    }
}

/// Subscription guard returned by [`LocaleBus::subscribe`].
///
/// Dropping the guard removes the handler from the bus; release is
/// mandatory and tied to the subscriber's own lifetime.
pub struct LocaleSubscription {
    bus: Weak<LocaleBus>,
    token: u64,
}

impl LocaleSubscription {
    /// Explicitly ends the subscription (equivalent to dropping the guard).
    pub fn unsubscribe(self) {}
}

impl Drop for LocaleSubscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.remove(self.token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemorySettingsStore;

    fn bus_with(locale_count: u32) -> Rc<LocaleBus> {
        LocaleBus::new(Rc::new(MemorySettingsStore::new()), locale_count)
    }

    #[test]
    fn test_new_restores_persisted_locale() {
        let settings = Rc::new(MemorySettingsStore::new());
        settings.set_int(LOCALE_SETTING_KEY, 1);
        let bus = LocaleBus::new(settings, 2);
        assert_eq!(bus.current(), 1);
    }

    #[test]
    fn test_new_ignores_out_of_range_persisted_locale() {
        let settings = Rc::new(MemorySettingsStore::new());
        settings.set_int(LOCALE_SETTING_KEY, 9);
        let bus = LocaleBus::new(settings, 2);
        assert_eq!(bus.current(), 0);
    }

    #[test]
    fn test_change_notifies_subscribers_synchronously() {
        let bus = bus_with(3);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let _sub = bus.subscribe(move |change| seen_clone.borrow_mut().push(change));

        bus.change(2).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![LocaleChange {
                previous: Some(0),
                current: 2
            }]
        );
    }

    #[test]
    fn test_change_is_idempotent() {
        let bus = bus_with(2);
        let count = Rc::new(RefCell::new(0));
        let count_clone = count.clone();
        let _sub = bus.subscribe(move |_| *count_clone.borrow_mut() += 1);

        bus.change(0).unwrap();
        bus.change(1).unwrap();
        bus.change(1).unwrap();

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_change_persists_before_notifying() {
        let settings = Rc::new(MemorySettingsStore::new());
        let bus = LocaleBus::new(settings.clone(), 2);
        let observed = Rc::new(RefCell::new(-1));
        let observed_clone = observed.clone();
        let settings_clone = settings.clone();
        let _sub = bus.subscribe(move |_| {
            *observed_clone.borrow_mut() = settings_clone.get_int(LOCALE_SETTING_KEY, -1);
        });

        bus.change(1).unwrap();

        assert_eq!(*observed.borrow(), 1);
    }

    #[test]
    fn test_out_of_range_id_is_reported_not_clamped() {
        let bus = bus_with(2);
        let result = bus.change(2);
        assert!(matches!(result, Err(EngineError::ContractViolation(_))));
        assert_eq!(bus.current(), 0);
    }

    #[test]
    fn test_dropped_subscription_stops_delivery() {
        let bus = bus_with(3);
        let count = Rc::new(RefCell::new(0));
        let count_clone = count.clone();
        let sub = bus.subscribe(move |_| *count_clone.borrow_mut() += 1);

        bus.change(1).unwrap();
        sub.unsubscribe();
        bus.change(2).unwrap();

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_reentrant_change_runs_after_inflight_broadcast() {
        let bus = bus_with(3);
        let order = Rc::new(RefCell::new(Vec::new()));

        // First subscriber re-enters the bus on the initial change.
        let bus_clone = bus.clone();
        let order_a = order.clone();
        let _sub_a = bus.subscribe(move |change| {
            order_a.borrow_mut().push(("a", change.current));
            if change.current == 1 {
                bus_clone.change(2).unwrap();
            }
        });
        let order_b = order.clone();
        let _sub_b = bus.subscribe(move |change| {
            order_b.borrow_mut().push(("b", change.current));
        });

        bus.change(1).unwrap();

        // The broadcast for 1 completes (both subscribers) before the
        // queued change to 2 begins.
        assert_eq!(
            *order.borrow(),
            vec![("a", 1), ("b", 1), ("a", 2), ("b", 2)]
        );
        assert_eq!(bus.current(), 2);
    }

    #[test]
    fn test_queued_change_to_current_locale_is_dropped() {
        let bus = bus_with(3);
        let count = Rc::new(RefCell::new(0));

        let bus_clone = bus.clone();
        let count_clone = count.clone();
        let _sub = bus.subscribe(move |change| {
            *count_clone.borrow_mut() += 1;
            if change.current == 1 {
                // Re-entrant change to the id already being applied:
                // idempotent, nothing is queued.
                bus_clone.change(1).unwrap();
            }
        });

        bus.change(1).unwrap();

        assert_eq!(*count.borrow(), 1);
        assert_eq!(bus.current(), 1);
    }
}
