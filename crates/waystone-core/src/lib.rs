//! Waystone Core — shared contracts for the tour engines.
//!
//! This crate defines the pieces every engine depends on: the locale
//! broadcast bus, the deterministic scheduler, the gateway traits for
//! remote statistics and hints, and the error/event vocabulary. It
//! contains no presentation or transport code.

pub mod clock;
pub mod error;
pub mod event;
pub mod gateway;
pub mod locale;
pub mod scheduler;
pub mod settings;
pub mod text;
