//! Shared test mocks and utilities for the Waystone tour core.

mod clock;
mod gateways;

pub use clock::FixedClock;
pub use gateways::{
    FailingHintGateway, FailingStatsGateway, RecordingStatsGateway, StaticHintGateway,
};
