//! Injected capabilities the store depends on but does not implement.
//!
//! # Responsibility
//! - Define the `Clock` and `IdGenerator` contracts used by the store.
//! - Provide default system-backed implementations.
//!
//! # Invariants
//! - `IdGenerator::next_id` returns a fresh globally-unique value per call.
//! - The store never caches capability results across calls.

use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Wall-clock source for record timestamps.
pub trait Clock {
    /// Returns the current time as Unix epoch milliseconds.
    fn now_epoch_ms(&self) -> i64;
}

/// Generator of globally-unique record identifiers.
pub trait IdGenerator {
    /// Returns a fresh identifier, never repeating an earlier one.
    fn next_id(&self) -> String;
}

/// `Clock` backed by the operating-system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        // A system clock set before the Unix epoch collapses to 0 rather
        // than failing the calling operation.
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_millis() as i64,
            Err(_) => 0,
        }
    }
}

/// `IdGenerator` backed by random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
