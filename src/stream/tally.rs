use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Per-stream counters and timers keyed by caller-supplied names.
#[derive(Debug, Default)]
pub struct Tally {
    counters: HashMap<String, u64>,
    timers: HashMap<String, Instant>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments `key` and returns its new value. Unknown keys start at 0.
    pub fn count(&mut self, key: &str) -> u64 {
        let counter = self.counters.entry(key.to_string()).or_insert(0);
        *counter += 1;
        *counter
    }

    pub fn counter(&self, key: &str) -> u64 {
        self.counters.get(key).copied().unwrap_or(0)
    }

    /// Starts a timer. A timer that is already running keeps its start.
    pub fn start(&mut self, key: &str) {
        if self.timers.contains_key(key) {
            tracing::debug!(key, "timer already running");
            return;
        }
        self.timers.insert(key.to_string(), Instant::now());
    }

    /// Stops a timer and returns how long it ran. Missing timers report zero.
    pub fn stop(&mut self, key: &str) -> Duration {
        match self.timers.remove(key) {
            Some(start) => start.elapsed(),
            None => {
                tracing::debug!(key, "timeEnd without a running timer");
                Duration::ZERO
            }
        }
    }

    pub fn has_timer(&self, key: &str) -> bool {
        self.timers.contains_key(key)
    }
}
