//! Debounce Helpers
//!
//! A per-key refetch guard and a generation-based debouncer for the search box.

use std::collections::HashMap;

/// Milliseconds since epoch from the browser clock
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Skips a fetch when the same key was fetched less than `min_interval_ms` ago
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefetchGuard {
    min_interval_ms: f64,
    last_fetch: HashMap<String, f64>,
}

impl RefetchGuard {
    pub fn new(min_interval_ms: f64) -> Self {
        Self { min_interval_ms, last_fetch: HashMap::new() }
    }

    pub fn should_fetch(&self, key: &str, now: f64) -> bool {
        match self.last_fetch.get(key) {
            Some(last) => now - last >= self.min_interval_ms,
            None => true,
        }
    }

    pub fn mark(&mut self, key: &str, now: f64) {
        self.last_fetch.insert(key.to_string(), now);
    }

    /// Check and mark in one step
    pub fn try_acquire(&mut self, key: &str, now: f64) -> bool {
        if self.should_fetch(key, now) {
            self.mark(key, now);
            true
        } else {
            false
        }
    }

    /// Make the next fetch of `key` go through
    pub fn forget(&mut self, key: &str) {
        self.last_fetch.remove(key);
    }

    pub fn clear(&mut self) {
        self.last_fetch.clear();
    }
}

/// Ticket handed out by [`Debouncer::bump`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Only the latest of a burst of triggers survives the delay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    pub fn bump(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_blocks_recent_fetch() {
        let mut guard = RefetchGuard::new(2000.0);
        assert!(guard.try_acquire("b1", 10_000.0));
        assert!(!guard.try_acquire("b1", 11_000.0));
        assert!(guard.should_fetch("b2", 11_000.0));
        assert!(guard.try_acquire("b1", 12_000.0));
    }

    #[test]
    fn test_guard_forget() {
        let mut guard = RefetchGuard::new(2000.0);
        guard.mark("l1", 500.0);
        assert!(!guard.should_fetch("l1", 600.0));
        guard.forget("l1");
        assert!(guard.should_fetch("l1", 600.0));
        guard.mark("l1", 700.0);
        guard.clear();
        assert!(guard.should_fetch("l1", 701.0));
    }

    #[test]
    fn test_debouncer_keeps_latest() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.bump();
        let second = debouncer.bump();
        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
    }
}
