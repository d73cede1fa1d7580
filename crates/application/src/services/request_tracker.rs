//! Latest-request-wins generation counter
//!
//! Each search takes a [`RequestToken`] from the tracker. A completed
//! response is honored only while its token is still the latest one handed out.

use std::sync::atomic::{AtomicU64, Ordering};

/// Generation of one search
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Monotonic counter shared by every search of one view
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, superseding every earlier token
    pub fn next(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `token` is still the latest generation
    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::Acquire) == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn tokens_increase() {
        let tracker = RequestTracker::new();
        let first = tracker.next();
        let second = tracker.next();
        assert!(second > first);
        assert_eq!(first.generation() + 1, second.generation());
    }

    #[test]
    fn only_latest_token_is_current() {
        let tracker = RequestTracker::new();
        let first = tracker.next();
        assert!(tracker.is_current(first));

        let second = tracker.next();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn concurrent_tokens_are_unique() {
        let tracker = Arc::new(RequestTracker::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let tracker = Arc::clone(&tracker);
                std::thread::spawn(move || (0..100).map(|_| tracker.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<_> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 800);
        assert!(tracker.is_current(*all.last().unwrap()));
    }
}
