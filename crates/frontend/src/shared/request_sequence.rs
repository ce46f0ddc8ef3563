//! Ticket counter for async loads that can overlap (route changes while a
//! fetch is in flight). Only the newest ticket may publish its result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct RequestSequence(Arc<AtomicU64>);

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request; every earlier ticket becomes stale.
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.0.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_late_response_of_older_request_is_stale() {
        let seq = RequestSequence::new();
        let first = seq.next();
        let second = seq.next();

        // second resolves first, then the older one arrives
        assert!(seq.is_latest(second));
        assert!(!seq.is_latest(first));
    }

    #[test]
    fn test_clones_share_the_counter() {
        let seq = RequestSequence::new();
        let in_task = seq.clone();
        let ticket = in_task.next();
        assert!(seq.is_latest(ticket));
        seq.next();
        assert!(!in_task.is_latest(ticket));
    }
}
