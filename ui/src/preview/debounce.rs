use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::compat;

/// Identifies one scheduled run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// A single-slot debouncer: scheduling a run supersedes every run scheduled
/// before it, so only the most recent one survives its delay.
#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: Rc<Cell<u64>>,
}

impl Debouncer {
    pub fn ticket(&self) -> Ticket {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.get() == ticket.0
    }

    /// Drops whatever is pending without scheduling anything new.
    pub fn cancel(&self) {
        self.ticket();
    }

    /// Waits `delay`, then reports whether this run is still the latest.
    pub async fn settle(&self, delay: Duration) -> bool {
        let ticket = self.ticket();
        compat::sleep(delay).await;
        self.is_current(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_tickets_supersede_older_ones() {
        let debouncer = Debouncer::default();
        let first = debouncer.ticket();
        let second = debouncer.ticket();
        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
        debouncer.cancel();
        assert!(!debouncer.is_current(second));
    }

    #[tokio::test(start_paused = true)]
    async fn only_the_last_of_overlapping_runs_settles() {
        let debouncer = Debouncer::default();
        let delay = Duration::from_millis(100);
        let (first, second) = tokio::join!(debouncer.settle(delay), async {
            tokio::time::sleep(Duration::from_millis(30)).await;
            debouncer.settle(delay).await
        });
        assert!(!first);
        assert!(second);
    }

    #[tokio::test(start_paused = true)]
    async fn runs_far_apart_both_settle() {
        let debouncer = Debouncer::default();
        let delay = Duration::from_millis(100);
        assert!(debouncer.settle(delay).await);
        assert!(debouncer.settle(delay).await);
    }
}
