//! Reveal delay: a scheduled, cancellable completion.
//!
//! The timer does not own a thread or a callback. It counts down the elapsed
//! time fed to it by the owning session's tick, so dropping the session drops
//! the pending completion with it.

/// Countdown to the deferred completion of the final stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealTimer {
    remaining_ms: Option<u64>,
}

impl RevealTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the reveal, replacing any countdown already running.
    pub fn arm(&mut self, delay_ms: u64) {
        self.remaining_ms = Some(delay_ms);
    }

    /// Discard a pending reveal. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.remaining_ms.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.remaining_ms.is_some()
    }

    pub fn remaining_ms(&self) -> Option<u64> {
        self.remaining_ms
    }

    /// Count down by `elapsed_ms`. Returns true exactly once, on the tick the
    /// delay runs out; the timer is disarmed afterwards.
    pub fn advance(&mut self, elapsed_ms: u64) -> bool {
        match self.remaining_ms {
            Some(remaining) if remaining <= elapsed_ms => {
                self.remaining_ms = None;
                true
            }
            Some(remaining) => {
                self.remaining_ms = Some(remaining - elapsed_ms);
                false
            }
            None => false,
        }
    }
}
