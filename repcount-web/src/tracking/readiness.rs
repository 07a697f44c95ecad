//! Readiness countdown
//!
//! Gives the user a few seconds to set the phone down and step into frame.
//! JS drives `tick()` from a one-second timer; frames are ignored until the
//! countdown hits zero.

/// Default countdown length in seconds
pub const COUNTDOWN_SECONDS: u32 = 5;

/// Countdown state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    NotReady,
    Ready,
}

/// One-shot countdown gate. Once ready it stays ready.
pub struct ReadinessGate {
    seconds_remaining: u32,
    state: Readiness,
}

impl ReadinessGate {
    pub fn new() -> Self {
        Self::with_seconds(COUNTDOWN_SECONDS)
    }

    /// A zero-length countdown starts out ready
    pub fn with_seconds(seconds: u32) -> Self {
        Self {
            seconds_remaining: seconds,
            state: if seconds == 0 {
                Readiness::Ready
            } else {
                Readiness::NotReady
            },
        }
    }

    /// Advance the countdown by one second
    ///
    /// Returns true only on the tick that made the gate ready.
    pub fn tick(&mut self) -> bool {
        if self.state == Readiness::Ready {
            return false;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.state = Readiness::Ready;
            return true;
        }
        false
    }

    pub fn is_ready(&self) -> bool {
        self.state == Readiness::Ready
    }

    pub fn state(&self) -> Readiness {
        self.state
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// Back to NotReady with a fresh countdown
    pub fn restart(&mut self, seconds: u32) {
        *self = Self::with_seconds(seconds);
    }
}

impl Default for ReadinessGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_after_five_ticks() {
        let mut gate = ReadinessGate::new();
        for remaining in (1..5).rev() {
            assert!(!gate.tick());
            assert!(!gate.is_ready());
            assert_eq!(gate.seconds_remaining(), remaining);
        }
        assert!(gate.tick());
        assert!(gate.is_ready());
        assert_eq!(gate.seconds_remaining(), 0);
    }

    #[test]
    fn test_never_reverts() {
        let mut gate = ReadinessGate::with_seconds(1);
        assert!(gate.tick());
        for _ in 0..10 {
            assert!(!gate.tick());
            assert_eq!(gate.state(), Readiness::Ready);
        }
    }

    #[test]
    fn test_restart_resets_countdown() {
        let mut gate = ReadinessGate::with_seconds(2);
        gate.tick();
        gate.tick();
        assert!(gate.is_ready());

        gate.restart(5);
        assert!(!gate.is_ready());
        assert_eq!(gate.seconds_remaining(), 5);
    }

    #[test]
    fn test_zero_countdown_is_ready() {
        let gate = ReadinessGate::with_seconds(0);
        assert!(gate.is_ready());
    }
}
