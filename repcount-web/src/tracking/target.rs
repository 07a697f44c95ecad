//! Target monitor - one-shot "set complete" signal

/// Fires once when the rep count first reaches the target
pub struct TargetMonitor {
    target_reps: u32,
    reached: bool,
}

impl TargetMonitor {
    /// `target_reps` of 0 is bumped to 1; an empty set makes no sense
    pub fn new(target_reps: u32) -> Self {
        Self {
            target_reps: target_reps.max(1),
            reached: false,
        }
    }

    /// Check a fresh rep count. Call after every increment.
    ///
    /// Returns true only on the first call where `rep_count >= target`.
    pub fn on_rep(&mut self, rep_count: u32) -> bool {
        if self.reached || rep_count < self.target_reps {
            return false;
        }
        self.reached = true;
        true
    }

    pub fn target_reps(&self) -> u32 {
        self.target_reps
    }

    pub fn is_reached(&self) -> bool {
        self.reached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_at_target() {
        let mut monitor = TargetMonitor::new(10);
        let fired: Vec<u32> = (1..=15).filter(|&n| monitor.on_rep(n)).collect();
        assert_eq!(fired, vec![10]);
        assert!(monitor.is_reached());
    }

    #[test]
    fn test_not_reached_below_target() {
        let mut monitor = TargetMonitor::new(3);
        assert!(!monitor.on_rep(1));
        assert!(!monitor.on_rep(2));
        assert!(!monitor.is_reached());
    }

    #[test]
    fn test_zero_target_is_one() {
        let mut monitor = TargetMonitor::new(0);
        assert_eq!(monitor.target_reps(), 1);
        assert!(monitor.on_rep(1));
    }
}
