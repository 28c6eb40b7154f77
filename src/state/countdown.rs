// Countdown to a fixed deadline (cooldowns, daily reset).
use crate::util::format_long_countdown;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    /// Epoch milliseconds.
    pub deadline: u64,
}

impl Countdown {
    pub fn new(deadline: u64) -> Self {
        Self { deadline }
    }

    pub fn remaining_ms(&self, now: u64) -> u64 {
        self.deadline.saturating_sub(now)
    }

    pub fn is_done(&self, now: u64) -> bool {
        now >= self.deadline
    }

    pub fn label(&self, now: u64) -> String {
        if self.is_done(now) {
            "Ready".to_string()
        } else {
            format_long_countdown(self.remaining_ms(now))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_then_reads_ready() {
        let c = Countdown::new(10_000);
        assert_eq!(c.label(0), "0m 10s");
        assert_eq!(c.label(9_500), "0m 1s");
        assert!(!c.is_done(9_999));
        assert_eq!(c.label(10_000), "Ready");
        assert_eq!(c.label(20_000), "Ready");
        assert_eq!(c.remaining_ms(20_000), 0);
    }

    #[test]
    fn long_cooldowns_include_hours() {
        let c = Countdown::new(2 * 3_600_000 + 5_000);
        assert_eq!(c.label(0), "2h 0m 5s");
    }
}
