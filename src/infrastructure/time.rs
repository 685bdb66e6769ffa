use crate::application::ports::time::Clock;
use chrono::{DateTime, DurationRound, TimeDelta, Utc};

/// Wall clock truncated to whole milliseconds, the precision the API
/// serialises, so a value read back from the store compares equal to the one
/// that was written.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let now = Utc::now();
        now.duration_trunc(TimeDelta::milliseconds(1)).unwrap_or(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn has_millisecond_precision() {
        assert_eq!(SystemClock.now().nanosecond() % 1_000_000, 0);
    }
}
