use std::time::Instant;

pub use spin_sleep::SpinSleeper;

/// A trait for sleep operations.
pub trait Sleep: std::fmt::Debug {
    /// Sleep until the specified deadline.
    fn sleep_until(&self, deadline: Instant);
}

impl Sleep for Box<dyn Sleep> {
    fn sleep_until(&self, deadline: Instant) {
        self.as_ref().sleep_until(deadline);
    }
}

/// A sleeper that uses [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StdSleeper;

impl Sleep for StdSleeper {
    fn sleep_until(&self, deadline: Instant) {
        std::thread::sleep(deadline.saturating_duration_since(Instant::now()));
    }
}

impl Sleep for SpinSleeper {
    fn sleep_until(&self, deadline: Instant) {
        self.sleep(deadline.saturating_duration_since(Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[rstest::rstest]
    #[case(Box::new(StdSleeper) as Box<dyn Sleep>)]
    #[case(Box::new(SpinSleeper::default()) as Box<dyn Sleep>)]
    fn sleeps_past_deadline(#[case] sleeper: Box<dyn Sleep>) {
        let deadline = Instant::now() + Duration::from_millis(1);
        sleeper.sleep_until(deadline);
        assert!(Instant::now() >= deadline);
    }

    #[test]
    fn expired_deadline_returns_immediately() {
        StdSleeper.sleep_until(Instant::now() - Duration::from_millis(10));
    }
}
