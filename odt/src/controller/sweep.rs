use std::time::Duration;

use getset::{CopyGetters, Getters};

/// How a finished sweep terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepOutcome {
    /// The sweep ran to the end of the trajectory.
    Completed,
    /// Cancellation was observed mid-sweep; samples already emitted and
    /// frames already read are retained.
    Aborted,
}

/// The result of an acquisition sweep.
#[derive(Clone, Debug, Getters, CopyGetters)]
pub struct SweepReport {
    /// The number of voltage samples actually emitted.
    #[getset(get_copy = "pub")]
    pub(crate) emitted: usize,
    /// One raw frame per emitted sample, in emission order.
    #[getset(get = "pub")]
    pub(crate) frames: Vec<Vec<u8>>,
    /// How the sweep terminated.
    #[getset(get_copy = "pub")]
    pub(crate) outcome: SweepOutcome,
}

/// Options of an acquisition sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepOptions {
    /// Wait inserted between each voltage actuation and the camera trigger so
    /// the scanner can settle before the exposure.
    pub settle: Duration,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settle() {
        assert_eq!(Duration::from_millis(10), SweepOptions::default().settle);
    }
}
