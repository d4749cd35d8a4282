use std::time::Duration;

use thiserror::Error;

use crate::common::Freq;

/// An error produced by an invalid cadence configuration.
#[derive(Error, Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum ScanRateError {
    /// The revolution rate is not a positive finite number.
    #[error("Scan rate ({0:?}) must be positive and finite")]
    RateInvalid(Freq<f64>),
    /// A cadence over an empty trajectory has no defined period.
    #[error("Cadence requires at least one sample per revolution")]
    EmptyCycle,
}

/// Revolution rate of the alignment cadence.
///
/// One revolution traverses the whole trajectory once, so the period between
/// consecutive samples is `1 / (rate · num_points)`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScanRate {
    rate: Freq<f64>,
}

impl ScanRate {
    /// Creates a new [`ScanRate`].
    #[must_use]
    pub const fn new(rate: Freq<f64>) -> Self {
        Self { rate }
    }

    /// Returns the revolution rate.
    #[must_use]
    pub const fn freq(&self) -> Freq<f64> {
        self.rate
    }

    /// The period between consecutive samples of a revolution of `num_points` samples.
    pub fn interval(&self, num_points: usize) -> Result<Duration, ScanRateError> {
        if num_points == 0 {
            return Err(ScanRateError::EmptyCycle);
        }
        let hz = self.rate.hz();
        if !hz.is_finite() || hz <= 0.0 {
            return Err(ScanRateError::RateInvalid(self.rate));
        }
        Ok(Duration::from_secs_f64(1.0 / (hz * num_points as f64)))
    }
}

impl From<Freq<f64>> for ScanRate {
    fn from(rate: Freq<f64>) -> Self {
        Self::new(rate)
    }
}
