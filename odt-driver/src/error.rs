use odt_core::{link::LinkError, scan_rate::ScanRateError};
use thiserror::Error;

use crate::trajectory::ACQUISITION_POINTS_MIN;

/// A interface for error handling in odt-driver.
#[derive(Error, Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum OdtDriverError {
    /// The alignment ring was requested with no samples.
    #[error("Alignment pattern requires at least one point")]
    EmptyAlignmentPattern,

    /// The radial voltage amplitude is not a finite number.
    #[error("Radial voltage ({0} V) must be finite")]
    NonFiniteRadialVoltage(f64),

    /// An acquisition sweep was started without a generated trajectory.
    #[error(
        "Acquisition trajectory is empty; at least {min} points are required",
        min = ACQUISITION_POINTS_MIN
    )]
    AcquisitionPatternEmpty,

    /// No valid spatial calibration is loaded.
    #[error("No valid spatial calibration is loaded")]
    CalibrationUnavailable,

    /// The numerical inversion of the calibration polynomial did not converge.
    #[error(
        "Calibration inversion did not converge after {iterations} iterations (residual {residual} µm)"
    )]
    CalibrationInverseDiverged {
        /// The number of iterations spent before giving up.
        iterations: usize,
        /// The positional residual at the last iterate \[µm\].
        residual: f64,
    },

    /// A calibration dataset failed validation on load.
    #[error("Calibration dataset is invalid: {0}")]
    InvalidCalibration(String),

    /// Cadence configuration error.
    #[error("{0}")]
    ScanRate(#[from] ScanRateError),

    /// Error in the link.
    #[error("{0}")]
    Link(#[from] LinkError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display() {
        assert_eq!(
            "Acquisition trajectory is empty; at least 10 points are required",
            format!("{}", OdtDriverError::AcquisitionPatternEmpty)
        );
        assert_eq!(
            "Radial voltage (NaN V) must be finite",
            format!("{}", OdtDriverError::NonFiniteRadialVoltage(f64::NAN))
        );
        let err = OdtDriverError::CalibrationUnavailable;
        assert!(err.source().is_none());
    }
}
