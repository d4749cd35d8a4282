use derive_more::Display;
use thiserror::Error;

use super::SpatialCalibration;

/// An error produced by a calibration store.
#[derive(Error, Debug, Display, PartialEq, Clone)]
#[display("{}", msg)]
pub struct StoreError {
    msg: String,
}

impl StoreError {
    /// Creates a new [`StoreError`].
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// A source of persisted calibration datasets.
///
/// The persistence format is the store's concern; implementations typically
/// wrap a structured file carrying the date, translation, rotation, the five
/// polynomial coefficients and the six bounds values.
pub trait CalibrationStore {
    /// Retrieves the dataset with the given identifier.
    fn load(&mut self, identifier: &str) -> Result<SpatialCalibration, StoreError>;
}

impl CalibrationStore for Box<dyn CalibrationStore> {
    fn load(&mut self, identifier: &str) -> Result<SpatialCalibration, StoreError> {
        self.as_mut().load(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            "dataset not found",
            format!("{}", StoreError::new("dataset not found"))
        );
    }
}
