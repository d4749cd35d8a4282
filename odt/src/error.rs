use odt_core::link::LinkError;
use odt_driver::{calibration::StoreError, error::OdtDriverError};
use thiserror::Error;

/// Top-level error of the scan controller.
#[derive(Error, Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum OdtError {
    /// Error in the driver layer.
    #[error("{0}")]
    Driver(#[from] OdtDriverError),
    /// Error in the link.
    #[error("{0}")]
    Link(#[from] LinkError),
    /// Error in the calibration store.
    #[error("{0}")]
    Store(#[from] StoreError),
}
