//! ODT scan controller for Brillouin microscopy acquisition.
//!
//! Drives the beam-steering scanner of an optical-diffraction-tomography
//! setup: a circular alignment cadence for live visual calibration and a
//! disk-filling sweep for tomographic acquisition, addressed either in
//! voltage space or, through a loaded spatial calibration, in physical
//! micrometer coordinates.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use odt::prelude::*;
//!
//! let mut scanner = Controller::open(Nop::new(), NullProgress)?;
//! scanner.set_radial_voltage(ScanMode::Acquire, 0.5 * V)?;
//! let report = scanner.acquire(SweepOptions {
//!     settle: Duration::ZERO,
//! })?;
//! assert_eq!(SweepOutcome::Completed, report.outcome());
//! # Ok::<(), OdtError>(())
//! ```

pub mod controller;
pub mod error;
pub mod link;
pub mod prelude;

pub use odt_driver as driver;

pub use controller::Controller;
