mod angle;
mod freq;

pub use angle::*;
pub use freq::*;

pub use std::f64::consts::PI;

/// micrometer
pub const MICROMETER: f64 = 1.0;

/// millimeter
pub const MILLIMETER: f64 = 1000.0 * MICROMETER;

/// volt
pub const VOLT: f64 = 1.0;

/// \[µm\]
#[allow(non_upper_case_globals)]
pub const um: f64 = MICROMETER;

/// \[㎜\]
#[allow(non_upper_case_globals)]
pub const mm: f64 = MILLIMETER;

/// \[V\]
#[allow(non_upper_case_globals)]
pub const V: f64 = VOLT;

/// Operating mode of the beam-steering scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanMode {
    /// Live visual alignment on a circular trajectory.
    Align,
    /// Tomographic acquisition over a disk-filling trajectory.
    Acquire,
}
