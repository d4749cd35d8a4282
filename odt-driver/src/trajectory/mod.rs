mod acquisition;
mod alignment;

pub use acquisition::{AcquisitionSpiral, ACQUISITION_POINTS_MIN};
pub use alignment::AlignmentRing;

use std::time::Duration;

use getset::{CopyGetters, Getters};
use odt_core::{common::ScanMode, geometry::Voltage2, scan_rate::ScanRate};

use crate::error::OdtDriverError;

/// Per-mode scan parameters and the voltage trajectory derived from them.
///
/// The trajectory is regenerated synchronously whenever the radius or the
/// point count changes, so `voltages` can never be observed disagreeing with
/// the stored parameters. A setter that fails leaves the settings untouched.
#[derive(Clone, Debug, PartialEq, Getters, CopyGetters)]
pub struct TrajectorySettings {
    /// The mode this instance drives.
    #[getset(get_copy = "pub")]
    mode: ScanMode,
    /// The trajectory radius in voltage space \[V\].
    #[getset(get_copy = "pub")]
    radial_voltage: f64,
    /// The number of trajectory samples.
    ///
    /// For [`ScanMode::Acquire`] this is overwritten with the realized
    /// trajectory length after generation.
    #[getset(get_copy = "pub")]
    num_points: usize,
    /// The cadence revolution rate.
    #[getset(get_copy = "pub")]
    scan_rate: ScanRate,
    /// The generated voltage trajectory.
    #[getset(get = "pub")]
    voltages: Vec<Voltage2>,
}

impl TrajectorySettings {
    /// Creates the settings and generates the initial trajectory.
    pub fn new(
        mode: ScanMode,
        radial_voltage: f64,
        num_points: usize,
        scan_rate: ScanRate,
    ) -> Result<Self, OdtDriverError> {
        let mut settings = Self {
            mode,
            radial_voltage,
            num_points,
            scan_rate,
            voltages: Vec::new(),
        };
        settings.regenerate()?;
        Ok(settings)
    }

    /// Sets the trajectory radius and regenerates the trajectory.
    pub fn set_radial_voltage(&mut self, value: f64) -> Result<(), OdtDriverError> {
        let prev = self.radial_voltage;
        self.radial_voltage = value;
        self.regenerate().inspect_err(|_| self.radial_voltage = prev)
    }

    /// Sets the requested number of points and regenerates the trajectory.
    pub fn set_num_points(&mut self, value: usize) -> Result<(), OdtDriverError> {
        let prev = self.num_points;
        self.num_points = value;
        self.regenerate().inspect_err(|_| self.num_points = prev)
    }

    /// Sets the cadence revolution rate.
    ///
    /// Only retimes the cadence; the trajectory itself is unaffected.
    pub fn set_scan_rate(&mut self, value: ScanRate) {
        self.scan_rate = value;
    }

    /// The cadence period between consecutive samples.
    pub fn interval(&self) -> Result<Duration, OdtDriverError> {
        Ok(self.scan_rate.interval(self.num_points)?)
    }

    fn regenerate(&mut self) -> Result<(), OdtDriverError> {
        match self.mode {
            ScanMode::Align => {
                self.voltages = AlignmentRing {
                    radial_voltage: self.radial_voltage,
                    num_points: self.num_points,
                }
                .generate()?;
            }
            ScanMode::Acquire => {
                let voltages = AcquisitionSpiral {
                    radial_voltage: self.radial_voltage,
                    num_points: self.num_points,
                }
                .generate()?;
                if !voltages.is_empty() {
                    self.num_points = voltages.len();
                }
                self.voltages = voltages;
            }
        }
        Ok(())
    }
}
