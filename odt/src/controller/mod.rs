mod sleep;
mod sweep;

pub use sleep::{Sleep, SpinSleeper, StdSleeper};
pub use sweep::{SweepOptions, SweepOutcome, SweepReport};

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Instant,
};

use getset::{CopyGetters, Getters, MutGetters};
use odt_core::{
    common::{Hz, ScanMode},
    geometry::{Point2, Voltage2},
    link::{ProgressSink, ScanLink},
    scan_rate::ScanRate,
};
use odt_driver::{
    calibration::{CalibrationStore, SpatialCalibration},
    error::OdtDriverError,
    trajectory::TrajectorySettings,
};

use crate::error::OdtError;

/// A cloneable handle that cancels a running sweep or alignment cadence.
///
/// The flag is checked once per emitted sample, so cancellation takes effect
/// at sample granularity without corrupting the emission order.
#[derive(Clone, Debug, Default)]
pub struct AbortHandle(Arc<AtomicBool>);

impl AbortHandle {
    /// Requests cancellation.
    pub fn abort(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Returns `true` if cancellation has been requested.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// The scan controller.
///
/// Owns the per-mode trajectory settings, the active spatial calibration and
/// the hardware link; all operations run on the caller's thread, serialized
/// by `&mut self`. The only cross-thread channel is the [`AbortHandle`].
#[derive(Getters, MutGetters, CopyGetters)]
pub struct Controller<L: ScanLink, P: ProgressSink> {
    /// The hardware link of the scan head.
    #[getset(get = "pub", get_mut = "pub")]
    link: L,
    /// The observer receiving progress notifications.
    #[getset(get = "pub", get_mut = "pub")]
    progress: P,
    align: TrajectorySettings,
    acquisition: TrajectorySettings,
    /// The active spatial calibration.
    #[getset(get = "pub")]
    calibration: SpatialCalibration,
    /// The most recently commanded voltage pair.
    #[getset(get_copy = "pub")]
    voltage: Voltage2,
    align_index: usize,
    align_running: bool,
    abort: AbortHandle,
}

impl<L: ScanLink, P: ProgressSink> Controller<L, P> {
    /// Opens the link and creates a controller with initial scan parameters
    /// (alignment: 0.1 V ring of 16 points at 10 Hz; acquisition: 0.1 V disk
    /// of 150 points). Replace them through the setters.
    pub fn open(mut link: L, progress: P) -> Result<Self, OdtError> {
        link.open()?;
        Ok(Self {
            link,
            progress,
            align: TrajectorySettings::new(ScanMode::Align, 0.1, 16, ScanRate::new(10.0 * Hz))?,
            acquisition: TrajectorySettings::new(
                ScanMode::Acquire,
                0.1,
                150,
                ScanRate::new(1000.0 * Hz),
            )?,
            calibration: SpatialCalibration::default(),
            voltage: Voltage2::ZERO,
            align_index: 0,
            align_running: false,
            abort: AbortHandle::default(),
        })
    }

    /// Parks the scanner at zero deflection and closes the link.
    pub fn close(&mut self) -> Result<(), OdtError> {
        if !self.link.is_open() {
            return Ok(());
        }
        self.stop_alignment();
        self.link.apply_voltage(Voltage2::ZERO)?;
        self.voltage = Voltage2::ZERO;
        self.link.close()?;
        Ok(())
    }

    /// The settings of the given mode.
    #[must_use]
    pub fn settings(&self, mode: ScanMode) -> &TrajectorySettings {
        match mode {
            ScanMode::Align => &self.align,
            ScanMode::Acquire => &self.acquisition,
        }
    }

    fn settings_mut(&mut self, mode: ScanMode) -> &mut TrajectorySettings {
        match mode {
            ScanMode::Align => &mut self.align,
            ScanMode::Acquire => &mut self.acquisition,
        }
    }

    /// Sets the trajectory radius of the given mode and regenerates its
    /// trajectory.
    pub fn set_radial_voltage(&mut self, mode: ScanMode, value: f64) -> Result<(), OdtError> {
        Ok(self.settings_mut(mode).set_radial_voltage(value)?)
    }

    /// Sets the requested point count of the given mode and regenerates its
    /// trajectory.
    ///
    /// A running alignment cadence picks up the new period on its next tick;
    /// callers driving their own tick source re-read [`Controller::align_interval`].
    pub fn set_num_points(&mut self, mode: ScanMode, value: usize) -> Result<(), OdtError> {
        Ok(self.settings_mut(mode).set_num_points(value)?)
    }

    /// Sets the cadence revolution rate of the given mode.
    pub fn set_scan_rate(&mut self, mode: ScanMode, value: ScanRate) {
        self.settings_mut(mode).set_scan_rate(value);
    }

    /// Marks the alignment cadence as running.
    pub fn start_alignment(&mut self) {
        if !self.align_running {
            self.align_running = true;
            self.progress.alignment_running(true);
        }
    }

    /// Marks the alignment cadence as idle.
    pub fn stop_alignment(&mut self) {
        if self.align_running {
            self.align_running = false;
            self.progress.alignment_running(false);
        }
    }

    /// Returns `true` while the alignment cadence is running.
    #[must_use]
    pub fn is_alignment_running(&self) -> bool {
        self.align_running
    }

    /// The cadence period between consecutive alignment samples.
    pub fn align_interval(&self) -> Result<std::time::Duration, OdtError> {
        Ok(self.align.interval()?)
    }

    /// Advances the alignment ring by one sample and emits it.
    ///
    /// Exactly one voltage update per call; the cursor wraps at the end of
    /// the ring. This is the operation a periodic tick source invokes.
    pub fn step_alignment(&mut self) -> Result<(), OdtError> {
        let len = self.align.voltages().len();
        self.align_index = (self.align_index + 1) % len;
        let voltage = self.align.voltages()[self.align_index];
        self.link.apply_voltage(voltage)?;
        self.voltage = voltage;
        self.progress.voltage_applied(voltage, ScanMode::Align);
        Ok(())
    }

    /// Runs the alignment cadence on the caller's thread until the abort
    /// handle fires, emitting one sample per tick.
    pub fn run_alignment(&mut self, sleeper: &impl Sleep) -> Result<(), OdtError> {
        self.abort.reset();
        self.start_alignment();
        let mut deadline = Instant::now();
        while !self.abort.is_aborted() {
            if let Err(e) = self.step_alignment() {
                self.stop_alignment();
                return Err(e);
            }
            match self.align.interval() {
                Ok(interval) => deadline += interval,
                Err(e) => {
                    self.stop_alignment();
                    return Err(e.into());
                }
            }
            sleeper.sleep_until(deadline);
        }
        self.stop_alignment();
        Ok(())
    }

    /// Executes one acquisition sweep over the generated trajectory.
    ///
    /// Voltages are emitted strictly in trajectory order, one camera trigger
    /// per sample; afterwards one frame is read back per emitted sample.
    /// The abort flag is checked once per sample and once per frame read;
    /// cancellation is a normal termination and everything captured up to it
    /// is retained in the report.
    #[tracing::instrument(skip(self))]
    pub fn acquire(&mut self, options: SweepOptions) -> Result<SweepReport, OdtError> {
        let total = self.acquisition.voltages().len();
        if total == 0 {
            return Err(OdtDriverError::AcquisitionPatternEmpty.into());
        }
        self.abort.reset();
        tracing::debug!(total, "starting acquisition sweep");

        let mut emitted = 0;
        for i in 0..total {
            if self.abort.is_aborted() {
                break;
            }
            let voltage = self.acquisition.voltages()[i];
            self.link.apply_voltage(voltage)?;
            self.voltage = voltage;
            emitted += 1;
            self.progress.voltage_applied(voltage, ScanMode::Acquire);
            self.progress.swept(emitted, total);
            if !options.settle.is_zero() {
                std::thread::sleep(options.settle);
            }
            self.link.trigger_camera()?;
        }

        if self.abort.is_aborted() {
            tracing::debug!(emitted, "acquisition sweep aborted");
            return Ok(SweepReport {
                emitted,
                frames: Vec::new(),
                outcome: SweepOutcome::Aborted,
            });
        }

        let mut frames = Vec::with_capacity(emitted);
        for _ in 0..emitted {
            if self.abort.is_aborted() {
                tracing::debug!(read = frames.len(), "frame readout aborted");
                return Ok(SweepReport {
                    emitted,
                    frames,
                    outcome: SweepOutcome::Aborted,
                });
            }
            frames.push(self.link.read_frame()?);
        }

        tracing::debug!(emitted, "acquisition sweep completed");
        Ok(SweepReport {
            emitted,
            frames,
            outcome: SweepOutcome::Completed,
        })
    }

    /// Moves the scanner to the given in-plane position \[µm\].
    ///
    /// The target is clamped into the calibrated range before conversion;
    /// commanding a position never extrapolates outside the bounds.
    pub fn set_position(&mut self, position: Point2) -> Result<(), OdtError> {
        let target = self.calibration.bounds.clamp(position);
        if target != position {
            tracing::warn!(?position, ?target, "position clamped to calibrated range");
        }
        let voltage = self.calibration.position_to_voltage(target)?;
        self.link.apply_voltage(voltage)?;
        self.voltage = voltage;
        self.progress.position_changed(target);
        Ok(())
    }

    /// Drives the scanner back to the center of the field of view.
    pub fn center_position(&mut self) -> Result<(), OdtError> {
        self.link.apply_voltage(Voltage2::ZERO)?;
        self.voltage = Voltage2::ZERO;
        Ok(())
    }

    /// The position corresponding to the most recently commanded voltages.
    ///
    /// Read direction only: the result may lie outside the calibrated range.
    pub fn current_position(&self) -> Result<Point2, OdtError> {
        Ok(self.calibration.voltage_to_position(self.voltage)?)
    }

    /// Loads the named calibration dataset and atomically replaces the active
    /// model; on any failure the previous model stays in effect.
    #[tracing::instrument(skip(self, store))]
    pub fn load_calibration(
        &mut self,
        store: &mut impl CalibrationStore,
        identifier: &str,
    ) -> Result<(), OdtError> {
        let model = store.load(identifier)?;
        self.calibration = model.validated()?;
        tracing::debug!(date = %self.calibration.date, "calibration loaded");
        Ok(())
    }

    /// A handle that cancels a running sweep or alignment cadence.
    #[must_use]
    pub fn abort_handle(&self) -> AbortHandle {
        self.abort.clone()
    }
}

impl<L: ScanLink, P: ProgressSink> Drop for Controller<L, P> {
    fn drop(&mut self) {
        if !self.link.is_open() {
            return;
        }
        let _ = self.close();
    }
}
