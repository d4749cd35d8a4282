mod error;

pub use error::LinkError;

use crate::{
    common::ScanMode,
    geometry::{Point2, Voltage2},
};

/// A trait that provides the actuation interface with the beam-steering scanner.
pub trait VoltageSink: Send {
    /// Opens the link.
    fn open(&mut self) -> Result<(), LinkError>;

    /// Closes the link.
    fn close(&mut self) -> Result<(), LinkError>;

    /// Commands the scanner to the given control voltages.
    ///
    /// The call may block until the hardware has settled or be fire-and-forget;
    /// callers that need a settling delay insert it themselves.
    fn apply_voltage(&mut self, voltage: Voltage2) -> Result<(), LinkError>;

    /// Checks if the link is open.
    #[must_use]
    fn is_open(&self) -> bool;
}

impl VoltageSink for Box<dyn VoltageSink> {
    fn open(&mut self) -> Result<(), LinkError> {
        self.as_mut().open()
    }

    fn close(&mut self) -> Result<(), LinkError> {
        self.as_mut().close()
    }

    fn apply_voltage(&mut self, voltage: Voltage2) -> Result<(), LinkError> {
        self.as_mut().apply_voltage(voltage)
    }

    fn is_open(&self) -> bool {
        self.as_ref().is_open()
    }
}

/// A trait that fires camera exposures.
pub trait TriggerSink: Send {
    /// Fires a single exposure.
    fn trigger_camera(&mut self) -> Result<(), LinkError>;
}

/// A trait that pulls completed frames from the acquisition camera.
pub trait ImageSource: Send {
    /// Pulls one completed frame as a raw pixel buffer.
    fn read_frame(&mut self) -> Result<Vec<u8>, LinkError>;
}

/// The full hardware interface of the scan head.
pub trait ScanLink: VoltageSink + TriggerSink + ImageSource {}

impl<L: VoltageSink + TriggerSink + ImageSource> ScanLink for L {}

/// A trait that receives progress notifications from the scan controller.
///
/// Purely observational; implementations must not block.
pub trait ProgressSink {
    /// Called after each voltage update with the emitted pair and the active mode.
    fn voltage_applied(&mut self, _voltage: Voltage2, _mode: ScanMode) {}

    /// Called after each acquisition step with the number of emitted samples
    /// and the total trajectory length.
    fn swept(&mut self, _current: usize, _total: usize) {}

    /// Called when the alignment cadence is started or stopped.
    fn alignment_running(&mut self, _running: bool) {}

    /// Called after a position-addressed move with the commanded position.
    fn position_changed(&mut self, _position: Point2) {}
}

/// A [`ProgressSink`] that discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {}
