//! Commonly used items.

pub use crate::{
    controller::{
        AbortHandle, Controller, Sleep, SpinSleeper, StdSleeper, SweepOptions, SweepOutcome,
        SweepReport,
    },
    error::OdtError,
    link::{Audit, Nop},
};

pub use odt_core::{
    common::{deg, kHz, mm, rad, um, Angle, Freq, Hz, ScanMode, V},
    geometry::{Bounds, Point2, Point3, Vector2, Vector3, Voltage2},
    link::{
        ImageSource, LinkError, NullProgress, ProgressSink, ScanLink, TriggerSink, VoltageSink,
    },
    scan_rate::{ScanRate, ScanRateError},
};

pub use odt_driver::{
    calibration::{CalibrationStore, SpatialCalibration, StoreError},
    error::OdtDriverError,
    trajectory::{
        AcquisitionSpiral, AlignmentRing, TrajectorySettings, ACQUISITION_POINTS_MIN,
    },
};
