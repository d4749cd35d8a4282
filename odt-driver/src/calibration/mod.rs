mod store;

pub use store::{CalibrationStore, StoreError};

use odt_core::{
    geometry::{Bounds, Point2, Rotation2, Vector2, Voltage2},
    utils::{polyval, polyval_deriv},
};

use crate::error::OdtDriverError;

/// Maximum number of Newton iterations of the polynomial inversion.
const INVERSION_MAX_ITERATIONS: usize = 64;
/// Positional tolerance of the polynomial inversion \[µm\].
const INVERSION_TOLERANCE: f64 = 1e-6;

/// The fitted transform between scanner-voltage space and physical position
/// space: a rigid rotation, an anisotropic translation and a quartic radial
/// correction polynomial, applied per axis.
///
/// A model converts coordinates only while `valid` is `true`; `valid` is set
/// by [`SpatialCalibration::validated`] after a successful load and is never
/// true for the built-in defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct SpatialCalibration {
    /// The acquisition date of the calibration dataset.
    pub date: String,
    /// Translation of the intermediate frame \[V\].
    pub translation: Vector2,
    /// Rotation between voltage space and the fitted frame \[rad\].
    pub rho: f64,
    /// Quartic correction coefficients `[c4, c3, c2, c1, c0]`
    /// \[µm/V⁴ … µm\].
    pub coefficients: [f64; 5],
    /// The calibrated travel range \[µm\].
    pub bounds: Bounds,
    /// Whether the model may be used to convert coordinates.
    pub valid: bool,
}

impl Default for SpatialCalibration {
    fn default() -> Self {
        Self {
            date: String::new(),
            translation: Vector2::new(-3.8008e-6, 1.1829e-6),
            rho: -0.2528,
            coefficients: [
                -691.85, // coefficient of fourth order
                670.76,  // coefficient of third order
                -117.97, // coefficient of second order
                415.44,  // coefficient of first order
                0.0,     // offset term
            ],
            bounds: Bounds::new(-53.0, 53.0, -43.0, 43.0, -1000.0, 1000.0),
            valid: false,
        }
    }
}

impl SpatialCalibration {
    /// Checks the dataset and marks it usable.
    ///
    /// Rejects unordered or non-finite bounds, non-finite rotation,
    /// translation or coefficients, and an all-zero polynomial (which has no
    /// inverse). On success the returned model has `valid == true`.
    pub fn validated(self) -> Result<Self, OdtDriverError> {
        if !self.bounds.is_ordered() || !self.bounds.is_finite() {
            return Err(OdtDriverError::InvalidCalibration(
                "bounds must be finite with min <= max per axis".into(),
            ));
        }
        if !self.rho.is_finite() || !self.translation.iter().all(|v| v.is_finite()) {
            return Err(OdtDriverError::InvalidCalibration(
                "rotation and translation must be finite".into(),
            ));
        }
        if !self.coefficients.iter().all(|c| c.is_finite()) {
            return Err(OdtDriverError::InvalidCalibration(
                "polynomial coefficients must be finite".into(),
            ));
        }
        if self.coefficients[..4].iter().all(|&c| c == 0.0) {
            return Err(OdtDriverError::InvalidCalibration(
                "polynomial must have a non-zero term of positive degree".into(),
            ));
        }
        Ok(Self {
            valid: true,
            ..self
        })
    }

    /// Converts scanner voltages into the physical position \[µm\].
    ///
    /// This is the read direction: the result may lie outside `bounds`, since
    /// interpreting a readback commands no motion.
    pub fn voltage_to_position(&self, voltage: Voltage2) -> Result<Point2, OdtDriverError> {
        if !self.valid {
            return Err(OdtDriverError::CalibrationUnavailable);
        }
        let u = Rotation2::new(-self.rho) * Vector2::new(voltage.ux, voltage.uy) - self.translation;
        Ok(Point2::new(
            polyval(&self.coefficients, u.x),
            polyval(&self.coefficients, u.y),
        ))
    }

    /// Converts a physical position \[µm\] into scanner voltages.
    ///
    /// The quartic is inverted per axis by bounded Newton iteration; if the
    /// iteration does not reach the positional tolerance the conversion fails
    /// with [`OdtDriverError::CalibrationInverseDiverged`] and no voltage is
    /// produced. Callers clamp write targets into `bounds` beforehand.
    pub fn position_to_voltage(&self, position: Point2) -> Result<Voltage2, OdtDriverError> {
        if !self.valid {
            return Err(OdtDriverError::CalibrationUnavailable);
        }
        let u = Vector2::new(self.invert_axis(position.x)?, self.invert_axis(position.y)?);
        let v = Rotation2::new(self.rho) * (u + self.translation);
        Ok(Voltage2::new(v.x, v.y))
    }

    fn invert_axis(&self, target: f64) -> Result<f64, OdtDriverError> {
        let c1 = self.coefficients[3];
        let c0 = self.coefficients[4];
        let mut x = if c1.abs() > f64::EPSILON {
            (target - c0) / c1
        } else {
            target
        };
        for iteration in 0..INVERSION_MAX_ITERATIONS {
            let residual = polyval(&self.coefficients, x) - target;
            if residual.abs() < INVERSION_TOLERANCE {
                return Ok(x);
            }
            let slope = polyval_deriv(&self.coefficients, x);
            if !x.is_finite() || slope.abs() < f64::EPSILON {
                return Err(OdtDriverError::CalibrationInverseDiverged {
                    iterations: iteration,
                    residual: residual.abs(),
                });
            }
            x -= residual / slope;
        }
        let residual = (polyval(&self.coefficients, x) - target).abs();
        if residual < INVERSION_TOLERANCE {
            Ok(x)
        } else {
            Err(OdtDriverError::CalibrationInverseDiverged {
                iterations: INVERSION_MAX_ITERATIONS,
                residual,
            })
        }
    }
}
