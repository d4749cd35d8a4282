use derive_more::{Add, Neg, Sub};

/// A pair of control voltages for the beam-steering scanner.
#[derive(Clone, Copy, PartialEq, Debug, Default, Add, Sub, Neg)]
pub struct Voltage2 {
    /// Horizontal deflection \[V\].
    pub ux: f64,
    /// Vertical deflection \[V\].
    pub uy: f64,
}

impl Voltage2 {
    /// Zero deflection on both axes.
    pub const ZERO: Self = Self { ux: 0.0, uy: 0.0 };

    /// Creates a new [`Voltage2`].
    #[must_use]
    pub const fn new(ux: f64, uy: f64) -> Self {
        Self { ux, uy }
    }

    /// Returns the Euclidean magnitude of the voltage pair.
    #[must_use]
    pub fn norm(self) -> f64 {
        self.ux.hypot(self.uy)
    }

    /// Returns `true` if both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.ux.is_finite() && self.uy.is_finite()
    }
}
