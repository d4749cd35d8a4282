/// \[°\]
#[allow(non_camel_case_types)]
pub struct deg;

/// \[rad\]
#[allow(non_camel_case_types)]
pub struct rad;

use derive_more::Debug;

/// Angle
#[derive(Clone, Copy, PartialEq, Debug)]
#[debug("{}rad", radian)]
pub struct Angle {
    radian: f64,
}

impl Angle {
    /// An angle of zero
    pub const ZERO: Self = Self { radian: 0.0 };

    /// An angle of π
    pub const PI: Self = Self {
        radian: std::f64::consts::PI,
    };

    /// Returns the angle in radian
    #[must_use]
    pub const fn radian(self) -> f64 {
        self.radian
    }

    /// Returns the angle in degree
    #[must_use]
    pub fn degree(self) -> f64 {
        self.radian.to_degrees()
    }
}

impl std::ops::Mul<deg> for f64 {
    type Output = Angle;

    fn mul(self, _rhs: deg) -> Self::Output {
        Self::Output {
            radian: self.to_radians(),
        }
    }
}

impl std::ops::Mul<rad> for f64 {
    type Output = Angle;

    fn mul(self, _rhs: rad) -> Self::Output {
        Self::Output { radian: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dbg() {
        assert_eq!(format!("{:?}", 1.0 * rad), "1rad");
    }

    #[test]
    fn degree() {
        approx::assert_abs_diff_eq!(90.0, (90.0 * deg).degree(), epsilon = 1e-12);
        approx::assert_abs_diff_eq!(
            std::f64::consts::FRAC_PI_2,
            (90.0 * deg).radian(),
            epsilon = 1e-12
        );
    }
}
