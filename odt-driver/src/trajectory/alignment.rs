use odt_core::{common::deg, geometry::Voltage2, utils::linspace};

use crate::error::OdtDriverError;

/// A uniform circular trajectory used for live visual alignment of the scan head.
///
/// The circle of radius `radial_voltage` is partitioned into exactly
/// `num_points` equal arcs starting at 0°; the closing duplicate at 360° is
/// not emitted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlignmentRing {
    /// The ring radius in voltage space \[V\].
    pub radial_voltage: f64,
    /// The number of samples on the ring.
    pub num_points: usize,
}

impl AlignmentRing {
    /// Samples the ring.
    ///
    /// Returns exactly `num_points` voltage pairs; the result is deterministic
    /// for identical inputs.
    pub fn generate(&self) -> Result<Vec<Voltage2>, OdtDriverError> {
        if self.num_points == 0 {
            return Err(OdtDriverError::EmptyAlignmentPattern);
        }
        if !self.radial_voltage.is_finite() {
            return Err(OdtDriverError::NonFiniteRadialVoltage(self.radial_voltage));
        }

        let mut theta = linspace(0.0, 360.0, self.num_points + 1);
        theta.pop();

        Ok(theta
            .into_iter()
            .map(|t| {
                let angle = (t * deg).radian();
                Voltage2::new(
                    self.radial_voltage * angle.cos(),
                    self.radial_voltage * angle.sin(),
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(1)]
    #[case(2)]
    #[case(4)]
    #[case(33)]
    #[case(360)]
    fn count(#[case] n: usize) {
        let ring = AlignmentRing {
            radial_voltage: 1.5,
            num_points: n,
        };
        assert_eq!(n, ring.generate().unwrap().len());
    }

    #[test]
    fn quadrants() {
        let ring = AlignmentRing {
            radial_voltage: 2.0,
            num_points: 4,
        };
        let expect = [
            Voltage2::new(2.0, 0.0),
            Voltage2::new(0.0, 2.0),
            Voltage2::new(-2.0, 0.0),
            Voltage2::new(0.0, -2.0),
        ];
        let voltages = ring.generate().unwrap();
        assert_eq!(expect.len(), voltages.len());
        expect.iter().zip(voltages.iter()).for_each(|(e, v)| {
            approx::assert_abs_diff_eq!(e.ux, v.ux, epsilon = 1e-12);
            approx::assert_abs_diff_eq!(e.uy, v.uy, epsilon = 1e-12);
        });
    }

    #[test]
    fn radius() {
        let ring = AlignmentRing {
            radial_voltage: 0.35,
            num_points: 17,
        };
        ring.generate().unwrap().iter().for_each(|v| {
            approx::assert_abs_diff_eq!(0.35, v.norm(), epsilon = 1e-12);
        });
    }

    #[test]
    fn spacing() {
        use itertools::Itertools;

        let ring = AlignmentRing {
            radial_voltage: 1.0,
            num_points: 12,
        };
        ring.generate()
            .unwrap()
            .iter()
            .map(|v| v.uy.atan2(v.ux))
            .tuple_windows()
            .take(5)
            .for_each(|(a, b)| {
                approx::assert_abs_diff_eq!(30f64.to_radians(), b - a, epsilon = 1e-12);
            });
    }

    #[test]
    fn idempotent() {
        let ring = AlignmentRing {
            radial_voltage: 1.2345,
            num_points: 101,
        };
        assert_eq!(ring.generate().unwrap(), ring.generate().unwrap());
    }

    #[rstest::rstest]
    #[case(Err(OdtDriverError::EmptyAlignmentPattern), 1.0, 0)]
    #[case(Err(OdtDriverError::NonFiniteRadialVoltage(f64::INFINITY)), f64::INFINITY, 4)]
    fn invalid(
        #[case] expect: Result<Vec<Voltage2>, OdtDriverError>,
        #[case] radial_voltage: f64,
        #[case] num_points: usize,
    ) {
        assert_eq!(
            expect,
            AlignmentRing {
                radial_voltage,
                num_points
            }
            .generate()
        );
    }
}
