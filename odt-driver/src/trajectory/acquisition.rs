use odt_core::{common::PI, geometry::Voltage2, utils::linspace};

use crate::error::OdtDriverError;

/// The minimum number of points of an acquisition trajectory.
///
/// Below this density the disk-filling pattern is not well-defined and an
/// empty trajectory is generated instead.
pub const ACQUISITION_POINTS_MIN: usize = 10;

/// A disk-filling trajectory for tomographic acquisition.
///
/// The requested point count is split into three segments: an inbound spiral from the
/// rim to the center, an outbound spiral phase-flipped so the two arms
/// interleave, and a closing ring at full radius. The spiral radius law
/// `r(θ) = √θ` keeps the areal sample density over the disk near uniform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AcquisitionSpiral {
    /// The disk radius in voltage space \[V\].
    pub radial_voltage: f64,
    /// The requested number of samples.
    pub num_points: usize,
}

impl AcquisitionSpiral {
    /// Samples the trajectory.
    ///
    /// Requests below [`ACQUISITION_POINTS_MIN`] points produce an empty
    /// trajectory; callers must check for emptiness before starting a sweep.
    /// No sample exceeds `radial_voltage` in magnitude. The result is
    /// deterministic for identical inputs.
    pub fn generate(&self) -> Result<Vec<Voltage2>, OdtDriverError> {
        if !self.radial_voltage.is_finite() {
            return Err(OdtDriverError::NonFiniteRadialVoltage(self.radial_voltage));
        }
        if self.num_points < ACQUISITION_POINTS_MIN {
            return Ok(Vec::new());
        }

        let r = self.radial_voltage;
        let norm = (2.0 * PI).sqrt();
        let n3 = self.num_points / 3;
        let mut voltages = Vec::with_capacity(self.num_points);

        // inbound spiral, rim to center; the starting endpoint is dropped
        let mut theta = linspace(2.0 * PI, 0.0, n3);
        theta.remove(0);
        voltages.extend(theta.iter().map(|&t| {
            let radius = t.abs().sqrt();
            Voltage2::new(r * radius * t.cos() / norm, r * radius * t.sin() / norm)
        }));

        // outbound spiral, sign-flipped so the arms interleave instead of
        // retracing; both endpoints are dropped
        let mut theta = linspace(0.0, 2.0 * PI, n3);
        theta.remove(0);
        theta.pop();
        voltages.extend(theta.iter().map(|&t| {
            let radius = t.abs().sqrt();
            Voltage2::new(-r * radius * t.cos() / norm, -r * radius * t.sin() / norm)
        }));

        // closing ring at full radius; its angular span is re-derived from the
        // second-to-last sample of a first [0, 2π] pass of the same count
        let count = self.num_points - 2 * n3 + 3;
        let theta = linspace(0.0, 2.0 * PI, count);
        let theta = linspace(0.0, theta[theta.len() - 2], count);
        voltages.extend(
            theta
                .iter()
                .map(|&t| Voltage2::new(-r * t.cos(), -r * t.sin())),
        );

        Ok(voltages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(0)]
    #[case(1)]
    #[case(5)]
    #[case(9)]
    fn below_minimum(#[case] n: usize) {
        let spiral = AcquisitionSpiral {
            radial_voltage: 1.0,
            num_points: n,
        };
        assert_eq!(Vec::<Voltage2>::new(), spiral.generate().unwrap());
    }

    #[rstest::rstest]
    #[case(10)]
    #[case(11)]
    #[case(12)]
    #[case(100)]
    #[case(151)]
    #[case(500)]
    fn realized_count(#[case] n: usize) {
        let spiral = AcquisitionSpiral {
            radial_voltage: 1.0,
            num_points: n,
        };
        assert_eq!(n, spiral.generate().unwrap().len());
    }

    #[rstest::rstest]
    #[case(0.5)]
    #[case(1.0)]
    #[case(2.5)]
    fn bounded_by_radius(#[case] r: f64) {
        let spiral = AcquisitionSpiral {
            radial_voltage: r,
            num_points: 200,
        };
        spiral.generate().unwrap().iter().for_each(|v| {
            assert!(v.norm() <= r + 1e-12, "|{:?}| > {}", v, r);
        });
    }

    #[test]
    fn segments() {
        let spiral = AcquisitionSpiral {
            radial_voltage: 1.0,
            num_points: 12,
        };
        let voltages = spiral.generate().unwrap();
        assert_eq!(12, voltages.len());

        // inbound spiral starts one step in from the rim and ends at the center
        approx::assert_abs_diff_eq!(-0.4082482905, voltages[0].ux, epsilon = 1e-9);
        approx::assert_abs_diff_eq!(-0.7071067812, voltages[0].uy, epsilon = 1e-9);
        approx::assert_abs_diff_eq!(0.0, voltages[2].norm(), epsilon = 1e-12);

        // outbound spiral is the sign-flipped mirror
        approx::assert_abs_diff_eq!(0.2886751346, voltages[3].ux, epsilon = 1e-9);
        approx::assert_abs_diff_eq!(-0.5, voltages[3].uy, epsilon = 1e-9);

        // closing ring runs at full radius from θ = 0 over the re-derived span
        approx::assert_abs_diff_eq!(-1.0, voltages[5].ux, epsilon = 1e-12);
        approx::assert_abs_diff_eq!(0.0, voltages[5].uy, epsilon = 1e-12);
        approx::assert_abs_diff_eq!(-0.5, voltages[11].ux, epsilon = 1e-9);
        approx::assert_abs_diff_eq!(0.8660254038, voltages[11].uy, epsilon = 1e-9);
    }

    #[test]
    fn idempotent() {
        let spiral = AcquisitionSpiral {
            radial_voltage: 0.731,
            num_points: 157,
        };
        assert_eq!(spiral.generate().unwrap(), spiral.generate().unwrap());
    }

    #[test]
    fn non_finite_radius() {
        assert_eq!(
            Err(OdtDriverError::NonFiniteRadialVoltage(f64::NEG_INFINITY)),
            AcquisitionSpiral {
                radial_voltage: f64::NEG_INFINITY,
                num_points: 100
            }
            .generate()
        );
    }
}
