use super::{Point2, Point3};

/// Axis-aligned travel limits of the scan volume \[µm\].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bounds {
    /// minimal x-value
    pub x_min: f64,
    /// maximal x-value
    pub x_max: f64,
    /// minimal y-value
    pub y_min: f64,
    /// maximal y-value
    pub y_max: f64,
    /// minimal z-value
    pub z_min: f64,
    /// maximal z-value
    pub z_max: f64,
}

impl Bounds {
    /// Creates a new [`Bounds`].
    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64, z_min: f64, z_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            z_min,
            z_max,
        }
    }

    /// Returns `true` if the in-plane position lies within the x/y limits.
    #[must_use]
    pub fn contains(&self, p: Point2) -> bool {
        (self.x_min..=self.x_max).contains(&p.x) && (self.y_min..=self.y_max).contains(&p.y)
    }

    /// Clamps an in-plane position into the x/y limits.
    #[must_use]
    pub fn clamp(&self, p: Point2) -> Point2 {
        Point2::new(p.x.clamp(self.x_min, self.x_max), p.y.clamp(self.y_min, self.y_max))
    }

    /// Clamps a full position into the limits.
    #[must_use]
    pub fn clamp3(&self, p: Point3) -> Point3 {
        Point3::new(
            p.x.clamp(self.x_min, self.x_max),
            p.y.clamp(self.y_min, self.y_max),
            p.z.clamp(self.z_min, self.z_max),
        )
    }

    /// Returns `true` if every axis satisfies `min <= max`.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.x_min <= self.x_max && self.y_min <= self.y_max && self.z_min <= self.z_max
    }

    /// Returns `true` if all six limits are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.x_min, self.x_max, self.y_min, self.y_max, self.z_min, self.z_max]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(-1e3, 1e3, -1e3, 1e3, -1e3, 1e3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(true, Point2::new(0.0, 0.0))]
    #[case(true, Point2::new(-53.0, 43.0))]
    #[case(false, Point2::new(-53.1, 0.0))]
    #[case(false, Point2::new(0.0, 43.1))]
    fn contains(#[case] expect: bool, #[case] p: Point2) {
        let bounds = Bounds::new(-53.0, 53.0, -43.0, 43.0, -1000.0, 1000.0);
        assert_eq!(expect, bounds.contains(p));
    }

    #[rstest::rstest]
    #[case(Point2::new(0.0, 0.0), Point2::new(0.0, 0.0))]
    #[case(Point2::new(53.0, -43.0), Point2::new(60.0, -50.0))]
    #[case(Point2::new(-53.0, 43.0), Point2::new(-1e6, 1e6))]
    fn clamp(#[case] expect: Point2, #[case] p: Point2) {
        let bounds = Bounds::new(-53.0, 53.0, -43.0, 43.0, -1000.0, 1000.0);
        assert_eq!(expect, bounds.clamp(p));
    }

    #[test]
    fn clamp3() {
        let bounds = Bounds::new(-53.0, 53.0, -43.0, 43.0, -1000.0, 1000.0);
        assert_eq!(
            Point3::new(53.0, 0.0, -1000.0),
            bounds.clamp3(Point3::new(100.0, 0.0, -2000.0))
        );
    }

    #[rstest::rstest]
    #[case(true, Bounds::default())]
    #[case(false, Bounds::new(1.0, -1.0, -1.0, 1.0, -1.0, 1.0))]
    #[case(false, Bounds::new(-1.0, 1.0, 1.0, -1.0, -1.0, 1.0))]
    fn is_ordered(#[case] expect: bool, #[case] bounds: Bounds) {
        assert_eq!(expect, bounds.is_ordered());
    }

    #[test]
    fn is_finite() {
        assert!(Bounds::default().is_finite());
        assert!(!Bounds::new(f64::NAN, 1.0, -1.0, 1.0, -1.0, 1.0).is_finite());
    }
}
