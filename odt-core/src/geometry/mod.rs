mod bounds;
mod voltage;

pub use bounds::*;
pub use voltage::*;

/// 2-dimensional column vector.
pub type Vector2 = nalgebra::Vector2<f64>;
/// 3-dimensional column vector.
pub type Vector3 = nalgebra::Vector3<f64>;
/// 2-dimensional point.
pub type Point2 = nalgebra::Point2<f64>;
/// 3-dimensional point.
pub type Point3 = nalgebra::Point3<f64>;
/// A 2-dimensional rotation.
pub type Rotation2 = nalgebra::Rotation2<f64>;
/// A 2-dimensional translation.
pub type Translation2 = nalgebra::Translation2<f64>;
