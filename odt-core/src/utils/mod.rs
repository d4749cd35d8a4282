mod linspace;
mod polynomial;

pub use linspace::linspace;
pub use polynomial::{polyval, polyval_deriv};
