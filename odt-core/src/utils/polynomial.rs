/// Evaluates a polynomial with coefficients in descending-degree order.
#[must_use]
pub fn polyval(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Evaluates the first derivative of a polynomial with coefficients in
/// descending-degree order.
#[must_use]
pub fn polyval_deriv(coefficients: &[f64], x: f64) -> f64 {
    let degree = coefficients.len().saturating_sub(1);
    coefficients
        .iter()
        .take(degree)
        .enumerate()
        .fold(0.0, |acc, (i, &c)| acc * x + c * (degree - i) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(0.0, &[], 1.0)]
    #[case(3.0, &[3.0], 100.0)]
    #[case(7.0, &[2.0, 1.0], 3.0)]
    #[case(1.0, &[1.0, 0.0, 0.0], -1.0)]
    #[case(57.0, &[1.0, -2.0, 3.0, -4.0, 5.0], -2.0)]
    fn eval(#[case] expect: f64, #[case] coefficients: &[f64], #[case] x: f64) {
        approx::assert_abs_diff_eq!(expect, polyval(coefficients, x));
    }

    #[rstest::rstest]
    #[case(0.0, &[3.0], 100.0)]
    #[case(2.0, &[2.0, 1.0], 3.0)]
    #[case(-2.0, &[1.0, 0.0, 0.0], -1.0)]
    #[case(-72.0, &[1.0, -2.0, 3.0, -4.0, 5.0], -2.0)]
    fn deriv(#[case] expect: f64, #[case] coefficients: &[f64], #[case] x: f64) {
        approx::assert_abs_diff_eq!(expect, polyval_deriv(coefficients, x));
    }
}
