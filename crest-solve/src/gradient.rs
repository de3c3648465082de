//! Forward finite-difference gradient estimation.

use crest_core::Objective;

use crate::{Error, evaluate};

/// Estimates the gradient of `f` at `x` with a forward difference.
///
/// Computes `f(x)` once, then perturbs each coordinate by `eps` on its own
/// copy of `x`, so `x` is never mutated and the `n + 1` evaluations are
/// independent once `f(x)` is known. The estimate is first-order accurate
/// and biased for non-quadratic objectives; the bias grows with `eps`.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if `eps` is not finite and positive,
/// [`Error::EmptyVector`] if `x` is empty, or any evaluation error.
pub fn forward_difference<F: Objective>(f: &F, x: &[f64], eps: f64) -> Result<Vec<f64>, Error> {
    if !eps.is_finite() || eps <= 0.0 {
        return Err(Error::InvalidConfig {
            reason: "eps must be finite and positive",
        });
    }
    if x.is_empty() {
        return Err(Error::EmptyVector);
    }

    let f0 = evaluate(f, x)?;

    let mut grad = Vec::with_capacity(x.len());
    let mut probe = x.to_vec();
    for i in 0..x.len() {
        probe[i] = x[i] + eps;
        grad.push((evaluate(f, &probe)? - f0) / eps);
        probe[i] = x[i];
    }

    Ok(grad)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn constant_objective_has_zero_gradient() {
        let f = |_x: &[f64]| 42.0;

        let grad = forward_difference(&f, &[1.0, -2.0, 3.0], 0.1).unwrap();

        assert_eq!(grad, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn linear_objective_recovers_coefficients_exactly() {
        // f(x) = 2 x0 - 3 x1 + 0.5 x2; the forward difference of a linear
        // function is exact for any eps.
        let f = |x: &[f64]| 2.0 * x[0] - 3.0 * x[1] + 0.5 * x[2];

        for eps in [1e-6, 1e-3, 0.25] {
            let grad = forward_difference(&f, &[1.0, 2.0, 3.0], eps).unwrap();
            assert_relative_eq!(grad[0], 2.0, epsilon = 1e-8);
            assert_relative_eq!(grad[1], -3.0, epsilon = 1e-8);
            assert_relative_eq!(grad[2], 0.5, epsilon = 1e-8);
        }
    }

    #[test]
    fn quadratic_objective_is_first_order_accurate() {
        // f(x) = -(x - 3)^2 has derivative 6 at x = 0; the forward
        // difference sees 6 - eps.
        let f = |x: &[f64]| -(x[0] - 3.0).powi(2);

        let grad = forward_difference(&f, &[0.0], 1e-3).unwrap();

        assert_relative_eq!(grad[0], 6.0 - 1e-3, epsilon = 1e-9);
    }

    #[test]
    fn empty_point_is_rejected() {
        let f = |_x: &[f64]| 0.0;
        assert!(matches!(
            forward_difference(&f, &[], 1e-3),
            Err(Error::EmptyVector)
        ));
    }

    #[test]
    fn non_positive_eps_is_rejected() {
        let f = |x: &[f64]| x[0];
        assert!(matches!(
            forward_difference(&f, &[1.0], 0.0),
            Err(Error::InvalidConfig { .. })
        ));
        assert!(matches!(
            forward_difference(&f, &[1.0], -1e-3),
            Err(Error::InvalidConfig { .. })
        ));
        assert!(matches!(
            forward_difference(&f, &[1.0], f64::NAN),
            Err(Error::InvalidConfig { .. })
        ));
    }
}
