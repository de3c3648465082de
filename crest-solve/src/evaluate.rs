use crest_core::Objective;

use crate::Error;

/// Evaluates the objective at `x`, rejecting non-finite values.
///
/// Every solver evaluation goes through this seam, so a NaN or infinite
/// objective value aborts the run instead of silently corrupting all
/// downstream arithmetic.
///
/// # Errors
///
/// Returns [`Error::Objective`] if the objective fails, or
/// [`Error::NonFiniteObjective`] if it returns NaN or an infinity.
pub fn evaluate<F: Objective>(f: &F, x: &[f64]) -> Result<f64, Error> {
    let value = f.value(x).map_err(|e| Error::Objective(Box::new(e)))?;

    if !value.is_finite() {
        return Err(Error::NonFiniteObjective {
            x: x.to_vec(),
            value,
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use thiserror::Error;

    #[test]
    fn passes_finite_values_through() {
        let f = |x: &[f64]| x[0] * 2.0;
        assert_eq!(evaluate(&f, &[4.0]).unwrap(), 8.0);
    }

    #[test]
    fn rejects_nan() {
        let f = |_x: &[f64]| f64::NAN;
        let result = evaluate(&f, &[1.0]);
        assert!(matches!(result, Err(Error::NonFiniteObjective { .. })));
    }

    #[test]
    fn rejects_infinity() {
        let f = |_x: &[f64]| f64::INFINITY;
        let result = evaluate(&f, &[1.0]);
        assert!(matches!(result, Err(Error::NonFiniteObjective { .. })));
    }

    #[derive(Debug, Error)]
    #[error("objective refused x = {x}")]
    struct RefusedError {
        x: f64,
    }

    /// Objective that fails for negative inputs.
    struct Refusing;

    impl Objective for Refusing {
        type Error = RefusedError;

        fn value(&self, x: &[f64]) -> Result<f64, Self::Error> {
            if x[0] < 0.0 {
                Err(RefusedError { x: x[0] })
            } else {
                Ok(x[0])
            }
        }
    }

    #[test]
    fn boxes_objective_failures() {
        let result = evaluate(&Refusing, &[-1.0]);
        assert!(matches!(result, Err(Error::Objective(_))));
    }
}
