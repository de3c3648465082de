use std::convert::Infallible;

/// A black-box objective: maps a point to a scalar value.
///
/// Solvers treat the objective as opaque and call it wherever they need a
/// value. It must be deterministic, and it must return a finite value at
/// every point a solver evaluates; non-finite values are rejected at the
/// solver's evaluation boundary rather than here.
///
/// Plain closures `Fn(&[f64]) -> f64` implement `Objective` automatically
/// with `Infallible` as the error type, so most callers never implement
/// this trait by hand.
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be computed.
    fn value(&self, x: &[f64]) -> Result<f64, Self::Error>;
}

/// Blanket implementation for infallible closures.
impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    type Error = Infallible;

    fn value(&self, x: &[f64]) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sum of squares, implemented as a named type.
    struct SumOfSquares;

    impl Objective for SumOfSquares {
        type Error = Infallible;

        fn value(&self, x: &[f64]) -> Result<f64, Self::Error> {
            Ok(x.iter().map(|xi| xi * xi).sum())
        }
    }

    #[test]
    fn named_type_implements_objective() {
        let f = SumOfSquares;
        assert_eq!(f.value(&[3.0, 4.0]).unwrap(), 25.0);
    }

    #[test]
    fn closure_implements_objective() {
        let f = |x: &[f64]| x[0] + 2.0 * x[1];
        assert_eq!(f.value(&[1.0, 2.0]).unwrap(), 5.0);
    }
}
