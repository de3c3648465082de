//! Per-coordinate step search along a fixed gradient direction.

use crest_core::Objective;

use crate::{Error, dichotomy, evaluate, vector};

/// Per-coordinate step magnitude bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct StepBounds {
    min: Vec<f64>,
    max: Vec<f64>,
}

impl StepBounds {
    /// Creates bounds from per-coordinate minimum and maximum step
    /// magnitudes.
    ///
    /// `min[i] <= max[i]` is a caller contract and is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the lengths differ.
    pub fn new(min: Vec<f64>, max: Vec<f64>) -> Result<Self, Error> {
        if min.len() != max.len() {
            return Err(Error::DimensionMismatch {
                expected: min.len(),
                actual: max.len(),
            });
        }
        Ok(Self { min, max })
    }

    /// Returns the problem dimension.
    #[must_use]
    pub fn len(&self) -> usize {
        self.min.len()
    }

    /// Returns `true` if the bounds cover zero coordinates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.is_empty()
    }

    /// Returns the per-coordinate minimum step magnitudes.
    #[must_use]
    pub fn min(&self) -> &[f64] {
        &self.min
    }

    /// Returns the per-coordinate maximum step magnitudes.
    #[must_use]
    pub fn max(&self) -> &[f64] {
        &self.max
    }
}

/// Finds, one coordinate at a time, the step multiplier within bounds that
/// maximizes the objective when moving along `grad ⊙ δ` from `x`.
///
/// Coordinate `j` is searched over `[min[j], max[j]]` against the proxy
/// `g_j(r) = f(x + grad ⊙ δ)`, where `δ` holds the already-finalized steps
/// for coordinates before `j`, `r` at `j`, and the minimum-bound
/// placeholder for coordinates after `j`. Each coordinate's optimum is
/// therefore conditioned on earlier coordinates' chosen steps; the searches
/// must stay sequential, since running them concurrently changes the
/// result.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `grad` or `bounds` do not match
/// the length of `x`, [`Error::InvalidConfig`] if `eps_dycho` is not finite
/// and positive, or any evaluation error.
pub fn search_steps<F: Objective>(
    f: &F,
    x: &[f64],
    grad: &[f64],
    bounds: &StepBounds,
    eps_dycho: f64,
) -> Result<Vec<f64>, Error> {
    let n = x.len();
    if grad.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            actual: grad.len(),
        });
    }
    if bounds.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            actual: bounds.len(),
        });
    }

    let mut steps = bounds.min().to_vec();

    for j in 0..n {
        let proxy = |r: f64| {
            // Finalized steps stay in place; only coordinate j varies.
            let mut delta = steps.clone();
            delta[j] = r;
            let displacement = vector::hadamard(grad, &delta)?;
            let candidate = vector::sum(x, &displacement)?;
            evaluate(f, &candidate)
        };

        steps[j] = dichotomy::maximize(proxy, [bounds.min()[j], bounds.max()[j]], eps_dycho)?;
    }

    Ok(steps)
}
