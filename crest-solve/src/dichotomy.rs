//! One-dimensional maximization by bisection on the derivative sign.

use crate::Error;

/// Maximizes `g` over a bracketed interval.
///
/// While the bracket is wider than `eps`, the solver compares `g(mid)`
/// with `g(mid + eps)`, a forward-difference probe of the derivative sign.
/// If the function is increasing at the midpoint the maximum lies to the
/// right, so the left half is discarded; otherwise the right half is. The
/// final midpoint is returned once the bracket width is within `eps`.
///
/// `g` is assumed unimodal on the bracket. On a monotone `g` the
/// derivative-sign test pushes the bracket toward one endpoint, which need
/// not be the global maximizer; that behavior is inherent to the method.
/// A zero-width bracket returns its point immediately.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if `eps` is not finite and positive,
/// or any error produced by `g`.
pub fn maximize<G>(mut g: G, bracket: [f64; 2], eps: f64) -> Result<f64, Error>
where
    G: FnMut(f64) -> Result<f64, Error>,
{
    if !eps.is_finite() || eps <= 0.0 {
        return Err(Error::InvalidConfig {
            reason: "eps must be finite and positive",
        });
    }

    let [mut lo, mut hi] = bracket;
    let mut mid = 0.5 * (lo + hi);

    while (lo - hi).abs() > eps {
        let at_mid = g(mid)?;
        let ahead = g(mid + eps)?;

        if ahead > at_mid {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }

    Ok(mid)
}
