//! Elementwise vector arithmetic used by the solvers.
//!
//! All operations are pure except [`add_in_place`], the one mutating
//! primitive, which the ascent driver applies exactly once per outer
//! iteration to its working vector.

use crate::Error;

fn check_lengths(expected: usize, actual: usize) -> Result<(), Error> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::DimensionMismatch { expected, actual })
    }
}

/// Elementwise sum of two equal-length vectors.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the lengths differ.
pub fn sum(u: &[f64], v: &[f64]) -> Result<Vec<f64>, Error> {
    check_lengths(u.len(), v.len())?;
    Ok(u.iter().zip(v).map(|(a, b)| a + b).collect())
}

/// Scales a vector by `k`.
#[must_use]
pub fn scale(u: &[f64], k: f64) -> Vec<f64> {
    u.iter().map(|a| a * k).collect()
}

/// Elementwise product of two equal-length vectors.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the lengths differ.
pub fn hadamard(u: &[f64], v: &[f64]) -> Result<Vec<f64>, Error> {
    check_lengths(u.len(), v.len())?;
    Ok(u.iter().zip(v).map(|(a, b)| a * b).collect())
}

/// Adds `v` into `u` elementwise.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the lengths differ.
pub fn add_in_place(u: &mut [f64], v: &[f64]) -> Result<(), Error> {
    check_lengths(u.len(), v.len())?;
    for (a, b) in u.iter_mut().zip(v) {
        *a += b;
    }
    Ok(())
}

/// Euclidean distance between two equal-length vectors.
///
/// The ascent driver never calls this; it is kept as a library helper for
/// callers comparing trajectory positions.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the lengths differ.
pub fn euclidean_distance(u: &[f64], v: &[f64]) -> Result<f64, Error> {
    check_lengths(u.len(), v.len())?;
    let squared: f64 = u.iter().zip(v).map(|(a, b)| (a - b) * (a - b)).sum();
    Ok(squared.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn sum_adds_elementwise() {
        let result = sum(&[1.0, 2.0, 3.0], &[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(result, vec![11.0, 22.0, 33.0]);
    }

    #[test]
    fn scale_multiplies_each_component() {
        assert_eq!(scale(&[1.0, -2.0, 0.5], 4.0), vec![4.0, -8.0, 2.0]);
    }

    #[test]
    fn hadamard_multiplies_elementwise() {
        let result = hadamard(&[1.0, 2.0, 3.0], &[4.0, 5.0, -6.0]).unwrap();
        assert_eq!(result, vec![4.0, 10.0, -18.0]);
    }

    #[test]
    fn add_in_place_mutates_left_operand() {
        let mut u = vec![1.0, 1.0];
        add_in_place(&mut u, &[0.5, -0.5]).unwrap();
        assert_eq!(u, vec![1.5, 0.5]);
    }

    #[test]
    fn euclidean_distance_matches_pythagoras() {
        let d = euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert!(matches!(
            sum(&[1.0], &[1.0, 2.0]),
            Err(Error::DimensionMismatch {
                expected: 1,
                actual: 2
            })
        ));
        assert!(matches!(
            hadamard(&[1.0, 2.0], &[1.0]),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(matches!(
            add_in_place(&mut [1.0], &[1.0, 2.0]),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(matches!(
            euclidean_distance(&[1.0], &[1.0, 2.0]),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
