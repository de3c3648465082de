//! Gradient ascent with per-coordinate dichotomy step search.
//!
//! The driver in [`ascent`] maximizes a black-box [`Objective`] by
//! alternating two phases: a forward finite-difference gradient estimate
//! ([`gradient`]) and an independent per-coordinate step-size search along
//! that gradient ([`coordinate`]), each backed by bisection on the
//! derivative sign ([`dichotomy`]). The run stops once the running maximum
//! of the objective plateaus, or at the iteration limit.
//!
//! # Quick start
//!
//! ```
//! use crest_solve::{ascent, coordinate::StepBounds};
//!
//! // Maximize f(x) = -(x - 3)^2, starting at x = 0.
//! let f = |x: &[f64]| -(x[0] - 3.0).powi(2);
//! let bounds = StepBounds::new(vec![0.0], vec![1.0])?;
//!
//! let solution = ascent::solve_unobserved(&f, &[0.0], &bounds, &ascent::Config::default())?;
//! assert!((solution.final_record().position[0] - 3.0).abs() < 1e-2);
//! # Ok::<(), crest_solve::Error>(())
//! ```
//!
//! [`Objective`]: crest_core::Objective

mod error;
mod evaluate;

pub mod ascent;
pub mod coordinate;
pub mod dichotomy;
pub mod gradient;
pub mod vector;

pub use error::Error;
pub use evaluate::evaluate;
