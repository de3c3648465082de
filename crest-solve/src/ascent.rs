//! Gradient ascent with per-coordinate dichotomy step search.
//!
//! # Algorithm
//!
//! Each outer iteration estimates the gradient with a forward difference,
//! searches a step multiplier per coordinate with
//! [`coordinate::search_steps`], applies the combined move
//! `x += grad ⊙ steps` in place, and records a snapshot of the new
//! position. The run stops when the running maximum of the objective
//! plateaus within `eps_grad`, when the iteration limit is reached, or when
//! an observer stops it.
//!
//! # Stopping rule
//!
//! The plateau test compares the best value observed so far between
//! consecutive iterations, not the last two step values. This is a
//! monotonicity-based rule: the run keeps iterating through oscillating,
//! non-improving steps only while the all-time best is still moving by at
//! least `eps_grad`, and halts one iteration after it last did.
//!
//! # Observer events
//!
//! The driver emits one [`Event`] per outer iteration, after the move has
//! been applied and recorded. Observers can return [`Action::StopEarly`] to
//! halt with the trajectory accumulated so far.

mod config;
mod event;
mod solution;


pub use config::Config;
pub use event::{Action, Event};
pub use solution::{Record, Solution, Status};

use crest_core::{Objective, Observer};

use crate::{
    Error,
    coordinate::{self, StepBounds},
    evaluate, gradient, vector,
};

/// Maximizes the objective from `initial`, recording the full trajectory.
///
/// The trajectory always begins with the initial point and gains one record
/// per completed iteration, so it never holds more than `max_iters + 1`
/// records. Two runs with identical inputs produce bit-identical
/// trajectories.
///
/// # Errors
///
/// Returns an error if the config is invalid, `initial` is empty, the
/// bounds dimension does not match `initial`, or the objective fails or
/// returns a non-finite value. No partial trajectory is returned on error.
pub fn solve<F, Obs>(
    f: &F,
    initial: &[f64],
    bounds: &StepBounds,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Objective,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let n = initial.len();
    if n == 0 {
        return Err(Error::EmptyVector);
    }
    if bounds.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            actual: bounds.len(),
        });
    }

    let mut position = initial.to_vec();
    let mut trajectory = vec![Record {
        step: 0,
        position: position.clone(),
        value: evaluate(f, &position)?,
    }];

    let mut best = f64::NEG_INFINITY;

    for iter in 1..=config.max_iters {
        let grad = gradient::forward_difference(f, &position, config.eps_grad)?;
        let steps = coordinate::search_steps(f, &position, &grad, bounds, config.eps_dycho)?;

        let displacement = vector::hadamard(&grad, &steps)?;
        vector::add_in_place(&mut position, &displacement)?;

        let value = evaluate(f, &position)?;
        trajectory.push(Record {
            step: iter,
            position: position.clone(),
            value,
        });

        let previous_best = best;
        best = best.max(value);

        let event = Event {
            iter,
            position: &position,
            value,
            best,
        };
        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution {
                        status: Status::StoppedByObserver,
                        trajectory,
                        iters: iter,
                    });
                }
            }
        }

        if (best - previous_best).abs() < config.eps_grad {
            return Ok(Solution {
                status: Status::Converged,
                trajectory,
                iters: iter,
            });
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        trajectory,
        iters: config.max_iters,
    })
}

/// Runs the driver without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op
/// observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F: Objective>(
    f: &F,
    initial: &[f64],
    bounds: &StepBounds,
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, initial, bounds, config, ())
}
