/// Indicates how the driver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The running maximum plateaued within `eps_grad`.
    Converged,

    /// Reached the iteration limit without a plateau.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// One point of the ascent trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Outer iteration that produced this point; 0 is the initial point.
    pub step: usize,

    /// Position snapshot, stored independently of the driver's working
    /// vector.
    pub position: Vec<f64>,

    /// Objective value at `position`.
    pub value: f64,
}

/// The result of an ascent run.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final driver status.
    pub status: Status,

    /// Trajectory records, starting with the initial point.
    pub trajectory: Vec<Record>,

    /// Outer iteration count when the driver finished.
    pub iters: usize,
}

impl Solution {
    /// Returns the last trajectory record.
    #[must_use]
    pub fn final_record(&self) -> &Record {
        // The driver records the initial point before anything else.
        &self.trajectory[self.trajectory.len() - 1]
    }

    /// Returns the trajectory record with the highest objective value.
    #[must_use]
    pub fn best_record(&self) -> &Record {
        let mut best = &self.trajectory[0];
        for record in &self.trajectory {
            if record.value > best.value {
                best = record;
            }
        }
        best
    }
}
