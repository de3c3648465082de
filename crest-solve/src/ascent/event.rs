/// Control actions supported by the ascent driver.
pub enum Action {
    /// Stop the run early, keeping the trajectory accumulated so far.
    StopEarly,
}

/// Iteration event emitted by the ascent driver.
///
/// Events are emitted once per outer iteration, after the combined move has
/// been applied and its trajectory record appended.
pub struct Event<'a> {
    /// Outer iteration counter (1-based).
    pub iter: usize,

    /// Position after applying this iteration's move.
    pub position: &'a [f64],

    /// Objective value at `position`.
    pub value: f64,

    /// Best objective value observed so far, including this iteration.
    pub best: f64,
}
