/// Configuration for the ascent driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Bracket tolerance for each per-coordinate dichotomy search.
    pub eps_dycho: f64,

    /// Tolerance of the outer loop: both the forward-difference step used
    /// for the gradient estimate and the plateau threshold on the running
    /// maximum.
    pub eps_grad: f64,

    /// Maximum number of outer iterations. Zero yields just the initial
    /// trajectory record.
    pub max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eps_dycho: 1e-5,
            eps_grad: 1e-3,
            max_iters: 25,
        }
    }
}

impl Config {
    /// Validates that both tolerances are finite and positive.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.eps_dycho.is_finite() || self.eps_dycho <= 0.0 {
            return Err("eps_dycho must be finite and positive");
        }
        if !self.eps_grad.is_finite() || self.eps_grad <= 0.0 {
            return Err("eps_grad must be finite and positive");
        }
        Ok(())
    }
}
