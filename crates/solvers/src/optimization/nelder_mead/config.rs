use thiserror::Error;

/// Configuration for the Nelder–Mead solver.
///
/// The four coefficients control the candidate-generation moves relative to
/// the centroid: reflection (`alpha`), expansion (`gamma`), contraction
/// (`beta`), and shrink (`delta`). Shrinking is off by default; when enabled,
/// a failed contraction pulls every non-best vertex toward the best one
/// instead of accepting the contracted point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_evals: usize,
    alpha: f64,
    gamma: f64,
    beta: f64,
    delta: f64,
    shrink: bool,
}

/// Errors that can occur when validating a Nelder–Mead solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("alpha must be finite and greater than zero")]
    Alpha,

    #[error("gamma must be finite and greater than one")]
    Gamma,

    #[error("beta must be strictly between zero and one")]
    Beta,

    #[error("delta must be strictly between zero and one")]
    Delta,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(200, 1.0, 2.0, 0.5, 0.5).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated coefficients.
    ///
    /// Shrinking is disabled by default; enable it with [`Config::with_shrink`].
    ///
    /// # Errors
    ///
    /// Returns an error if any coefficient is outside its domain:
    /// `alpha > 0`, `gamma > 1`, `beta` and `delta` in `(0, 1)`.
    pub fn new(
        max_evals: usize,
        alpha: f64,
        gamma: f64,
        beta: f64,
        delta: f64,
    ) -> Result<Self, ConfigError> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(ConfigError::Alpha);
        }
        if !gamma.is_finite() || gamma <= 1.0 {
            return Err(ConfigError::Gamma);
        }
        if !(beta > 0.0 && beta < 1.0) {
            return Err(ConfigError::Beta);
        }
        if !(delta > 0.0 && delta < 1.0) {
            return Err(ConfigError::Delta);
        }

        Ok(Self {
            max_evals,
            alpha,
            gamma,
            beta,
            delta,
            shrink: false,
        })
    }

    /// Returns a copy of this config with shrinking enabled or disabled.
    #[must_use]
    pub fn with_shrink(mut self, enabled: bool) -> Self {
        self.shrink = enabled;
        self
    }

    /// Returns the objective evaluation budget for the driving loop.
    #[must_use]
    pub fn max_evals(&self) -> usize {
        self.max_evals
    }

    /// Returns the reflection coefficient.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the expansion coefficient.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns the contraction coefficient.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Returns the shrink coefficient.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Returns true if a failed contraction shrinks the simplex.
    #[must_use]
    pub fn shrink(&self) -> bool {
        self.shrink
    }
}
