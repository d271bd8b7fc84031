//! Configuration options for the NegaMax search
//!
//! This module defines the parameters that control the depth and the
//! comparison tolerance of the search.

use crate::{utils::DEFAULT_EPSILON, Result, SearchError};

/// Reference ply limit of the search
pub const DEFAULT_SEARCH_DEPTH: usize = 11;

/// Configuration for the NegaMax search
///
/// Use the builder methods to create a customized configuration.
///
/// # Example
///
/// ```
/// use negamax_four::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_max_depth(8)
///     .with_epsilon(1e-12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Number of plies searched from the root
    ///
    /// The search always runs to this depth unless the game ends first.
    pub max_depth: usize,

    /// Tolerance used when comparing move values
    ///
    /// Absorbs rounding noise from the logarithmic threat heuristic. Exactly
    /// equal values, including infinities, never count as an improvement.
    pub epsilon: f64,

    /// Whether to stop expanding a node once a move reaches `beta`
    ///
    /// Disabling it never changes the root value, only the number of nodes
    /// visited.
    pub beta_cutoff: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: DEFAULT_SEARCH_DEPTH,
            epsilon: DEFAULT_EPSILON,
            beta_cutoff: true,
        }
    }
}

impl SearchConfig {
    /// Sets the ply limit
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Sets the comparison tolerance
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Enables or disables beta cutoffs
    pub fn with_beta_cutoff(mut self, enabled: bool) -> Self {
        self.beta_cutoff = enabled;
        self
    }

    /// Checks that the configuration can drive a search
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(SearchError::InvalidConfiguration(
                "max_depth must be at least 1".to_string(),
            ));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(SearchError::InvalidConfiguration(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}
