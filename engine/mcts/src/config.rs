//! MCTS configuration parameters.

use crate::search::SearchError;

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone, PartialEq)]
pub struct MctsConfig {
    /// Number of playouts to run per decision.
    /// Zero is allowed, but then no move can be chosen.
    pub iterations: u32,

    /// Weight `c` of the exploration term in
    /// `score + c * sqrt(parent_visits / visits)`.
    /// Higher values spread playouts over more children, 0.0 is pure
    /// exploitation.
    pub exploration: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            exploration: 0.1,
        }
    }
}

impl MctsConfig {
    /// Create a config from the two search knobs.
    pub fn new(exploration: f64, iterations: u32) -> Self {
        Self {
            iterations,
            exploration,
        }
    }

    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            iterations: 50,
            exploration: 0.1,
        }
    }

    /// Builder pattern: set number of playouts.
    pub fn with_iterations(mut self, n: u32) -> Self {
        self.iterations = n;
        self
    }

    /// Builder pattern: set exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }

    /// Reject exploration constants that would poison every score comparison.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "exploration must be a finite non-negative number, got {}",
                self.exploration
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert_eq!(config.iterations, 1000);
        assert!((config.exploration - 0.1).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MctsConfig::default()
            .with_iterations(100)
            .with_exploration(1.5);

        assert_eq!(config.iterations, 100);
        assert!((config.exploration - 1.5).abs() < 1e-12);
        assert_eq!(config, MctsConfig::new(1.5, 100));
    }

    #[test]
    fn test_validate_rejects_bad_exploration() {
        assert!(MctsConfig::new(-0.5, 10).validate().is_err());
        assert!(MctsConfig::new(f64::NAN, 10).validate().is_err());
        assert!(MctsConfig::new(f64::INFINITY, 10).validate().is_err());
        assert!(MctsConfig::new(0.0, 0).validate().is_ok());
    }
}
