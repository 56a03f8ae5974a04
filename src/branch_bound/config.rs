//! Branch-and-bound configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the branch-and-bound solver.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tspexact::branch_bound::BnbConfig;
///
/// let config = BnbConfig::default().with_time_limit(Duration::from_secs(5));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BnbConfig {
    /// Wall-clock budget for the search.
    ///
    /// The deadline is polled between child examinations, so an in-flight
    /// expansion always completes before the limit is honored. When the
    /// limit fires the best tour found so far is returned with status
    /// [`TimeLimit`](super::SolveStatus::TimeLimit).
    pub time_limit: Duration,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(60),
        }
    }
}

impl BnbConfig {
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.time_limit.is_zero() {
            return Err("time_limit must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BnbConfig::default();
        assert_eq!(config.time_limit, Duration::from_secs(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_time_limit() {
        let config = BnbConfig::default().with_time_limit(Duration::from_millis(250));
        assert_eq!(config.time_limit, Duration::from_millis(250));
    }

    #[test]
    fn test_validate_zero_limit() {
        let config = BnbConfig::default().with_time_limit(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
