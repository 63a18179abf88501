//! Simulation configuration and its validation rules.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DRAW_SIZE, LIFESPAN_YEARS, POOL_SIZE, WEEKS_PER_YEAR};

/// Errors raised when configuration invariants are violated.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("pool size must be positive")]
    PoolSizeZero,
    #[error("pool size {pool} is smaller than draw size {draw}")]
    PoolSmallerThanDraw { pool: u32, draw: usize },
    #[error("weeks per year must be a positive number (got {value:.2})")]
    WeeksPerYear { value: f64 },
    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

/// Parameters for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LottoConfig {
    /// Numbers drawn per round; also the size of the player's pick.
    #[serde(default = "LottoConfig::default_draw_size")]
    pub draw_size: usize,
    /// Highest number in the pool; the pool is `1..=pool_size`.
    #[serde(default = "LottoConfig::default_pool_size")]
    pub pool_size: u32,
    #[serde(default = "LottoConfig::default_weeks_per_year")]
    pub weeks_per_year: f64,
    /// Winning later than this many years restarts the simulation.
    #[serde(default = "LottoConfig::default_lifespan_years")]
    pub lifespan_years: u64,
    /// Surface every round's draw alongside the player's numbers.
    #[serde(default)]
    pub show_draws: bool,
}

impl LottoConfig {
    const fn default_draw_size() -> usize {
        DRAW_SIZE
    }

    const fn default_pool_size() -> u32 {
        POOL_SIZE
    }

    const fn default_weeks_per_year() -> f64 {
        WEEKS_PER_YEAR
    }

    const fn default_lifespan_years() -> u64 {
        LIFESPAN_YEARS
    }

    /// Parse a configuration document; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` when the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Builder-style toggle for per-round draw output.
    #[must_use]
    pub const fn with_show_draws(mut self, show_draws: bool) -> Self {
        self.show_draws = show_draws;
        self
    }

    /// Validate configuration invariants before a simulation may start.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the pool cannot supply a full draw or the
    /// year conversion factor is unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool_size == 0 {
            return Err(ConfigError::PoolSizeZero);
        }
        if usize::try_from(self.pool_size).is_ok_and(|pool| pool < self.draw_size) {
            return Err(ConfigError::PoolSmallerThanDraw {
                pool: self.pool_size,
                draw: self.draw_size,
            });
        }
        if !self.weeks_per_year.is_finite() || self.weeks_per_year <= 0.0 {
            return Err(ConfigError::WeeksPerYear {
                value: self.weeks_per_year,
            });
        }
        Ok(())
    }
}

impl Default for LottoConfig {
    fn default() -> Self {
        Self {
            draw_size: Self::default_draw_size(),
            pool_size: Self::default_pool_size(),
            weeks_per_year: Self::default_weeks_per_year(),
            lifespan_years: Self::default_lifespan_years(),
            show_draws: false,
        }
    }
}
