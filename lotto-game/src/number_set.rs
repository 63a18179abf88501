//! Sorted sets of lotto numbers and validation of the player's pick.
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

use crate::config::LottoConfig;
use crate::constants::{MIN_TOKEN_WIDTH, PAD_CHAR};
use crate::matching::match_count;
use crate::numbers::pad_tokens;

/// Inline capacity covering the standard seven-number game.
type Numbers = SmallVec<[u32; 8]>;

/// Ascending sequence of lotto numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NumberSet(Numbers);

impl NumberSet {
    #[must_use]
    pub fn empty() -> Self {
        Self(Numbers::new())
    }

    /// Sort the given values ascending.
    #[must_use]
    pub fn from_unsorted(values: impl IntoIterator<Item = u32>) -> Self {
        let mut numbers: Numbers = values.into_iter().collect();
        numbers.sort_unstable();
        Self(numbers)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// Amount of numbers shared with another set.
    #[must_use]
    pub fn matches(&self, other: &Self) -> usize {
        match_count(self.as_slice(), other.as_slice())
    }

    /// Zero-padded tokens, at least two characters wide.
    #[must_use]
    pub fn padded_tokens(&self) -> Vec<String> {
        pad_tokens(self.as_slice(), PAD_CHAR, MIN_TOKEN_WIDTH)
    }
}

impl fmt::Display for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.padded_tokens().join(", "))
    }
}

/// Reasons a player's pick is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlayerSetError {
    #[error("expected {expected} numbers, got {actual}")]
    WrongCount { expected: usize, actual: usize },
    #[error("{value} is not between 1 and {max}")]
    OutOfRange { value: i64, max: u32 },
    #[error("{value} was already picked")]
    Duplicate { value: u32 },
    #[error("'{token}' is not a number")]
    NotANumber { token: String },
}

/// Validate a complete pick against the configured draw and pool sizes.
///
/// # Errors
///
/// Returns `PlayerSetError` for a wrong amount of numbers, a value outside
/// `1..=pool_size`, or a repeated value.
pub fn validate_player_numbers(
    values: &[i64],
    cfg: &LottoConfig,
) -> Result<NumberSet, PlayerSetError> {
    if values.len() != cfg.draw_size {
        return Err(PlayerSetError::WrongCount {
            expected: cfg.draw_size,
            actual: values.len(),
        });
    }
    let mut builder = PlayerSetBuilder::new(cfg);
    for &value in values {
        builder.try_push(value)?;
    }
    builder.finish()
}

/// Parse and validate command-line style tokens.
///
/// # Errors
///
/// Returns `PlayerSetError::NotANumber` for unparsable tokens, otherwise the
/// same errors as [`validate_player_numbers`].
pub fn parse_player_numbers<S: AsRef<str>>(
    tokens: &[S],
    cfg: &LottoConfig,
) -> Result<NumberSet, PlayerSetError> {
    let values = tokens
        .iter()
        .map(|token| {
            let token = token.as_ref().trim();
            token.parse::<i64>().map_err(|_| PlayerSetError::NotANumber {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    validate_player_numbers(&values, cfg)
}

/// Incremental validation for picks gathered one number at a time.
#[derive(Debug, Clone)]
pub struct PlayerSetBuilder {
    pool_size: u32,
    target: usize,
    picked: Vec<u32>,
}

impl PlayerSetBuilder {
    #[must_use]
    pub fn new(cfg: &LottoConfig) -> Self {
        Self {
            pool_size: cfg.pool_size,
            target: cfg.draw_size,
            picked: Vec::with_capacity(cfg.draw_size),
        }
    }

    /// Accept one more number.
    ///
    /// # Errors
    ///
    /// Rejects values outside the pool, repeats, and pushes past the
    /// configured draw size. A rejected value leaves the builder unchanged.
    pub fn try_push(&mut self, value: i64) -> Result<(), PlayerSetError> {
        if self.is_complete() {
            return Err(PlayerSetError::WrongCount {
                expected: self.target,
                actual: self.picked.len() + 1,
            });
        }
        let number = u32::try_from(value)
            .ok()
            .filter(|number| (1..=self.pool_size).contains(number))
            .ok_or(PlayerSetError::OutOfRange {
                value,
                max: self.pool_size,
            })?;
        if self.picked.contains(&number) {
            return Err(PlayerSetError::Duplicate { value: number });
        }
        self.picked.push(number);
        Ok(())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.target.saturating_sub(self.picked.len())
    }

    /// Sort the pick into a `NumberSet`.
    ///
    /// # Errors
    ///
    /// Returns `PlayerSetError::WrongCount` when numbers are still missing.
    pub fn finish(self) -> Result<NumberSet, PlayerSetError> {
        if !self.is_complete() {
            return Err(PlayerSetError::WrongCount {
                expected: self.target,
                actual: self.picked.len(),
            });
        }
        Ok(NumberSet::from_unsorted(self.picked))
    }
}
