//! Weekly lotto simulation that runs until the player's numbers come up.
//!
//! One round is one weekly draw. Each time the best match count so far
//! strictly improves a [`Milestone`] is reported. A full match ends the
//! attempt; when it took longer than the configured lifespan the attempt is
//! thrown away and the whole simulation starts over from round zero.
use serde::Serialize;
use std::convert::Infallible;
use std::fmt;

use crate::config::{ConfigError, LottoConfig};
use crate::draw::DrawSource;
use crate::number_set::NumberSet;
use crate::numbers::years_elapsed;

/// Mutable counters for the attempt in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SimulationState {
    pub rounds_elapsed: u64,
    pub best_match_count: usize,
    /// Whole years elapsed when `best_match_count` last improved.
    pub years_at_best: u64,
}

impl SimulationState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A strict improvement of the best match count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub matches: usize,
    pub round: u64,
    pub years: u64,
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Got {} right! Took {} years", self.matches, self.years)
    }
}

/// Progress notifications handed to the caller while the loop runs.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationEvent<'a> {
    /// A round's draw; only emitted when `show_draws` is enabled.
    RoundDrawn {
        round: u64,
        player: &'a NumberSet,
        draw: &'a NumberSet,
    },
    Milestone(Milestone),
    /// The player's numbers all came up.
    Won { attempt: u32, rounds: u64, years: u64 },
    /// The win came later than the lifespan; a fresh attempt follows.
    LifespanExceeded { attempt: u32, years: u64 },
}

/// How a single attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    WithinLifespan,
    ExceededLifespan,
}

impl AttemptOutcome {
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::WithinLifespan)
    }
}

/// Statistics for a finished simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    /// Attempts played, including the final one.
    pub attempts: u32,
    /// Draws performed across every attempt.
    pub total_rounds: u64,
    /// Draws performed in the final attempt.
    pub final_rounds: u64,
    /// Years the final attempt took to win.
    pub final_years: u64,
    /// Milestones of the final attempt in the order they were reached.
    pub milestones: Vec<Milestone>,
}

/// Owns the loop state and the draw source for one simulation.
#[derive(Debug)]
pub struct Simulation<S> {
    cfg: LottoConfig,
    player: NumberSet,
    source: S,
    state: SimulationState,
    attempt: u32,
    total_rounds: u64,
    milestones: Vec<Milestone>,
}

impl<S: DrawSource> Simulation<S> {
    /// Prepare a simulation for an already validated player pick.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the configuration cannot be simulated.
    ///
    /// # Panics
    ///
    /// Panics when `player` does not have `draw_size` distinct numbers inside
    /// the pool.
    pub fn new(cfg: LottoConfig, player: NumberSet, source: S) -> Result<Self, ConfigError> {
        cfg.validate()?;
        assert_eq!(
            player.len(),
            cfg.draw_size,
            "player must pick exactly {} numbers",
            cfg.draw_size
        );
        assert!(
            player.iter().all(|value| (1..=cfg.pool_size).contains(&value)),
            "player numbers must lie within 1..={}",
            cfg.pool_size
        );
        assert!(
            player.as_slice().windows(2).all(|pair| pair[0] < pair[1]),
            "player numbers must be unique, got {player}"
        );
        Ok(Self {
            cfg,
            player,
            source,
            state: SimulationState::default(),
            attempt: 0,
            total_rounds: 0,
            milestones: Vec::new(),
        })
    }

    #[must_use]
    pub const fn config(&self) -> &LottoConfig {
        &self.cfg
    }

    #[must_use]
    pub const fn player(&self) -> &NumberSet {
        &self.player
    }

    #[must_use]
    pub const fn state(&self) -> &SimulationState {
        &self.state
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Play rounds from a fresh state until every number matches.
    pub fn run_attempt<O>(&mut self, observer: &mut O) -> AttemptOutcome
    where
        O: FnMut(&SimulationEvent<'_>),
    {
        let result = self.try_run_attempt(&mut |event: &SimulationEvent<'_>| {
            observer(event);
            Ok::<(), Infallible>(())
        });
        match result {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        }
    }

    /// Like [`Self::run_attempt`], but stops at the first observer error.
    ///
    /// # Errors
    ///
    /// Returns the observer's error; the attempt is left unfinished.
    pub fn try_run_attempt<O, E>(&mut self, observer: &mut O) -> Result<AttemptOutcome, E>
    where
        O: FnMut(&SimulationEvent<'_>) -> Result<(), E>,
    {
        self.attempt = self.attempt.saturating_add(1);
        self.state.reset();
        self.milestones.clear();
        log::debug!("attempt {} started", self.attempt);

        while self.state.best_match_count < self.cfg.draw_size {
            let draw = self
                .source
                .next_draw(self.cfg.pool_size, self.cfg.draw_size);
            self.state.rounds_elapsed += 1;
            self.total_rounds += 1;
            let round = self.state.rounds_elapsed;

            if self.cfg.show_draws {
                observer(&SimulationEvent::RoundDrawn {
                    round,
                    player: &self.player,
                    draw: &draw,
                })?;
            }

            let matches = self.player.matches(&draw);
            if matches > self.state.best_match_count {
                let years = years_elapsed(round, self.cfg.weeks_per_year);
                self.state.best_match_count = matches;
                self.state.years_at_best = years;
                let milestone = Milestone {
                    matches,
                    round,
                    years,
                };
                log::debug!("{matches} matches after {round} rounds ({years} years)");
                self.milestones.push(milestone);
                observer(&SimulationEvent::Milestone(milestone))?;
            }
        }

        let years = self.state.years_at_best;
        log::info!(
            "attempt {} won after {} rounds ({years} years)",
            self.attempt,
            self.state.rounds_elapsed
        );
        observer(&SimulationEvent::Won {
            attempt: self.attempt,
            rounds: self.state.rounds_elapsed,
            years,
        })?;

        if years > self.cfg.lifespan_years {
            log::info!(
                "win took {years} years, longer than the {} year lifespan; restarting",
                self.cfg.lifespan_years
            );
            observer(&SimulationEvent::LifespanExceeded {
                attempt: self.attempt,
                years,
            })?;
            Ok(AttemptOutcome::ExceededLifespan)
        } else {
            Ok(AttemptOutcome::WithinLifespan)
        }
    }

    /// Keep playing attempts until one wins within the lifespan.
    pub fn run<O>(&mut self, mut observer: O) -> SimulationSummary
    where
        O: FnMut(&SimulationEvent<'_>),
    {
        while !self.run_attempt(&mut observer).is_final() {}
        self.summary()
    }

    /// Like [`Self::run`], but gives up as soon as the observer fails.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `observer`.
    pub fn try_run<O, E>(&mut self, mut observer: O) -> Result<SimulationSummary, E>
    where
        O: FnMut(&SimulationEvent<'_>) -> Result<(), E>,
    {
        while !self.try_run_attempt(&mut observer)?.is_final() {}
        Ok(self.summary())
    }

    /// Statistics for the most recent attempt and totals so far.
    #[must_use]
    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            attempts: self.attempt,
            total_rounds: self.total_rounds,
            final_rounds: self.state.rounds_elapsed,
            final_years: self.state.years_at_best,
            milestones: self.milestones.clone(),
        }
    }
}
