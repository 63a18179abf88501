//! Lotto Simulation Engine
//!
//! Plays the lottery once a week with a fixed pick until every number comes
//! up, reporting how many years each new best result took. This crate holds
//! the draw generator, the match counter and the simulation loop without any
//! console or platform concerns.

pub mod config;
pub mod constants;
pub mod draw;
pub mod matching;
pub mod number_set;
pub mod numbers;
pub mod rng;
pub mod simulation;

// Re-export commonly used types
pub use config::{ConfigError, LottoConfig};
pub use draw::{DrawSource, RngDrawSource, draw};
pub use matching::match_count;
pub use number_set::{
    NumberSet, PlayerSetBuilder, PlayerSetError, parse_player_numbers, validate_player_numbers,
};
pub use rng::{CountingRng, LottoRng, entropy_seed, seeded_rng};
pub use simulation::{
    AttemptOutcome, Milestone, Simulation, SimulationEvent, SimulationState, SimulationSummary,
};

/// Simulation wired to the standard seeded random draw stream.
pub type SeededSimulation = Simulation<RngDrawSource<CountingRng<LottoRng>>>;

/// Create a simulation whose draws are reproducible from `seed`.
///
/// # Errors
///
/// Returns `ConfigError` when the configuration cannot be simulated.
pub fn seeded_simulation(
    cfg: LottoConfig,
    player: NumberSet,
    seed: u64,
) -> Result<SeededSimulation, ConfigError> {
    Simulation::new(cfg, player, RngDrawSource::new(seeded_rng(seed)))
}
