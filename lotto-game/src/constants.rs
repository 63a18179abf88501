//! Centralized defaults and message templates for the lotto simulation.
//!
//! These values describe the standard game: seven numbers drawn from a pool
//! of forty, one draw per week, and a player who lives for 120 years.

// Game shape ---------------------------------------------------------------
/// Amount of numbers drawn each round (and picked by the player).
pub const DRAW_SIZE: usize = 7;
/// Upper bound of the number pool; the pool is `1..=POOL_SIZE`.
pub const POOL_SIZE: u32 = 40;
/// Weeks per year; 52 gives a crude conversion, 52.14 a more accurate one.
pub const WEEKS_PER_YEAR: f64 = 52.14;
/// Lifespan of the player in years.
pub const LIFESPAN_YEARS: u64 = 120;

// Rendering ----------------------------------------------------------------
/// Minimum width of a rendered number token.
pub const MIN_TOKEN_WIDTH: usize = 2;
/// Fill character used when left-padding number tokens.
pub const PAD_CHAR: char = '0';

// Messages -----------------------------------------------------------------
pub const MSG_WON: &str = "You won.";
pub const MSG_LIFESPAN_EXCEEDED: &str =
    "Although it took more than a lifetime, let's try it again.";
pub const LABEL_PLAYER_DRAW: &str = "User lotto:   ";
pub const LABEL_RANDOM_DRAW: &str = "Random lotto: ";

// Seeding ------------------------------------------------------------------
pub(crate) const DRAW_STREAM_TAG: &[u8] = b"lotto-draw";
