//! Seeded random streams for reproducible simulations.
use hmac::{Hmac, Mac};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::Sha256;

use crate::constants::DRAW_STREAM_TAG;
use crate::numbers::scaled_index;

/// Portable generator backing every draw.
pub type LottoRng = ChaCha20Rng;

/// Build the draw stream for a user-visible seed.
#[must_use]
pub fn seeded_rng(seed: u64) -> CountingRng<LottoRng> {
    CountingRng::new(LottoRng::seed_from_u64(derive_stream_seed(
        seed,
        DRAW_STREAM_TAG,
    )))
}

/// Fresh seed for runs where the user did not supply one.
#[must_use]
pub fn entropy_seed() -> u64 {
    rand::random()
}

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(&user_seed.to_le_bytes())
        .unwrap_or_else(|_| unreachable!("HMAC accepts keys of any length"));
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let mut seed_bytes = [0u8; 8];
    seed_bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed_bytes)
}

/// Sample uniformly from `[0, 1)`.
pub fn uniform01<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    rng.r#gen::<f64>()
}

/// Uniform integer in `[min, max]`, both ends included.
///
/// Computed as `min + floor(uniform01() * (max - min + 1))`.
///
/// # Panics
///
/// Panics when `min > max`.
pub fn random_in_range<R: RngCore + ?Sized>(rng: &mut R, min: usize, max: usize) -> usize {
    assert!(min <= max, "empty range [{min}, {max}]");
    min + scaled_index(uniform01(rng), max - min + 1)
}

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl<R> CountingRng<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng, draws: 0 }
    }

    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: RngCore> RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}
