//! Drawing lotto numbers without replacement.
use rand::RngCore;

use crate::number_set::NumberSet;
use crate::rng::random_in_range;

/// Draw `count` distinct numbers from `1..=pool_size`, sorted ascending.
///
/// A random slot in the still-active part of the pool is picked, its value
/// emitted, and the slot refilled with the last active value before the
/// active range shrinks by one. Picked values can therefore never repeat.
/// Drawing zero numbers does not touch the generator.
///
/// # Panics
///
/// Panics when `pool_size` is zero or smaller than `count`.
pub fn draw<R: RngCore + ?Sized>(rng: &mut R, pool_size: u32, count: usize) -> NumberSet {
    assert!(pool_size > 0, "pool size must be positive");
    let pool_len = usize::try_from(pool_size).unwrap_or(usize::MAX);
    assert!(
        count <= pool_len,
        "cannot draw {count} numbers from a pool of {pool_size}"
    );
    if count == 0 {
        return NumberSet::empty();
    }

    let mut pool: Vec<u32> = (1..=pool_size).collect();
    let mut picked = Vec::with_capacity(count);
    for taken in 0..count {
        let last = pool_len - 1 - taken;
        let position = random_in_range(rng, 0, last);
        picked.push(pool[position]);
        pool[position] = pool[last];
    }
    NumberSet::from_unsorted(picked)
}

/// Supplier of one draw per simulated round.
pub trait DrawSource {
    /// Produce the next draw of `count` numbers from `1..=pool_size`.
    fn next_draw(&mut self, pool_size: u32, count: usize) -> NumberSet;
}

/// Draw source backed by a random generator.
#[derive(Debug, Clone)]
pub struct RngDrawSource<R> {
    rng: R,
}

impl<R: RngCore> RngDrawSource<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    #[must_use]
    pub const fn rng(&self) -> &R {
        &self.rng
    }
}

impl<R: RngCore> DrawSource for RngDrawSource<R> {
    fn next_draw(&mut self, pool_size: u32, count: usize) -> NumberSet {
        draw(&mut self.rng, pool_size, count)
    }
}

impl<S: DrawSource + ?Sized> DrawSource for &mut S {
    fn next_draw(&mut self, pool_size: u32, count: usize) -> NumberSet {
        (**self).next_draw(pool_size, count)
    }
}
