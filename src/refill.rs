//! Refilling exhaustion-cycle drawing.
//!
//! Draws items from a fixed pool uniformly at random, never repeating an item
//! within a round. When every item has been drawn the round is spent and the
//! next draw transparently begins a fresh round, so the selector yields items
//! forever.
//!
//! Removal from the current round uses **swap-remove**: the chosen position is
//! swapped with the last undrawn one and popped, so every draw is O(1). The
//! order of the undrawn positions carries no meaning (the next pick is uniform
//! over them), which is what makes swap-remove admissible here.
//!
//! This is the inside-out form of Fisher–Yates: instead of shuffling the whole
//! pool up front, each draw performs one shuffle step lazily. A full round is
//! therefore an unbiased uniform permutation of the pool.
//!
//! Notes:
//! - This module provides `*_with_rng` entrypoints for deterministic testing/benchmarking.

use rand::prelude::*;

use crate::SelectorError;

/// Draws from a fixed pool without repeats until the round is spent, then
/// refills and keeps going. Never runs dry.
///
/// Duplicates in the pool are distinct slots: a pool of `["a", "a", "b"]`
/// yields `"a"` twice per round.
#[derive(Debug, Clone)]
pub struct RefillingSelector<T> {
    pool: Vec<T>,
    /// Positions into `pool` not yet drawn this round.
    available: Vec<usize>,
    rounds_completed: usize,
}

impl<T> RefillingSelector<T> {
    /// Create a selector over `pool`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::EmptyPool`] if `pool` is empty.
    pub fn new(pool: Vec<T>) -> Result<Self, SelectorError> {
        if pool.is_empty() {
            return Err(SelectorError::EmptyPool);
        }
        let available = (0..pool.len()).collect();
        Ok(Self {
            pool,
            available,
            rounds_completed: 0,
        })
    }

    /// True iff every item of the current round has been drawn.
    ///
    /// The next `draw` after this returns true starts a fresh round, so this
    /// is a boundary marker, not a terminal state.
    pub fn is_exhausted(&self) -> bool {
        self.available.is_empty()
    }

    /// The full pool, in construction order.
    pub fn pool(&self) -> &[T] {
        &self.pool
    }

    /// Number of items not yet drawn in the current round.
    pub fn remaining_in_round(&self) -> usize {
        self.available.len()
    }

    /// Number of rounds fully drawn so far.
    pub fn rounds_completed(&self) -> usize {
        self.rounds_completed
    }
}

impl<T: Clone> RefillingSelector<T> {
    /// Draw one item, starting a fresh round first if the current one is spent.
    ///
    /// Never fails: construction already ruled out the empty pool.
    #[inline]
    pub fn draw(&mut self) -> T {
        let mut rng = rand::rng();
        self.draw_with_rng(&mut rng)
    }

    /// Draw one item using a caller-supplied RNG.
    ///
    /// This exists primarily for deterministic testing/benchmarking.
    pub fn draw_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> T {
        if self.available.is_empty() {
            self.available.extend(0..self.pool.len());
        }
        let i = rng.random_range(0..self.available.len());
        let pos = self.available.swap_remove(i);
        if self.available.is_empty() {
            self.rounds_completed += 1;
        }
        self.pool[pos].clone()
    }

    /// Draw `n` items.
    ///
    /// Each draw independently may start a fresh round, so for `n` larger than
    /// one round the result repeats items from the *new* round: exhaustion
    /// resets per round, not per call. `n = 0` returns an empty vector and
    /// leaves the round untouched.
    #[inline]
    pub fn draw_many(&mut self, n: usize) -> Vec<T> {
        let mut rng = rand::rng();
        self.draw_many_with_rng(n, &mut rng)
    }

    /// Draw `n` items using a caller-supplied RNG.
    pub fn draw_many_with_rng<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> Vec<T> {
        (0..n).map(|_| self.draw_with_rng(rng)).collect()
    }
}
