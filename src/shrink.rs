//! Shrinking one-pass drawing.
//!
//! Draws items from a pool uniformly at random, removing each drawn item
//! permanently. The pool only ever shrinks: once an item is out it is never
//! reconsidered, and a dry selector stays dry.
//!
//! This is the variant for “reveal and never reset” flows, e.g. hiding one
//! more word per step of a memorization drill until none remain. For an
//! endless rotation over the same pool, use
//! [`RefillingSelector`](crate::RefillingSelector) instead.
//!
//! Items are handed out by value (no `Clone` bound): the selector consumes
//! its pool. Removal is swap-remove, so every draw is O(1).

use rand::prelude::*;

use crate::SelectorError;

/// Draws from a pool without repeats, removing drawn items permanently.
/// Runs dry instead of refilling.
#[derive(Debug, Clone)]
pub struct ShrinkingSelector<T> {
    remaining: Vec<T>,
}

impl<T> ShrinkingSelector<T> {
    /// Create a selector over `pool`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::EmptyPool`] if `pool` is empty.
    pub fn new(pool: Vec<T>) -> Result<Self, SelectorError> {
        if pool.is_empty() {
            return Err(SelectorError::EmptyPool);
        }
        Ok(Self { remaining: pool })
    }

    /// Draw one item, or `None` if the pool has run dry.
    #[inline]
    pub fn draw(&mut self) -> Option<T> {
        let mut rng = rand::rng();
        self.draw_with_rng(&mut rng)
    }

    /// Draw one item using a caller-supplied RNG.
    ///
    /// This exists primarily for deterministic testing/benchmarking.
    pub fn draw_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<T> {
        if self.remaining.is_empty() {
            return None;
        }
        let i = rng.random_range(0..self.remaining.len());
        Some(self.remaining.swap_remove(i))
    }

    /// Draw up to `n` items; the result is clamped to the remaining count.
    #[inline]
    pub fn draw_many(&mut self, n: usize) -> Vec<T> {
        let mut rng = rand::rng();
        self.draw_many_with_rng(n, &mut rng)
    }

    /// Draw up to `n` items using a caller-supplied RNG.
    pub fn draw_many_with_rng<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> Vec<T> {
        let take = n.min(self.remaining.len());
        (0..take)
            .filter_map(|_| self.draw_with_rng(rng))
            .collect()
    }

    /// Number of items not yet drawn.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// True iff every item has been drawn.
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// The undrawn items. Order is unspecified (scrambled by removal).
    pub fn remaining_items(&self) -> &[T] {
        &self.remaining
    }
}
