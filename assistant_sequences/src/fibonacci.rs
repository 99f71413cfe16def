//! Memoizing Fibonacci generator.

use thiserror::Error;
use tracing::debug;

/// Largest index whose Fibonacci number fits in a `u128`.
pub const MAX_INDEX: i64 = 186;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("fib({n}) does not fit in 128 bits (largest supported index is 186)")]
    Overflow { n: i64 },
}

/// Fibonacci numbers with a per-instance cache.
///
/// `cache[i]` holds `fib(i + 2)`; the base cases 0 and 1 are never stored.
/// The cache only grows, and is filled bottom-up so no call recurses.
#[derive(Debug, Clone, Default)]
pub struct Fibonacci {
    cache: Vec<u128>,
}

impl Fibonacci {
    #[must_use]
    pub const fn new() -> Self {
        Self { cache: Vec::new() }
    }

    /// The `n`-th Fibonacci number, with `fib(n) = 0` for every `n <= 0`.
    pub fn get(&mut self, n: i64) -> Result<u128, SequenceError> {
        if n <= 0 {
            return Ok(0);
        }
        if n == 1 {
            return Ok(1);
        }
        if n > MAX_INDEX {
            return Err(SequenceError::Overflow { n });
        }

        // 2 <= n <= MAX_INDEX, so the conversion cannot fail.
        let slot = usize::try_from(n - 2).map_err(|_| SequenceError::Overflow { n })?;
        if let Some(&value) = self.cache.get(slot) {
            return Ok(value);
        }

        let before = self.cache.len();
        while self.cache.len() <= slot {
            let next = self.at(self.cache.len() + 1) + self.at(self.cache.len());
            self.cache.push(next);
        }
        debug!("fib({n}): computed {} new values", self.cache.len() - before);

        Ok(self.cache[slot])
    }

    /// Number of values this instance has computed and cached so far.
    #[must_use]
    pub const fn computed(&self) -> usize {
        self.cache.len()
    }

    /// `fib(i)` for an index already covered by the base cases or the cache.
    fn at(&self, i: usize) -> u128 {
        match i {
            0 => 0,
            1 => 1,
            _ => self.cache[i - 2],
        }
    }
}
