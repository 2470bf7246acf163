//! Memoized Fibonacci terms
//!
//! [`FibonacciCache`] owns a dense, append-only table of terms seeded with
//! `F(0) = 0` and `F(1) = 1`. Each index is computed at most once over the
//! cache's lifetime; any index at or below the highest computed one is a
//! table lookup.
//!
//! The cache takes `&mut self`, so sharing it across threads requires an
//! explicit lock. [`SharedFibonacci`] is that lock: one mutex held for the
//! whole get-or-compute sequence of a call.
//!
//! Terms are `u64`; `F(93)` is the largest that fits. Asking for a higher
//! index fails with an overflow error, and every term computed before the
//! overflow stays cached.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{AlgoError, AlgoResult};

/// Hit/miss counters for a cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Calls answered straight from the table.
    pub hits: u64,
    /// Calls that had to extend the table.
    pub misses: u64,
    /// Terms derived by the recurrence, seeds excluded.
    pub computed: u64,
    /// Terms currently cached, seeds included.
    pub len: usize,
}

/// Owned, unsynchronized memo table.
#[derive(Debug, Clone)]
pub struct FibonacciCache {
    terms: Vec<u64>,
    hits: u64,
    misses: u64,
    computed: u64,
}

impl Default for FibonacciCache {
    fn default() -> Self {
        Self::new()
    }
}

impl FibonacciCache {
    /// A cache holding only the seeds.
    pub fn new() -> Self {
        Self {
            terms: vec![0, 1],
            hits: 0,
            misses: 0,
            computed: 0,
        }
    }

    /// Return `F(n)`, extending the table as needed.
    ///
    /// Fails with an invalid-input error for negative `n` and an overflow
    /// error when a term exceeds `u64`.
    pub fn compute_nth_term(&mut self, n: i64) -> AlgoResult<u64> {
        if n < 0 {
            return Err(AlgoError::NegativeIndex(n));
        }
        let index =
            usize::try_from(n).map_err(|_| AlgoError::FibonacciOverflow { index: usize::MAX })?;

        if let Some(&value) = self.terms.get(index) {
            self.hits += 1;
            trace!(index, "Fibonacci cache hit");
            return Ok(value);
        }

        self.misses += 1;
        debug!(from = self.terms.len(), to = index, "Extending Fibonacci cache");
        while self.terms.len() <= index {
            let k = self.terms.len();
            let next = self.terms[k - 1]
                .checked_add(self.terms[k - 2])
                .ok_or(AlgoError::FibonacciOverflow { index: k })?;
            self.terms.push(next);
            self.computed += 1;
        }
        Ok(self.terms[index])
    }

    /// Cached `F(n)` without computing anything.
    pub fn get(&self, n: usize) -> Option<u64> {
        self.terms.get(n).copied()
    }

    /// Number of cached terms, seeds included.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always false; the seeds are never removed.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            computed: self.computed,
            len: self.terms.len(),
        }
    }
}

/// Thread-safe handle to a [`FibonacciCache`].
///
/// Clones share the same table. A poisoned lock is recovered: the table is
/// append-only and every pushed term is complete, so it is never left
/// half-written.
#[derive(Debug, Clone, Default)]
pub struct SharedFibonacci {
    inner: Arc<Mutex<FibonacciCache>>,
}

impl SharedFibonacci {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing cache, keeping its terms and counters.
    pub fn from_cache(cache: FibonacciCache) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Return `F(n)`, holding the lock for the full lookup-or-extend.
    pub fn compute_nth_term(&self, n: i64) -> AlgoResult<u64> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .compute_nth_term(n)
    }

    pub fn stats(&self) -> CacheStats {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .stats()
    }
}

/// The first `terms` Fibonacci numbers, built left to right from the previous two.
pub fn fibonacci_sequence(terms: usize) -> AlgoResult<Vec<u64>> {
    let mut out: Vec<u64> = Vec::with_capacity(terms.min(94));
    for index in 0..terms {
        let value = match index {
            0 => 0,
            1 => 1,
            _ => out[index - 1]
                .checked_add(out[index - 2])
                .ok_or(AlgoError::FibonacciOverflow { index })?,
        };
        out.push(value);
    }
    Ok(out)
}
