//! Transposition cache for search results.
//!
//! Maps a position fingerprint to the last result stored for it. There is
//! no bucket replacement and no eviction: every store overwrites, and the
//! map only shrinks when [`TranspositionCache::clear`] is called. The cache
//! is a performance aid; a miss or a colliding entry only costs work.

use std::collections::HashMap;

use crate::evaluation::Score;
use crate::zobrist::Fingerprint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

impl BoundType {
    /// Classify a search result against the window it was searched with.
    #[must_use]
    pub fn classify(value: Score, alpha: Score, beta: Score) -> Self {
        if value <= alpha {
            BoundType::UpperBound
        } else if value >= beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheEntry {
    pub depth: u32,
    pub value: Score,
    pub bound: BoundType,
}

/// Fingerprint-keyed store of bounded search results.
///
/// Not synchronized: one search at a time per cache.
#[derive(Debug)]
pub struct TranspositionCache {
    entries: HashMap<Fingerprint, CacheEntry>,
    probing: bool,
}

impl TranspositionCache {
    #[must_use]
    pub fn new() -> Self {
        TranspositionCache {
            entries: HashMap::new(),
            probing: true,
        }
    }

    /// A cache whose `probe` always misses. Stores are still recorded.
    #[must_use]
    pub fn without_probing() -> Self {
        TranspositionCache {
            entries: HashMap::new(),
            probing: false,
        }
    }

    pub fn set_probing(&mut self, probing: bool) {
        self.probing = probing;
    }

    #[must_use]
    pub fn is_probing(&self) -> bool {
        self.probing
    }

    /// Look up a cutoff value for a node searched to `depth` with window
    /// `(alpha, beta)`.
    ///
    /// Only entries searched at least as deep are usable. Exact entries return
    /// their value; an upper bound at or below `alpha` returns `alpha`; a lower
    /// bound at or above `beta` returns `beta`. Anything else is a miss.
    #[must_use]
    pub fn probe(
        &self,
        fingerprint: Fingerprint,
        depth: u32,
        alpha: Score,
        beta: Score,
    ) -> Option<Score> {
        if !self.probing {
            return None;
        }
        let entry = self.entries.get(&fingerprint)?;
        if entry.depth < depth {
            return None;
        }
        match entry.bound {
            BoundType::Exact => Some(entry.value),
            BoundType::UpperBound if entry.value <= alpha => Some(alpha),
            BoundType::LowerBound if entry.value >= beta => Some(beta),
            _ => None,
        }
    }

    /// Record a node's result, classified against the window it was searched
    /// with. Always replaces any previous entry for the fingerprint.
    pub fn store(
        &mut self,
        fingerprint: Fingerprint,
        depth: u32,
        value: Score,
        alpha: Score,
        beta: Score,
    ) {
        let entry = CacheEntry {
            depth,
            value,
            bound: BoundType::classify(value, alpha, beta),
        };
        self.entries.insert(fingerprint, entry);
    }

    /// Raw entry access, ignoring the probing switch.
    #[must_use]
    pub fn entry(&self, fingerprint: Fingerprint) -> Option<&CacheEntry> {
        self.entries.get(&fingerprint)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries from the table.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for TranspositionCache {
    fn default() -> Self {
        Self::new()
    }
}
