//! Memoized pairwise significance
//!
//! Each unordered pair `{i, j}` is stored once, in the row of the smaller
//! index, keyed by the larger one. Every row has its own lock and the
//! alignment for a missing pair runs while that lock is held, so concurrent
//! lookups of the same pair never align it twice.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rustc_hash::FxHashMap;

use crate::align::{align, ScoringParams};
use crate::error::{Error, Result};
use crate::sequence::Sequence;

pub struct SimilarityCache<'a> {
    sequences: &'a [Sequence],
    params: ScoringParams,
    rows: Vec<Mutex<FxHashMap<usize, bool>>>,
    alignments: AtomicUsize,
    lookups: AtomicUsize,
}

impl<'a> SimilarityCache<'a> {
    /// `row_capacity` entries are reserved in every row up front.
    pub fn new(sequences: &'a [Sequence], params: ScoringParams, row_capacity: usize) -> Self {
        let rows = (0..sequences.len())
            .map(|_| Mutex::new(FxHashMap::with_capacity_and_hasher(row_capacity, Default::default())))
            .collect();
        Self {
            sequences,
            params,
            rows,
            alignments: AtomicUsize::new(0),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn sequences(&self) -> &'a [Sequence] {
        self.sequences
    }

    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    fn ordered(&self, i: usize, j: usize) -> Result<(usize, usize)> {
        let len = self.sequences.len();
        for index in [i, j] {
            if index >= len {
                return Err(Error::IndexOutOfRange { index, len });
            }
        }
        if i == j {
            return Err(Error::SelfPair(i));
        }
        Ok(if i < j { (i, j) } else { (j, i) })
    }

    /// Whether sequences `i` and `j` align significantly.
    ///
    /// The first lookup of a pair (in either order) aligns it with early stop;
    /// later lookups return the stored answer.
    pub fn check_significant(&self, i: usize, j: usize) -> Result<bool> {
        let (lo, hi) = self.ordered(i, j)?;
        self.lookups.fetch_add(1, Ordering::Relaxed);

        // A poisoned row still holds complete entries.
        let mut row = self.rows[lo].lock().unwrap_or_else(|e| e.into_inner());
        if let Some(&significant) = row.get(&hi) {
            return Ok(significant);
        }

        let significant = align(&self.sequences[lo], &self.sequences[hi], self.params, true).significant();
        self.alignments.fetch_add(1, Ordering::Relaxed);
        row.insert(hi, significant);
        Ok(significant)
    }

    /// Stored answer for a pair, without aligning.
    pub fn cached(&self, i: usize, j: usize) -> Option<bool> {
        let (lo, hi) = self.ordered(i, j).ok()?;
        let row = self.rows[lo].lock().unwrap_or_else(|e| e.into_inner());
        row.get(&hi).copied()
    }

    /// Alignments actually run so far.
    pub fn alignments_performed(&self) -> usize {
        self.alignments.load(Ordering::Relaxed)
    }

    /// Calls to [`SimilarityCache::check_significant`] that passed validation.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}
