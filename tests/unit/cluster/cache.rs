//! Unit tests for cluster/cache.rs

use gaest::align::ScoringParams;
use gaest::cluster::SimilarityCache;
use gaest::Error;
use rayon::prelude::*;

use crate::helpers::homopolymers;

#[test]
fn test_pair_aligned_once_in_either_order() {
    let seqs = homopolymers(&['C', 'G', 'A', 'T', 'C', 'A'], 80);
    let cache = SimilarityCache::new(&seqs, ScoringParams::default(), 16);

    assert!(cache.check_significant(2, 5).unwrap());
    assert!(cache.check_significant(5, 2).unwrap());
    assert_eq!(cache.alignments_performed(), 1);
    assert_eq!(cache.lookups(), 2);
    assert_eq!(cache.cached(5, 2), Some(true));
    assert_eq!(cache.cached(0, 1), None);
}

#[test]
fn test_dissimilar_pair_cached_as_false() {
    let seqs = homopolymers(&['C', 'G'], 80);
    let cache = SimilarityCache::new(&seqs, ScoringParams::default(), 0);
    assert!(!cache.check_significant(1, 0).unwrap());
    assert_eq!(cache.cached(0, 1), Some(false));
    assert!(!cache.check_significant(0, 1).unwrap());
    assert_eq!(cache.alignments_performed(), 1);
}

#[test]
fn test_rejects_bad_indices() {
    let seqs = homopolymers(&['A', 'A'], 10);
    let cache = SimilarityCache::new(&seqs, ScoringParams::default(), 2);
    assert!(matches!(
        cache.check_significant(7, 0),
        Err(Error::IndexOutOfRange { index: 7, len: 2 })
    ));
    assert!(matches!(cache.check_significant(0, 0), Err(Error::SelfPair(0))));
    assert_eq!(cache.lookups(), 0);
}

#[test]
fn test_parallel_lookups_fill_every_pair_once() {
    let seqs = homopolymers(&['A', 'C', 'A', 'G', 'A', 'C', 'T', 'A'], 60);
    let cache = SimilarityCache::new(&seqs, ScoringParams::default(), 8);
    let n = seqs.len();

    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| (0..n).filter(move |&j| j != i).map(move |j| (i, j)))
        .collect();
    let answers: Vec<bool> = pairs
        .par_iter()
        .map(|&(i, j)| cache.check_significant(i, j).unwrap())
        .collect();

    assert_eq!(cache.alignments_performed(), n * (n - 1) / 2);
    assert_eq!(cache.lookups(), pairs.len());
    for (&(i, j), &significant) in pairs.iter().zip(&answers) {
        assert_eq!(significant, seqs[i].residues() == seqs[j].residues());
    }
}
