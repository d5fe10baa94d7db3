//! Test utilities and helpers for unit tests
//!
//! - sequence fixtures built from homopolymers, which never align across
//!   different letters
//! - seeded random DNA

use gaest::sequence::Sequence;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One sequence per letter, each `len` copies of that letter.
pub fn homopolymers(letters: &[char], len: usize) -> Vec<Sequence> {
    letters
        .iter()
        .enumerate()
        .map(|(i, &c)| Sequence::new(format!("est_{}", i), &c.to_string().repeat(len)))
        .collect()
}

/// Random unambiguous DNA from a fixed seed.
pub fn random_dna(seed: u64, len: usize) -> String {
    const BASES: [char; 4] = ['A', 'C', 'G', 'T'];
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| BASES[rng.gen_range(0..4)]).collect()
}

/// Random sequence with occasional ambiguity codes.
pub fn random_iupac(seed: u64, len: usize) -> String {
    const CODES: &[u8] = b"ACGTACGTACGTRYKMSWBDHVN";
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| CODES[rng.gen_range(0..CODES.len())] as char)
        .collect()
}
