//! Extended IUPAC nucleotide alphabet
//!
//! Fifteen symbols: the four bases, the six two-fold ambiguity codes, the four
//! three-fold codes and `N`. Character conversion goes through a 256-entry
//! lookup table; anything outside the alphabet maps to `None`.
//!
//! # Match strength
//! `match_strength(a, b)` is the probability that two draws from the sets
//! denoted by `a` and `b` name the same base, restricted to the values below:
//!
//! | pair                                         | strength |
//! |----------------------------------------------|----------|
//! | base with itself                             | 1        |
//! | base with a 2-fold code containing it        | 1/2      |
//! | 2-fold code with itself                      | 1/2      |
//! | base with a 3-fold code containing it        | 1/3      |
//! | 2-fold code with a 3-fold code containing it | 1/3      |
//! | 3-fold code with itself                      | 1/3      |
//! | `N` with anything                            | 1/4      |
//! | 2-fold with a 3-fold sharing one base        | 1/6      |
//! | everything else                              | 0        |

use std::fmt;

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
    /// A or G
    R = 4,
    /// C or T
    Y = 5,
    /// G or T
    K = 6,
    /// A or C
    M = 7,
    /// C or G
    S = 8,
    /// A or T
    W = 9,
    /// not A
    B = 10,
    /// not C
    D = 11,
    /// not G
    H = 12,
    /// not T
    V = 13,
    /// any base
    N = 14,
}

use Nucleotide::*;

const INVALID: u8 = 0xFF;

/// Uppercase ASCII letter -> alphabet index, `INVALID` otherwise.
const CHAR_TO_INDEX: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET_SIZE {
        table[Nucleotide::ALL[i].letter() as usize] = i as u8;
        i += 1;
    }
    table
};

const THIRD: f64 = 1.0 / 3.0;
const SIXTH: f64 = 1.0 / 6.0;

/// Non-zero entries of the strength table; every pair is stored in both orders.
const STRENGTH_ENTRIES: &[(Nucleotide, Nucleotide, f64)] = &[
    (A, A, 1.0),
    (C, C, 1.0),
    (G, G, 1.0),
    (T, T, 1.0),
    // bases against covering 2-fold codes
    (A, R, 0.5),
    (A, W, 0.5),
    (A, M, 0.5),
    (C, Y, 0.5),
    (C, S, 0.5),
    (C, M, 0.5),
    (G, R, 0.5),
    (G, S, 0.5),
    (G, K, 0.5),
    (T, Y, 0.5),
    (T, W, 0.5),
    (T, K, 0.5),
    (R, R, 0.5),
    (Y, Y, 0.5),
    (K, K, 0.5),
    (M, M, 0.5),
    (S, S, 0.5),
    (W, W, 0.5),
    // bases against covering 3-fold codes
    (A, D, THIRD),
    (A, H, THIRD),
    (A, V, THIRD),
    (C, B, THIRD),
    (C, H, THIRD),
    (C, V, THIRD),
    (G, B, THIRD),
    (G, D, THIRD),
    (G, V, THIRD),
    (T, B, THIRD),
    (T, D, THIRD),
    (T, H, THIRD),
    // 2-fold codes against covering 3-fold codes
    (R, D, THIRD),
    (R, V, THIRD),
    (Y, B, THIRD),
    (Y, H, THIRD),
    (K, B, THIRD),
    (K, D, THIRD),
    (M, H, THIRD),
    (M, V, THIRD),
    (S, B, THIRD),
    (S, V, THIRD),
    (W, D, THIRD),
    (W, H, THIRD),
    (B, B, THIRD),
    (D, D, THIRD),
    (H, H, THIRD),
    (V, V, THIRD),
    // N
    (N, A, 0.25),
    (N, C, 0.25),
    (N, G, 0.25),
    (N, T, 0.25),
    (N, R, 0.25),
    (N, Y, 0.25),
    (N, K, 0.25),
    (N, M, 0.25),
    (N, S, 0.25),
    (N, W, 0.25),
    (N, B, 0.25),
    (N, D, 0.25),
    (N, H, 0.25),
    (N, V, 0.25),
    (N, N, 0.25),
    // 2-fold against 3-fold sharing a single base
    (R, B, SIXTH),
    (R, H, SIXTH),
    (Y, D, SIXTH),
    (Y, V, SIXTH),
    (K, H, SIXTH),
    (K, V, SIXTH),
    (M, B, SIXTH),
    (M, D, SIXTH),
    (S, D, SIXTH),
    (S, H, SIXTH),
    (W, B, SIXTH),
    (W, V, SIXTH),
];

const MATCH_STRENGTH: [[f64; ALPHABET_SIZE]; ALPHABET_SIZE] = {
    let mut table = [[0.0f64; ALPHABET_SIZE]; ALPHABET_SIZE];
    let mut i = 0;
    while i < STRENGTH_ENTRIES.len() {
        let (a, b, value) = STRENGTH_ENTRIES[i];
        table[a as usize][b as usize] = value;
        table[b as usize][a as usize] = value;
        i += 1;
    }
    table
};

impl Nucleotide {
    /// All symbols in alphabet order.
    pub const ALL: [Nucleotide; ALPHABET_SIZE] = [A, C, G, T, R, Y, K, M, S, W, B, D, H, V, N];

    /// Converts an uppercase letter. Lowercase input and any other character
    /// yield `None`; callers that accept lowercase upper-case first.
    #[inline]
    pub fn from_char(c: char) -> Option<Nucleotide> {
        if !c.is_ascii() {
            return None;
        }
        Self::from_ascii(c as u8)
    }

    #[inline]
    pub fn from_ascii(byte: u8) -> Option<Nucleotide> {
        match CHAR_TO_INDEX[byte as usize] {
            INVALID => None,
            idx => Some(Self::ALL[idx as usize]),
        }
    }

    #[inline]
    pub fn to_char(self) -> char {
        self.letter() as char
    }

    const fn letter(self) -> u8 {
        match self {
            A => b'A',
            C => b'C',
            G => b'G',
            T => b'T',
            R => b'R',
            Y => b'Y',
            K => b'K',
            M => b'M',
            S => b'S',
            W => b'W',
            B => b'B',
            D => b'D',
            H => b'H',
            V => b'V',
            N => b'N',
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Similarity of two symbols in `[0, 1]`; symmetric.
#[inline]
pub fn match_strength(n1: Nucleotide, n2: Nucleotide) -> f64 {
    MATCH_STRENGTH[n1 as usize][n2 as usize]
}
