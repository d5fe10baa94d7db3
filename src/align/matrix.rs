//! Dynamic-programming matrix for the local aligner
//!
//! One contiguous buffer per alignment call, indexed `i * cols + j` with `i`
//! over the top sequence and `j` over the bottom sequence. Pointers are kept
//! as raw bytes so a damaged matrix is detected when it is decoded.

use crate::error::{Error, Result};

/// Where a cell's score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Pointer {
    /// Fresh start (score 0, or a border seed)
    Null = 0,
    /// From `(i-1, j)`: top residue against a gap
    Left = 1,
    /// From `(i, j-1)`: gap against bottom residue
    Up = 2,
    /// From `(i-1, j-1)`: residue against residue
    Diag = 3,
}

impl TryFrom<u8> for Pointer {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Pointer::Null),
            1 => Ok(Pointer::Left),
            2 => Ok(Pointer::Up),
            3 => Ok(Pointer::Diag),
            other => Err(other),
        }
    }
}

pub struct DpMatrix {
    scores: Vec<f64>,
    pointers: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl DpMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            scores: vec![0.0; rows * cols],
            pointers: vec![Pointer::Null as u8; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn score(&self, i: usize, j: usize) -> f64 {
        self.scores[i * self.cols + j]
    }

    /// Decodes the pointer of cell `(i, j)`.
    #[inline]
    pub fn pointer(&self, i: usize, j: usize) -> Result<Pointer> {
        let value = self.pointers[i * self.cols + j];
        Pointer::try_from(value).map_err(|value| Error::CorruptPointer { x: i, y: j, value })
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, score: f64, pointer: Pointer) {
        let idx = i * self.cols + j;
        self.scores[idx] = score;
        self.pointers[idx] = pointer as u8;
    }

    #[cfg(test)]
    pub(crate) fn set_pointer_byte(&mut self, i: usize, j: usize, value: u8) {
        self.pointers[i * self.cols + j] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}
