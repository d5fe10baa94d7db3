use super::matrix::{DpMatrix, Pointer};
use crate::error::{Error, Result};
use crate::sequence::nucleotide::{match_strength, Nucleotide};

/// Marker for a column pairing two identical bases.
pub const IDENTITY_MARK: char = '|';
/// Marker for a column pairing partially compatible symbols.
pub const PARTIAL_MARK: char = ':';
pub const GAP_CHAR: char = '-';

/// Reconstructed local alignment.
///
/// Coordinates are 0-based and inclusive on both sequences.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TracedPath {
    pub x_start: usize,
    pub y_start: usize,
    pub x_end: usize,
    pub y_end: usize,
    /// Top residues with `-` for gaps.
    pub top: String,
    /// `|` identical base, `:` partial match, blank otherwise.
    pub marks: String,
    /// Bottom residues with `-` for gaps.
    pub bottom: String,
}

impl TracedPath {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.top.len()
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }
}

fn pair_mark(a: Nucleotide, b: Nucleotide) -> char {
    let strength = match_strength(a, b);
    if strength == 1.0 {
        IDENTITY_MARK
    } else if strength == 0.0 {
        ' '
    } else {
        PARTIAL_MARK
    }
}

/// Walks back from `(x_end, y_end)` until a NULL cell.
///
/// A NULL cell with a positive score is a border seed and becomes the first
/// column; a NULL cell scoring 0 is not part of the path. `score <= 0`
/// means nothing aligned and yields an empty path.
pub fn trace(
    matrix: &DpMatrix,
    top: &[Nucleotide],
    bottom: &[Nucleotide],
    x_end: usize,
    y_end: usize,
    score: f64,
) -> Result<TracedPath> {
    if score <= 0.0 || top.is_empty() || bottom.is_empty() {
        return Ok(TracedPath::default());
    }

    // Columns collected right to left.
    let mut top_rev = Vec::new();
    let mut marks_rev = Vec::new();
    let mut bottom_rev = Vec::new();
    let (mut i, mut j) = (x_end, y_end);
    let (mut x_start, mut y_start) = (x_end, y_end);

    loop {
        let corrupt = move |value: u8| Error::CorruptPointer { x: i, y: j, value };
        match matrix.pointer(i, j)? {
            Pointer::Diag => {
                top_rev.push(top[i].to_char());
                marks_rev.push(pair_mark(top[i], bottom[j]));
                bottom_rev.push(bottom[j].to_char());
                (x_start, y_start) = (i, j);
                i = i.checked_sub(1).ok_or_else(|| corrupt(Pointer::Diag as u8))?;
                j = j.checked_sub(1).ok_or_else(|| corrupt(Pointer::Diag as u8))?;
            }
            Pointer::Left => {
                top_rev.push(top[i].to_char());
                marks_rev.push(' ');
                bottom_rev.push(GAP_CHAR);
                x_start = i;
                i = i.checked_sub(1).ok_or_else(|| corrupt(Pointer::Left as u8))?;
            }
            Pointer::Up => {
                top_rev.push(GAP_CHAR);
                marks_rev.push(' ');
                bottom_rev.push(bottom[j].to_char());
                y_start = j;
                j = j.checked_sub(1).ok_or_else(|| corrupt(Pointer::Up as u8))?;
            }
            Pointer::Null => {
                if matrix.score(i, j) > 0.0 {
                    top_rev.push(top[i].to_char());
                    marks_rev.push(pair_mark(top[i], bottom[j]));
                    bottom_rev.push(bottom[j].to_char());
                    (x_start, y_start) = (i, j);
                }
                break;
            }
        }
    }

    Ok(TracedPath {
        x_start,
        y_start,
        x_end,
        y_end,
        top: top_rev.into_iter().rev().collect(),
        marks: marks_rev.into_iter().rev().collect(),
        bottom: bottom_rev.into_iter().rev().collect(),
    })
}
