//! Pairwise alignment rendering
//!
//! Format:
//! ```text
//! Top sequence: est_12
//! Bottom sequence: est_40
//! Score: 33.6
//!      1  ACGTTGCAAGCTTCGAGCTAGGGTTGACCGATGCATCGGATCC
//!      1  ||||||||||||||||||||   ||||||||||||||||||||
//!      1  ACGTTGCAAGCTTCGAGCTA---TTGACCGATGCATCGGATCC
//!
//! ```
//! The top and bottom labels give the 1-based position of the first residue
//! on the line; the middle label counts alignment columns.

use std::io::Write;

use crate::align::traceback::GAP_CHAR;
use crate::align::Alignment;
use crate::error::{Error, Result};

/// Residues per block line unless configured otherwise.
pub const DEFAULT_LINE_LENGTH: usize = 60;

pub const NOT_SIGNIFICANT_WARNING: &str = "WARNING: The alignment is not considered significant.";

/// Score with at most two decimals and no trailing zeros.
pub fn format_score(score: f64) -> String {
    let text = format!("{:.2}", score);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Writes the header and the alignment blocks.
///
/// Aligns (without early stop) if needed. Traces only when `line_length` is
/// non-zero. Fails with
/// [`Error::MissingSequences`] before writing anything when no sequences are
/// assigned.
pub fn write_alignment<W: Write>(
    writer: &mut W,
    alignment: &mut Alignment<'_>,
    line_length: usize,
) -> Result<()> {
    let (top, bottom) = alignment.sequences().ok_or(Error::MissingSequences)?;
    if !alignment.is_aligned() {
        alignment.align(false)?;
    }
    let score = alignment.score();
    let significant = alignment.significant();

    writeln!(writer, "Top sequence: {}", top.name())?;
    writeln!(writer, "Bottom sequence: {}", bottom.name())?;
    writeln!(writer, "Score: {}", format_score(score))?;
    if !significant {
        writeln!(writer, "{}", NOT_SIGNIFICANT_WARNING)?;
    }
    // No body, so no trace either.
    if line_length == 0 {
        return Ok(());
    }
    let path = alignment.trace_path()?;
    if path.is_empty() {
        return Ok(());
    }

    let top_cols = path.top.as_bytes();
    let mark_cols = path.marks.as_bytes();
    let bottom_cols = path.bottom.as_bytes();
    let gap = GAP_CHAR as u8;

    let mut top_pos = path.x_start + 1;
    let mut bottom_pos = path.y_start + 1;
    let mut offset = 0;

    while offset < top_cols.len() {
        let end = (offset + line_length).min(top_cols.len());
        let chunk_top = &top_cols[offset..end];
        let chunk_bottom = &bottom_cols[offset..end];

        writeln!(writer, "{:>6}  {}", top_pos, String::from_utf8_lossy(chunk_top))?;
        writeln!(
            writer,
            "{:>6}  {}",
            offset + 1,
            String::from_utf8_lossy(&mark_cols[offset..end])
        )?;
        writeln!(writer, "{:>6}  {}", bottom_pos, String::from_utf8_lossy(chunk_bottom))?;
        writeln!(writer)?;

        top_pos += chunk_top.iter().filter(|&&c| c != gap).count();
        bottom_pos += chunk_bottom.iter().filter(|&&c| c != gap).count();
        offset = end;
    }

    Ok(())
}
