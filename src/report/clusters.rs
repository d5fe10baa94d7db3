//! Cluster listing
//!
//! ```text
//! Cluster 0
//!  0: est_a
//!  4: est_e
//!
//! Cluster 1
//!  2: est_c
//!  3: est_d
//!
//! Unclustered sequences:
//!  1: est_b
//!
//! ```
//! With full output each member is followed by its NICE rendering instead of
//! the bare name.

use std::io::{self, Write};

use crate::sequence::fasta::{write_sequence, PrintMode, DEFAULT_WRAP};
use crate::sequence::Sequence;

/// How each member is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberStyle {
    NamesOnly,
    #[default]
    FullSequence,
}

fn write_member<W: Write>(
    writer: &mut W,
    sequences: &[Sequence],
    index: usize,
    style: MemberStyle,
) -> io::Result<()> {
    write!(writer, " {}: ", index)?;
    match style {
        MemberStyle::NamesOnly => writeln!(writer, "{}", sequences[index].name()),
        MemberStyle::FullSequence => {
            write_sequence(writer, &sequences[index], PrintMode::Nice, DEFAULT_WRAP)
        }
    }
}

/// Writes every cluster followed by the sequences that belong to none.
///
/// Member indices must be valid for `sequences`.
pub fn write_clusters<W: Write>(
    writer: &mut W,
    sequences: &[Sequence],
    clusters: &[Vec<usize>],
    style: MemberStyle,
) -> io::Result<()> {
    let mut clustered = vec![false; sequences.len()];

    for (k, members) in clusters.iter().enumerate() {
        writeln!(writer, "Cluster {}", k)?;
        for &index in members {
            clustered[index] = true;
            write_member(writer, sequences, index, style)?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "Unclustered sequences:")?;
    for index in (0..sequences.len()).filter(|&i| !clustered[i]) {
        write_member(writer, sequences, index, style)?;
    }
    writeln!(writer)?;
    Ok(())
}
