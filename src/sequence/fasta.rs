//! FASTA reading and writing
//!
//! Reading rules:
//! - everything before the first `>` is ignored
//! - the name is the rest of the `>` line; lines directly after it that also
//!   start with `>` continue the name, joined with a single space
//! - residue lines follow until the next line starting with `>`
//! - residues are upper-cased, characters outside the alphabet are dropped
//!
//! Writing supports three layouts (see [`PrintMode`]).

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use super::nucleotide::Nucleotide;
use super::record::{parse_residue_bytes, Sequence};
use crate::error::Result;

/// Residues per output line unless configured otherwise.
pub const DEFAULT_WRAP: usize = 60;

/// NICE layout separates residues into groups of this size.
pub const GROUP_SIZE: usize = 10;

/// Output layout for a single sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintMode {
    /// All residues on one line.
    Raw,
    /// `wrap` residues per line.
    Fasta,
    /// `wrap` residues per line, 1-based start label, blank every 10 residues.
    #[default]
    Nice,
}

impl std::str::FromStr for PrintMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" => Ok(PrintMode::Raw),
            "fasta" => Ok(PrintMode::Fasta),
            "nice" => Ok(PrintMode::Nice),
            _ => Err(format!(
                "Unknown print mode: {}. Use 'raw', 'fasta' or 'nice'",
                s
            )),
        }
    }
}

/// Parses FASTA from raw bytes. Bytes that are not valid UTF-8 are replaced
/// in names and dropped from residues like any other non-alphabet character.
pub fn parse_fasta<B: AsRef<[u8]> + ?Sized>(input: &B) -> Vec<Sequence> {
    let mut records = Vec::new();
    let mut lines = input.as_ref().split(|&b| b == b'\n').peekable();
    while lines.peek().is_some_and(|l| !is_header(l)) {
        lines.next();
    }

    // Each iteration starts on a line beginning with '>'.
    while let Some(header) = lines.next() {
        let mut name = clean_name(&header[1..]);
        while let Some(cont) = lines.peek().and_then(|l| l.strip_prefix(b">")) {
            name.push(' ');
            name.push_str(&clean_name(cont));
            lines.next();
        }

        let mut residues: Vec<Nucleotide> = Vec::new();
        while let Some(line) = lines.peek() {
            if is_header(line) {
                break;
            }
            residues.extend(parse_residue_bytes(line));
            lines.next();
        }

        records.push(Sequence::from_residues(name, residues));
    }

    records
}

#[inline]
fn is_header(line: &[u8]) -> bool {
    line.first() == Some(&b'>')
}

fn clean_name(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

pub fn read_fasta<R: Read>(mut reader: R) -> Result<Vec<Sequence>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(parse_fasta(&bytes))
}

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<Vec<Sequence>> {
    let bytes = fs::read(path)?;
    Ok(parse_fasta(&bytes))
}

/// Writes `>name` followed by the residues in the requested layout.
/// A `wrap` of 0 writes the name line only.
pub fn write_sequence<W: Write>(
    writer: &mut W,
    seq: &Sequence,
    mode: PrintMode,
    wrap: usize,
) -> io::Result<()> {
    writeln!(writer, ">{}", seq.name())?;
    if wrap == 0 {
        return Ok(());
    }
    write_residues(writer, seq, mode, wrap)
}

/// Residue block only, without the name line.
pub fn write_residues<W: Write>(
    writer: &mut W,
    seq: &Sequence,
    mode: PrintMode,
    wrap: usize,
) -> io::Result<()> {
    let letters: Vec<u8> = seq.residues().iter().map(|n| n.to_char() as u8).collect();

    match mode {
        PrintMode::Raw => {
            writer.write_all(&letters)?;
            writeln!(writer)?;
        }
        PrintMode::Fasta => {
            for chunk in letters.chunks(wrap.max(1)) {
                writer.write_all(chunk)?;
                writeln!(writer)?;
            }
        }
        PrintMode::Nice => {
            let wrap = wrap.max(1);
            for (line_idx, chunk) in letters.chunks(wrap).enumerate() {
                let start = line_idx * wrap;
                write!(writer, "{:>6} ", start + 1)?;
                for (offset, &letter) in chunk.iter().enumerate() {
                    let pos = start + offset;
                    if offset > 0 && pos % GROUP_SIZE == 0 {
                        writer.write_all(b" ")?;
                    }
                    writer.write_all(&[letter])?;
                }
                writeln!(writer)?;
            }
        }
    }
    Ok(())
}

/// Convenience wrapper returning the rendering as a `String`.
pub fn format_sequence(seq: &Sequence, mode: PrintMode, wrap: usize) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_sequence(&mut buf, seq, mode, wrap);
    String::from_utf8_lossy(&buf).into_owned()
}
