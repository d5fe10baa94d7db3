use super::nucleotide::Nucleotide;
use crate::error::{Error, Result};

/// A named nucleotide sequence. Every stored residue is a valid symbol.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    name: String,
    residues: Vec<Nucleotide>,
}

impl Sequence {
    /// Builds a sequence from text. Lowercase letters are upper-cased, any
    /// character outside the alphabet is dropped.
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            residues: parse_residues(text),
        }
    }

    pub fn from_residues(name: impl Into<String>, residues: Vec<Nucleotide>) -> Self {
        Self {
            name: name.into(),
            residues,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces the residues, with the same dropping rules as [`Sequence::new`].
    pub fn set_residues(&mut self, text: &str) {
        self.residues = parse_residues(text);
    }

    pub fn residues(&self) -> &[Nucleotide] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn residue(&self, index: usize) -> Result<Nucleotide> {
        self.residues.get(index).copied().ok_or(Error::IndexOutOfRange {
            index,
            len: self.residues.len(),
        })
    }

    pub fn letter(&self, index: usize) -> Result<char> {
        self.residue(index).map(Nucleotide::to_char)
    }

    /// Residues as an uppercase string.
    pub fn to_letters(&self) -> String {
        self.residues.iter().map(|n| n.to_char()).collect()
    }
}

pub(crate) fn parse_residues(text: &str) -> Vec<Nucleotide> {
    parse_residue_bytes(text.as_bytes()).collect()
}

pub(crate) fn parse_residue_bytes(bytes: &[u8]) -> impl Iterator<Item = Nucleotide> + '_ {
    bytes
        .iter()
        .filter_map(|&b| Nucleotide::from_ascii(b.to_ascii_uppercase()))
}
