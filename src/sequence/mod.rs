//! Nucleotide sequences: alphabet, records and FASTA input/output.

pub mod fasta;
pub mod nucleotide;
pub mod record;

pub use fasta::{parse_fasta, read_fasta, read_fasta_file, write_sequence, PrintMode};
pub use nucleotide::{match_strength, Nucleotide};
pub use record::Sequence;
