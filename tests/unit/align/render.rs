//! Unit tests for report/pairwise.rs

use gaest::align::{Alignment, ScoringParams};
use gaest::report::pairwise::{format_score, NOT_SIGNIFICANT_WARNING};
use gaest::report::write_alignment;
use gaest::sequence::Sequence;
use gaest::Error;

fn render(alignment: &mut Alignment<'_>, line_length: usize) -> String {
    let mut out = Vec::new();
    write_alignment(&mut out, alignment, line_length).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_blocks_and_warning() {
    let top = Sequence::new("t", "ACGTACGTAC");
    let bottom = Sequence::new("b", "ACGTACGTAC");
    let mut alignment = Alignment::with_sequences(&top, &bottom, ScoringParams::default());
    let expected = format!(
        "Top sequence: t\nBottom sequence: b\nScore: 10\n{}\n\
         \x20    1  ACGT\n     1  ||||\n     1  ACGT\n\n\
         \x20    5  ACGT\n     5  ||||\n     5  ACGT\n\n\
         \x20    9  AC\n     9  ||\n     9  AC\n\n",
        NOT_SIGNIFICANT_WARNING
    );
    assert_eq!(render(&mut alignment, 4), expected);
}

#[test]
fn test_significant_alignment_has_no_warning() {
    let text = "ACGT".repeat(15);
    let top = Sequence::new("t", &text);
    let bottom = Sequence::new("b", &text);
    let mut alignment = Alignment::with_sequences(&top, &bottom, ScoringParams::default());
    let text = render(&mut alignment, 60);
    assert!(text.starts_with("Top sequence: t\nBottom sequence: b\nScore: 60\n     1  "));
    assert!(!text.contains("WARNING"));
    assert_eq!(text.lines().count(), 3 + 4);
}

#[test]
fn test_positions_skip_gaps() {
    let top = Sequence::new("t", "GGGGGAAAAA");
    let bottom = Sequence::new("b", "AAAAA");
    let mut alignment = Alignment::with_sequences(&top, &bottom, ScoringParams::default());
    let text = render(&mut alignment, 60);
    // The match starts at top residue 6 and bottom residue 1.
    assert!(text.contains("     6  AAAAA\n     1  |||||\n     1  AAAAA\n"), "{}", text);
}

#[test]
fn test_zero_line_length_prints_header_only() {
    let seq = Sequence::new("s", "AAAA");
    let mut alignment = Alignment::with_sequences(&seq, &seq, ScoringParams::default());
    let text = render(&mut alignment, 0);
    assert_eq!(text.lines().count(), 4);
    assert!(alignment.path().is_none());

    let text = render(&mut alignment, 60);
    assert!(text.contains("AAAA"));
    assert!(alignment.path().is_some());
}

#[test]
fn test_missing_sequences() {
    let mut alignment = Alignment::new(ScoringParams::default());
    let mut out = Vec::<u8>::new();
    let result = write_alignment(&mut out, &mut alignment, 60);
    assert!(matches!(result, Err(Error::MissingSequences)));
    assert!(out.is_empty());
}

#[test]
fn test_score_formatting() {
    assert_eq!(format_score(33.6), "33.6");
    assert_eq!(format_score(12.25), "12.25");
    assert_eq!(format_score(100.0), "100");
}
