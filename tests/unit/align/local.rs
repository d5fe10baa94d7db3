//! Unit tests for align/result.rs and align/traceback.rs

use gaest::align::traceback::IDENTITY_MARK;
use gaest::align::{align, align_with_traceback, Alignment, ScoringParams};
use gaest::sequence::Sequence;

use crate::helpers::{random_dna, random_iupac};

fn with_threshold(threshold: u32) -> ScoringParams {
    ScoringParams {
        significance_threshold: threshold,
        ..ScoringParams::default()
    }
}

#[test]
fn test_identical_sequences_align_end_to_end() {
    let text = random_dna(17, 100);
    let top = Sequence::new("top", &text);
    let bottom = Sequence::new("bottom", &text);
    let alignment = align_with_traceback(&top, &bottom, ScoringParams::default()).unwrap();

    assert_eq!(alignment.score(), 100.0);
    assert_eq!(alignment.end(), Some((99, 99)));
    assert!(alignment.significant());

    let path = alignment.path().unwrap();
    assert_eq!(path.len(), 100);
    assert_eq!((path.x_start, path.y_start), (0, 0));
    assert_eq!((path.x_end, path.y_end), (99, 99));
    assert!(path.marks.chars().all(|c| c == IDENTITY_MARK));
    assert_eq!(path.top, text);
    assert_eq!(path.bottom, text);
}

#[test]
fn test_alignment_is_deterministic() {
    let top = Sequence::new("top", &random_iupac(3, 150));
    let bottom = Sequence::new("bottom", &random_iupac(4, 120));
    let first = align_with_traceback(&top, &bottom, ScoringParams::default()).unwrap();
    let second = align_with_traceback(&top, &bottom, ScoringParams::default()).unwrap();
    assert_eq!(first.score(), second.score());
    assert_eq!(first.end(), second.end());
    assert_eq!(first.path(), second.path());

    // Score-only alignment agrees with the traced one.
    let quick = align(&top, &bottom, ScoringParams::default(), false);
    assert_eq!(quick.score(), first.score());
    assert_eq!(quick.end(), first.end());
}

#[test]
fn test_unrelated_sequences_score_zero() {
    let top = Sequence::new("a", &"A".repeat(10));
    let bottom = Sequence::new("c", &"C".repeat(10));
    let mut alignment = align(&top, &bottom, ScoringParams::default(), false);
    assert!(alignment.is_aligned());
    assert_eq!(alignment.score(), 0.0);
    assert!(!alignment.significant());
    assert!(alignment.trace_path().unwrap().is_empty());
}

#[test]
fn test_border_match_counts() {
    let top = Sequence::new("t", "G");
    let bottom = Sequence::new("b", "CCG");
    let mut alignment = align(&top, &bottom, ScoringParams::default(), false);
    assert_eq!(alignment.score(), 1.0);
    let path = alignment.trace_path().unwrap();
    assert_eq!((path.top.as_str(), path.bottom.as_str()), ("G", "G"));
    assert_eq!((path.x_start, path.y_start), (0, 2));
}

#[test]
fn test_significance_threshold() {
    let seq = Sequence::new("s", "AAAA");
    // 40 * (1 - 0.1) = 36 > 4
    assert!(!align(&seq, &seq, ScoringParams::default(), false).significant());
    // 4 * 0.9 = 3.6 <= 4
    assert!(align(&seq, &seq, with_threshold(4), false).significant());
}

#[test]
fn test_unaligned_is_not_significant() {
    let seq = Sequence::new("s", &"A".repeat(80));
    let alignment = Alignment::with_sequences(&seq, &seq, ScoringParams::default());
    assert!(!alignment.is_aligned());
    assert!(!alignment.significant());
    assert_eq!(alignment.score(), 0.0);
}

#[test]
fn test_early_stop() {
    let text = "ACGT".repeat(10);
    let seq = Sequence::new("s", &text);
    let params = with_threshold(10);

    let mut early = align(&seq, &seq, params, true);
    assert!(early.stopped_early());
    assert!(early.significant());
    assert!(early.score() < 40.0);
    let score = early.score();
    let path = early.trace_path().unwrap();
    assert_eq!(path.len() as f64, score);
    assert!(path.marks.chars().all(|c| c == IDENTITY_MARK));

    let full = align(&seq, &seq, params, false);
    assert!(!full.stopped_early());
    assert_eq!(full.score(), 40.0);
}

#[test]
fn test_inserted_residues_open_one_gap() {
    let left = random_dna(21, 20);
    let right = random_dna(22, 20);
    let top = Sequence::new("top", &format!("{}TTT{}", left, right));
    let bottom = Sequence::new("bottom", &format!("{}{}", left, right));
    let params = ScoringParams::default();
    let alignment = align(&top, &bottom, params, false);
    let expected = 40.0 + params.gap_open_penalty + 2.0 * params.gap_extend_penalty;
    assert!((alignment.score() - expected).abs() < 1e-9, "{}", alignment.score());
    assert!(!alignment.significant());
    assert!(align(&top, &bottom, with_threshold(30), false).significant());
}

#[test]
fn test_changing_params_resets_state() {
    let seq = Sequence::new("s", &"G".repeat(50));
    let mut alignment = Alignment::with_sequences(&seq, &seq, ScoringParams::default());
    alignment.align(false).unwrap();
    assert!(alignment.is_aligned());
    alignment.set_params(with_threshold(5));
    assert!(!alignment.is_aligned());
    assert_eq!(alignment.align(false).unwrap(), 50.0);
}
