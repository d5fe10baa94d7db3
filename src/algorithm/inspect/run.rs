//! `print` and `align` run functions

use anyhow::{Context, Result};
use std::io::{self, BufWriter, Write};

use super::args::{AlignArgs, PrintArgs};
use crate::align::Alignment;
use crate::common::read_sequences;
use crate::error::Error;
use crate::report::write_alignment;
use crate::sequence::{write_sequence, PrintMode, Sequence};

fn pick(sequences: &[Sequence], index: usize) -> Result<&Sequence> {
    sequences
        .get(index)
        .ok_or(Error::IndexOutOfRange {
            index,
            len: sequences.len(),
        })
        .context("No such sequence")
}

pub fn run_print(args: PrintArgs) -> Result<()> {
    let mode: PrintMode = args.mode.parse().map_err(anyhow::Error::msg)?;
    let sequences = read_sequences(args.input.as_deref())?;
    let mut writer = BufWriter::new(io::stdout().lock());

    match args.index {
        Some(index) => write_sequence(&mut writer, pick(&sequences, index)?, mode, args.wrap)?,
        None => {
            for seq in &sequences {
                write_sequence(&mut writer, seq, mode, args.wrap)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn run_align(args: AlignArgs) -> Result<()> {
    let scoring = args.scoring.to_params();
    scoring.validate()?;
    let sequences = read_sequences(args.input.as_deref())?;
    let top = pick(&sequences, args.top)?;
    let bottom = pick(&sequences, args.bottom)?;

    let mut alignment = Alignment::with_sequences(top, bottom, scoring);
    alignment.retain_matrix(true);
    let mut writer = BufWriter::new(io::stdout().lock());
    write_alignment(&mut writer, &mut alignment, args.wrap)?;
    writer.flush()?;
    Ok(())
}
