//! Input/output plumbing shared by the subcommands

use anyhow::{bail, Context, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::ga::GenerationStats;
use crate::sequence::{read_fasta, read_fasta_file, Sequence};
use crate::utils::format_duration;

/// Trace file used when `--trace` is given without a name.
pub const DEFAULT_TRACE_FILE: &str = "gaesttrace.out";

/// Check if diagnostics are enabled via environment variable
pub fn diagnostics_enabled() -> bool {
    std::env::var("GAEST_DIAGNOSTICS")
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false)
}

/// Reads FASTA from `path`, or from stdin when no path is given.
pub fn read_sequences(path: Option<&Path>) -> Result<Vec<Sequence>> {
    match path {
        Some(path) => read_fasta_file(path)
            .with_context(|| format!("Failed to read sequences from {}", path.display())),
        None => read_fasta(io::stdin().lock()).context("Failed to read sequences from stdin"),
    }
}

/// Decides where output goes when `path` already exists.
///
/// Asks on `prompt` and reads the answer from `answers`: `0` aborts
/// (`Ok(None)`), `1` reads a new file name, `2` overwrites. Without `force`
/// and with no answer available the call fails.
pub fn resolve_output_path<R: BufRead, W: Write>(
    path: &Path,
    force: bool,
    answers: &mut R,
    prompt: &mut W,
) -> Result<Option<PathBuf>> {
    let mut candidate = path.to_path_buf();
    loop {
        if force || !candidate.exists() {
            return Ok(Some(candidate));
        }
        write!(
            prompt,
            "File {} already exists. Enter 0 to exit, 1 to choose a new file name, 2 to overwrite: ",
            candidate.display()
        )?;
        prompt.flush()?;

        let mut line = String::new();
        if answers.read_line(&mut line)? == 0 {
            bail!("Output file {} already exists", candidate.display());
        }
        match line.trim() {
            "0" => return Ok(None),
            "1" => {
                write!(prompt, "New file name: ")?;
                prompt.flush()?;
                line.clear();
                if answers.read_line(&mut line)? == 0 || line.trim().is_empty() {
                    bail!("No output file name given");
                }
                candidate = PathBuf::from(line.trim());
            }
            "2" => return Ok(Some(candidate)),
            _ => continue,
        }
    }
}

/// Output writer for `path`, or stdout when no path is given.
///
/// An existing file triggers the interactive choice of
/// [`resolve_output_path`] unless `force` is set; `Ok(None)` means the user
/// chose to exit.
pub fn open_output(path: Option<&Path>, force: bool) -> Result<Option<Box<dyn Write>>> {
    let Some(path) = path else {
        return Ok(Some(Box::new(BufWriter::new(io::stdout().lock()))));
    };
    let stdin = io::stdin();
    let resolved = resolve_output_path(path, force, &mut stdin.lock(), &mut io::stderr())?;
    match resolved {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Some(Box::new(BufWriter::new(file))))
        }
        None => Ok(None),
    }
}

/// Creates `path`, failing if it already exists unless `overwrite` is set.
pub fn create_file(path: &Path, overwrite: bool) -> Result<BufWriter<File>> {
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let file = options
        .open(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Optional run log: settings, per-generation progress and totals.
pub struct TraceLog {
    writer: Option<BufWriter<File>>,
    started: Instant,
}

impl TraceLog {
    pub fn disabled() -> Self {
        Self {
            writer: None,
            started: Instant::now(),
        }
    }

    pub fn create(path: &Path, overwrite: bool) -> Result<Self> {
        Ok(Self {
            writer: Some(create_file(path, overwrite)?),
            started: Instant::now(),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(w) => writeln!(w, "{}", text),
            None => Ok(()),
        }
    }

    /// `generation<TAB>elapsed<TAB>best`
    pub fn generation(&mut self, stats: &GenerationStats) -> io::Result<()> {
        let elapsed = format_duration(self.started.elapsed());
        match self.writer.as_mut() {
            Some(w) => writeln!(w, "{}\t{}\t{}", stats.generation, elapsed, stats.best),
            None => Ok(()),
        }
    }

    pub fn elapsed(&self) -> String {
        format_duration(self.started.elapsed())
    }

    pub fn finish(&mut self) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(w) => w.flush(),
            None => Ok(()),
        }
    }
}
