//! Per-generation GA statistics

use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    pub generation: usize,
    pub best: f64,
    pub mean: f64,
    pub worst: f64,
}

impl GenerationStats {
    /// Summary of one generation's scores; `scores` must not be empty.
    pub fn from_scores(generation: usize, scores: &[f64]) -> Self {
        let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let worst = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let mean = scores.iter().sum::<f64>() / scores.len().max(1) as f64;
        Self {
            generation,
            best,
            mean,
            worst,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GaStatistics {
    history: Vec<GenerationStats>,
    evaluations: usize,
}

impl GaStatistics {
    pub fn record(&mut self, stats: GenerationStats, evaluations: usize) {
        self.history.push(stats);
        self.evaluations += evaluations;
    }

    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    pub fn last(&self) -> Option<&GenerationStats> {
        self.history.last()
    }

    /// Genome evaluations performed so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Highest best score over all generations.
    pub fn best_ever(&self) -> Option<f64> {
        self.history.iter().map(|s| s.best).reduce(f64::max)
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "# generation\tbest\tmean\tworst")?;
        for s in &self.history {
            writeln!(
                writer,
                "{}\t{}\t{:.3}\t{}",
                s.generation, s.best, s.mean, s.worst
            )?;
        }
        writeln!(writer, "# generations: {}", self.history.len().saturating_sub(1))?;
        writeln!(writer, "# evaluations: {}", self.evaluations)?;
        if let Some(best) = self.best_ever() {
            writeln!(writer, "# best score: {}", best)?;
        }
        Ok(())
    }
}
