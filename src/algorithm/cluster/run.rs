//! Main `cluster` run function
//!
//! Reads the ESTs, sizes the similarity cache from the expected number of
//! alignments, evolves genomes with the simple GA and writes the clusters of
//! the best genome.

use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::Path;

use super::args::ClusterArgs;
use crate::algorithm::common::configure_threads;
use crate::cluster::estimate::{expected_alignments, expected_dp_calls, table_size};
use crate::cluster::ClusterSession;
use crate::common::{create_file, diagnostics_enabled, open_output, read_sequences, TraceLog};
use crate::config::{CacheConfig, EdgePolicy};
use crate::ga::params::DEFAULT_PARAM_FILE;
use crate::ga::{GaParams, SimpleGa};
use crate::report::{write_clusters, MemberStyle};

fn load_ga_params(path: &Path, verbose: bool) -> Result<GaParams> {
    if !path.exists() && path == Path::new(DEFAULT_PARAM_FILE) {
        if verbose {
            eprintln!(
                "[INFO] No {} found, using default GA parameters",
                DEFAULT_PARAM_FILE
            );
        }
        return Ok(GaParams::default());
    }
    let (params, unknown) = GaParams::from_file(path)
        .with_context(|| format!("Failed to read GA parameters from {}", path.display()))?;
    for name in unknown {
        eprintln!("[WARN] Ignoring unknown GA parameter '{}'", name);
    }
    Ok(params)
}

pub fn run(args: ClusterArgs) -> Result<()> {
    let verbose = args.verbose;
    let num_threads = configure_threads(args.num_threads, verbose);

    let scoring = args.scoring.to_params();
    scoring.validate()?;
    let cache_config = CacheConfig {
        load: args.load,
        max_table_size: args.size,
    };
    cache_config.validate()?;
    let policy: EdgePolicy = args.edge_policy.parse().map_err(anyhow::Error::msg)?;

    let mut ga_params = load_ga_params(&args.params, verbose)?;
    if let Some(seed) = args.seed {
        ga_params.seed = Some(seed);
    }

    let sequences = read_sequences(args.input.as_deref())?;
    let n = sequences.len();
    if verbose {
        eprintln!("[INFO] Read {} sequences, {} threads", n, num_threads);
    }

    let Some(mut writer) = open_output(args.output.as_deref(), args.force)? else {
        return Ok(());
    };
    let mut trace = match args.trace.as_deref() {
        Some(path) => TraceLog::create(path, args.force)?,
        None => TraceLog::disabled(),
    };
    let style = if args.names {
        MemberStyle::NamesOnly
    } else {
        MemberStyle::FullSequence
    };

    trace.line(&format!("Number of sequences: {}", n))?;
    if n < 2 {
        if verbose {
            eprintln!("[INFO] Fewer than two sequences, nothing to cluster");
        }
        write_clusters(&mut writer, &sequences, &[], style)?;
        writer.flush()?;
        trace.finish()?;
        return Ok(());
    }

    let expected = expected_alignments(
        n,
        ga_params.population_size,
        ga_params.generations,
        ga_params.p_mutation,
    );
    let row_capacity = table_size(expected, n, cache_config.load, cache_config.max_table_size);

    trace.line(&format!("Population size: {}", ga_params.population_size))?;
    trace.line(&format!("Generations: {}", ga_params.generations))?;
    trace.line(&format!("Mutation rate: {}", ga_params.p_mutation))?;
    trace.line(&format!("Crossover rate: {}", ga_params.p_crossover))?;
    trace.line(&format!("Expected alignments: {:.0}", expected_dp_calls(expected)))?;
    trace.line(&format!("Table size: {}", row_capacity))?;
    trace.line("generation\telapsed\tbest")?;
    if verbose {
        eprintln!(
            "[INFO] GA: population={}, generations={}, pmut={}, pcross={}, elitism={}",
            ga_params.population_size,
            ga_params.generations,
            ga_params.p_mutation,
            ga_params.p_crossover,
            ga_params.elitism
        );
        eprintln!(
            "[INFO] Expected alignments: {:.0}, cache rows sized to {}",
            expected_dp_calls(expected),
            row_capacity
        );
    }

    let session = ClusterSession::new(&sequences, scoring, row_capacity, policy);
    let mut ga = SimpleGa::new(&session, ga_params.clone())?;

    let bar = ProgressBar::new(ga_params.generations as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} best={msg}")?,
    );

    let mut trace_error = None;
    let best = ga
        .evolve(|stats| {
            bar.set_position(stats.generation as u64);
            bar.set_message(format!("{}", stats.best));
            if let Err(e) = trace.generation(stats) {
                trace_error.get_or_insert(e);
            }
        })?
        .cloned()
        .ok_or_else(|| anyhow!("GA finished with an empty population"))?;
    bar.finish_and_clear();
    if let Some(e) = trace_error {
        return Err(e).context("Failed to write trace file");
    }

    let clusters = session.clusters(&best.genome)?;
    if verbose {
        eprintln!(
            "[INFO] Best score {} with {} clusters after {} generations",
            best.fitness,
            clusters.len(),
            ga.generation()
        );
    }

    write_clusters(&mut writer, &sequences, &clusters, style)?;
    writer.flush()?;

    if let Some(path) = args.stats.as_deref() {
        let mut stats_writer = create_file(path, args.force)?;
        ga.statistics().write(&mut stats_writer)?;
        stats_writer.flush()?;
    }

    let alignments = session.cache().alignments_performed();
    trace.line(&format!("Alignments performed: {}", alignments))?;
    trace.line(&format!("Total time: {}", trace.elapsed()))?;
    trace.finish()?;

    if verbose || diagnostics_enabled() {
        eprintln!(
            "[INFO] Cache: {} lookups, {} alignments ({:.0} expected)",
            session.cache().lookups(),
            alignments,
            expected_dp_calls(expected)
        );
    }

    Ok(())
}
