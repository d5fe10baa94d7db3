//! Main `allpairs` run function

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Instant;

use super::args::AllPairsArgs;
use crate::algorithm::common::configure_threads;
use crate::cluster::cluster_all_pairs;
use crate::common::{open_output, read_sequences};
use crate::report::{write_clusters, MemberStyle};
use crate::utils::format_duration;

pub fn run(args: AllPairsArgs) -> Result<()> {
    let verbose = args.verbose;
    let num_threads = configure_threads(args.num_threads, verbose);

    let scoring = args.scoring.to_params();
    scoring.validate()?;

    let sequences = read_sequences(args.input.as_deref())?;
    if verbose {
        eprintln!(
            "[INFO] Read {} sequences, aligning all pairs on {} threads",
            sequences.len(),
            num_threads
        );
    }

    let Some(mut writer) = open_output(args.output.as_deref(), args.force)? else {
        return Ok(());
    };

    let started = Instant::now();
    let bar = ProgressBar::new(sequences.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")?,
    );
    let result = cluster_all_pairs(&sequences, scoring, || bar.inc(1));
    bar.finish_and_clear();

    let clusters = result.clusters();
    let style = if args.names {
        MemberStyle::NamesOnly
    } else {
        MemberStyle::FullSequence
    };
    write_clusters(&mut writer, &sequences, &clusters, style)?;
    writer.flush()?;

    if verbose {
        eprintln!("[INFO] Score: {}", result.fitness());
        eprintln!("[INFO] Clusters: {}", clusters.len());
        eprintln!("[INFO] Alignments: {}", result.alignments);
        eprintln!("[INFO] Time: {}", format_duration(started.elapsed()));
    }

    Ok(())
}
