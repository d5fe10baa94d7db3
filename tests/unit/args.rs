//! Unit tests for the subcommand argument structs

use clap::{Args, Command, FromArgMatches};
use gaest::algorithm::allpairs::AllPairsArgs;
use gaest::algorithm::cluster::ClusterArgs;
use gaest::algorithm::inspect::{AlignArgs, PrintArgs};
use gaest::config::EdgePolicy;
use gaest::sequence::PrintMode;
use std::path::PathBuf;

fn parse<T: Args + FromArgMatches>(name: &'static str, args: &[&str]) -> T {
    let mut all_args = vec!["gaest".to_string(), name.to_string()];
    all_args.extend(args.iter().map(|s| s.to_string()));

    let cmd = Command::new("gaest").subcommand(T::augment_args(Command::new(name)));
    let matches = cmd.get_matches_from(all_args);
    let sub_matches = matches.subcommand_matches(name).unwrap();

    T::from_arg_matches(sub_matches).unwrap()
}

fn try_parse_cluster(args: &[&str]) -> Result<ClusterArgs, clap::Error> {
    let mut all_args = vec!["gaest", "cluster"];
    all_args.extend_from_slice(args);
    let cmd = Command::new("gaest").subcommand(ClusterArgs::augment_args(Command::new("cluster")));
    let matches = cmd.try_get_matches_from(all_args)?;
    ClusterArgs::from_arg_matches(matches.subcommand_matches("cluster").unwrap())
}

#[test]
fn test_cluster_defaults() {
    let args: ClusterArgs = parse("cluster", &[]);
    assert_eq!(args.input, None);
    assert_eq!(args.output, None);
    assert_eq!(args.params, PathBuf::from("gaparam.in"));
    assert_eq!(args.load, 0.5);
    assert_eq!(args.size, 1000);
    assert_eq!(args.stats, None);
    assert!(!args.names);
    assert_eq!(args.trace, None);
    assert_eq!(args.edge_policy, "undirected");
    assert_eq!(args.seed, None);
    assert_eq!(args.num_threads, 0);
    assert!(!args.force);
    assert!(!args.verbose);

    let scoring = args.scoring.to_params();
    assert_eq!(scoring.match_reward, 1.0);
    assert_eq!(scoring.mismatch_penalty, -2.0);
    assert_eq!(scoring.gap_open_penalty, -6.0);
    assert_eq!(scoring.gap_extend_penalty, -0.2);
    assert_eq!(scoring.significance_threshold, 40);
}

#[test]
fn test_cluster_short_options() {
    let args: ClusterArgs = parse(
        "cluster",
        &["-i", "ests.fa", "-o", "clusters.txt", "-p", "run.in", "-l", "0.8", "-s", "250", "-n", "-v"],
    );
    assert_eq!(args.input, Some(PathBuf::from("ests.fa")));
    assert_eq!(args.output, Some(PathBuf::from("clusters.txt")));
    assert_eq!(args.params, PathBuf::from("run.in"));
    assert_eq!(args.load, 0.8);
    assert_eq!(args.size, 250);
    assert!(args.names);
    assert!(args.verbose);
}

#[test]
fn test_trace_with_and_without_name() {
    let args: ClusterArgs = parse("cluster", &["-t"]);
    assert_eq!(args.trace, Some(PathBuf::from("gaesttrace.out")));
    let args: ClusterArgs = parse("cluster", &["--trace", "run.log"]);
    assert_eq!(args.trace, Some(PathBuf::from("run.log")));
}

#[test]
fn test_negative_scoring_values() {
    let args: ClusterArgs = parse(
        "cluster",
        &["--mismatch", "-3", "--gap-open", "-10", "--gap-extend", "-0.5", "--match", "2", "--significance", "25"],
    );
    let scoring = args.scoring.to_params();
    assert_eq!(scoring.match_reward, 2.0);
    assert_eq!(scoring.mismatch_penalty, -3.0);
    assert_eq!(scoring.gap_open_penalty, -10.0);
    assert_eq!(scoring.gap_extend_penalty, -0.5);
    assert_eq!(scoring.significance_threshold, 25);
}

#[test]
fn test_edge_policy_and_seed() {
    let args: ClusterArgs = parse("cluster", &["--edge-policy", "forward", "--seed", "7", "--force"]);
    assert_eq!(args.edge_policy.parse::<EdgePolicy>(), Ok(EdgePolicy::Forward));
    assert_eq!(args.seed, Some(7));
    assert!(args.force);
    assert!("sideways".parse::<EdgePolicy>().is_err());
}

#[test]
fn test_cluster_rejects_bad_values() {
    assert!(try_parse_cluster(&["--size", "many"]).is_err());
    assert!(try_parse_cluster(&["--bogus"]).is_err());
}

#[test]
fn test_allpairs_args() {
    let args: AllPairsArgs = parse("allpairs", &["-i", "ests.fa", "-n", "--num-threads", "2"]);
    assert_eq!(args.input, Some(PathBuf::from("ests.fa")));
    assert!(args.names);
    assert_eq!(args.num_threads, 2);
    assert_eq!(args.scoring.to_params().significance_threshold, 40);
}

#[test]
fn test_print_args() {
    let args: PrintArgs = parse("print", &[]);
    assert_eq!(args.index, None);
    assert_eq!(args.mode.parse::<PrintMode>(), Ok(PrintMode::Nice));
    assert_eq!(args.wrap, 60);

    let args: PrintArgs = parse("print", &["--index", "3", "-m", "raw", "-w", "0"]);
    assert_eq!(args.index, Some(3));
    assert_eq!(args.mode.parse::<PrintMode>(), Ok(PrintMode::Raw));
    assert_eq!(args.wrap, 0);
}

#[test]
fn test_align_args() {
    let args: AlignArgs = parse("align", &[]);
    assert_eq!((args.top, args.bottom), (0, 1));
    assert_eq!(args.wrap, 60);

    let args: AlignArgs = parse("align", &["--top", "4", "--bottom", "2", "--significance", "10"]);
    assert_eq!((args.top, args.bottom), (4, 2));
    assert_eq!(args.scoring.to_params().significance_threshold, 10);
}
