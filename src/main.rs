use anyhow::Result;
use clap::{Parser, Subcommand};
use gaest::algorithm::{allpairs, cluster, inspect};

#[derive(Parser)]
#[command(name = "gaest")]
#[command(version = "0.1.0")]
#[command(about = "Clusters ESTs by local alignment and a genetic algorithm", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for the best clustering with a genetic algorithm
    Cluster(cluster::ClusterArgs),

    /// Cluster by aligning every pair of sequences
    Allpairs(allpairs::AllPairsArgs),

    /// Print sequences in raw, FASTA or numbered layout
    Print(inspect::PrintArgs),

    /// Align two sequences and show the alignment
    Align(inspect::AlignArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Cluster(args) => {
            cluster::run(args)?;
        }
        Commands::Allpairs(args) => {
            allpairs::run(args)?;
        }
        Commands::Print(args) => {
            inspect::run_print(args)?;
        }
        Commands::Align(args) => {
            inspect::run_align(args)?;
        }
    }
    Ok(())
}
