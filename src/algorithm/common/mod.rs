//! Pieces shared by the subcommands

pub mod args;

pub use args::ScoringArgs;

/// Sizes the global rayon pool; 0 means one thread per CPU.
///
/// Returns the thread count in effect. A pool that was already built is
/// kept as it is.
pub fn configure_threads(requested: usize, verbose: bool) -> usize {
    let num_threads = if requested == 0 {
        num_cpus::get()
    } else {
        requested
    };

    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        if verbose {
            eprintln!("[WARN] Keeping existing thread pool: {}", e);
        }
        return rayon::current_num_threads();
    }
    num_threads
}
