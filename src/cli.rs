// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The tool has exactly one job, so there are no subcommands: one positional
// seed URL plus a couple of output/tuning flags.
// =============================================================================

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "site-probe",
    version = "0.1.0",
    about = "Crawl a website and report response health per page",
    long_about = "site-probe crawls every reachable same-host page starting from a seed URL, \
                  prints a live progress table, and finishes with a summary of problem pages \
                  and the slowest page."
)]
pub struct Cli {
    /// Seed URL to start crawling from (e.g., https://example.com)
    pub seed_url: String,

    /// Output the final report in JSON format instead of text
    #[arg(long)]
    pub json: bool,

    /// Maximum number of in-flight fetches within one crawl wave
    #[arg(long, default_value_t = 16)]
    pub concurrency: usize,
}
