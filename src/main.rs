// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Validate the seed URL (the only fatal-at-entry condition)
// 3. Run the crawl to exhaustion of reachable same-host pages
// 4. Print the final report
// 5. Exit with proper code (0 = clean, 1 = problem pages found, 2 = error)
// =============================================================================

mod cli;
mod crawl;
mod page;
mod report;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::Cli;
use page::fetch::Fetcher;
use url::Url;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // An unusable seed is the one error worth dying for: without it there is
    // no well-defined crawl to run. Everything past this point is recovered
    // into PageInfo records instead.
    let seed = Url::parse(&cli.seed_url)
        .with_context(|| format!("Invalid seed URL '{}'", cli.seed_url))?;
    if !matches!(seed.scheme(), "http" | "https") {
        bail!("Seed URL must be http or https: {}", cli.seed_url);
    }
    if seed.host_str().is_none() {
        bail!("Seed URL has no host: {}", cli.seed_url);
    }

    println!("{}", seed);
    println!("{}", report::SEPARATOR);

    let fetcher = Fetcher::new()?;
    let outcome = crawl::crawl(seed, cli.concurrency, |url| fetcher.fetch_page(url)).await;

    report::print_report(&outcome, cli.json)?;

    // Exit code mirrors the report: any non-200 page counts as a problem
    let has_problems = outcome.pages.iter().any(|page| page.status != 200);
    Ok(if has_problems { 1 } else { 0 })
}
