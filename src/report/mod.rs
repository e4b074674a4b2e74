// src/report/mod.rs
// =============================================================================
// This module turns the collected crawl results into the final report.
//
// Submodules:
// - table: fixed-width row rendering shared by progress output and report
//
// The report has three parts:
// - a summary line (page count, total crawl time, average response time)
// - a "Problems" section grouping every non-200 page by status code
// - the "Slowest page" (first record with the maximum latency)
//
// The average is total elapsed crawl time divided by page count, not the
// mean of the individual latencies. That matches the long-standing output
// of this tool; scripts parse it, so it stays.
// =============================================================================

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

use crate::crawl::CrawlOutcome;
use crate::page::PageInfo;

pub mod table;

// Separator line around the crawl output, matching the historical format
pub const SEPARATOR: &str = "---------";

// Prints the post-crawl report, either as text or as JSON
pub fn print_report(outcome: &CrawlOutcome, json: bool) -> Result<()> {
    if json {
        let report = JsonReport::new(outcome);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text_report(outcome);
    }
    Ok(())
}

fn print_text_report(outcome: &CrawlOutcome) {
    println!("{SEPARATOR}");
    println!("{}", summary_line(outcome.pages.len(), outcome.elapsed));

    let problems = problem_pages(&outcome.pages);
    if !problems.is_empty() {
        println!("Problems");
        println!("--------");
        for (status, pages) in &problems {
            println!(" {status}");
            for page in pages {
                println!("   {}", page.url);
            }
            println!();
        }
    }

    println!("Slowest page");
    if let Some(slowest) = slowest_page(&outcome.pages) {
        println!("{}", table::page_row(slowest));
    }

    println!("done.");
}

// The one-line crawl summary:
//   Processed: <n> links, total time: <s>s, average response: <ms>ms
//
// Average response is elapsed/count (see module header), rounded to whole
// milliseconds.
pub fn summary_line(processed: usize, elapsed: Duration) -> String {
    let average_ms = if processed > 0 {
        elapsed.as_millis() as f64 / processed as f64
    } else {
        0.0
    };
    format!(
        "Processed: {} links, total time: {:.0}s, average response: {:.0}ms",
        processed,
        elapsed.as_secs_f64(),
        average_ms
    )
}

// Groups every non-200 page by status code. BTreeMap keeps the iteration
// order stable within a run (ascending status code).
pub fn problem_pages(pages: &[PageInfo]) -> BTreeMap<u16, Vec<&PageInfo>> {
    let mut problems: BTreeMap<u16, Vec<&PageInfo>> = BTreeMap::new();
    for page in pages.iter().filter(|page| page.status != 200) {
        problems.entry(page.status).or_default().push(page);
    }
    problems
}

// The page with the maximum latency. Ties go to the earliest record in
// result order, so only a strictly greater latency displaces the current
// candidate.
pub fn slowest_page(pages: &[PageInfo]) -> Option<&PageInfo> {
    let mut slowest: Option<&PageInfo> = None;
    for page in pages {
        match slowest {
            Some(current) if page.latency <= current.latency => {}
            _ => slowest = Some(page),
        }
    }
    slowest
}

// Machine-readable variant of the full report for --json
#[derive(Serialize)]
struct JsonReport<'a> {
    processed: usize,
    total_time_ms: u64,
    average_response_ms: u64,
    pages: &'a [PageInfo],
    problems: BTreeMap<u16, Vec<&'a Url>>,
    slowest: Option<&'a PageInfo>,
}

impl<'a> JsonReport<'a> {
    fn new(outcome: &'a CrawlOutcome) -> Self {
        let processed = outcome.pages.len();
        let total_time_ms = outcome.elapsed.as_millis() as u64;
        let average_response_ms = if processed > 0 {
            total_time_ms / processed as u64
        } else {
            0
        };
        let problems = problem_pages(&outcome.pages)
            .into_iter()
            .map(|(status, pages)| (status, pages.into_iter().map(|page| &page.url).collect()))
            .collect();

        Self {
            processed,
            total_time_ms,
            average_response_ms,
            pages: &outcome.pages,
            problems,
            slowest: slowest_page(&outcome.pages),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str, status: u16, latency_ms: u64) -> PageInfo {
        PageInfo {
            url: Url::parse(url).unwrap(),
            status,
            content_type: "text/html".to_string(),
            latency: Duration::from_millis(latency_ms),
            links: Vec::new(),
        }
    }

    #[test]
    fn summary_uses_elapsed_over_count_not_mean_latency() {
        // 4 pages, 1000ms total elapsed: the reported average is 250ms no
        // matter what the individual latencies were.
        let line = summary_line(4, Duration::from_millis(1000));
        assert_eq!(line, "Processed: 4 links, total time: 1s, average response: 250ms");
    }

    #[test]
    fn summary_with_no_pages_does_not_divide_by_zero() {
        let line = summary_line(0, Duration::from_secs(2));
        assert_eq!(line, "Processed: 0 links, total time: 2s, average response: 0ms");
    }

    #[test]
    fn problems_exclude_ok_pages_and_group_by_status() {
        let pages = vec![
            page("https://example.com/ok", 200, 10),
            page("https://example.com/gone", 404, 10),
            page("https://example.com/also-gone", 404, 10),
            page("https://example.com/broken", 500, 10),
            page("https://example.com/dead", 0, 10),
        ];

        let problems = problem_pages(&pages);
        assert_eq!(problems.len(), 3);
        assert_eq!(problems[&404].len(), 2);
        assert_eq!(problems[&500].len(), 1);
        assert_eq!(problems[&0].len(), 1);
        assert!(!problems.contains_key(&200));
    }

    #[test]
    fn no_problems_means_empty_map() {
        let pages = vec![page("https://example.com/", 200, 10)];
        assert!(problem_pages(&pages).is_empty());
    }

    #[test]
    fn slowest_tie_goes_to_the_first_record() {
        let pages = vec![
            page("https://example.com/fast", 200, 50),
            page("https://example.com/slow-first", 200, 200),
            page("https://example.com/slow-second", 200, 200),
        ];

        let slowest = slowest_page(&pages).unwrap();
        assert_eq!(slowest.url.as_str(), "https://example.com/slow-first");
    }

    #[test]
    fn slowest_of_empty_results_is_none() {
        assert!(slowest_page(&[]).is_none());
    }

    #[test]
    fn json_report_serializes() {
        let outcome = CrawlOutcome {
            pages: vec![
                page("https://example.com/", 200, 10),
                page("https://example.com/gone", 404, 30),
            ],
            elapsed: Duration::from_millis(100),
        };

        let value = serde_json::to_value(JsonReport::new(&outcome)).unwrap();
        assert_eq!(value["processed"], 2);
        assert_eq!(value["total_time_ms"], 100);
        assert_eq!(value["average_response_ms"], 50);
        assert_eq!(value["problems"]["404"][0], "https://example.com/gone");
        assert_eq!(value["slowest"]["url"], "https://example.com/gone");
        assert_eq!(value["pages"][0]["latency_ms"], 10);
    }
}
