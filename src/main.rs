// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Crawl the site from each configured seed path
// 3. Render the sitemap document and write both output files
// 4. Exit with proper code (0 = success, 2 = error)
//
// Everything interesting lives in the crawler module; this file only wires
// the collaborators together.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod crawler;       // src/crawler/ - the crawl engine
mod page;          // src/page/ - page fetching and link extraction
mod sitemap;       // src/sitemap/ - sitemap rendering

use clap::Parser;  // Parser trait enables the parse() method

use cli::Cli;
use crawler::{crawl_site, default_skip_patterns, CrawlConfig, CrawlReport};
use page::HttpFetcher;
use sitemap::render_sitemap;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{Context, Result};

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = sitemap generated
//   Err = unexpected error (bad site URL, unwritable output file, ...)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    println!("🔍 Generating sitemap for: {}", cli.site_url);

    let fetcher = HttpFetcher::new()?;
    let config = CrawlConfig {
        seeds: cli.seeds.clone(),
        visit_external: cli.visit_external,
        skip_patterns: default_skip_patterns(),
    };

    let report = crawl_site(&fetcher, &cli.site_url, &config).await?;

    if cli.json {
        // Serialize the report to JSON and print
        let json_output = serde_json::to_string_pretty(&report)?;
        println!("{}", json_output);
    } else {
        print_summary(&report);
    }

    let xml = render_sitemap(&report.sitemap_urls);
    std::fs::write(&cli.output, xml)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    let mut skipped = report.skipped_urls.join("\n");
    if !skipped.is_empty() {
        skipped.push('\n');
    }
    std::fs::write(&cli.skipped_output, skipped)
        .with_context(|| format!("Failed to write {}", cli.skipped_output.display()))?;

    println!("✅ Sitemap written to {}", cli.output.display());
    println!("📋 Skipped URLs written to {}", cli.skipped_output.display());

    Ok(0)
}

// Prints a human-readable summary of the crawl
fn print_summary(report: &CrawlReport) {
    println!();
    println!("📊 Summary:");
    println!("   🗺️  Sitemap URLs: {}", report.sitemap_urls.len());
    println!("   🚫 Skipped URLs: {}", report.skipped_urls.len());
}
