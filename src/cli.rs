// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// There is a single invocation mode, so unlike a multi-tool CLI we need no
// subcommand enum: one struct holds everything.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "sitemap-scout",
    version = "0.1.0",
    about = "A CLI tool to crawl a website and generate an XML sitemap",
    long_about = "sitemap-scout crawls a website starting from one or more seed paths, \
                  follows every in-scope hyperlink, and writes an XML sitemap of the pages \
                  it reached plus a list of the URLs it deliberately skipped."
)]
pub struct Cli {
    /// Website base URL to crawl (e.g., https://example.com)
    ///
    /// This is a positional argument (required, no flag needed)
    pub site_url: String,

    /// Seed path to start crawling from; may be given multiple times
    ///
    /// Each seed becomes its own traversal, confined to its own subtree,
    /// but all seeds share one visited set
    #[arg(long = "seed", value_name = "PATH", default_value = "/")]
    pub seeds: Vec<String>,

    /// Also follow links whose host differs from the site's own host
    ///
    /// This is an optional flag: --visit-external
    #[arg(long)]
    pub visit_external: bool,

    /// Where to write the sitemap document
    #[arg(long, value_name = "FILE", default_value = "sitemap.xml")]
    pub output: PathBuf,

    /// Where to write the skipped-URL list
    #[arg(long, value_name = "FILE", default_value = "skipped_urls.txt")]
    pub skipped_output: PathBuf,

    /// Print the crawl report as JSON instead of a summary
    ///
    /// This is an optional flag: --json
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["sitemap-scout", "https://example.com"]);
        assert_eq!(cli.site_url, "https://example.com");
        assert_eq!(cli.seeds, vec!["/"]);
        assert!(!cli.visit_external);
        assert_eq!(cli.output, PathBuf::from("sitemap.xml"));
        assert_eq!(cli.skipped_output, PathBuf::from("skipped_urls.txt"));
        assert!(!cli.json);
    }

    #[test]
    fn test_repeated_seeds_replace_the_default() {
        let cli = Cli::parse_from([
            "sitemap-scout",
            "https://example.com",
            "--seed",
            "/docs",
            "--seed",
            "/blog",
        ]);
        assert_eq!(cli.seeds, vec!["/docs", "/blog"]);
    }

    #[test]
    fn test_visit_external_flag() {
        let cli = Cli::parse_from(["sitemap-scout", "https://example.com", "--visit-external"]);
        assert!(cli.visit_external);
    }
}
