// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use clap::Parser;
use md_links::Options;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "md-links",
    version,
    about = "Find the links in a markdown file and check if they still work",
    long_about = "md-links extracts every [text](http...) link from one markdown file. \
                  It can request each link to see if it is alive, and print either the \
                  links or total/unique/broken counts."
)]
pub struct Cli {
    /// Markdown file to scan (relative or absolute)
    pub path: String,

    /// Request every link and show its HTTP status
    #[arg(long)]
    pub validate: bool,

    /// Print total and unique counts instead of the links
    ///
    /// Combined with --validate, also prints the broken count
    #[arg(long)]
    pub stats: bool,

    /// Request every link and print total, unique and broken counts
    #[arg(long)]
    pub validate_and_stats: bool,

    /// Output results in JSON format instead of a table
    #[arg(long)]
    pub json: bool,

    /// Give up on a single link after this many seconds (default: no limit)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Cli {
    pub fn options(&self) -> Options {
        Options::new()
            .validate(self.validate)
            .stats(self.stats)
            .validate_and_stats(self.validate_and_stats)
    }
}
