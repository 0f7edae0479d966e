// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Run the md-links pipeline on the given file
// 3. Print the links or the stats
// 4. Exit with proper code (0 = success, 1 = broken links, 2 = error)
// =============================================================================

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use md_links::{md_links_with_probe, HttpProbe, LinkRecord, MdLinksOutput, StatsSummary};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_logging();

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

// Logs go to stderr so --json output on stdout stays parseable
// RUST_LOG=md_links=debug shows every extraction and check
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// Returns:
//   Ok(0) = no broken links (or nothing was validated)
//   Ok(1) = broken links found
//   Err   = the file could not be loaded or validation did not finish
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let options = cli.options();

    let probe = match cli.timeout {
        Some(secs) => HttpProbe::with_client(
            reqwest::Client::builder()
                .timeout(Duration::from_secs(secs))
                .build()?,
        ),
        None => HttpProbe::new(),
    };

    if !cli.json {
        println!("🔍 Scanning: {}", cli.path);
        if options.mode().needs_network() {
            println!("🌐 Checking links...\n");
        }
    }

    let output = md_links_with_probe(&cli.path, options, probe).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match &output {
            MdLinksOutput::Links(links) => print_links(links),
            MdLinksOutput::Stats(stats) => print_stats(stats),
        }
    }

    match output.broken_count() {
        Some(broken) if broken > 0 => Ok(1),
        _ => Ok(0),
    }
}

// Prints links as a human-readable table in the terminal
fn print_links(links: &[LinkRecord]) {
    if links.is_empty() {
        println!("✅ No links found");
        return;
    }

    let validated = links.iter().any(|l| l.check.is_some());

    if validated {
        println!("{:<60} {:<37} {:<30}", "URL", "STATUS", "TEXT");
    } else {
        println!("{:<60} {:<30}", "URL", "TEXT");
    }
    println!("{}", "=".repeat(120));

    for link in links {
        let url_display = truncate(&link.href, 57);
        let text_display = truncate(&link.text, 30);

        match &link.check {
            Some(check) => {
                let status = check.status_label();
                let marker = if check.is_ok() { "✅" } else { "❌" };
                println!(
                    "{:<60} {} {:<34} {:<30}",
                    url_display,
                    marker,
                    truncate(&status, 34),
                    text_display
                );
            }
            None => println!("{:<60} {:<30}", url_display, text_display),
        }
    }

    println!();
    println!("📄 {}", links[0].file.display());
}

fn print_stats(stats: &StatsSummary) {
    println!("📊 Summary:");
    println!("   📋 Total: {}", stats.total);
    println!("   🔗 Unique: {}", stats.unique);
    if let Some(broken) = stats.broken {
        println!("   ❌ Broken: {}", broken);
    }
}

// Truncates on a char boundary so multi-byte labels never panic
fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let kept: String = value.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        value.to_string()
    }
}
