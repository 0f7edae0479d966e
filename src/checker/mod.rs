// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - link: the LinkRecord / LinkCheck data types
// - markdown: Extracts links from markdown text
// - http: Makes HTTP requests to check if links are alive
// - stats: Turns a list of links into total/unique/broken counts
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

mod http;
mod link;
mod markdown;
mod stats;

// Re-export public items from submodules
// This lets users write `checker::validate_links()` instead of
// `checker::http::validate_links()`
pub use http::{validate_links, HttpProbe, LinkProbe};
pub use link::{FailureKind, LinkCheck, LinkRecord};
pub use markdown::extract_links;
pub use stats::{summarize, StatsSummary};
