// src/lib.rs
// =============================================================================
// md-links: find [text](http...) links in a markdown file, optionally check
// each one over HTTP, and return either the links or their counts.
//
// Modules:
// - loader: resolve and read the input file
// - checker: extract, validate and count links
// - options: the three flags and the output mode they select
// - pipeline: `md_links()`, which runs the stages in order
// - error: MdLinksError
// =============================================================================

pub mod checker;
pub mod error;
pub mod loader;
pub mod options;
pub mod pipeline;

pub use checker::{FailureKind, HttpProbe, LinkCheck, LinkProbe, LinkRecord, StatsSummary};
pub use error::{MdLinksError, Result};
pub use options::{Options, OutputMode};
pub use pipeline::{md_links, md_links_with_probe, MdLinksOutput};
