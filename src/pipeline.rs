// src/pipeline.rs
// =============================================================================
// The whole md-links run, start to finish:
//
// 1. loader::resolve_input   - absolute path, must exist and be non-empty
// 2. loader::read_content    - whole file as text
// 3. checker::extract_links  - every [text](http...) in order
// 4. depending on OutputMode:
//      RawList        -> records as-is
//      AnnotatedList  -> validate, records with status
//      Stats          -> total/unique, no network
//      ValidatedStats -> validate, total/unique/broken
//
// Exactly one Ok or one Err comes back. Nothing partial.
// =============================================================================

use crate::checker::{self, HttpProbe, LinkProbe, LinkRecord, StatsSummary};
use crate::error::Result;
use crate::loader;
use crate::options::{Options, OutputMode};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// What a run produces: either the links or their counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MdLinksOutput {
    Links(Vec<LinkRecord>),
    Stats(StatsSummary),
}

impl MdLinksOutput {
    /// Broken links found by validation, `None` if this run did not validate.
    pub fn broken_count(&self) -> Option<usize> {
        match self {
            MdLinksOutput::Links(links) if links.iter().any(|l| l.check.is_some()) => {
                Some(links.iter().filter(|l| l.is_broken()).count())
            }
            MdLinksOutput::Links(_) => None,
            MdLinksOutput::Stats(stats) => stats.broken,
        }
    }
}

/// Scans `path` for markdown links, checking them with a default `HttpProbe`
/// when `options` ask for validation.
///
/// Must be awaited inside a tokio runtime.
pub async fn md_links(path: impl AsRef<Path>, options: Options) -> Result<MdLinksOutput> {
    md_links_with_probe(path, options, HttpProbe::new()).await
}

/// Same as [`md_links`] with a caller-supplied probe.
pub async fn md_links_with_probe<P: LinkProbe>(
    path: impl AsRef<Path>,
    options: Options,
    probe: P,
) -> Result<MdLinksOutput> {
    let file = loader::resolve_input(path.as_ref()).await?;
    let content = loader::read_content(&file).await?;
    let links = checker::extract_links(&content, &file);

    let mode = options.mode();
    info!(file = %file.display(), links = links.len(), ?mode, "scanning");

    let links = if mode.needs_network() {
        checker::validate_links(links, Arc::new(probe)).await?
    } else {
        links
    };

    let output = match mode {
        OutputMode::RawList | OutputMode::AnnotatedList => MdLinksOutput::Links(links),
        OutputMode::Stats => MdLinksOutput::Stats(checker::summarize(&links, false)),
        OutputMode::ValidatedStats => MdLinksOutput::Stats(checker::summarize(&links, true)),
    };
    Ok(output)
}
