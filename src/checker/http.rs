// src/checker/http.rs
// =============================================================================
// This module checks if URLs are alive by making HTTP requests.
//
// Key functionality:
// - LinkProbe: the one seam to the network (tests swap in a fake)
// - HttpProbe: the real probe, one GET per link with reqwest
// - validate_links: checks every record at once and waits for all of them
//
// A request that fails never fails the batch. It becomes a
// LinkCheck::Failed on that record instead.
//
// Rust concepts:
// - Traits returning `impl Future`: async methods without extra crates
// - tokio::spawn + join_all: one task per link, all running together
// - Arc: share one probe between all tasks
// =============================================================================

use super::link::{FailureKind, LinkCheck, LinkRecord};
use crate::error::{MdLinksError, Result};
use futures::future::join_all;
use reqwest::Client;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

/// Something that can tell us what happens when a URL is requested.
///
/// Implementations must never fail: transport errors are reported as
/// `LinkCheck::Failed`.
pub trait LinkProbe: Send + Sync + 'static {
    fn check(&self, url: &str) -> impl Future<Output = LinkCheck> + Send;
}

/// Probe backed by a `reqwest::Client`.
///
/// `HttpProbe::new()` uses the client's defaults: no timeout, reqwest's own
/// redirect policy, no custom headers.
#[derive(Debug, Clone, Default)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a caller-built client (for example one with a timeout).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl LinkProbe for HttpProbe {
    async fn check(&self, url: &str) -> LinkCheck {
        match self.client.get(url).send().await {
            Ok(response) => analyze_response(&response),
            Err(e) => categorize_error(&e),
        }
    }
}

// Checks multiple links concurrently
//
// Every record is requested, duplicates included, with no limit on how many
// requests are in flight. Output order matches input order.
//
// Must be called inside a tokio runtime (tasks are spawned).
//
// Returns: every record annotated, or Validation if a task could not be joined
pub async fn validate_links<P: LinkProbe>(
    links: Vec<LinkRecord>,
    probe: Arc<P>,
) -> Result<Vec<LinkRecord>> {
    debug!(count = links.len(), "validating links");

    let handles: Vec<_> = links
        .iter()
        .map(|link| {
            let probe = Arc::clone(&probe);
            let href = link.href.clone();
            tokio::spawn(async move { probe.check(&href).await })
        })
        .collect();

    let joined = join_all(handles).await;

    links
        .into_iter()
        .zip(joined)
        .map(|(link, outcome)| match outcome {
            Ok(check) => Ok(link.with_check(check)),
            Err(e) => Err(MdLinksError::Validation(format!("check of {} aborted: {}", link.href, e))),
        })
        .collect()
}

// Turns any HTTP response into a LinkCheck
//
// The status code is kept as-is. Deciding what counts as broken
// is left to LinkCheck::is_ok.
fn analyze_response(response: &reqwest::Response) -> LinkCheck {
    let status = response.status();
    debug!(url = %response.url(), status = status.as_u16(), "link answered");

    LinkCheck::Response {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("").to_string(),
    }
}

// Categorizes different error types from reqwest
//
// reqwest wraps the interesting part (dns, refused, certificate) in its
// source chain. Only the causes are searched for keywords: the top-level
// message prints the request URL, and a URL like /ssl-guide says nothing
// about why the request failed.
fn categorize_error(error: &reqwest::Error) -> LinkCheck {
    let causes = source_chain(error).to_lowercase();

    let (kind, status_text) = if error.is_timeout() {
        (FailureKind::Timeout, "Request timed out".to_string())
    } else if error.is_redirect() {
        (FailureKind::TooManyRedirects, "Too many redirects".to_string())
    } else if causes.contains("certificate") || causes.contains("ssl") || causes.contains("tls") {
        (FailureKind::SslError, "SSL certificate error".to_string())
    } else if error.is_connect() {
        if causes.contains("dns") {
            (FailureKind::DnsError, "Could not resolve hostname".to_string())
        } else {
            (FailureKind::ConnectionRefused, "Connection failed".to_string())
        }
    } else {
        (FailureKind::Fail, full_message(error))
    };

    warn!(
        url = error.url().map(|u| u.as_str()).unwrap_or(""),
        code = kind.code(),
        error = %full_message(error),
        "link check failed"
    );

    LinkCheck::Failed { kind, status_text }
}

// Messages of every cause below the top-level error, joined with ": "
fn source_chain(error: &reqwest::Error) -> String {
    use std::error::Error as _;

    let mut causes = Vec::new();
    let mut source = error.source();
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }
    causes.join(": ")
}

fn full_message(error: &reqwest::Error) -> String {
    let causes = source_chain(error);
    if causes.is_empty() {
        error.to_string()
    } else {
        format!("{}: {}", error, causes)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why tokio::spawn instead of buffer_unordered?
//    - Every link is requested at the same time, no concurrency cap
//    - A spawned task that panics gives us a JoinError instead of taking the
//      whole run down, and that is our one Validation error
//
// 2. Why does join_all keep the order?
//    - It returns results in the order the futures were given, not the order
//      they finished, so zip() lines each result up with its record
//
// 3. What is `impl Future<Output = LinkCheck> + Send` in a trait?
//    - The trait method returns "some future"; each impl can just write
//      `async fn check(...)`
//    - `+ Send` lets that future move between tokio worker threads
// -----------------------------------------------------------------------------
