// src/checker/link.rs
// =============================================================================
// The data that flows through the pipeline.
//
// - LinkRecord: one [text](href) found in the file
// - LinkCheck: what happened when we requested the href
// - FailureKind: why a request never got an HTTP response
//
// Serialized with serde so the CLI can print JSON. A checked record comes out
// flat: {"href", "text", "file", "status", "statusText"}.
// =============================================================================

use serde::Serialize;
use std::path::PathBuf;

/// One markdown link found in the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    /// The absolute http(s) URL between the parentheses.
    pub href: String,
    /// The label between the brackets (may be empty).
    pub text: String,
    /// Absolute path of the file the link came from.
    pub file: PathBuf,
    /// Set only by validation.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub check: Option<LinkCheck>,
}

impl LinkRecord {
    pub fn new(href: impl Into<String>, text: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
            file: file.into(),
            check: None,
        }
    }

    /// Returns the record with its check result attached.
    pub fn with_check(mut self, check: LinkCheck) -> Self {
        self.check = Some(check);
        self
    }

    /// A record counts as broken unless its check answered exactly 200.
    ///
    /// Unchecked records are never broken, so a broken count is only meaningful
    /// over validated records (see `summarize`).
    pub fn is_broken(&self) -> bool {
        self.check.as_ref().is_some_and(|check| !check.is_ok())
    }
}

/// Outcome of requesting one link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LinkCheck {
    /// The server answered.
    Response {
        status: u16,
        #[serde(rename = "statusText")]
        status_text: String,
    },
    /// No HTTP response at all.
    Failed {
        #[serde(rename = "status")]
        kind: FailureKind,
        #[serde(rename = "statusText")]
        status_text: String,
    },
}

impl LinkCheck {
    /// Only a plain 200 is OK; redirects and other 2xx codes are not.
    pub fn is_ok(&self) -> bool {
        matches!(self, LinkCheck::Response { status: 200, .. })
    }

    /// Numeric code for responses, `None` for transport failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LinkCheck::Response { status, .. } => Some(*status),
            LinkCheck::Failed { .. } => None,
        }
    }

    /// "200 OK" for responses, "CONNECTION_REFUSED Connection failed" for failures.
    pub fn status_label(&self) -> String {
        match self {
            LinkCheck::Response { status, status_text } => format!("{} {}", status, status_text),
            LinkCheck::Failed { kind, status_text } => format!("{} {}", kind.code(), status_text),
        }
    }

    pub fn status_text(&self) -> &str {
        match self {
            LinkCheck::Response { status_text, .. } | LinkCheck::Failed { status_text, .. } => {
                status_text
            }
        }
    }
}

/// Transport-level failure codes, shown in place of an HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureKind {
    Timeout,
    DnsError,
    ConnectionRefused,
    SslError,
    TooManyRedirects,
    Fail,
}

impl FailureKind {
    pub fn code(&self) -> &'static str {
        match self {
            FailureKind::Timeout => "TIMEOUT",
            FailureKind::DnsError => "DNS_ERROR",
            FailureKind::ConnectionRefused => "CONNECTION_REFUSED",
            FailureKind::SslError => "SSL_ERROR",
            FailureKind::TooManyRedirects => "TOO_MANY_REDIRECTS",
            FailureKind::Fail => "FAIL",
        }
    }
}
