// src/options.rs
// =============================================================================
// Pipeline configuration.
//
// Callers set three independent flags. The pipeline never branches on them
// directly: `Options::mode()` folds them into one `OutputMode` first.
// =============================================================================

use serde::{Deserialize, Serialize};

/// Flags accepted by `md_links()`. All default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Check every link over HTTP.
    pub validate: bool,
    /// Return counts instead of the link list.
    pub stats: bool,
    /// Check every link AND return counts, whatever the other two flags say.
    pub validate_and_stats: bool,
}

/// The shape of the result, derived from `Options`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Links as extracted, no network calls.
    RawList,
    /// Links annotated with their HTTP status.
    AnnotatedList,
    /// `total` and `unique` only, no network calls.
    Stats,
    /// `total`, `unique` and `broken`.
    ValidatedStats,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(mut self, on: bool) -> Self {
        self.validate = on;
        self
    }

    pub fn stats(mut self, on: bool) -> Self {
        self.stats = on;
        self
    }

    pub fn validate_and_stats(mut self, on: bool) -> Self {
        self.validate_and_stats = on;
        self
    }

    /// Reduces the flag combination to an output mode.
    ///
    /// `validate_and_stats` wins over everything else.
    pub fn mode(&self) -> OutputMode {
        match (self.validate_and_stats, self.validate, self.stats) {
            (true, _, _) => OutputMode::ValidatedStats,
            (false, true, true) => OutputMode::ValidatedStats,
            (false, true, false) => OutputMode::AnnotatedList,
            (false, false, true) => OutputMode::Stats,
            (false, false, false) => OutputMode::RawList,
        }
    }
}

impl OutputMode {
    /// Whether this mode issues HTTP requests.
    pub fn needs_network(&self) -> bool {
        matches!(self, OutputMode::AnnotatedList | OutputMode::ValidatedStats)
    }
}
