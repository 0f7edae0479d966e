// src/checker/stats.rs
// =============================================================================
// Reduces a list of link records to counts.
//
// - total:  every record, duplicates included
// - unique: distinct href values
// - broken: records whose check did not answer exactly 200 (only when asked)
// =============================================================================

use super::link::LinkRecord;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Aggregate counts for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    pub total: usize,
    pub unique: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broken: Option<usize>,
}

// Builds the summary
//
// Parameters:
//   links: extracted (and maybe validated) records
//   count_broken: whether to include the broken count; only pass true for
//                 validated records, unchecked ones are never counted broken
pub fn summarize(links: &[LinkRecord], count_broken: bool) -> StatsSummary {
    let unique = links
        .iter()
        .map(|link| link.href.as_str())
        .collect::<HashSet<_>>()
        .len();

    let broken = count_broken.then(|| links.iter().filter(|link| link.is_broken()).count());

    let summary = StatsSummary {
        total: links.len(),
        unique,
        broken,
    };
    debug!(?summary, "summarized links");
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::link::{FailureKind, LinkCheck};
    use serde_json::json;

    fn checked(href: &str, status: u16) -> LinkRecord {
        LinkRecord::new(href, "x", "/r.md").with_check(LinkCheck::Response {
            status,
            status_text: String::new(),
        })
    }

    #[test]
    fn test_total_and_unique_without_broken() {
        let links = vec![
            LinkRecord::new("https://a.io", "a", "/r.md"),
            LinkRecord::new("https://a.io", "again", "/r.md"),
        ];
        assert_eq!(
            summarize(&links, false),
            StatsSummary { total: 2, unique: 1, broken: None }
        );
    }

    #[test]
    fn test_broken_counts_everything_but_200() {
        let links = vec![
            checked("https://ok.io", 200),
            checked("https://moved.io", 301),
            checked("https://missing.io", 404),
            LinkRecord::new("https://down.io", "x", "/r.md").with_check(LinkCheck::Failed {
                kind: FailureKind::Timeout,
                status_text: "Request timed out".to_string(),
            }),
        ];
        assert_eq!(
            summarize(&links, true),
            StatsSummary { total: 4, unique: 4, broken: Some(3) }
        );
    }

    #[test]
    fn test_repeated_broken_link_counts_each_time() {
        let links = vec![checked("https://missing.io", 404), checked("https://missing.io", 404)];
        let summary = summarize(&links, true);
        assert_eq!(summary.unique, 1);
        assert_eq!(summary.broken, Some(2));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            summarize(&[], true),
            StatsSummary { total: 0, unique: 0, broken: Some(0) }
        );
    }

    #[test]
    fn test_serialize_omits_missing_broken() {
        let summary = StatsSummary { total: 2, unique: 1, broken: None };
        assert_eq!(serde_json::to_value(summary).unwrap(), json!({"total": 2, "unique": 1}));
    }
}
