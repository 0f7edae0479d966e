// src/checker/markdown.rs
// =============================================================================
// This module extracts links from Markdown text.
//
// This is NOT a markdown parser. We only look for the literal shape
//   [label](http://...)   or   [label](https://...)
// with a regex, once over the whole document. Reference-style links, nested
// brackets and escapes are not handled.
//
// Rust concepts:
// - LazyLock: compile the regex once, on first use
// - captures_iter: every non-overlapping match, left to right
// =============================================================================

use super::link::LinkRecord;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

// Group 1 = label (anything but ']' or a line break)
// Group 2 = URL: scheme, then a first char that is not whitespace, '?', '#',
//           '.' or a paren, then no whitespace, with one level of balanced
//           parens allowed, e.g. https://en.wikipedia.org/wiki/Rust_(language)
const MARKDOWN_LINK_PATTERN: &str =
    r"\[([^\]\r\n]*)\]\((https?://[^\s?#.()][^\s()]*(?:\([^\s()]*\)[^\s()]*)*)\)";

static MARKDOWN_LINK: LazyLock<Regex> = LazyLock::new(|| {
    // The pattern is a constant, so a failure here is a programmer error
    Regex::new(MARKDOWN_LINK_PATTERN).expect("markdown link pattern is valid")
});

// Extracts all HTTP/HTTPS links from Markdown text
//
// Parameters:
//   markdown: the file content
//   file: absolute path of the file, copied onto every record
//
// Returns: records in the order they appear, none of them checked yet
//
// Example input:
//   "Check out [Rust](https://www.rust-lang.org)!"
//
// Example output:
//   [LinkRecord { href: "https://www.rust-lang.org", text: "Rust", .. }]
pub fn extract_links(markdown: &str, file: &Path) -> Vec<LinkRecord> {
    let links: Vec<LinkRecord> = MARKDOWN_LINK
        .captures_iter(markdown)
        .map(|caps| LinkRecord::new(&caps[2], &caps[1], file))
        .collect();

    debug!(file = %file.display(), count = links.len(), "extracted links");
    links
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a regex and not pulldown-cmark?
//    - We only want one literal shape, [label](http...)
//    - A real markdown parser would also resolve reference links, which we skip
//
// 2. What does &caps[2] give us?
//    - Indexing Captures returns the text of that group as &str
//    - It panics if the group did not match, but both of ours always do
//
// 3. Why LazyLock?
//    - Regex::new is slow compared to matching
//    - LazyLock runs the closure once, the first time MARKDOWN_LINK is used
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn hrefs(links: &[LinkRecord]) -> Vec<&str> {
        links.iter().map(|l| l.href.as_str()).collect()
    }

    #[test]
    fn test_extract_simple_link() {
        let file = Path::new("/docs/README.md");
        let links = extract_links("[Google](http://google.com/)", file);
        assert_eq!(
            links,
            vec![LinkRecord::new("http://google.com/", "Google", "/docs/README.md")]
        );
    }

    #[test]
    fn test_extract_multiple_links_in_order() {
        let markdown = r#"
# Resources

- [Rust](https://www.rust-lang.org)
- [Cargo](https://doc.rust-lang.org/cargo/)
- [Docs](https://doc.rust-lang.org/)
        "#;
        let links = extract_links(markdown, Path::new("/r.md"));
        assert_eq!(
            hrefs(&links),
            vec![
                "https://www.rust-lang.org",
                "https://doc.rust-lang.org/cargo/",
                "https://doc.rust-lang.org/",
            ]
        );
        assert_eq!(links[1].text, "Cargo");
        assert!(links.iter().all(|l| l.file == Path::new("/r.md")));
    }

    #[test]
    fn test_adjacent_links_on_one_line() {
        let links = extract_links("[a](http://a.io)[b](https://b.io/x)", Path::new("/r.md"));
        assert_eq!(hrefs(&links), vec!["http://a.io", "https://b.io/x"]);
    }

    #[test]
    fn test_stray_bracket_does_not_leak_into_label() {
        let markdown = "Array a[i is odd.\n\nSee [docs](https://docs.rs)";
        let links = extract_links(markdown, Path::new("/r.md"));
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text, "docs");
        assert_eq!(links[0].href, "https://docs.rs");
    }

    #[test]
    fn test_label_does_not_span_lines() {
        let links = extract_links("[first\nsecond](https://example.com)", Path::new("/r.md"));
        assert!(links.is_empty());
    }

    #[test]
    fn test_url_with_balanced_parens() {
        let markdown = "[Rust](https://en.wikipedia.org/wiki/Rust_(programming_language)) and [b](https://b.io)";
        let links = extract_links(markdown, Path::new("/r.md"));
        assert_eq!(
            hrefs(&links),
            vec!["https://en.wikipedia.org/wiki/Rust_(programming_language)", "https://b.io"]
        );
    }

    #[test]
    fn test_adjacent_links_with_parens_still_split() {
        let markdown = "[a](http://a.io/x_(y))[b](https://b.io)";
        let links = extract_links(markdown, Path::new("/r.md"));
        assert_eq!(hrefs(&links), vec!["http://a.io/x_(y)", "https://b.io"]);
    }

    #[test]
    fn test_repeated_links_are_all_kept() {
        let markdown = "[one](https://x.io) and [two](https://x.io)";
        let links = extract_links(markdown, Path::new("/r.md"));
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].text, "one");
        assert_eq!(links[1].text, "two");
    }

    #[test]
    fn test_empty_label_is_a_link() {
        let links = extract_links("[](https://example.com)", Path::new("/r.md"));
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text, "");
    }

    #[test]
    fn test_skip_mailto_links() {
        let links = extract_links("Email me at [email](mailto:test@example.com)", Path::new("/r.md"));
        assert!(links.is_empty());
    }

    #[test]
    fn test_skip_ftp_and_schemeless_links() {
        let markdown = "[ftp](ftp://files.example.com) [bare](www.example.com)";
        assert!(extract_links(markdown, Path::new("/r.md")).is_empty());
    }

    #[test]
    fn test_skip_relative_links() {
        let links = extract_links("See [docs](./docs/README.md)", Path::new("/r.md"));
        assert!(links.is_empty());
    }

    #[test]
    fn test_skip_malformed_after_scheme() {
        let markdown = "[a](http:// spaced) [b](https://.hidden) [c](http://?q=1) [d](https://#top)";
        assert!(extract_links(markdown, Path::new("/r.md")).is_empty());
    }

    #[test]
    fn test_url_with_whitespace_is_not_a_link() {
        let links = extract_links("[a](https://example.com/a b)", Path::new("/r.md"));
        assert!(links.is_empty());
    }

    #[test]
    fn test_without_brackets_is_not_a_link() {
        let links = extract_links(r#"("https://example.com") https://example.com"#, Path::new("/r.md"));
        assert!(links.is_empty());
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let markdown = "[a](https://a.io) text [b](http://b.io/path?x=1#frag)";
        let file = Path::new("/r.md");
        assert_eq!(extract_links(markdown, file), extract_links(markdown, file));
    }
}
