//! Markdown changelog syntax ("Keep a Changelog" layout)
//!
//! ```text
//! # Changelog
//!
//! ## [Unreleased]
//! ### Added
//! - Something new
//!
//! ## [1.0.0] - 2024-01-01
//!
//! [Unreleased]: https://github.com/owner/repo/compare/v1.0.0...HEAD
//! [1.0.0]: https://github.com/owner/repo/releases/tag/v1.0.0
//! ```
//!
//! Headings may also carry their link inline: `## [Unreleased](https://...)`.

use super::{Fence, Heading, LinkStyle, Reference};
use regex::Regex;
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})[ \t]+(.*?)[ \t]*$").expect("heading pattern is valid"));

static INLINE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([^\]]+)\]\(([^)\s]+)\)").expect("inline link pattern is valid")
});

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\]]+)\]").expect("bracket pattern is valid"));

static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([^\]^][^\]]*)\]:[ \t]*(\S+)").expect("reference pattern is valid")
});

/// Parse an ATX heading (`## [1.0.0] - 2024-01-01`)
pub(crate) fn parse_heading(line: &str) -> Option<Heading> {
    let captures = HEADING.captures(line)?;
    let level = captures.get(1)?.as_str().len();
    let content = captures.get(2)?.as_str();
    if content.is_empty() {
        return None;
    }

    if let Some(link) = INLINE_LINK.captures(content) {
        return Some(Heading {
            level,
            title: link.get(1)?.as_str().to_string(),
            url: Some(link.get(2)?.as_str().to_string()),
            style: LinkStyle::Inline,
        });
    }

    if let Some(bracketed) = BRACKETED.captures(content) {
        return Some(Heading {
            level,
            title: bracketed.get(1)?.as_str().to_string(),
            url: None,
            style: LinkStyle::Reference,
        });
    }

    Some(Heading {
        level,
        title: content.to_string(),
        url: None,
        style: LinkStyle::Plain,
    })
}

/// Parse a link reference definition (`[1.0.0]: https://...`)
pub(crate) fn parse_reference(line: &str) -> Option<Reference> {
    let captures = REFERENCE.captures(line)?;
    Some(Reference {
        label: captures.get(1)?.as_str().to_string(),
        url: captures.get(2)?.as_str().to_string(),
    })
}

/// Fenced code block delimiter: three or more backticks or tildes
pub(crate) fn fence(line: &str) -> Option<Fence> {
    let trimmed = line.trim_start();
    let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|c| *c == marker).count();
    if len < 3 {
        return None;
    }
    Some(Fence {
        marker,
        len,
        bare: trimmed[len..].trim().is_empty(),
    })
}

/// A closing fence repeats the opening character at least as many times, with no info string
pub(crate) fn closes_fence(open: Fence, line: Fence) -> bool {
    line.bare && line.marker == open.marker && line.len >= open.len
}

/// Render a release-level heading
pub(crate) fn render_heading(style: LinkStyle, title: &str, url: &str, suffix: &str) -> String {
    match style {
        LinkStyle::Inline | LinkStyle::Macro => format!("## [{}]({}){}", title, url, suffix),
        LinkStyle::Reference | LinkStyle::Plain => format!("## [{}]{}", title, suffix),
    }
}

/// Render a link reference definition
pub(crate) fn render_reference(label: &str, url: &str) -> String {
    format!("[{}]: {}", label, url)
}
