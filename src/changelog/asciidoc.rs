//! AsciiDoc changelog syntax
//!
//! ```text
//! = Changelog
//!
//! == link:https://github.com/owner/repo/compare/v1.0.0...HEAD[Unreleased]
//! === Added
//! * Something new
//!
//! == link:https://github.com/owner/repo/releases/tag/v1.0.0[1.0.0] - 2024-01-01
//! ```
//!
//! Links always live in the heading, either through the `link:` macro or as a bare URL
//! followed by the link text in brackets.

use super::{Fence, Heading, LinkStyle, Reference};
use regex::Regex;
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(={1,6})[ \t]+(.*?)[ \t]*$").expect("heading pattern is valid"));

static LINK_MACRO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^link:(\S+?)\[([^\]]*)\]").expect("link macro pattern is valid")
});

static BARE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:https?|ftp)://\S+?)\[([^\]]*)\]").expect("bare link pattern is valid")
});

static BLOCK_DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:-{4,}|\.{4,}|\+{4,}|`{3,}.*)[ \t]*$").expect("delimiter pattern is valid")
});

/// Parse a section title (`== link:https://...[1.0.0] - 2024-01-01`)
pub(crate) fn parse_heading(line: &str) -> Option<Heading> {
    let captures = HEADING.captures(line)?;
    let level = captures.get(1)?.as_str().len();
    let content = captures.get(2)?.as_str();
    if content.is_empty() {
        return None;
    }

    if let Some(link) = LINK_MACRO.captures(content) {
        return Some(Heading {
            level,
            title: link.get(2)?.as_str().to_string(),
            url: Some(link.get(1)?.as_str().to_string()),
            style: LinkStyle::Macro,
        });
    }

    if let Some(link) = BARE_LINK.captures(content) {
        return Some(Heading {
            level,
            title: link.get(2)?.as_str().to_string(),
            url: Some(link.get(1)?.as_str().to_string()),
            style: LinkStyle::Inline,
        });
    }

    Some(Heading {
        level,
        title: content.to_string(),
        url: None,
        style: LinkStyle::Plain,
    })
}

/// AsciiDoc changelogs have no trailing reference block.
pub(crate) fn parse_reference(_line: &str) -> Option<Reference> {
    None
}

/// Listing, literal, passthrough or fenced block delimiter
pub(crate) fn fence(line: &str) -> Option<Fence> {
    if !BLOCK_DELIMITER.is_match(line) {
        return None;
    }
    let marker = line.chars().next()?;
    let len = line.chars().take_while(|c| *c == marker).count();
    Some(Fence {
        marker,
        len,
        bare: line[len..].trim().is_empty(),
    })
}

/// Delimited blocks close on the identical delimiter; backtick fences close like Markdown ones
pub(crate) fn closes_fence(open: Fence, line: Fence) -> bool {
    if open.marker == '`' {
        return line.bare && line.marker == '`' && line.len >= open.len;
    }
    line.marker == open.marker && line.len == open.len
}

/// Render a release-level heading
pub(crate) fn render_heading(style: LinkStyle, title: &str, url: &str, suffix: &str) -> String {
    match style {
        LinkStyle::Inline => format!("== {}[{}]{}", url, title, suffix),
        _ => format!("== link:{}[{}]{}", url, title, suffix),
    }
}
