//! Changelog promotion
//!
//! Turns the "Unreleased" section of a changelog into a dated release section and starts a new,
//! empty "Unreleased" section above it. Documents are matched line by line against the
//! dialect's heading and link patterns rather than parsed into a tree, so everything outside
//! the promoted section is kept as written.
//!
//! Supported dialects:
//! - [`Dialect::Markdown`]: `## [1.0.0] - 2024-01-01` headings with inline or reference links
//! - [`Dialect::AsciiDoc`]: `== link:URL[1.0.0] - 2024-01-01` headings

pub mod asciidoc;
pub mod layout;
pub mod markdown;

use crate::checks::Checks;
use crate::domain::{check_sequential_release, Release, SemanticVersion};
use crate::error::{ReleasePrepError, Result};
use log::debug;
use std::fmt;

/// Heading level of release sections (`##` / `==`)
pub(crate) const RELEASE_LEVEL: usize = 2;

const UNRELEASED: &str = "Unreleased";

/// Surface syntax of a changelog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Markdown,
    AsciiDoc,
}

impl Dialect {
    /// Dialect for a file extension (without the dot), case-insensitive
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "md" | "markdown" => Some(Dialect::Markdown),
            "adoc" | "asciidoc" => Some(Dialect::AsciiDoc),
            _ => None,
        }
    }

    fn parse_heading(self, line: &str) -> Option<Heading> {
        match self {
            Dialect::Markdown => markdown::parse_heading(line),
            Dialect::AsciiDoc => asciidoc::parse_heading(line),
        }
    }

    fn parse_reference(self, line: &str) -> Option<Reference> {
        match self {
            Dialect::Markdown => markdown::parse_reference(line),
            Dialect::AsciiDoc => asciidoc::parse_reference(line),
        }
    }

    fn fence(self, line: &str) -> Option<Fence> {
        match self {
            Dialect::Markdown => markdown::fence(line),
            Dialect::AsciiDoc => asciidoc::fence(line),
        }
    }

    fn closes_fence(self, open: Fence, line: Fence) -> bool {
        match self {
            Dialect::Markdown => markdown::closes_fence(open, line),
            Dialect::AsciiDoc => asciidoc::closes_fence(open, line),
        }
    }

    fn render_heading(self, style: LinkStyle, title: &str, url: &str, suffix: &str) -> String {
        match self {
            Dialect::Markdown => markdown::render_heading(style, title, url, suffix),
            Dialect::AsciiDoc => asciidoc::render_heading(style, title, url, suffix),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Markdown => write!(f, "Markdown"),
            Dialect::AsciiDoc => write!(f, "AsciiDoc"),
        }
    }
}

/// How a heading links to the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LinkStyle {
    /// `[title](url)` or `url[title]`
    Inline,
    /// AsciiDoc `link:url[title]`
    Macro,
    /// `[title]` resolved through a `[title]: url` definition
    Reference,
    /// No link syntax at all
    Plain,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Heading {
    pub level: usize,
    pub title: String,
    pub url: Option<String>,
    pub style: LinkStyle,
}

impl Heading {
    fn is_unreleased(&self) -> bool {
        self.level == RELEASE_LEVEL && self.title.trim().eq_ignore_ascii_case(UNRELEASED)
    }

    fn version(&self) -> Option<SemanticVersion> {
        SemanticVersion::parse(&self.title).ok()
    }
}

/// A `[label]: url` link definition
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Reference {
    pub label: String,
    pub url: String,
}

impl Reference {
    /// Definitions for the Unreleased section or a released version
    fn is_changelog_link(&self) -> bool {
        self.label.trim().eq_ignore_ascii_case(UNRELEASED)
            || SemanticVersion::extract(&self.label).is_some()
    }
}

/// A code or literal block delimiter line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fence {
    /// Repeated delimiter character (`` ` ``, `~`, `-`, ...)
    pub marker: char,
    /// Length of the delimiter run
    pub len: usize,
    /// Nothing but whitespace follows the run
    pub bare: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum LineKind {
    Blank,
    Heading(Heading),
    Reference(Reference),
    Text,
}

#[derive(Debug, Clone)]
pub(crate) struct Line<'a> {
    pub text: &'a str,
    pub kind: LineKind,
}

/// Classify every line of `text`; lines inside code blocks are always [`LineKind::Text`]
///
/// A block only ends on a delimiter that closes the one that opened it, so a ```` ``` ```` line
/// inside a `~~~` block is plain text.
pub(crate) fn scan(dialect: Dialect, text: &str) -> Vec<Line<'_>> {
    let mut open: Option<Fence> = None;
    text.lines()
        .map(|line| {
            let kind = if let Some(opener) = open {
                if dialect
                    .fence(line)
                    .is_some_and(|fence| dialect.closes_fence(opener, fence))
                {
                    open = None;
                }
                LineKind::Text
            } else if let Some(fence) = dialect.fence(line) {
                open = Some(fence);
                LineKind::Text
            } else if line.trim().is_empty() {
                LineKind::Blank
            } else if let Some(heading) = dialect.parse_heading(line) {
                LineKind::Heading(heading)
            } else if let Some(reference) = dialect
                .parse_reference(line)
                .filter(Reference::is_changelog_link)
            {
                LineKind::Reference(reference)
            } else {
                LineKind::Text
            };
            Line { text: line, kind }
        })
        .collect()
}

/// One section of a changelog
///
/// `release` is `None` for the Unreleased section. `previous` is the version of the section
/// that follows in document order and drives the "compare" link.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangelogSection {
    pub repository: Option<String>,
    pub previous: Option<SemanticVersion>,
    pub release: Option<Release>,
    pub body: String,
}

impl ChangelogSection {
    /// Heading text: `Unreleased` or the version
    pub fn title(&self) -> String {
        match &self.release {
            Some(release) => release.version.to_string(),
            None => UNRELEASED.to_string(),
        }
    }

    /// Text following the heading link (` - YYYY-MM-DD` for releases)
    pub fn suffix(&self) -> String {
        match &self.release {
            Some(release) => format!(" - {}", release.date_string()),
            None => String::new(),
        }
    }

    /// Repository link for the heading
    ///
    /// - Unreleased: `<repo>/compare/v<previous>...HEAD`
    /// - Release after another release: `<repo>/compare/v<previous>...v<version>`
    /// - First release: `<repo>/releases/tag/v<version>`
    pub fn link(&self) -> Option<String> {
        let repository = self.repository.as_deref()?;
        let link = match (&self.release, &self.previous) {
            (None, Some(previous)) => format!("{}/compare/v{}...HEAD", repository, previous),
            (None, None) => repository.to_string(),
            (Some(release), Some(previous)) => format!(
                "{}/compare/v{}...v{}",
                repository, previous, release.version
            ),
            (Some(release), None) => {
                format!("{}/releases/tag/v{}", repository, release.version)
            }
        };
        Some(link)
    }
}

/// Strip compare/release/tree suffixes from a changelog link to get the repository URL
///
/// # Example
/// ```ignore
/// assert_eq!(repository_url("https://github.com/o/r/compare/v1.0.0...HEAD"), "https://github.com/o/r");
/// ```
pub fn repository_url(link: &str) -> String {
    const SUFFIXES: [&str; 5] = ["/compare/", "/releases/", "/tree/", "/commits/", "/commit/"];

    let cut = SUFFIXES
        .iter()
        .filter_map(|suffix| link.find(suffix))
        .min()
        .unwrap_or(link.len());
    link[..cut].trim_end_matches('/').to_string()
}

/// Promote the Unreleased section of `original` to `release`
///
/// # Arguments
/// * `dialect` - Surface syntax of the document
/// * `original` - Raw changelog text
/// * `release` - Version and date being released
/// * `checks` - Optional validations (sequential release)
///
/// # Returns
/// * `Ok(String)` - The promoted, normalized document
/// * `Err(MissingUnreleasedSection)` - No Unreleased heading
/// * `Err(EmptyUnreleasedSection)` - Nothing under the Unreleased heading
/// * `Err(MissingRepositoryLink)` - No inline link or reference definition for Unreleased
/// * `Err(NonSequentialRelease | DuplicateReleaseVersion)` - Sequential check failed
pub fn promote_changelog(
    dialect: Dialect,
    original: &str,
    release: &Release,
    checks: &Checks,
) -> Result<String> {
    let lines = scan(dialect, original);

    let (start, unreleased) = lines
        .iter()
        .enumerate()
        .find_map(|(index, line)| match &line.kind {
            LineKind::Heading(heading) if heading.is_unreleased() => Some((index, heading)),
            _ => None,
        })
        .ok_or(ReleasePrepError::MissingUnreleasedSection)?;

    let end = lines[start + 1..]
        .iter()
        .position(|line| match &line.kind {
            LineKind::Heading(heading) => heading.level <= RELEASE_LEVEL,
            LineKind::Reference(_) => true,
            _ => false,
        })
        .map_or(lines.len(), |offset| start + 1 + offset);

    let newline = layout::line_ending(original);
    let body: Vec<&str> = trim_blank_lines(&lines[start + 1..end])
        .iter()
        .map(|line| line.text)
        .collect();
    if body.is_empty() {
        return Err(ReleasePrepError::EmptyUnreleasedSection);
    }

    let (link, style, reference_index) = match &unreleased.url {
        Some(url) => (url.clone(), unreleased.style, None),
        None => {
            let (index, reference) = lines
                .iter()
                .enumerate()
                .find_map(|(index, line)| match &line.kind {
                    LineKind::Reference(reference)
                        if reference.label.trim().eq_ignore_ascii_case(UNRELEASED) =>
                    {
                        Some((index, reference))
                    }
                    _ => None,
                })
                .ok_or(ReleasePrepError::MissingRepositoryLink)?;
            (reference.url.clone(), LinkStyle::Reference, Some(index))
        }
    };
    let repository = repository_url(&link);

    if checks.sequential {
        let prior_versions: Vec<SemanticVersion> = lines
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != start)
            .filter_map(|(_, line)| match &line.kind {
                LineKind::Heading(heading) if heading.level == RELEASE_LEVEL => heading.version(),
                _ => None,
            })
            .collect();
        check_sequential_release(&release.version, &prior_versions)?;
    }

    let latest_prior = lines.get(end).and_then(|line| match &line.kind {
        LineKind::Heading(heading) if heading.level == RELEASE_LEVEL => heading.version(),
        _ => None,
    });
    debug!(
        "Promoting {} Unreleased section to {} (previous: {})",
        dialect,
        release,
        latest_prior
            .as_ref()
            .map_or_else(|| "none".to_string(), |v| v.to_string())
    );

    let new_unreleased = ChangelogSection {
        repository: Some(repository.clone()),
        previous: Some(release.version.clone()),
        release: None,
        body: String::new(),
    };
    let promoted = ChangelogSection {
        repository: Some(repository),
        previous: latest_prior,
        release: Some(release.clone()),
        body: body.join(newline),
    };

    let mut replacement = Vec::new();
    let mut references = Vec::new();
    for section in [&new_unreleased, &promoted] {
        let url = section.link().unwrap_or_default();
        replacement.push(dialect.render_heading(style, &section.title(), &url, &section.suffix()));
        if !section.body.is_empty() {
            replacement.push(section.body.clone());
        }
        replacement.push(String::new());
        if reference_index.is_some() {
            references.push(markdown::render_reference(&section.title(), &url));
        }
    }

    let mut output: Vec<String> = Vec::with_capacity(lines.len() + replacement.len());
    for (index, line) in lines.iter().enumerate() {
        if index == start {
            output.append(&mut replacement);
        } else if index > start && index < end {
            continue;
        } else if Some(index) == reference_index {
            output.append(&mut references);
        } else {
            output.push(line.text.to_string());
        }
    }

    Ok(layout::normalize(dialect, &output.join(newline)))
}

fn trim_blank_lines<'a, 'b>(lines: &'b [Line<'a>]) -> &'b [Line<'a>] {
    let is_content = |line: &Line<'_>| !line.text.trim().is_empty();
    match lines.iter().position(is_content) {
        Some(first) => {
            let last = lines.iter().rposition(is_content).unwrap_or(first);
            &lines[first..=last]
        }
        None => &[],
    }
}
