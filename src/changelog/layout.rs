//! Blank-line layout rules applied to every promoted changelog
//!
//! - runs of blank lines collapse to one, leading and trailing blank lines are dropped
//! - every heading is preceded by exactly one blank line
//! - a release heading is directly followed by its first sub-section heading
//! - link reference definitions form one block preceded by a single blank line
//! - the document ends with exactly one newline
//!
//! Lines inside code blocks are left alone. Windows line endings are kept. Normalizing is
//! idempotent.

use super::{scan, Dialect, LineKind, RELEASE_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Emitted {
    Blank,
    ReleaseHeading,
    OtherHeading,
    Reference,
    Text,
}

/// `"\r\n"` when `text` uses Windows line endings, `"\n"` otherwise
pub(crate) fn line_ending(text: &str) -> &'static str {
    if text.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Normalize blank lines and the trailing newline of a changelog
pub fn normalize(dialect: Dialect, text: &str) -> String {
    let newline = line_ending(text);
    let mut out: Vec<(&str, Emitted)> = Vec::new();

    for line in scan(dialect, text) {
        match line.kind {
            LineKind::Blank => {
                if !matches!(out.last(), None | Some((_, Emitted::Blank))) {
                    out.push(("", Emitted::Blank));
                }
            }
            LineKind::Heading(heading) => {
                let is_subsection = heading.level > RELEASE_LEVEL;
                if is_subsection && last_content(&out) == Some(Emitted::ReleaseHeading) {
                    drop_trailing_blanks(&mut out);
                } else {
                    ensure_blank(&mut out);
                }
                let emitted = if heading.level == RELEASE_LEVEL {
                    Emitted::ReleaseHeading
                } else {
                    Emitted::OtherHeading
                };
                out.push((line.text, emitted));
            }
            LineKind::Reference(_) => {
                if last_content(&out) == Some(Emitted::Reference) {
                    drop_trailing_blanks(&mut out);
                } else {
                    ensure_blank(&mut out);
                }
                out.push((line.text, Emitted::Reference));
            }
            LineKind::Text => out.push((line.text, Emitted::Text)),
        }
    }

    drop_trailing_blanks(&mut out);

    let mut normalized = out
        .iter()
        .map(|(text, _)| *text)
        .collect::<Vec<_>>()
        .join(newline);
    normalized.push_str(newline);
    normalized
}

fn last_content(out: &[(&str, Emitted)]) -> Option<Emitted> {
    out.iter()
        .rev()
        .map(|(_, emitted)| *emitted)
        .find(|emitted| *emitted != Emitted::Blank)
}

fn drop_trailing_blanks(out: &mut Vec<(&str, Emitted)>) {
    while matches!(out.last(), Some((_, Emitted::Blank))) {
        out.pop();
    }
}

fn ensure_blank(out: &mut Vec<(&str, Emitted)>) {
    match out.last() {
        None | Some((_, Emitted::Blank)) => {}
        Some(_) => out.push(("", Emitted::Blank)),
    }
}
