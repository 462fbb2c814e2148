//! Page description resolution.
//!
//! A page's description is taken from the first source that yields one:
//!
//! 1. `description`, `summary`, `abstract`, or `desc` in YAML frontmatter
//! 2. an inline `<!-- description: ... -->` comment
//! 3. an inline `<!-- summary: ... -->` comment
//! 4. the first substantial paragraph after the first heading
//! 5. `Documentation for <title>`
//!
//! Resolution never fails: unreadable pages and malformed metadata fall
//! through to the next source.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::frontmatter::{frontmatter_description, split_frontmatter};

/// Paragraph lines must be longer than this (in characters) to describe a page.
const MIN_PARAGRAPH_CHARS: usize = 20;

/// Paragraph descriptions are cut to this many characters.
const MAX_PARAGRAPH_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

const FENCES: [&str; 2] = ["```", "~~~"];

static DESCRIPTION_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<!--[ \t]*description:([^\n]*?)-->").expect("invalid description comment regex")
});

static SUMMARY_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<!--[ \t]*summary:([^\n]*?)-->").expect("invalid summary comment regex")
});

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("invalid link regex"));

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*|__([^_]+)__").expect("invalid bold regex"));

static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*|\b_([^_]+)_\b").expect("invalid italic regex"));

/// Where a page description came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionSource {
    /// Frontmatter `description`/`summary`/`abstract`/`desc` key.
    Frontmatter,
    /// `<!-- description: ... -->` comment.
    DescriptionComment,
    /// `<!-- summary: ... -->` comment.
    SummaryComment,
    /// First substantial paragraph line.
    Paragraph,
    /// Generated from the navigation title.
    Default,
}

impl fmt::Display for DescriptionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Frontmatter => "frontmatter",
            Self::DescriptionComment => "description comment",
            Self::SummaryComment => "summary comment",
            Self::Paragraph => "paragraph",
            Self::Default => "default",
        };
        f.write_str(label)
    }
}

/// Single-line description of a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageDescription {
    /// Description text.
    pub text: String,
    /// Source the text was taken from.
    pub source: DescriptionSource,
}

impl fmt::Display for PageDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Page content handed to each extractor.
struct PageSource<'a> {
    path: &'a str,
    content: &'a str,
}

type Extractor = fn(&PageSource<'_>) -> Option<String>;

/// Extractors in priority order.
const EXTRACTORS: [(DescriptionSource, Extractor); 4] = [
    (DescriptionSource::Frontmatter, from_frontmatter),
    (DescriptionSource::DescriptionComment, from_description_comment),
    (DescriptionSource::SummaryComment, from_summary_comment),
    (DescriptionSource::Paragraph, from_first_paragraph),
];

/// Resolve the description of the page at `path` (relative to `docs_dir`).
///
/// Falls back to `Documentation for <title>` when the page is missing,
/// unreadable, or yields nothing usable.
#[must_use]
pub fn resolve_description(docs_dir: &Path, path: &str, title: &str) -> PageDescription {
    read_page(docs_dir, path)
        .and_then(|content| describe_content(path, &content))
        .unwrap_or_else(|| PageDescription {
            text: format!("Documentation for {title}"),
            source: DescriptionSource::Default,
        })
}

/// Run the extractor chain over page content.
pub(crate) fn describe_content(path: &str, content: &str) -> Option<PageDescription> {
    let page = PageSource { path, content };
    EXTRACTORS.iter().find_map(|(source, extract)| {
        extract(&page).map(|text| PageDescription {
            text: single_line(&text),
            source: *source,
        })
    })
}

fn read_page(docs_dir: &Path, path: &str) -> Option<String> {
    let Some(relative) = contained_path(path) else {
        tracing::warn!(path, "Page path escapes the documentation root, using default description");
        return None;
    };

    let full_path = docs_dir.join(relative);
    fs::read_to_string(&full_path)
        .inspect_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                tracing::debug!(path = %full_path.display(), "Page not found, using default description");
            } else {
                tracing::warn!(path = %full_path.display(), error = %e, "Failed to read page, using default description");
            }
        })
        .ok()
}

/// Accept only relative paths that stay inside the documentation root.
fn contained_path(path: &str) -> Option<&Path> {
    let path = Path::new(path);
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        .then_some(path)
}

fn from_frontmatter(page: &PageSource<'_>) -> Option<String> {
    let (yaml, _) = split_frontmatter(page.content);
    frontmatter_description(yaml?)
        .inspect_err(|e| {
            tracing::warn!(path = page.path, error = %e, "Failed to parse frontmatter, skipping");
        })
        .ok()
        .flatten()
}

fn from_description_comment(page: &PageSource<'_>) -> Option<String> {
    comment_text(&DESCRIPTION_COMMENT, page.content)
}

fn from_summary_comment(page: &PageSource<'_>) -> Option<String> {
    comment_text(&SUMMARY_COMMENT, page.content)
}

fn comment_text(pattern: &Regex, content: &str) -> Option<String> {
    let caps = pattern.captures(content)?;
    let text = caps[1].trim();
    (!text.is_empty()).then(|| text.to_owned())
}

fn from_first_paragraph(page: &PageSource<'_>) -> Option<String> {
    let (_, body) = split_frontmatter(page.content);
    let lines = prose_lines(body);
    let start = lines.iter().position(|line| is_heading(line)).map_or(0, |i| i + 1);

    lines[start..]
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !is_heading(line) && !line.starts_with("<!--"))
        .map(strip_inline_markup)
        .find(|text| text.chars().count() > MIN_PARAGRAPH_CHARS)
        .map(truncate)
}

/// Lines of `body` outside fenced code blocks. Fence lines are dropped too.
fn prose_lines(body: &str) -> Vec<&str> {
    let mut open_fence: Option<&str> = None;
    body.lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            let fence = FENCES.into_iter().find(|f| trimmed.starts_with(f));
            match (open_fence, fence) {
                (None, Some(f)) => {
                    open_fence = Some(f);
                    false
                }
                (Some(open), Some(f)) if open == f => {
                    open_fence = None;
                    false
                }
                (Some(_), _) => false,
                (None, None) => true,
            }
        })
        .collect()
}

fn is_heading(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Reduce links to their text and drop bold/italic markers.
fn strip_inline_markup(line: &str) -> String {
    let text = LINK.replace_all(line, "$1");
    let text = BOLD.replace_all(&text, "${1}${2}");
    let text = ITALIC.replace_all(&text, "${1}${2}");
    text.trim().to_owned()
}

fn truncate(text: String) -> String {
    match text.char_indices().nth(MAX_PARAGRAPH_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text,
    }
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
