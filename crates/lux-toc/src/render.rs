//! Markdown rendering of the navigation tree.
//!
//! Sections become a heading followed by a `Document | Description` table
//! with one row per page. Nested sections follow their parent's table with
//! their own heading and table, one heading level deeper. Pages outside any
//! section become list items.

use std::path::Path;

use crate::description::resolve_description;
use crate::nav::NavNode;

const TABLE_HEADER: &str = "| Document | Description |";
const TABLE_DIVIDER: &str = "|----------|-------------|";

/// Heading level of top-level sections.
const BASE_HEADING_LEVEL: usize = 3;
const MAX_HEADING_LEVEL: usize = 6;

/// Render the table of contents for `nav`, reading page descriptions from `docs_dir`.
///
/// An empty tree renders as an empty string.
#[must_use]
pub fn generate_toc(nav: &[NavNode], docs_dir: &Path) -> String {
    let mut lines = Vec::new();
    render_nodes(nav, docs_dir, 0, &mut lines);
    lines.join("\n")
}

/// Replace every occurrence of `marker` in `content` with the rendered table of contents.
///
/// Content without the marker is returned unchanged and no page is read.
#[must_use]
pub fn substitute_toc(content: &str, nav: &[NavNode], docs_dir: &Path, marker: &str) -> String {
    if marker.is_empty() || !content.contains(marker) {
        return content.to_owned();
    }

    let toc = generate_toc(nav, docs_dir);
    tracing::debug!(
        occurrences = content.matches(marker).count(),
        "Substituting table of contents"
    );
    content.replace(marker, &toc)
}

fn render_nodes(nodes: &[NavNode], docs_dir: &Path, depth: usize, lines: &mut Vec<String>) {
    for node in nodes {
        match node {
            NavNode::Section { title, children } => {
                render_section(title, children, docs_dir, depth, lines);
            }
            NavNode::Leaf { title, path } => {
                let description = resolve_description(docs_dir, path, title);
                lines.push(format!(
                    "{}- [{title}]({path}) - {description}",
                    indent(depth)
                ));
            }
        }
    }
}

fn render_section(
    title: &str,
    children: &[NavNode],
    docs_dir: &Path,
    depth: usize,
    lines: &mut Vec<String>,
) {
    let indent = indent(depth);
    let hashes = "#".repeat((BASE_HEADING_LEVEL + depth).min(MAX_HEADING_LEVEL));

    lines.push(format!("{indent}{hashes} {title}"));
    lines.push(String::new());
    lines.push(format!("{indent}{TABLE_HEADER}"));
    lines.push(format!("{indent}{TABLE_DIVIDER}"));
    for child in children {
        if let NavNode::Leaf { title, path } = child {
            let description = resolve_description(docs_dir, path, title);
            lines.push(format!(
                "{indent}| [{title}]({path}) | {} |",
                escape_cell(&description.text)
            ));
        }
    }
    lines.push(String::new());

    for child in children {
        if let NavNode::Section { title, children } = child {
            render_section(title, children, docs_dir, depth + 1, lines);
        }
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Escape pipes so the text stays inside one table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
