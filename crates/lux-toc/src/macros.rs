//! Page macros computed from the navigation tree.
//!
//! Supported calls, written as `{{ name() }}` in page content:
//! - `nav_tree`: nested bullet list of sections and pages
//! - `doc_count`: number of pages in the navigation

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::nav::{NavNode, collect_leaves};

static MACRO_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*(nav_tree|doc_count)\s*\(\s*\)\s*\}\}").expect("invalid macro regex")
});

/// Render the navigation as a nested bullet list.
///
/// Sections show the number of their direct entries; pages are links.
#[must_use]
pub fn render_nav_tree(nav: &[NavNode]) -> String {
    fn walk(nodes: &[NavNode], depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        for node in nodes {
            match node {
                NavNode::Section { title, children } => {
                    lines.push(format!(
                        "{indent}- **{title}** ({} pages)",
                        children.len()
                    ));
                    walk(children, depth + 1, lines);
                }
                NavNode::Leaf { title, path } => {
                    lines.push(format!("{indent}- [{title}]({path})"));
                }
            }
        }
    }

    let mut lines = Vec::new();
    walk(nav, 0, &mut lines);
    lines.join("\n")
}

/// Count pages at every depth of the navigation.
#[must_use]
pub fn count_pages(nav: &[NavNode]) -> usize {
    collect_leaves(nav).len()
}

/// Expand `{{ nav_tree() }}` and `{{ doc_count() }}` calls in page content.
#[must_use]
pub fn expand_macros(content: &str, nav: &[NavNode]) -> String {
    MACRO_CALL
        .replace_all(content, |caps: &Captures<'_>| match &caps[1] {
            "nav_tree" => render_nav_tree(nav),
            _ => count_pages(nav).to_string(),
        })
        .into_owned()
}
