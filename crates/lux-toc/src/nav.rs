//! Navigation tree loaded from the site configuration.
//!
//! The tree comes from the `nav` key of a YAML site config (`mkdocs.yml`).
//! Every list item is a mapping of `title: value` entries: a string value is
//! a page, a list value is a section with its own items.
//!
//! ```yaml
//! nav:
//!   - Home: index.md
//!   - Architecture:
//!       - Overview: architecture/architecture.md
//!       - Scope: architecture/scope.md
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_yaml::Value;

/// Entry in the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavNode {
    /// Group of pages and nested sections.
    Section {
        /// Section heading.
        title: String,
        /// Child entries in declaration order.
        children: Vec<NavNode>,
    },
    /// Single documentation page.
    Leaf {
        /// Link text.
        title: String,
        /// Page path relative to the documentation root.
        path: String,
    },
}

impl NavNode {
    /// Create a section node.
    pub fn section(title: impl Into<String>, children: Vec<NavNode>) -> Self {
        Self::Section {
            title: title.into(),
            children,
        }
    }

    /// Create a page node.
    pub fn leaf(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Leaf {
            title: title.into(),
            path: path.into(),
        }
    }

    /// Display title of the entry.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Section { title, .. } | Self::Leaf { title, .. } => title,
        }
    }
}

/// Collect `(title, path)` for every page in the tree, depth-first.
#[must_use]
pub fn collect_leaves(nav: &[NavNode]) -> Vec<(&str, &str)> {
    fn walk<'a>(nodes: &'a [NavNode], out: &mut Vec<(&'a str, &'a str)>) {
        for node in nodes {
            match node {
                NavNode::Section { children, .. } => walk(children, out),
                NavNode::Leaf { title, path } => out.push((title, path)),
            }
        }
    }

    let mut leaves = Vec::new();
    walk(nav, &mut leaves);
    leaves
}

/// Error type for navigation loading.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// The site config exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Site config path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The site config is not valid YAML.
    #[error("Invalid navigation YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load the navigation tree from a YAML site config file.
///
/// A missing file yields an empty tree.
pub fn load_navigation(path: &Path) -> Result<Vec<NavNode>, NavError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Navigation file not found, using empty navigation");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(NavError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    parse_navigation(&content)
}

/// Parse the navigation tree from YAML site config content.
///
/// Returns an empty tree when the content is empty or has no `nav` key.
pub fn parse_navigation(content: &str) -> Result<Vec<NavNode>, NavError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let root: Value = serde_yaml::from_str(trimmed)?;
    let nodes = match root.get("nav") {
        Some(Value::Sequence(items)) => build_nodes(items),
        None | Some(Value::Null) => Vec::new(),
        Some(_) => {
            tracing::warn!("`nav` is not a list, using empty navigation");
            Vec::new()
        }
    };
    tracing::debug!(pages = collect_leaves(&nodes).len(), "Navigation loaded");
    Ok(nodes)
}

fn build_nodes(items: &[Value]) -> Vec<NavNode> {
    let mut nodes = Vec::new();
    for item in items {
        let Value::Mapping(entries) = item else {
            tracing::debug!(entry = ?item, "Skipping navigation entry without a title");
            continue;
        };
        for (key, value) in entries {
            let Some(title) = key.as_str().filter(|t| !t.trim().is_empty()) else {
                tracing::debug!(key = ?key, "Skipping navigation entry with an invalid title");
                continue;
            };
            match value {
                Value::String(path) => nodes.push(NavNode::leaf(title, path.as_str())),
                Value::Sequence(children) => {
                    nodes.push(NavNode::section(title, build_nodes(children)));
                }
                other => {
                    tracing::debug!(title, value = ?other, "Skipping unsupported navigation entry");
                }
            }
        }
    }
    nodes
}
