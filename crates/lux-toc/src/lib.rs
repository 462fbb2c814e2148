//! Table-of-contents generation for the Lux documentation site.
//!
//! Renders a navigation tree into markdown (section headings, document tables,
//! and page links) and splices it into pages at a marker comment. Each page
//! gets a one-line description resolved from its own source file.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use lux_toc::{AutoToc, NavNode, TocSettings};
//!
//! let nav = vec![NavNode::leaf("Home", "index.md")];
//! let toc = AutoToc::new(TocSettings::default(), nav, Path::new("/nonexistent"));
//!
//! let page = toc.process("# Contents\n\n<!-- AUTO_TOC -->\n");
//! assert_eq!(page, "# Contents\n\n- [Home](index.md) - Documentation for Home\n");
//! ```

mod description;
mod frontmatter;
mod macros;
mod nav;
mod plugin;
mod render;

pub use description::{DescriptionSource, PageDescription, resolve_description};
pub use macros::{count_pages, expand_macros, render_nav_tree};
pub use nav::{NavError, NavNode, collect_leaves, load_navigation, parse_navigation};
pub use plugin::{AutoToc, DEFAULT_MARKER, TocSettings};
pub use render::{generate_toc, substitute_toc};
