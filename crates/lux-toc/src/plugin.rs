//! Per-page table-of-contents injection.

use std::path::{Path, PathBuf};

use crate::nav::NavNode;
use crate::render::substitute_toc;

/// Marker replaced by the table of contents unless overridden.
pub const DEFAULT_MARKER: &str = "<!-- AUTO_TOC -->";

/// Injection settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocSettings {
    /// When false, pages pass through unchanged.
    pub enabled: bool,
    /// Literal text replaced by the table of contents.
    pub marker: String,
}

impl Default for TocSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            marker: DEFAULT_MARKER.to_owned(),
        }
    }
}

/// Table-of-contents injector for one site build.
///
/// Holds the navigation tree and documentation root; [`process`](Self::process)
/// is called once per page and reads nothing but the pages listed in the tree.
#[derive(Clone, Debug)]
pub struct AutoToc {
    settings: TocSettings,
    nav: Vec<NavNode>,
    docs_dir: PathBuf,
}

impl AutoToc {
    /// Create an injector for the given navigation tree and documentation root.
    pub fn new(settings: TocSettings, nav: Vec<NavNode>, docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            settings,
            nav,
            docs_dir: docs_dir.into(),
        }
    }

    /// Injection settings.
    #[must_use]
    pub fn settings(&self) -> &TocSettings {
        &self.settings
    }

    /// Navigation tree.
    #[must_use]
    pub fn nav(&self) -> &[NavNode] {
        &self.nav
    }

    /// Documentation root.
    #[must_use]
    pub fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    /// Replace the marker in page content with the table of contents.
    #[must_use]
    pub fn process(&self, content: &str) -> String {
        if !self.settings.enabled {
            return content.to_owned();
        }
        substitute_toc(content, &self.nav, &self.docs_dir, &self.settings.marker)
    }
}
