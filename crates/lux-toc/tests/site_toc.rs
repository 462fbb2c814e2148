//! End-to-end table-of-contents generation over an on-disk site.

use std::fs;
use std::path::Path;

use lux_toc::{
    AutoToc, DescriptionSource, NavNode, TocSettings, expand_macros, load_navigation,
    resolve_description,
};
use pretty_assertions::assert_eq;

const MKDOCS_YML: &str = r"
site_name: Universal Smart Lighting Control
nav:
  - Home: index.md
  - Architecture:
      - Technical Proposal: architecture/architecture.md
      - Scope: architecture/scope.md
  - Technical Strategy:
      - HA Strategy: technical-strategy/ha_strategy.md
      - ESPHome:
          - Proposal: technical-strategy/esphome_proposal.md
  - Resources: resources/links.md
";

fn write(root: &Path, name: &str, content: &str) {
    let path = root.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn create_site(root: &Path) {
    write(root, "mkdocs.yml", MKDOCS_YML);
    let docs = root.join("docs");
    write(
        &docs,
        "index.md",
        "# Lighting Docs\n\n<!-- AUTO_TOC -->\n\n{{ doc_count() }}\n",
    );
    write(
        &docs,
        "architecture/architecture.md",
        "---\ntitle: Architecture\ndescription: \"Main technical proposal for universal lighting control\"\n---\n<!-- summary: ignored -->\n# Architecture\n",
    );
    write(
        &docs,
        "architecture/scope.md",
        "# Scope\n\n<!-- Summary: Detailed scope definition and requirements -->\n",
    );
    write(
        &docs,
        "technical-strategy/ha_strategy.md",
        "# HA Strategy\n\nThe **core integration** approach and the [LightTransitionManager](ltm.md).\n",
    );
    // esphome_proposal.md and resources/links.md are intentionally absent
}

#[test]
fn test_render_site_index() {
    let temp_dir = tempfile::tempdir().unwrap();
    create_site(temp_dir.path());
    let docs = temp_dir.path().join("docs");

    let nav = load_navigation(&temp_dir.path().join("mkdocs.yml")).unwrap();
    let toc = AutoToc::new(TocSettings::default(), nav, &docs);
    let page = fs::read_to_string(docs.join("index.md")).unwrap();

    let rendered = toc.process(&expand_macros(&page, toc.nav()));

    let expected = "# Lighting Docs

- [Home](index.md) - Documentation for Home
### Architecture

| Document | Description |
|----------|-------------|
| [Technical Proposal](architecture/architecture.md) | Main technical proposal for universal lighting control |
| [Scope](architecture/scope.md) | Detailed scope definition and requirements |

### Technical Strategy

| Document | Description |
|----------|-------------|
| [HA Strategy](technical-strategy/ha_strategy.md) | The core integration approach and the LightTransitionManager. |

  #### ESPHome

  | Document | Description |
  |----------|-------------|
  | [Proposal](technical-strategy/esphome_proposal.md) | Documentation for Proposal |

- [Resources](resources/links.md) - Documentation for Resources

6
";
    assert_eq!(rendered, expected);
}

#[test]
fn test_marker_page_falls_back_to_default_description() {
    let temp_dir = tempfile::tempdir().unwrap();
    create_site(temp_dir.path());
    let docs = temp_dir.path().join("docs");

    // Only a heading, the marker, and a short macro line.
    let desc = resolve_description(&docs, "index.md", "Home");

    assert_eq!(desc.source, DescriptionSource::Default);
}

#[test]
fn test_pages_without_marker_are_untouched() {
    let temp_dir = tempfile::tempdir().unwrap();
    create_site(temp_dir.path());
    let docs = temp_dir.path().join("docs");
    let nav = load_navigation(&temp_dir.path().join("mkdocs.yml")).unwrap();
    let toc = AutoToc::new(TocSettings::default(), nav, &docs);

    let page = fs::read_to_string(docs.join("architecture/scope.md")).unwrap();

    assert_eq!(toc.process(&page), page);
}

#[test]
fn test_repeated_renders_are_identical() {
    let temp_dir = tempfile::tempdir().unwrap();
    create_site(temp_dir.path());
    let docs = temp_dir.path().join("docs");
    let nav = load_navigation(&temp_dir.path().join("mkdocs.yml")).unwrap();
    let toc = AutoToc::new(TocSettings::default(), nav, &docs);

    let first = toc.process("<!-- AUTO_TOC -->");
    let second = toc.process("<!-- AUTO_TOC -->");

    assert_eq!(first, second);
}

#[test]
fn test_missing_navigation_renders_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nav = load_navigation(&temp_dir.path().join("mkdocs.yml")).unwrap();
    let toc = AutoToc::new(TocSettings::default(), nav, temp_dir.path());

    assert_eq!(toc.process("before<!-- AUTO_TOC -->after"), "beforeafter");
}

#[test]
fn test_sections_render_in_declared_order() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nav = vec![
        NavNode::section("B", vec![NavNode::leaf("Second", "2.md")]),
        NavNode::section("A", vec![NavNode::leaf("First", "1.md")]),
    ];

    let toc = AutoToc::new(TocSettings::default(), nav, temp_dir.path());
    let rendered = toc.process("<!-- AUTO_TOC -->");

    let b = rendered.find("### B").unwrap();
    let a = rendered.find("### A").unwrap();
    assert!(b < a);
}
