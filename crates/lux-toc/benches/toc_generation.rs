//! Benchmarks for table-of-contents generation.

use std::fs;
use std::path::Path;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lux_toc::{NavNode, generate_toc, substitute_toc};

/// Create `sections` sections of `pages` pages each, writing every page to disk.
fn create_site(root: &Path, sections: usize, pages: usize) -> Vec<NavNode> {
    (0..sections)
        .map(|s| {
            let dir = root.join(format!("section-{s}"));
            fs::create_dir_all(&dir).unwrap();
            let children = (0..pages)
                .map(|p| {
                    let name = format!("page-{p}.md");
                    let content = match p % 3 {
                        0 => format!("---\ndescription: Page {p} of section {s}\n---\n# Page {p}\n"),
                        1 => format!("# Page {p}\n\n<!-- summary: Summary of page {p} -->\n"),
                        _ => format!(
                            "# Page {p}\n\nA paragraph with **bold** text and a [link](x.md) for page {p}.\n"
                        ),
                    };
                    fs::write(dir.join(&name), content).unwrap();
                    NavNode::leaf(format!("Page {p}"), format!("section-{s}/{name}"))
                })
                .collect();
            NavNode::section(format!("Section {s}"), children)
        })
        .collect()
}

fn bench_generate_toc(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_toc");

    for &(sections, pages) in &[(2, 5), (10, 10), (20, 25)] {
        let temp_dir = tempfile::tempdir().unwrap();
        let nav = create_site(temp_dir.path(), sections, pages);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{sections}x{pages}")),
            &nav,
            |b, nav| b.iter(|| generate_toc(nav, temp_dir.path())),
        );
    }

    group.finish();
}

fn bench_substitute_without_marker(c: &mut Criterion) {
    let temp_dir = tempfile::tempdir().unwrap();
    let nav = create_site(temp_dir.path(), 10, 10);
    let content = "# Page\n\nNo table of contents here.\n".repeat(100);

    c.bench_function("substitute_toc_passthrough", |b| {
        b.iter(|| substitute_toc(&content, &nav, temp_dir.path(), "<!-- AUTO_TOC -->"));
    });
}

criterion_group!(benches, bench_generate_toc, bench_substitute_without_marker);
criterion_main!(benches);
