//! Benchmarks for document rendering.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use penmark_renderer::DocumentRenderer;

/// Generate markdown content with the given structure.
fn generate_markdown(sections: usize, paragraphs_per_section: usize) -> String {
    let mut md = String::with_capacity(sections * paragraphs_per_section * 200);
    md.push_str("# Document Title\n\n");

    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n"));
        for j in 0..paragraphs_per_section {
            md.push_str(&format!(
                "This is paragraph {j} in section {i}. It contains **bold** and *italic* text.\n\n"
            ));
        }
        md.push_str("@@@\n<SectionWidget index={");
        md.push_str(&i.to_string());
        md.push_str("} />\n@@@\n\n```rust\nfn main() {}\n```\n\n");
    }
    md
}

fn bench_render_simple(c: &mut Criterion) {
    let renderer = DocumentRenderer::new();

    c.bench_function("render_simple_markdown", |b| {
        b.iter(|| renderer.render("# Hello\n\nSimple content.\n"));
    });
}

fn bench_render_document(c: &mut Criterion) {
    let renderer = DocumentRenderer::new();
    let markdown = generate_markdown(10, 4);

    let mut group = c.benchmark_group("render_document");
    group.throughput(Throughput::Bytes(markdown.len() as u64));
    group.bench_function("mixed_blocks", |b| {
        b.iter(|| renderer.render(&markdown));
    });
    group.finish();
}

fn bench_render_raw_heavy(c: &mut Criterion) {
    let renderer = DocumentRenderer::new();
    let mut markdown = String::new();
    for i in 0..50 {
        markdown.push_str(&format!("@@@\n<Component id={{{i}}}>\n  <Child />\n</Component>\n@@@\n\n"));
    }

    c.bench_function("render_raw_heavy", |b| {
        b.iter(|| renderer.render(&markdown));
    });
}

criterion_group!(
    benches,
    bench_render_simple,
    bench_render_document,
    bench_render_raw_heavy
);
criterion_main!(benches);
