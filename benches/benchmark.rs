//! Performance benchmarks for dom-distiller.
//!
//! Run with: `cargo bench`
//!
//! - Full pipeline over a small synthetic article
//! - The relevant-element finder alone over a wide generated page

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dom_distiller::dom::{self, NodeRef, NodeSet};
use dom_distiller::finder::find_and_add_elements;
use dom_distiller::{distill, distill_with_options, DistillerOptions};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article</title>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <article>
        <h1>Sample Article Title</h1>
        <p>This is the first paragraph of the article. It contains some meaningful
        content that should be kept by the distiller.</p>
        <img src="figure.png" alt="A figure">
        <p>Here is a second paragraph with more content. The distillation should
        preserve the text while removing navigation and other boilerplate.</p>
        <table>
            <caption>Quarterly numbers</caption>
            <tr><th>Quarter</th><th>Revenue</th></tr>
            <tr><td>Q1</td><td>100</td></tr>
        </table>
    </article>
    <aside style="display:none">
        <h3>Related Articles</h3>
    </aside>
    <footer>
        <p>Copyright 2024</p>
    </footer>
</body>
</html>
"#;

fn bench_distill_default(c: &mut Criterion) {
    c.bench_function("distill_default", |b| {
        b.iter(|| distill(black_box(SAMPLE_HTML)));
    });
}

fn bench_distill_text_only(c: &mut Criterion) {
    let options = DistillerOptions {
        extract_text_only: true,
        ..DistillerOptions::default()
    };

    c.bench_function("distill_text_only", |b| {
        b.iter(|| distill_with_options(black_box(SAMPLE_HTML), black_box(&options)));
    });
}

/// Finder cost as the page grows; every other paragraph is content.
fn bench_finder_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("finder");

    for paragraphs in [100usize, 1_000, 10_000] {
        let html: String = (0..paragraphs)
            .map(|i| format!("<p>paragraph {i}</p><img src=\"{i}.png\">"))
            .collect();
        let doc = dom::parse(&html);
        let root = dom::body_or_root(&doc);
        let content: Vec<NodeRef> = doc
            .select("p")
            .nodes()
            .iter()
            .step_by(2)
            .flat_map(NodeRef::children)
            .collect();
        let empty = NodeSet::new();

        group.throughput(Throughput::Elements(paragraphs as u64));
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &content, |b, content| {
            b.iter(|| find_and_add_elements(black_box(content), &empty, &empty, &root));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_distill_default,
    bench_distill_text_only,
    bench_finder_scaling
);
criterion_main!(benches);
