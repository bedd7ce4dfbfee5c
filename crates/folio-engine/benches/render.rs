use criterion::{Criterion, criterion_group, criterion_main};
use folio_engine::{content::bundled_posts, render, resolve, search::filter};

fn generate_document(sections: usize) -> String {
    let mut doc = String::new();
    for i in 0..sections {
        doc.push_str(&format!("## Section {i} with **bold** text\n"));
        doc.push_str("A paragraph with *italic*, `code` and a stray * star.\n");
        doc.push_str("- **Item**: description\n");
        doc.push_str(&format!("{i}. ordered entry\n"));
        doc.push_str("> quoted *aside*\n\n");
        doc.push_str("```rust\nfn main() {}\n```\n");
    }
    doc
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let content = generate_document(100);
    group.bench_function("blocks", |b| {
        b.iter(|| render(std::hint::black_box(&content)));
    });
    group.bench_function("inline", |b| {
        b.iter(|| resolve(std::hint::black_box("The **DINA** model, *italic* and `code`")));
    });

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let posts: Vec<_> = (0..50).flat_map(|_| bundled_posts()).collect();
    c.bench_function("filter/query", |b| {
        b.iter(|| filter(std::hint::black_box(&posts), "cdm", None).len());
    });
}

criterion_group!(benches, bench_render, bench_filter);
criterion_main!(benches);
