use criterion::{criterion_group, criterion_main, Criterion};

use commonmark_html::convert;

/// A repeating block covering most constructs `convert` has to dispatch on:
/// headings, a blockquote, a tight list, a fenced code block, and an inline
/// mix of emphasis, a code span, and a reference link.
fn repeat_document(sections: usize) -> String {
    let mut out = String::new();
    for i in 0..sections {
        out.push_str(&format!(
            "# Section {i}\n\n\
             Some *emphasized* and **strong** text with a `code span` and a \
             [reference link][ref{i}], followed by a hard break.  \n\
             Second line of the paragraph.\n\n\
             > A block quote that spans\n\
             > two lines of quoted text.\n\n\
             - first item\n\
             - second item\n\
             - third item with [an inline link](https://example.com/{i})\n\n\
             ```rust\n\
             fn section_{i}() {{\n    println!(\"{i}\");\n}}\n\
             ```\n\n\
             [ref{i}]: https://example.com/ref/{i} \"Reference {i}\"\n\n"
        ));
    }
    out
}

fn long_documents(c: &mut Criterion) {
    let content = repeat_document(500);
    let mut group = c.benchmark_group("long documents");
    group.bench_function("convert", |b| {
        b.iter(|| convert(&content));
    });
    group.finish();
}

fn short_inlines(c: &mut Criterion) {
    let content = "*this ***has some* various things* that** \
         [create multiple elements](while/inline \"but without\") taking \
         _too_ much ![effort] to parse, and should `be a decent` test` \
         ``of ``whether this works quickly.\n";
    let mut group = c.benchmark_group("inlines");
    group.bench_function("convert", |b| {
        b.iter(|| convert(content));
    });
    group.finish();
}

criterion_group!(benches, long_documents, short_inlines);
criterion_main!(benches);
