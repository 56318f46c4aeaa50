use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

// Import from the library
use publication_list::group::sort_and_group;
use publication_list::normalize::normalize_entries;
use publication_list::parse::{EntryParser, FallbackParser};
use publication_list::text::decode_latex;

fn sample_bibliography(entries: usize) -> String {
    (0..entries)
        .map(|i| {
            format!(
                "@inproceedings{{key{i},\n  title = {{On Problem {i} for Caf\\'e Agents}},\n  author = {{Alcaraz, B. and M{{\\\"u}}ller, K. and Doe, J.}},\n  booktitle = {{Proceedings of Conference {i}}},\n  year = {{{year}}},\n  doi = {{10.1000/conf.{i}}}\n}}\n",
                i = i,
                year = 1990 + (i % 35),
            )
        })
        .collect()
}

fn bench_fallback_parse(c: &mut Criterion) {
    let text = sample_bibliography(200);

    let mut group = c.benchmark_group("fallback_parse");
    group.throughput(Throughput::Elements(200));

    group.bench_function("parse_200_entries", |b| {
        b.iter(|| black_box(FallbackParser.parse(black_box(&text))))
    });

    group.finish();
}

fn bench_normalize_and_group(c: &mut Criterion) {
    let text = sample_bibliography(200);
    let entries = FallbackParser.parse(&text).unwrap_or_default();

    let mut group = c.benchmark_group("normalize_and_group");
    group.throughput(Throughput::Elements(entries.len() as u64));

    group.bench_function("normalize_sort_group", |b| {
        b.iter(|| black_box(sort_and_group(normalize_entries(black_box(&entries)))))
    });

    group.finish();
}

fn bench_decode_latex(c: &mut Criterion) {
    let samples = vec![
        "Plain title without escapes",
        "Caf\\'e and cr\\`eme",
        "Sch{\\\"o}n, M{\\\"u}ller and Fran{\\c c}ois",
        "Computing $\\pi$ with {Monte Carlo}",
    ];

    c.bench_function("decode_latex", |b| {
        b.iter(|| {
            for s in &samples {
                black_box(decode_latex(s));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_fallback_parse,
    bench_normalize_and_group,
    bench_decode_latex
);
criterion_main!(benches);
