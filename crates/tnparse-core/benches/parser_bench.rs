use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tnparse_core::catalog::{default_catalog, PatternCatalog};
use tnparse_core::parser::parse;

fn bench_parse(c: &mut Criterion) {
    let catalog = default_catalog();

    let inputs = vec![
        "Show.Name.S01E02.1080p.WEB-DL.DTS.5.1",
        "Movie.Title.2020.1080p.BluRay.x264-GROUP",
        "Series.Name.S01-S03.Complete.1080p",
        "Movie Title 2020 PROPER REPACK 1080p BluRay x264-GROUP",
        "The.Thing.1982.Remake.2011.720p.BluRay.x264-GRP",
    ];

    c.bench_function("parse_single", |b| {
        b.iter(|| parse(black_box(inputs[0]), true, catalog));
    });

    c.bench_function("parse_batch_5", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = parse(black_box(input), true, catalog);
            }
        });
    });

    c.bench_function("parse_batch_5_raw", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = parse(black_box(input), false, catalog);
            }
        });
    });
}

fn bench_catalog_build(c: &mut Criterion) {
    c.bench_function("catalog_build_standard", |b| {
        b.iter(|| PatternCatalog::standard().unwrap());
    });
}

criterion_group!(benches, bench_parse, bench_catalog_build);
criterion_main!(benches);
