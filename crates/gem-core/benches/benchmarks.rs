use criterion::{criterion_group, criterion_main, Criterion};
use gem_core::text::normalize;
use gem_core::{Gazetteer, Matcher, PlaceRecord};
use std::hint::black_box;

fn synthetic_gazetteer() -> Gazetteer {
    let states = ["IL", "MO", "OR", "ME", "TX", "CA"];
    let places = (0..50_000)
        .map(|i| PlaceRecord {
            name: format!("Town {}", i % 5_000),
            country: "US".into(),
            state: states[i % states.len()].into(),
            latitude: (i % 90) as f64,
            longitude: -((i % 180) as f64),
            population: (i * 37 % 100_000) as i64,
            country_code: "US".into(),
        })
        .collect();
    Gazetteer::from_places(places)
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box("  São José dos Campos, São Paulo!! ")))
    });
}

fn bench_locate(c: &mut Criterion) {
    let db = synthetic_gazetteer();
    let matcher = Matcher::new(&db);

    c.bench_function("locate_name_region", |b| {
        b.iter(|| matcher.locate(black_box("town 4242, Texas")))
    });
    c.bench_function("locate_whole_name", |b| {
        b.iter(|| matcher.locate(black_box("Town 17")))
    });
    c.bench_function("locate_miss", |b| {
        b.iter(|| matcher.locate(black_box("Atlantis, Oceania")))
    });
}

criterion_group!(benches, bench_normalize, bench_locate);
criterion_main!(benches);
