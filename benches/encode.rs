use criterion::{criterion_group, criterion_main, Criterion};
use flexpolyline::{iter_decode, Polyline, Precision, Type3d};

fn create_data() -> Polyline {
    // A spiral around Berlin with a slowly rising third dimension
    let coordinates = (0..10_000)
        .map(|i| {
            let t = i as f64 / 100.0;
            (
                52.52 + t.sin() * t / 1000.0,
                13.40 + t.cos() * t / 1000.0,
                i as f64 / 10.0,
            )
        })
        .collect();
    Polyline::new_3d(
        coordinates,
        Precision::new(6).unwrap(),
        Precision::new(1).unwrap(),
        Type3d::Elevation,
    )
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();
    let encoded = data.encode().unwrap();

    c.bench_function("encode 3D polyline", |b| {
        b.iter(|| {
            let _ = data.encode();
        })
    });

    c.bench_function("decode 3D polyline", |b| {
        b.iter(|| {
            let _ = Polyline::decode(&encoded);
        })
    });

    c.bench_function("iter_decode 3D polyline", |b| {
        b.iter(|| iter_decode(&encoded).unwrap().count())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
