use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use filtr_dsp::butterworth::Filter;

fn criterion_benchmark(c: &mut Criterion) {
    const SAMPLE_RATE: f32 = 1000.0;

    let mut rng = rand::thread_rng();
    let mut buffer = [0.0f32; 32];

    let mut filters = [
        ("low pass", Filter::low_pass(4, SAMPLE_RATE, 15.0)),
        ("high pass", Filter::high_pass(4, SAMPLE_RATE, 95.0)),
        ("band pass", Filter::band_pass(4, SAMPLE_RATE, 45.0, 55.0)),
        ("band stop", Filter::band_stop(4, SAMPLE_RATE, 40.0, 60.0)),
    ];

    for (name, filter) in filters.iter_mut() {
        c.bench_function(*name, |b| {
            b.iter(|| {
                buffer
                    .iter_mut()
                    .for_each(|x| *x = rng.gen::<f32>() * 4095.0);
                filter.process(black_box(&mut buffer));
            });
        });
    }

    c.bench_function("design", |b| {
        b.iter(|| {
            black_box(Filter::band_stop(
                black_box(4),
                SAMPLE_RATE,
                black_box(40.0),
                black_box(60.0),
            ));
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
