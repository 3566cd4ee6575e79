use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use heliopos::ephemeris::PlanetEphemeris;
use heliopos::epoch::calendar_to_day_count;

/// Full engine run from a calendar date: epoch conversion, eight secular models,
/// outer-planet perturbation step.
fn bench_from_calendar(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("planet_positions/from_calendar", |b| {
        b.iter_batched(
            || {
                // Pre-generate dates to avoid RNG cost in the timed section
                (0..samples)
                    .map(|_| {
                        let year = rng.random_range(1900.0..2100.0_f64).floor();
                        let month = rng.random_range(1.0..13.0_f64).floor();
                        let day = rng.random_range(1.0..29.0_f64).floor();
                        let hour = rng.random_range(0.0..24.0_f64).floor();
                        let minute = rng.random_range(0.0..60.0_f64).floor();
                        (year, month, day, hour, minute)
                    })
                    .collect::<Vec<_>>()
            },
            |dates| {
                for (year, month, day, hour, minute) in dates {
                    let ephemeris = PlanetEphemeris::new(
                        black_box(year),
                        black_box(month),
                        black_box(day),
                        black_box(hour),
                        black_box(minute),
                    );
                    black_box(ephemeris);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Engine run from an already-computed day count, isolating the model + perturbation cost.
fn bench_from_day_count(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 10_000usize;

    c.bench_function("planet_positions/from_day_count", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| rng.random_range(-40000.0..40000.0_f64))
                    .collect::<Vec<_>>()
            },
            |days| {
                for day in days {
                    let ephemeris = PlanetEphemeris::from_day_count(black_box(day));
                    black_box(ephemeris);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Epoch conversion alone.
fn bench_epoch_conversion(c: &mut Criterion) {
    c.bench_function("planet_positions/calendar_to_day_count", |b| {
        b.iter(|| {
            let day = calendar_to_day_count(
                black_box(2024.),
                black_box(1.),
                black_box(1.),
                black_box(0.),
                black_box(0.),
            );
            black_box(day);
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_from_calendar, bench_from_day_count, bench_epoch_conversion
);
criterion_main!(benches);
