use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use rs_billiards::arena::Arena;
use rs_billiards::utils::ArenaConfig;

fn populated_arena(partition_size: f64, seed: u64) -> Arena {
    let config = ArenaConfig {
        partition_size,
        population_probability: 1.0,
        ..ArenaConfig::default()
    };
    let mut arena = Arena::new(config).expect("valid bench config");
    let mut rng = StdRng::seed_from_u64(seed);
    arena.populate(&mut rng);
    arena
}

pub fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("arena_tick");
    group.measurement_time(std::time::Duration::from_secs(5));
    group.sample_size(100);

    // sparse table: the default layout, every cell filled
    let mut sparse = populated_arena(70.0, 1);
    group.bench_function(format!("tick_{}_balls", sparse.ball_count()), |b| {
        b.iter(|| sparse.tick())
    });

    // dense table: tighter partitions, quadratic pair checks dominate
    let mut dense = populated_arena(35.0, 2);
    group.bench_function(format!("tick_{}_balls", dense.ball_count()), |b| {
        b.iter(|| dense.tick())
    });

    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
