//! Benchmark the per-cycle project + merge path.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dhwani_map::{DirtySet, FuzzyCellProjector, MapConfig, OccupancyAccumulator, RangeSample, RobotPose};

/// Pioneer sonar ring layout (degrees)
const SONAR_ANGLES: [f32; 16] = [
    90.0, 50.0, 30.0, 10.0, -10.0, -30.0, -50.0, -90.0, -90.0, -130.0, -150.0, -170.0, 170.0,
    150.0, 130.0, 90.0,
];

fn ring_samples(range: f32) -> Vec<RangeSample> {
    SONAR_ANGLES
        .iter()
        .enumerate()
        .map(|(beam, &angle)| RangeSample::new(beam, range + beam as f32 * 37.0, angle))
        .collect()
}

fn bench_cycle(c: &mut Criterion) {
    let config = MapConfig::default();
    let projector = FuzzyCellProjector::from_config(&config).unwrap();
    let mut accumulator = OccupancyAccumulator::new(&config.grid).unwrap();
    let mut dirty = DirtySet::with_beam_capacity(16);

    let samples = ring_samples(1500.0);
    let pose = RobotPose::new(8000.0, 8000.0, 15.0);

    c.bench_function("cycle_16_beams", |b| {
        b.iter(|| {
            for sample in &samples {
                projector
                    .project_into(black_box(&pose), black_box(sample), &mut dirty)
                    .unwrap();
            }
            black_box(accumulator.merge(&mut dirty))
        })
    });
}

fn bench_cycle_grid_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_grid_size");

    // Merge cost should not depend on grid size
    for size in [160usize, 640, 2560].iter() {
        let mut config = MapConfig::default();
        config.grid.width = *size;
        config.grid.height = *size;

        let projector = FuzzyCellProjector::from_config(&config).unwrap();
        let mut accumulator = OccupancyAccumulator::new(&config.grid).unwrap();
        let mut dirty = DirtySet::with_beam_capacity(16);
        let samples = ring_samples(1500.0);
        let pose = RobotPose::new(8000.0, 8000.0, 0.0);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                for sample in &samples {
                    projector.project_into(&pose, sample, &mut dirty).unwrap();
                }
                black_box(accumulator.merge(&mut dirty))
            })
        });
    }

    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let config = MapConfig::default();
    let projector = FuzzyCellProjector::from_config(&config).unwrap();
    let mut accumulator = OccupancyAccumulator::new(&config.grid).unwrap();
    let mut dirty = DirtySet::new();

    for step in 0..50 {
        let pose = RobotPose::new(6000.0 + step as f32 * 80.0, 8000.0, step as f32 * 7.0);
        for sample in ring_samples(1200.0) {
            projector.project_into(&pose, &sample, &mut dirty).unwrap();
        }
        accumulator.merge(&mut dirty);
    }

    c.bench_function("compose_160x160", |b| {
        b.iter(|| black_box(accumulator.compose().unwrap()))
    });
}

criterion_group!(benches, bench_cycle, bench_cycle_grid_sizes, bench_compose);
criterion_main!(benches);
