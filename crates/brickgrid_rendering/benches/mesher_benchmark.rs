//! Benchmark for chunk meshing.
//!
//! TARGET: a 16^3 terrain chunk in well under a millisecond
//!
//! Run with: cargo bench --package brickgrid_rendering --bench mesher_benchmark

use brickgrid_rendering::{ChunkMesher, MesherConfig};
use brickgrid_shared::{BrickCoord, BrickQueryFn, ChunkCoord, MaterialIndex};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const CHUNK_SIZE_LOG2: u8 = 4;
const MATERIAL_COUNT: usize = 4;

fn mesher() -> ChunkMesher {
    ChunkMesher::new(MesherConfig::new(
        CHUNK_SIZE_LOG2,
        MATERIAL_COUNT,
        MaterialIndex(0),
    ))
    .unwrap()
}

/// Rolling heightfield with three material layers.
fn terrain(c: BrickCoord) -> MaterialIndex {
    let height = 8 + ((c.x * 3 + c.z * 5).rem_euclid(7)) - 3;
    match height - c.y {
        i32::MIN..=0 => MaterialIndex(0),
        1 => MaterialIndex(1),
        2..=3 => MaterialIndex(2),
        _ => MaterialIndex(3),
    }
}

fn benchmark_terrain_chunk(c: &mut Criterion) {
    let mesher = mesher();
    let grid = BrickQueryFn(terrain);

    c.bench_function("terrain_chunk_16", |b| {
        b.iter(|| black_box(mesher.build(black_box(ChunkCoord::new(0, 0, 0)), &grid)))
    });
}

fn benchmark_worst_case(c: &mut Criterion) {
    let mesher = mesher();
    let grid = BrickQueryFn(|c: BrickCoord| {
        MaterialIndex(u8::from((c.x + c.y + c.z).rem_euclid(2) == 0))
    });

    let mut group = c.benchmark_group("worst_case");
    // 2048 isolated bricks, six faces each.
    group.throughput(Throughput::Elements(2048 * 6));
    group.bench_function("checkerboard_chunk_16", |b| {
        b.iter(|| black_box(mesher.build(ChunkCoord::new(0, 0, 0), &grid)))
    });
    group.finish();
}

fn benchmark_empty_chunk(c: &mut Criterion) {
    let mesher = mesher();
    let grid = BrickQueryFn(|_| MaterialIndex(0));

    c.bench_function("empty_chunk_16", |b| {
        b.iter(|| black_box(mesher.build(ChunkCoord::new(0, 0, 0), &grid)))
    });
}

fn benchmark_chunk_row(c: &mut Criterion) {
    let mesher = mesher();
    let grid = BrickQueryFn(terrain);

    let mut group = c.benchmark_group("chunk_row");
    group.throughput(Throughput::Elements(16));
    group.bench_function("16_terrain_chunks", |b| {
        b.iter(|| {
            for x in 0..16 {
                black_box(mesher.build(ChunkCoord::new(x, 0, 0), &grid).ok());
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_terrain_chunk,
    benchmark_worst_case,
    benchmark_empty_chunk,
    benchmark_chunk_row
);
criterion_main!(benches);
