//! Benchmarks for the refinement engine (C3) and unfolding augmentation
//! (C4) on a subdivided icosahedron.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use meshembed::prelude::*;
use meshembed::topology::MeshGraph;

/// The regular icosahedron: 12 vertices, 20 triangular faces.
fn icosahedron() -> Model {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let v = |x: f32, y: f32, z: f32| Vec3::new(x, y, z);
    let vertices = vec![
        v(-1.0, phi, 0.0),
        v(1.0, phi, 0.0),
        v(-1.0, -phi, 0.0),
        v(1.0, -phi, 0.0),
        v(0.0, -1.0, phi),
        v(0.0, 1.0, phi),
        v(0.0, -1.0, -phi),
        v(0.0, 1.0, -phi),
        v(phi, 0.0, -1.0),
        v(phi, 0.0, 1.0),
        v(-phi, 0.0, -1.0),
        v(-phi, 0.0, 1.0),
    ];
    let t = Triangle::new;
    let triangles = vec![
        t(0, 11, 5),
        t(0, 5, 1),
        t(0, 1, 7),
        t(0, 7, 10),
        t(0, 10, 11),
        t(1, 5, 9),
        t(5, 11, 4),
        t(11, 10, 2),
        t(10, 7, 6),
        t(7, 1, 8),
        t(3, 9, 4),
        t(3, 4, 2),
        t(3, 2, 6),
        t(3, 6, 8),
        t(3, 8, 9),
        t(4, 9, 5),
        t(2, 4, 11),
        t(6, 2, 10),
        t(8, 6, 7),
        t(9, 8, 1),
    ];
    Model { vertices, triangles }
}

/// Subdivide an icosahedron's uniform refinement `rounds` times by halving
/// the edge-length cap each round, to produce denser benchmark inputs
/// without a separate mesh generator.
fn subdivided(rounds: u32) -> Model {
    let mut model = icosahedron();
    let mut edge_cap = 2.5;
    let mut paths: Vec<Vec<u32>> = Vec::new();
    for _ in 0..rounds {
        let params = Parameters::new(edge_cap).unwrap();
        model = meshembed::refine::refine(&model, &mut paths, &params);
        edge_cap /= 2.0;
    }
    model
}

fn bench_refine(c: &mut Criterion) {
    let mut group = c.benchmark_group("refine");
    for &rounds in &[0u32, 1, 2] {
        let base = subdivided(rounds);
        group.bench_with_input(BenchmarkId::new("rounds", rounds), &rounds, |b, _| {
            b.iter(|| {
                let mut paths: Vec<Vec<u32>> = Vec::new();
                let params = Parameters::new(0.2).unwrap();
                meshembed::refine::refine(black_box(&base), &mut paths, &params)
            })
        });
    }
    group.finish();
}

fn bench_unfold(c: &mut Criterion) {
    let mut group = c.benchmark_group("unfold");
    for &rounds in &[0u32, 1, 2] {
        let model = subdivided(rounds);
        let graph = MeshGraph::build(&model.vertices, &model.triangles).unwrap();
        group.bench_with_input(BenchmarkId::new("rounds", rounds), &rounds, |b, _| {
            b.iter(|| {
                let mut graph = graph.clone();
                graph.augment_with_unfolding(black_box(&model.vertices), black_box(&model.triangles))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_refine, bench_unfold);
criterion_main!(benches);
