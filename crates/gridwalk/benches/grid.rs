use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use gridwalk::{GraphWriter, Grid, GridCoord};
use rand::{Rng, SeedableRng, rngs::SmallRng};

fn random_coords(count: usize, seed: u64) -> Vec<GridCoord> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| GridCoord::new(rng.random_range(-256..256), rng.random_range(-256..256)))
        .collect()
}

pub fn delete_vertex_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");

    group.bench_function("delete_vertex", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            grid.delete_vertex(&GridCoord::new(0, 0));
            grid
        })
    });

    for count in [64, 1024] {
        let coords = random_coords(count, count as u64);
        group.bench_with_input(
            BenchmarkId::new("delete_vertices", count),
            &coords,
            |b, coords| {
                b.iter_batched(
                    || Grid::with_capacity(coords.len() * 5),
                    |mut grid| {
                        grid.delete_vertices(coords);
                        grid
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

pub fn edge_churn_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    let coords = random_coords(1024, 7);

    group.bench_function("add_delete_edge", |b| {
        b.iter_batched(
            Grid::new,
            |mut grid| {
                for pair in coords.windows(2) {
                    if grid.add_edge(pair[0], pair[1]).is_ok() {
                        grid.delete_edge(&pair[0], &pair[1]);
                    }
                }
                grid
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(grid, delete_vertex_bench, edge_churn_bench);
criterion_main!(grid);
