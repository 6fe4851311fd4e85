use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plot_common::{ProjectionAxis, SurfaceGrid};
use renderer::contour::{contour_levels, isolines};

fn bench_grid_evaluation(c: &mut Criterion) {
    c.bench_function("evaluate_100x100", |b| {
        b.iter(|| SurfaceGrid::evaluate(black_box(0.3), black_box(0.4), black_box(100)))
    });
}

fn bench_isoline_extraction(c: &mut Criterion) {
    let grid = SurfaceGrid::evaluate(0.3, 0.4, 100);
    let levels = contour_levels(&grid, ProjectionAxis::Z, 25);

    c.bench_function("isolines_25_levels", |b| {
        b.iter(|| isolines(black_box(&grid), black_box(&levels)))
    });
}

criterion_group!(benches, bench_grid_evaluation, bench_isoline_extraction);
criterion_main!(benches);
