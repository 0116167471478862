use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use terrascope::colors::Color;
use terrascope::prelude::*;

const SURFACE_WIDTH: u32 = 800;
const SURFACE_HEIGHT: u32 = 600;

fn viewport() -> Rect {
    Rect::new(0, 0, SURFACE_WIDTH as i32, SURFACE_HEIGHT as i32)
}

fn terrain(rows: usize, columns: usize) -> Grid {
    let mut grid = Grid::new(rows, columns, 2.0);
    for row in 0..=rows {
        for column in 0..=columns {
            grid.point_mut(row, column).height =
                4.0 * (row as f64 * 0.3).sin() * (column as f64 * 0.2).cos();
        }
    }
    grid.set_lattice_points();
    grid.colorize_by_height(Color::rgb(20, 60, 30), Color::rgb(240, 240, 230));
    grid
}

fn overhead_camera(grid: &Grid) -> Basis {
    let anchor = grid.point(grid.rows() / 2, grid.columns() / 2).position;
    Basis::looking_at(anchor + Vec3::new(0.0, 60.0, -60.0), anchor, Vec3::UP)
}

fn benchmark_point_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_points");

    let renderer = Renderer::new();
    for size in [16usize, 49, 100] {
        let grid = terrain(size, size);
        let camera = overhead_camera(&grid);

        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            let mut surface = Surface::new(SURFACE_WIDTH, SURFACE_HEIGHT);
            b.iter(|| {
                let mut frame = renderer
                    .prepare(&mut surface, viewport(), &camera)
                    .expect("viewport is valid");
                frame.render_points(black_box(grid.lattice()));
            });
        });
    }

    group.finish();
}

fn benchmark_grid_render(c: &mut Criterion) {
    let grid = terrain(49, 49);
    let camera = overhead_camera(&grid);

    c.bench_function("grid_render_2500_points", |b| {
        let mut surface = Surface::new(SURFACE_WIDTH, SURFACE_HEIGHT);
        b.iter(|| {
            grid.render(black_box(&mut surface), viewport(), &camera);
        });
    });
}

fn benchmark_polygon_pipeline(c: &mut Criterion) {
    let renderer = Renderer::new();
    let camera = Basis::default();

    // A fan of quads around the view center; roughly half get clipped.
    let polygons: Vec<Polygon> = (0..64)
        .map(|i| {
            let offset = (i as f64 - 32.0) * 6.0;
            Polygon::new(vec![
                Vertex::new(Point3::new(offset - 20.0, -30.0, 10.0), Color::rgb(200, 40, 40)),
                Vertex::new(Point3::new(offset + 20.0, -30.0, 10.0), Color::rgb(40, 200, 40)),
                Vertex::new(Point3::new(offset + 20.0, 30.0, 10.0), Color::rgb(40, 40, 200)),
                Vertex::new(Point3::new(offset - 20.0, 30.0, 10.0), Color::rgb(200, 200, 40)),
            ])
        })
        .collect();

    c.bench_function("render_polygons_64_quads", |b| {
        let mut surface = Surface::new(SURFACE_WIDTH, SURFACE_HEIGHT);
        b.iter(|| {
            let mut frame = renderer
                .prepare(&mut surface, viewport(), &camera)
                .expect("viewport is valid");
            frame.render_polygons(black_box(&polygons));
        });
    });
}

fn benchmark_draw_line(c: &mut Criterion) {
    let renderer = Renderer::new();
    let camera = Basis::default();

    c.bench_function("draw_line_full_diagonal", |b| {
        let mut surface = Surface::new(SURFACE_WIDTH, SURFACE_HEIGHT);
        b.iter(|| {
            let mut frame = renderer
                .prepare(&mut surface, viewport(), &camera)
                .expect("viewport is valid");
            frame.draw_line(
                black_box(0.0),
                black_box(0.0),
                (SURFACE_WIDTH - 1) as f64,
                (SURFACE_HEIGHT - 1) as f64,
                Color::rgb(255, 255, 255),
            );
        });
    });
}

criterion_group!(
    benches,
    benchmark_point_pipeline,
    benchmark_grid_render,
    benchmark_polygon_pipeline,
    benchmark_draw_line
);
criterion_main!(benches);
