use log::info;

use terrascope::colors::Color;
use terrascope::prelude::*;

const CAMERA_SPEED: f64 = 40.0; // world units per second
const YAW_SPEED: f64 = 90.0; // degrees per second

const LOWLAND: Color = Color::rgb(30, 78, 46);
const SUMMIT: Color = Color::rgb(235, 235, 220);
const MARKER: Color = Color::rgb(255, 96, 32);
const MARKER_TIP: Color = Color::rgb(255, 224, 64);

/// A rolling terrain: crossed sine ridges over a 61x61 lattice.
fn build_terrain() -> Grid {
    let mut grid = Grid::new(60, 60, 2.0);
    for row in 0..=grid.rows() {
        for column in 0..=grid.columns() {
            let u = row as f64 * 0.25;
            let v = column as f64 * 0.2;
            grid.point_mut(row, column).height = 6.0 * u.sin() * v.cos() + 2.0 * (u + v).sin();
        }
    }
    grid.set_lattice_points();
    grid.compute_slopes();
    grid.colorize_by_height(LOWLAND, SUMMIT);
    grid
}

/// A flag-shaped marker planted over the middle of the terrain.
fn build_marker(anchor: Point3) -> Vec<Polygon> {
    let pole_top = anchor + Vec3::UP * 18.0;
    vec![Polygon::new(vec![
        Vertex::new(pole_top, MARKER_TIP),
        Vertex::new(pole_top + Vec3::RIGHT * 10.0 - Vec3::UP * 4.0, MARKER),
        Vertex::new(pole_top - Vec3::UP * 8.0, MARKER),
        Vertex::new(anchor, MARKER),
    ])]
}

fn steer_camera(camera: &mut Basis, input: &InputState, delta_seconds: f64) {
    let step = CAMERA_SPEED * delta_seconds;

    if input.forward {
        camera.translate(camera.axis_z * step);
    }
    if input.back {
        camera.translate(camera.axis_z * -step);
    }
    if input.right {
        camera.translate(camera.axis_x * step);
    }
    if input.left {
        camera.translate(camera.axis_x * -step);
    }
    if input.ascend {
        camera.translate(Vec3::UP * step);
    }
    if input.descend {
        camera.translate(Vec3::UP * -step);
    }

    let turn = YAW_SPEED * delta_seconds;
    if input.yaw_left {
        camera.rotate_y(turn);
    }
    if input.yaw_right {
        camera.rotate_y(-turn);
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let mut window = Window::new(
        "Terrascope",
        terrascope::window::WINDOW_WIDTH,
        terrascope::window::WINDOW_HEIGHT,
    )?;
    let mut surface = Surface::new(window.width(), window.height());
    let renderer = Renderer::new();
    let mut limiter = FrameLimiter::new(&window);

    let grid = build_terrain();
    let marker = build_marker(grid.point(30, 30).position);
    info!(
        "terrain ready: {} lattice points",
        grid.lattice().len()
    );

    let mut camera = Basis::looking_at(
        Point3::new(0.0, 60.0, -80.0),
        grid.point(30, 30).position,
        Vec3::UP,
    );

    let mut is_running = true;
    while is_running {
        match window.poll_events() {
            WindowEvent::Quit => is_running = false,
            WindowEvent::Resize(w, h) => {
                window.resize(w, h)?;
                surface.resize(w, h);
            }
            WindowEvent::None => {}
        }

        let input = window.input_state();
        let viewport = Rect::new(0, 0, window.width() as i32, window.height() as i32);

        surface.clear(terrascope::colors::BACKGROUND);
        grid.render(&mut surface, viewport, &camera);
        {
            let mut frame = renderer
                .prepare(&mut surface, viewport, &camera)
                .map_err(|e| e.to_string())?;
            frame.render_polygons(&marker);
        }

        window.present(surface.as_bytes())?;

        let delta_ms = limiter.wait_and_get_delta(&window);
        steer_camera(&mut camera, &input, delta_ms as f64 / 1000.0);
    }

    Ok(())
}
