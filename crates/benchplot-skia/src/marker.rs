// File: crates/benchplot-skia/src/marker.rs
// Summary: Marker glyph geometry (circles, polygons, stars, crosses).

use benchplot_core::{Marker, Rgba};
use skia_safe as skia;

use crate::paint::{fill, stroke};

/// Regular polygon (or star when `inner` is set) around `center`.
fn polygon(center: (f32, f32), radius: f32, sides: usize, start_deg: f32, inner: Option<f32>) -> skia::Path {
    let (cx, cy) = center;
    let vertices = if inner.is_some() { sides * 2 } else { sides };
    let step = 360.0 / vertices as f32;
    let mut path = skia::Path::new();
    for i in 0..vertices {
        let r = match inner {
            Some(ir) if i % 2 == 1 => ir,
            _ => radius,
        };
        let a = (start_deg + step * i as f32).to_radians();
        let p = (cx + r * a.cos(), cy + r * a.sin());
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close();
    path
}

/// Draw `marker` centered at `center`; `radius` is the nominal half-size in pixels.
pub fn draw_marker(canvas: &skia::Canvas, marker: Marker, center: (f32, f32), radius: f32, c: Rgba) {
    let (cx, cy) = center;
    match marker {
        Marker::None => {}
        Marker::Point => {
            canvas.draw_circle(center, radius * 0.45, &fill(c));
        }
        Marker::Circle => {
            canvas.draw_circle(center, radius, &fill(c));
        }
        Marker::Plus | Marker::Cross => {
            let r = radius;
            let mut path = skia::Path::new();
            if marker == Marker::Plus {
                path.move_to((cx - r, cy)).line_to((cx + r, cy));
                path.move_to((cx, cy - r)).line_to((cx, cy + r));
            } else {
                path.move_to((cx - r, cy - r)).line_to((cx + r, cy + r));
                path.move_to((cx - r, cy + r)).line_to((cx + r, cy - r));
            }
            canvas.draw_path(&path, &stroke(c, 1.5));
        }
        Marker::Square => {
            canvas.draw_path(&polygon(center, radius * 1.2, 4, 45.0, None), &fill(c));
        }
        Marker::Diamond => {
            canvas.draw_path(&polygon(center, radius * 1.2, 4, -90.0, None), &fill(c));
        }
        Marker::TriangleUp => {
            canvas.draw_path(&polygon(center, radius * 1.2, 3, -90.0, None), &fill(c));
        }
        Marker::TriangleDown => {
            canvas.draw_path(&polygon(center, radius * 1.2, 3, 90.0, None), &fill(c));
        }
        Marker::Hexagon => {
            canvas.draw_path(&polygon(center, radius * 1.1, 6, -90.0, None), &fill(c));
        }
        Marker::Octagon => {
            canvas.draw_path(&polygon(center, radius * 1.05, 8, 22.5, None), &fill(c));
        }
        Marker::Star => {
            canvas.draw_path(&polygon(center, radius * 1.3, 5, -90.0, Some(radius * 0.55)), &fill(c));
        }
    }
}
