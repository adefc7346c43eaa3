// File: crates/benchplot-skia/src/paint.rs
// Summary: Paint construction shared by the raster passes.

use benchplot_core::{LineForm, Rgba};
use skia_safe as skia;

#[inline]
pub fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub fn fill(c: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color(c));
    paint
}

pub fn stroke(c: Rgba, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color(c));
    paint
}

/// Stroke paint for a series line, dashed per its line form. `None` for `LineForm::None`.
pub fn line(form: LineForm, c: Rgba, width: f32) -> Option<skia::Paint> {
    let intervals: &[f32] = match form {
        LineForm::None => return None,
        LineForm::Solid => &[],
        LineForm::Dashed => &[3.7 * width, 1.6 * width],
        LineForm::Dotted => &[width, 1.65 * width],
        LineForm::DashDot => &[6.4 * width, 1.6 * width, width, 1.6 * width],
    };
    let mut paint = stroke(c, width);
    paint.set_stroke_join(skia::paint::Join::Round);
    if !intervals.is_empty() {
        paint.set_path_effect(skia::PathEffect::dash(intervals, 0.0));
    } else {
        paint.set_stroke_cap(skia::paint::Cap::Round);
    }
    Some(paint)
}
