// File: crates/benchplot-skia/src/raster.rs
// Summary: Scene rasterization on a Skia CPU surface: panel, grid, traces, legend, captions.

use anyhow::{anyhow, bail, Result};
use benchplot_core::grid::{format_tick, ticks};
use benchplot_core::{Axis, LegendPosition, PixelScale, Theme};
use skia_safe as skia;

use crate::frame::Frame;
use crate::marker::draw_marker;
use crate::paint::{color, fill, line, stroke};
use crate::scene::{Scene, SceneTrace};
use crate::text::TextShaper;

const LINE_WIDTH: f32 = 1.5;
const MARKER_RADIUS: f32 = 4.5;
const TICK_FONT: f32 = 12.0;
const LEGEND_FONT: f32 = 12.0;
const CAPTION_FONT: f32 = 14.0;
const TITLE_FONT: f32 = 16.0;

/// Screen margins around the plot panel, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Default margins, with room for a title when one will be drawn.
    pub fn for_scene(scene: &Scene) -> Self {
        let mut insets = Self::default();
        if scene.draw_labels && scene.title.is_some() {
            insets.top += 28;
        }
        insets
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}

/// Rasterize `scene` at `width` x `height`, independent of the size it was begun with.
pub fn rasterize(scene: &Scene, width: u32, height: u32) -> Result<Frame> {
    let (w, h) = (width.max(1) as i32, height.max(1) as i32);
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
    let shaper = scene.draw_labels.then(TextShaper::new);

    {
        let canvas = surface.canvas();
        let theme = &scene.theme;
        canvas.clear(color(theme.background));

        let insets = Insets::for_scene(scene);
        let l = insets.left as f32;
        let t = insets.top as f32;
        let r = (w as f32 - insets.right as f32).max(l + 1.0);
        let b = (h as f32 - insets.bottom as f32).max(t + 1.0);
        let plot = skia::Rect::from_ltrb(l, t, r, b);

        let x_axis = Axis::fit(scene.traces.iter().flat_map(|s| s.points.iter().map(|p| p.0)), scene.x_scale);
        let y_axis = Axis::fit(scene.traces.iter().flat_map(|s| s.points.iter().map(|p| p.1)), scene.y_scale);
        let sx = PixelScale::new(&x_axis, plot.left, plot.right);
        let sy = PixelScale::new(&y_axis, plot.bottom, plot.top);

        canvas.draw_rect(plot, &fill(theme.panel));
        draw_grid(canvas, plot, &x_axis, &y_axis, &sx, &sy, theme);

        canvas.save();
        canvas.clip_rect(plot, skia::ClipOp::Intersect, true);
        for trace in &scene.traces {
            draw_trace(canvas, trace, &sx, &sy);
        }
        canvas.restore();

        canvas.draw_rect(plot, &stroke(theme.axis_line, 1.0));

        if let Some(shaper) = &shaper {
            draw_tick_labels(canvas, shaper, plot, &x_axis, &y_axis, &sx, &sy, theme);
            draw_captions(canvas, shaper, scene, plot, h as f32);
        }

        if let Some((anchor, _)) = scene.legend {
            let entries = scene.legend_entries();
            if !entries.is_empty() {
                draw_legend(canvas, shaper.as_ref(), plot, entries, anchor, theme);
            }
        }
    }

    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut rgba = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut rgba, row_bytes, (0, 0)) {
        bail!("failed to read back {w}x{h} raster pixels");
    }
    Ok(Frame { width: w as u32, height: h as u32, rgba })
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    plot: skia::Rect,
    x_axis: &Axis,
    y_axis: &Axis,
    sx: &PixelScale,
    sy: &PixelScale,
    theme: &Theme,
) {
    let paint = stroke(theme.grid, 1.0);
    for v in ticks(x_axis) {
        let x = sx.to_px(v);
        if x >= plot.left && x <= plot.right {
            canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
        }
    }
    for v in ticks(y_axis) {
        let y = sy.to_px(v);
        if y >= plot.top && y <= plot.bottom {
            canvas.draw_line((plot.left, y), (plot.right, y), &paint);
        }
    }
}

fn draw_trace(canvas: &skia::Canvas, trace: &SceneTrace, sx: &PixelScale, sy: &PixelScale) {
    let pts: Vec<(f32, f32)> = trace.points.iter().map(|&(x, y)| (sx.to_px(x), sy.to_px(y))).collect();
    let style = &trace.style;

    if let (Some(paint), Some((&first, rest))) = (line(style.line, style.color, LINE_WIDTH), pts.split_first()) {
        if !rest.is_empty() {
            let mut path = skia::Path::new();
            path.move_to(first);
            for &p in rest {
                path.line_to(p);
            }
            canvas.draw_path(&path, &paint);
        }
    }
    for &p in &pts {
        draw_marker(canvas, style.marker, p, MARKER_RADIUS, style.color);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: skia::Rect,
    x_axis: &Axis,
    y_axis: &Axis,
    sx: &PixelScale,
    sy: &PixelScale,
    theme: &Theme,
) {
    let c = color(theme.tick);
    for v in ticks(x_axis) {
        let x = sx.to_px(v);
        if x >= plot.left - 0.5 && x <= plot.right + 0.5 {
            shaper.draw_centered(canvas, &format_tick(v, x_axis.kind), x, plot.bottom + 18.0, TICK_FONT, c);
        }
    }
    for v in ticks(y_axis) {
        let y = sy.to_px(v);
        if y >= plot.top - 0.5 && y <= plot.bottom + 0.5 {
            let baseline = y + TICK_FONT * 0.35;
            shaper.draw_right(canvas, &format_tick(v, y_axis.kind), plot.left - 6.0, baseline, TICK_FONT, c);
        }
    }
}

fn draw_captions(canvas: &skia::Canvas, shaper: &TextShaper, scene: &Scene, plot: skia::Rect, h: f32) {
    let c = color(scene.theme.axis_label);
    if let Some(title) = &scene.title {
        shaper.draw_centered(canvas, title, plot.center_x(), plot.top - 14.0, TITLE_FONT, c);
    }
    if let Some(x_label) = &scene.x_label {
        shaper.draw_centered(canvas, x_label, plot.center_x(), h - 12.0, CAPTION_FONT, c);
    }
    if let Some(y_label) = &scene.y_label {
        canvas.save();
        canvas.translate((18.0, plot.center_y()));
        canvas.rotate(-90.0, None);
        shaper.draw_centered(canvas, y_label, 0.0, 0.0, CAPTION_FONT, c);
        canvas.restore();
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: Option<&TextShaper>,
    plot: skia::Rect,
    entries: &[SceneTrace],
    anchor: LegendPosition,
    theme: &Theme,
) {
    const PAD: f32 = 8.0;
    const ROW_H: f32 = 20.0;
    const SAMPLE_W: f32 = 28.0;
    const MARGIN: f32 = 10.0;

    let text_w = shaper
        .map(|s| entries.iter().map(|e| s.measure_width(&e.label, LEGEND_FONT)).fold(0.0, f32::max))
        .unwrap_or(0.0);
    let box_w = PAD * 2.0 + SAMPLE_W + if text_w > 0.0 { PAD + text_w } else { 0.0 };
    let box_h = PAD * 2.0 + ROW_H * entries.len() as f32;

    let (left, top) = match anchor {
        LegendPosition::UpperLeft => (plot.left + MARGIN, plot.top + MARGIN),
        LegendPosition::UpperRight => (plot.right - MARGIN - box_w, plot.top + MARGIN),
        LegendPosition::LowerLeft => (plot.left + MARGIN, plot.bottom - MARGIN - box_h),
        LegendPosition::LowerRight => (plot.right - MARGIN - box_w, plot.bottom - MARGIN - box_h),
    };
    let rect = skia::Rect::from_xywh(left, top, box_w, box_h);
    canvas.draw_round_rect(rect, 3.0, 3.0, &fill(theme.legend_background));
    canvas.draw_round_rect(rect, 3.0, 3.0, &stroke(theme.legend_border, 1.0));

    for (i, entry) in entries.iter().enumerate() {
        let cy = top + PAD + ROW_H * (i as f32 + 0.5);
        let x0 = left + PAD;
        let x1 = x0 + SAMPLE_W;
        let style = &entry.style;
        if let Some(paint) = line(style.line, style.color, LINE_WIDTH) {
            canvas.draw_line((x0, cy), (x1, cy), &paint);
        }
        draw_marker(canvas, style.marker, ((x0 + x1) * 0.5, cy), MARKER_RADIUS, style.color);
        if let Some(s) = shaper {
            s.draw_left(canvas, &entry.label, x1 + PAD, cy + LEGEND_FONT * 0.35, LEGEND_FONT, color(theme.axis_label));
        }
    }
}
