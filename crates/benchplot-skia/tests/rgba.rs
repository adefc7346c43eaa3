// File: crates/benchplot-skia/tests/rgba.rs
// Purpose: Validate the RGBA frame shape and a few pixels.

use benchplot_core::{render, AxisSeries, Dataset, NamedSeries, RenderOptions, SeriesStyle, StylePreset};
use benchplot_skia::{render_frame, SkiaBackend};

fn dataset() -> Dataset {
    let axis = AxisSeries::new(vec![10.0, 100.0, 1_000.0]).unwrap();
    Dataset::new(axis, vec![NamedSeries::new("a", vec![5.0, 50.0, 500.0], SeriesStyle::default())]).unwrap()
}

fn options() -> RenderOptions {
    RenderOptions { width: 320, height: 200, draw_labels: false, ..RenderOptions::default() }
}

#[test]
fn render_rgba8_buffer() {
    let frame = render_frame(&dataset(), &options()).expect("rgba render");
    assert_eq!((frame.width, frame.height), (320, 200));
    assert_eq!(frame.rgba.len(), 320 * 200 * 4);
    assert_eq!(frame.stride(), 320 * 4);

    // Corner lies outside the panel: plain ggplot background.
    assert_eq!(frame.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(320, 0), None);
}

#[test]
fn panel_uses_preset_colors() {
    let frame = render_frame(&dataset(), &options()).unwrap();
    // Just inside the lower-right panel corner; no trace passes there.
    let [r, g, b, a] = frame.pixel(320 - 24 - 4, 200 - 56 - 4).unwrap();
    assert_eq!((r, g, b, a), (0xE5, 0xE5, 0xE5, 255));

    let dark = RenderOptions { style_preset: StylePreset::Dark, ..options() };
    let frame = render_frame(&dataset(), &dark).unwrap();
    assert_ne!(frame.pixel(0, 0), Some([255, 255, 255, 255]));
}

#[test]
fn rendering_is_repeatable() {
    let mut backend = SkiaBackend::in_memory();
    render(&dataset(), &options(), &mut backend).unwrap();
    let first = backend.frame().cloned().unwrap();
    render(&dataset(), &options(), &mut backend).unwrap();
    assert_eq!(backend.frame(), Some(&first));
    assert_eq!(backend.scene().unwrap().traces.len(), 1);
}

#[test]
fn values_near_f64_max_still_render() {
    let axis = AxisSeries::new(vec![10.0, 100.0, 1_000.0]).unwrap();
    let ds = Dataset::new(axis, vec![NamedSeries::new("huge", vec![5.0, 1e200, 1.5e308], SeriesStyle::default())])
        .unwrap();
    let frame = render_frame(&ds, &options()).expect("extreme values render");
    assert_eq!((frame.width, frame.height), (320, 200));
    assert_eq!(frame.pixel(0, 0), Some([255, 255, 255, 255]));
}
