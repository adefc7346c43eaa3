// File: crates/benchplot-skia/tests/smoke.rs
// Purpose: End-to-end render smoke test writing a PNG, plus the in-memory path.

use benchplot_core::{AxisSeries, Dataset, NamedSeries, RenderOptions, SeriesStyle, GGPLOT_CYCLE};
use benchplot_skia::{render_png, render_png_bytes};

fn dataset() -> Dataset {
    let axis = AxisSeries::new(vec![100.0, 1_000.0, 10_000.0, 100_000.0]).unwrap();
    let fast = SeriesStyle::from_fmt("-o", GGPLOT_CYCLE[0]).unwrap();
    let slow = SeriesStyle::from_fmt("--s", GGPLOT_CYCLE[1]).unwrap();
    Dataset::new(
        axis,
        vec![
            NamedSeries::new("fast", vec![646.0, 10_446.0, 103_250.0, 1_249_891.0], fast),
            NamedSeries::new("slow", vec![12_179.0, 175_546.0, 2_669_882.0, 58_153_824.0], slow),
        ],
    )
    .unwrap()
    .with_title("smoke")
    .with_axis_labels("elements", "ns")
}

#[test]
fn render_smoke_png() {
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    render_png(&dataset(), &RenderOptions::default(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = render_png_bytes(&dataset(), &RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn log_scale_rejection_writes_nothing() {
    let axis = AxisSeries::new(vec![1.0, 2.0]).unwrap();
    let ds = Dataset::new(axis, vec![NamedSeries::new("zero", vec![0.0, 1.0], SeriesStyle::default())]).unwrap();
    let out = std::path::PathBuf::from("target/test_out/rejected.png");
    let _ = std::fs::remove_file(&out);

    let err = render_png(&ds, &RenderOptions::default(), &out).unwrap_err();
    assert!(err.to_string().contains("logarithmic"), "{err}");
    assert!(!out.exists());
}
