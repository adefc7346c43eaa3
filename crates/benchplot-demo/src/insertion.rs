// File: crates/benchplot-demo/src/insertion.rs
// Summary: Measured cost of inserting N sorted elements into ordered containers.
// Notes:
// - Intel Core i5-6600, Ubuntu 16.10. Values are total nanoseconds per run.
// - Series without a color code take the next ggplot cycle color; explicit
//   color codes do not advance the cycle.

use anyhow::{Context, Result};
use benchplot_core::{AxisSeries, Dataset, NamedSeries, Rgba, SeriesStyle, GGPLOT_CYCLE};

const ELEMENTS: [f64; 4] = [100.0, 1_000.0, 10_000.0, 100_000.0];

/// (label, format string, measurements)
const RESULTS: [(&str, &str, [f64; 4]); 7] = [
    ("boost::flat_set::emplace_hint", "-xk", [646.0, 10_446.0, 103_250.0, 1_249_891.0]),
    ("boost::flat_set::insert", "-hg", [2_098.0, 30_042.0, 381_098.0, 4_568_955.0]),
    (
        "std::vector::insert_unique (with back() check)",
        "-o",
        [1_028.0, 14_274.0, 141_462.0, 1_413_630.0],
    ),
    ("std::vector::insert_unique", "-v", [1_985.0, 31_368.0, 412_077.0, 4_845_256.0]),
    ("std::set::emplace_hint", "-8", [10_440.0, 183_646.0, 2_095_243.0, 35_038_916.0]),
    ("std::set::insert", "-*", [12_179.0, 175_546.0, 2_669_882.0, 58_153_824.0]),
    ("std::unordered_set::insert", "-s", [14_119.0, 159_966.0, 2_103_225.0, 41_113_434.0]),
];

pub fn insertion_benchmark() -> Result<Dataset> {
    let mut cycle = GGPLOT_CYCLE.iter().copied().cycle();
    let mut series = Vec::with_capacity(RESULTS.len());
    for (label, fmt, values) in RESULTS {
        let has_color = fmt.chars().any(|c| Rgba::from_code(c).is_some());
        let fallback = if has_color { GGPLOT_CYCLE[0] } else { cycle.next().unwrap_or(GGPLOT_CYCLE[0]) };
        let style = SeriesStyle::from_fmt(fmt, fallback).with_context(|| format!("style of `{label}`"))?;
        series.push(NamedSeries::new(label, values, style));
    }
    Ok(Dataset::new(AxisSeries::new(ELEMENTS)?, series)?
        .with_title("Inserting sorted elements (Intel Core i5-6600, Ubuntu 16.10)")
        .with_axis_labels("elements", "time [ns]"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchplot_core::{render, LineForm, Marker, RecordingBackend, RenderOptions};

    #[test]
    fn builds_seven_series_in_plot_order() {
        let ds = insertion_benchmark().unwrap();
        assert_eq!(ds.len(), 7);
        assert_eq!(ds.axis().values(), &ELEMENTS);
        assert_eq!(ds.labels().next(), Some("boost::flat_set::emplace_hint"));
        assert_eq!(ds.labels().last(), Some("std::unordered_set::insert"));
    }

    #[test]
    fn styles_follow_format_strings() {
        let ds = insertion_benchmark().unwrap();
        let first = ds.get("boost::flat_set::emplace_hint").unwrap().style();
        assert_eq!((first.line, first.marker, first.color), (LineForm::Solid, Marker::Cross, Rgba::BLACK));
        let hex = ds.get("boost::flat_set::insert").unwrap().style();
        assert_eq!(hex.marker, Marker::Hexagon);
        assert_eq!(hex.color, Rgba::from_code('g').unwrap());
        // First uncolored series opens the cycle.
        let vec_back = ds.get("std::vector::insert_unique (with back() check)").unwrap().style();
        assert_eq!(vec_back.color, GGPLOT_CYCLE[0]);
        assert_eq!(ds.get("std::unordered_set::insert").unwrap().style().color, GGPLOT_CYCLE[4]);
    }

    #[test]
    fn renders_every_series_on_log_axes() {
        let ds = insertion_benchmark().unwrap();
        let mut backend = RecordingBackend::new();
        render(&ds, &RenderOptions::default(), &mut backend).unwrap();
        assert_eq!(backend.plotted(), ds.labels().collect::<Vec<_>>());
        assert_eq!(backend.legend_entries().map(<[String]>::len), Some(7));
    }
}
