// File: crates/benchplot-skia/src/scene.rs
// Summary: Owned chart state collected from backend calls, rasterized on present.

use benchplot_core::{AxisId, ChartSetup, LegendPosition, ScaleKind, SeriesStyle, Theme, Trace};

#[derive(Clone, Debug, PartialEq)]
pub struct SceneTrace {
    pub label: String,
    pub style: SeriesStyle,
    pub points: Vec<(f64, f64)>,
}

impl From<&Trace<'_>> for SceneTrace {
    fn from(t: &Trace<'_>) -> Self {
        Self { label: t.label.to_owned(), style: *t.style, points: t.points().collect() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub theme: Theme,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub width: u32,
    pub height: u32,
    pub draw_labels: bool,
    pub x_scale: ScaleKind,
    pub y_scale: ScaleKind,
    pub traces: Vec<SceneTrace>,
    /// Anchor plus the number of traces registered when the legend was placed.
    pub legend: Option<(LegendPosition, usize)>,
}

impl Scene {
    pub fn new(setup: &ChartSetup<'_>) -> Self {
        Self {
            theme: setup.theme,
            title: setup.title.map(str::to_owned),
            x_label: setup.x_label.map(str::to_owned),
            y_label: setup.y_label.map(str::to_owned),
            width: setup.width,
            height: setup.height,
            draw_labels: setup.draw_labels,
            x_scale: ScaleKind::Linear,
            y_scale: ScaleKind::Linear,
            traces: Vec::new(),
            legend: None,
        }
    }

    pub fn set_scale(&mut self, axis: AxisId, kind: ScaleKind) {
        match axis {
            AxisId::X => self.x_scale = kind,
            AxisId::Y => self.y_scale = kind,
        }
    }

    pub fn legend_entries(&self) -> &[SceneTrace] {
        match self.legend {
            Some((_, n)) => &self.traces[..n.min(self.traces.len())],
            None => &[],
        }
    }
}
