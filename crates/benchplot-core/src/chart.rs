// File: crates/benchplot-core/src/chart.rs
// Summary: Render options and the single-pass renderer that drives a DrawingBackend.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::axis::{AxisId, ScaleKind};
use crate::backend::DrawingBackend;
use crate::dataset::Dataset;
use crate::error::{ChartError, ParseOptionError, ValueOrigin};
use crate::plan::{DrawCommand, DrawPlan};
use crate::theme::StylePreset;

/// Default surface width in pixels.
pub const WIDTH: u32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 640;

/// Chart corner the legend is anchored to.
///
/// Deserializes from a corner name or a numeric location code, like the CLI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "LegendRepr")]
pub enum LegendPosition {
    #[default]
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl LegendPosition {
    /// Numeric location codes of the classic plotting API (1 = upper right, counter-clockwise).
    pub fn from_loc(code: u8) -> Option<Self> {
        match code {
            1 => Some(LegendPosition::UpperRight),
            2 => Some(LegendPosition::UpperLeft),
            3 => Some(LegendPosition::LowerLeft),
            4 => Some(LegendPosition::LowerRight),
            _ => None,
        }
    }
}

impl FromStr for LegendPosition {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match norm.as_str() {
            "upper-left" => Ok(LegendPosition::UpperLeft),
            "upper-right" => Ok(LegendPosition::UpperRight),
            "lower-left" => Ok(LegendPosition::LowerLeft),
            "lower-right" => Ok(LegendPosition::LowerRight),
            other => other
                .parse::<u8>()
                .ok()
                .and_then(LegendPosition::from_loc)
                .ok_or_else(|| unknown_legend(s)),
        }
    }
}

fn unknown_legend(got: &str) -> ParseOptionError {
    ParseOptionError::new(
        "legend position",
        got,
        &["upper-left", "upper-right", "lower-left", "lower-right", "1", "2", "3", "4"],
    )
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LegendRepr {
    Code(i64),
    Name(String),
}

impl TryFrom<LegendRepr> for LegendPosition {
    type Error = ParseOptionError;

    fn try_from(repr: LegendRepr) -> Result<Self, Self::Error> {
        match repr {
            LegendRepr::Code(code) => u8::try_from(code)
                .ok()
                .and_then(LegendPosition::from_loc)
                .ok_or_else(|| unknown_legend(&code.to_string())),
            LegendRepr::Name(name) => name.parse(),
        }
    }
}

/// Render configuration. Missing keys take their defaults when deserialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RenderOptions {
    pub x_scale: ScaleKind,
    pub y_scale: ScaleKind,
    pub legend_position: LegendPosition,
    pub style_preset: StylePreset,
    pub width: u32,
    pub height: u32,
    /// Text output (ticks, legend labels, title). Off gives font-independent pixels.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            x_scale: ScaleKind::Log,
            y_scale: ScaleKind::Log,
            legend_position: LegendPosition::UpperLeft,
            style_preset: StylePreset::Default,
            width: WIDTH,
            height: HEIGHT,
            draw_labels: true,
        }
    }
}

/// Draw `dataset` through `backend` in one pass.
///
/// All validation runs before the first backend call; a failure leaves the
/// backend untouched. Backend errors end the pass and are returned as-is.
pub fn render<B>(dataset: &Dataset, options: &RenderOptions, backend: &mut B) -> Result<(), ChartError>
where
    B: DrawingBackend + ?Sized,
{
    check_scales(dataset, options)?;
    warn_indistinct_styles(dataset);

    debug!(
        series = dataset.len(),
        points = dataset.axis().len(),
        x_scale = ?options.x_scale,
        y_scale = ?options.y_scale,
        preset = ?options.style_preset,
        "render pass"
    );

    for command in DrawPlan::new(dataset, options) {
        match command {
            DrawCommand::Begin(setup) => backend.begin(&setup)?,
            DrawCommand::SetScale(axis, kind) => backend.set_scale(axis, kind)?,
            DrawCommand::Plot(trace) => {
                debug!(index = trace.index, label = trace.label, "plot");
                backend.plot(&trace)?
            }
            DrawCommand::Legend(anchor) => backend.legend(anchor)?,
            DrawCommand::Present => backend.present()?,
        }
    }
    Ok(())
}

/// Every value on a logarithmic axis must be strictly positive. Never clamps.
pub fn check_scales(dataset: &Dataset, options: &RenderOptions) -> Result<(), ChartError> {
    if options.x_scale == ScaleKind::Log {
        if let Some((index, &value)) = dataset.axis().values().iter().enumerate().find(|(_, v)| **v <= 0.0) {
            return Err(ChartError::InvalidScale { axis: AxisId::X, origin: ValueOrigin::Axis, index, value });
        }
    }
    if options.y_scale == ScaleKind::Log {
        for s in dataset.series() {
            if let Some((index, &value)) = s.values().iter().enumerate().find(|(_, v)| **v <= 0.0) {
                return Err(ChartError::InvalidScale {
                    axis: AxisId::Y,
                    origin: ValueOrigin::Series(s.label().to_owned()),
                    index,
                    value,
                });
            }
        }
    }
    Ok(())
}

fn warn_indistinct_styles(dataset: &Dataset) {
    let mut first_seen = HashMap::with_capacity(dataset.len());
    for s in dataset.series() {
        match first_seen.get(s.style()) {
            Some(&first) => {
                warn!(first, second = s.label(), "two series share the same line, marker and color")
            }
            None => {
                first_seen.insert(*s.style(), s.label());
            }
        }
    }
}
