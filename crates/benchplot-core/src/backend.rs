// File: crates/benchplot-core/src/backend.rs
// Summary: Drawing contract consumed by the renderer, plus a recording backend.

use anyhow::Result;

use crate::axis::{AxisId, ScaleKind};
use crate::chart::LegendPosition;
use crate::dataset::Trace;
use crate::style::SeriesStyle;
use crate::theme::Theme;

/// Everything a backend needs to open a fresh chart.
#[derive(Clone, Copy, Debug)]
pub struct ChartSetup<'a> {
    pub theme: Theme,
    pub title: Option<&'a str>,
    pub x_label: Option<&'a str>,
    pub y_label: Option<&'a str>,
    pub width: u32,
    pub height: u32,
    pub draw_labels: bool,
}

/// The only capabilities the renderer uses from a drawing backend.
///
/// Calls arrive in a fixed order: `begin`, both `set_scale`s, one `plot` per
/// series, `legend`, `present`.
pub trait DrawingBackend {
    fn begin(&mut self, setup: &ChartSetup<'_>) -> Result<()>;
    fn set_scale(&mut self, axis: AxisId, kind: ScaleKind) -> Result<()>;
    fn plot(&mut self, trace: &Trace<'_>) -> Result<()>;
    /// Place a legend built from the labels plotted so far.
    fn legend(&mut self, anchor: LegendPosition) -> Result<()>;
    fn present(&mut self) -> Result<()>;
}

impl<B: DrawingBackend + ?Sized> DrawingBackend for Box<B> {
    fn begin(&mut self, setup: &ChartSetup<'_>) -> Result<()> {
        (**self).begin(setup)
    }

    fn set_scale(&mut self, axis: AxisId, kind: ScaleKind) -> Result<()> {
        (**self).set_scale(axis, kind)
    }

    fn plot(&mut self, trace: &Trace<'_>) -> Result<()> {
        (**self).plot(trace)
    }

    fn legend(&mut self, anchor: LegendPosition) -> Result<()> {
        (**self).legend(anchor)
    }

    fn present(&mut self) -> Result<()> {
        (**self).present()
    }
}

/// One recorded backend call, with borrowed data copied out.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Begin { theme: &'static str, title: Option<String> },
    SetScale(AxisId, ScaleKind),
    Plot { label: String, style: SeriesStyle, points: Vec<(f64, f64)> },
    Legend { anchor: LegendPosition, entries: Vec<String> },
    Present,
}

/// Backend that draws nothing and remembers every call. Useful for tests and dry runs.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Vec<Call>,
    labels: Vec<String>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Labels of the plot calls, in call order.
    pub fn plotted(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Plot { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Entries of the last placed legend.
    pub fn legend_entries(&self) -> Option<&[String]> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Legend { entries, .. } => Some(entries.as_slice()),
            _ => None,
        })
    }

    pub fn take(&mut self) -> Vec<Call> {
        self.labels.clear();
        std::mem::take(&mut self.calls)
    }
}

impl DrawingBackend for RecordingBackend {
    fn begin(&mut self, setup: &ChartSetup<'_>) -> Result<()> {
        self.labels.clear();
        self.calls.push(Call::Begin {
            theme: setup.theme.name,
            title: setup.title.map(str::to_owned),
        });
        Ok(())
    }

    fn set_scale(&mut self, axis: AxisId, kind: ScaleKind) -> Result<()> {
        self.calls.push(Call::SetScale(axis, kind));
        Ok(())
    }

    fn plot(&mut self, trace: &Trace<'_>) -> Result<()> {
        self.labels.push(trace.label.to_owned());
        self.calls.push(Call::Plot {
            label: trace.label.to_owned(),
            style: *trace.style,
            points: trace.points().collect(),
        });
        Ok(())
    }

    fn legend(&mut self, anchor: LegendPosition) -> Result<()> {
        self.calls.push(Call::Legend { anchor, entries: self.labels.clone() });
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.calls.push(Call::Present);
        Ok(())
    }
}
