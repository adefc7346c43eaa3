// File: crates/benchplot-core/src/plan.rs
// Summary: Lazy, single-pass sequence of draw commands for one render.

use crate::axis::{AxisId, ScaleKind};
use crate::backend::ChartSetup;
use crate::chart::{LegendPosition, RenderOptions};
use crate::dataset::{Dataset, Trace, Traces};

#[derive(Clone, Copy, Debug)]
pub enum DrawCommand<'a> {
    Begin(ChartSetup<'a>),
    SetScale(AxisId, ScaleKind),
    Plot(Trace<'a>),
    Legend(LegendPosition),
    Present,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Begin,
    ScaleX,
    ScaleY,
    Plot,
    Legend,
    Present,
    Done,
}

/// Commands are produced one at a time; scales always come before the first plot.
pub struct DrawPlan<'a> {
    stage: Stage,
    setup: ChartSetup<'a>,
    x_scale: ScaleKind,
    y_scale: ScaleKind,
    legend: LegendPosition,
    traces: Traces<'a>,
}

impl<'a> DrawPlan<'a> {
    pub fn new(dataset: &'a Dataset, options: &RenderOptions) -> Self {
        Self {
            stage: Stage::Begin,
            setup: ChartSetup {
                theme: options.style_preset.theme(),
                title: dataset.title(),
                x_label: dataset.x_label(),
                y_label: dataset.y_label(),
                width: options.width,
                height: options.height,
                draw_labels: options.draw_labels,
            },
            x_scale: options.x_scale,
            y_scale: options.y_scale,
            legend: options.legend_position,
            traces: dataset.traces(),
        }
    }
}

impl<'a> Iterator for DrawPlan<'a> {
    type Item = DrawCommand<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (cmd, next) = match self.stage {
                Stage::Begin => (Some(DrawCommand::Begin(self.setup)), Stage::ScaleX),
                Stage::ScaleX => (Some(DrawCommand::SetScale(AxisId::X, self.x_scale)), Stage::ScaleY),
                Stage::ScaleY => (Some(DrawCommand::SetScale(AxisId::Y, self.y_scale)), Stage::Plot),
                Stage::Plot => match self.traces.next() {
                    Some(t) => return Some(DrawCommand::Plot(t)),
                    None => (None, Stage::Legend),
                },
                Stage::Legend => (Some(DrawCommand::Legend(self.legend)), Stage::Present),
                Stage::Present => (Some(DrawCommand::Present), Stage::Done),
                Stage::Done => return None,
            };
            self.stage = next;
            if cmd.is_some() {
                return cmd;
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let fixed = match self.stage {
            Stage::Begin => 5,
            Stage::ScaleX => 4,
            Stage::ScaleY => 3,
            Stage::Plot | Stage::Legend => 2,
            Stage::Present => 1,
            Stage::Done => 0,
        };
        let plots = if matches!(self.stage, Stage::Legend | Stage::Present | Stage::Done) {
            0
        } else {
            self.traces.len()
        };
        (fixed + plots, Some(fixed + plots))
    }
}

impl ExactSizeIterator for DrawPlan<'_> {}
