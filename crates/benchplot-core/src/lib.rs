// File: crates/benchplot-core/src/lib.rs
// Summary: Core library entry point; dataset model, render options, and the drawing contract.

pub mod axis;
pub mod backend;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod grid;
pub mod interchange;
pub mod plan;
pub mod scale;
pub mod style;
pub mod theme;

pub use axis::{Axis, AxisId, ScaleKind};
pub use backend::{Call, ChartSetup, DrawingBackend, RecordingBackend};
pub use chart::{check_scales, render, LegendPosition, RenderOptions};
pub use dataset::{AxisSeries, Dataset, NamedSeries, Trace};
pub use error::{ChartError, ParseOptionError, ValueOrigin};
pub use plan::{DrawCommand, DrawPlan};
pub use scale::PixelScale;
pub use style::{LineForm, Marker, Rgba, SeriesStyle, StyleParseError, GGPLOT_CYCLE};
pub use theme::{StylePreset, Theme};
