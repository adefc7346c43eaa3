// File: crates/benchplot-skia/src/backend.rs
// Summary: DrawingBackend that buffers a scene and rasterizes it with Skia on present.

use std::path::PathBuf;

use anyhow::{bail, Result};
use benchplot_core::{AxisId, ChartSetup, DrawingBackend, LegendPosition, ScaleKind, Trace};
use tracing::{debug, info};

use crate::frame::Frame;
use crate::raster::rasterize;
use crate::scene::{Scene, SceneTrace};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Target {
    Memory,
    Png(PathBuf),
}

/// Skia CPU-raster backend. Keeps the last presented frame.
#[derive(Debug)]
pub struct SkiaBackend {
    target: Target,
    scene: Option<Scene>,
    frame: Option<Frame>,
}

impl SkiaBackend {
    /// Rasterize on present and keep the frame in memory only.
    pub fn in_memory() -> Self {
        Self { target: Target::Memory, scene: None, frame: None }
    }

    /// Rasterize on present and write the frame as a PNG file.
    pub fn to_png(path: impl Into<PathBuf>) -> Self {
        Self { target: Target::Png(path.into()), scene: None, frame: None }
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    pub fn into_frame(self) -> Option<Frame> {
        self.frame
    }

    fn scene_mut(&mut self, call: &str) -> Result<&mut Scene> {
        match self.scene.as_mut() {
            Some(scene) => Ok(scene),
            None => bail!("`{call}` called before `begin`"),
        }
    }
}

impl DrawingBackend for SkiaBackend {
    fn begin(&mut self, setup: &ChartSetup<'_>) -> Result<()> {
        debug!(theme = setup.theme.name, width = setup.width, height = setup.height, "begin scene");
        self.scene = Some(Scene::new(setup));
        self.frame = None;
        Ok(())
    }

    fn set_scale(&mut self, axis: AxisId, kind: ScaleKind) -> Result<()> {
        self.scene_mut("set_scale")?.set_scale(axis, kind);
        Ok(())
    }

    fn plot(&mut self, trace: &Trace<'_>) -> Result<()> {
        self.scene_mut("plot")?.traces.push(SceneTrace::from(trace));
        Ok(())
    }

    fn legend(&mut self, anchor: LegendPosition) -> Result<()> {
        let scene = self.scene_mut("legend")?;
        scene.legend = Some((anchor, scene.traces.len()));
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let scene = self.scene_mut("present")?;
        let frame = rasterize(scene, scene.width, scene.height)?;
        if let Target::Png(path) = &self.target {
            frame.save_png(path)?;
            info!(path = %path.display(), width = frame.width, height = frame.height, "wrote chart");
        }
        self.frame = Some(frame);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchplot_core::Theme;

    #[test]
    fn calls_before_begin_are_errors() {
        let mut b = SkiaBackend::in_memory();
        let err = b.set_scale(AxisId::X, ScaleKind::Log).unwrap_err();
        assert!(err.to_string().contains("before `begin`"));
        assert!(b.present().is_err());
    }

    #[test]
    fn legend_counts_traces_so_far() {
        let mut b = SkiaBackend::in_memory();
        let setup = ChartSetup {
            theme: Theme::ggplot(),
            title: None,
            x_label: None,
            y_label: None,
            width: 64,
            height: 48,
            draw_labels: false,
        };
        b.begin(&setup).unwrap();
        b.legend(LegendPosition::LowerRight).unwrap();
        assert_eq!(b.scene().unwrap().legend, Some((LegendPosition::LowerRight, 0)));
        assert!(b.scene().unwrap().legend_entries().is_empty());
    }
}
