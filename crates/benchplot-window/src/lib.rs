// File: crates/benchplot-window/src/lib.rs
// Summary: Interactive display backend: rasterizes with Skia, shows the chart in a window via softbuffer.
// Notes:
// - `present` blocks until the window is closed or Escape is pressed.
// - Resizing re-rasterizes the buffered scene at the new size.

use std::num::NonZeroU32;

use anyhow::{anyhow, Context, Result};
use benchplot_core::{AxisId, ChartSetup, DrawingBackend, LegendPosition, ScaleKind, Trace};
use benchplot_skia::{rasterize, Frame, Scene, SkiaBackend};
use tracing::{debug, info};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::{Window, WindowBuilder};

/// Pack one RGBA8 pixel as softbuffer's `0RGB` word.
pub fn rgba_to_xrgb(px: &[u8]) -> u32 {
    ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32
}

pub struct WindowBackend {
    inner: SkiaBackend,
    title: String,
    event_loop: Option<EventLoop<()>>,
}

impl WindowBackend {
    pub fn new(title: impl Into<String>) -> Self {
        Self { inner: SkiaBackend::in_memory(), title: title.into(), event_loop: None }
    }

    /// Last frame shown, at the size it was first presented.
    pub fn frame(&self) -> Option<&Frame> {
        self.inner.frame()
    }

    fn show(&mut self, scene: &Scene, first: Frame) -> Result<()> {
        let event_loop = self.event_loop.get_or_insert_with(EventLoop::new);
        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(PhysicalSize::new(first.width, first.height))
            .build(event_loop)
            .context("create window")?;
        let context = unsafe { softbuffer::Context::new(&window) }
            .map_err(|e| anyhow!("softbuffer context: {e}"))?;
        let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
            .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

        info!(title = %self.title, "showing chart; close the window or press Escape to continue");
        let mut frame = first;
        let mut failure = None;
        event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Wait;
            match event {
                Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                    WindowEvent::CloseRequested
                    | WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                state: ElementState::Pressed,
                                virtual_keycode: Some(VirtualKeyCode::Escape),
                                ..
                            },
                        ..
                    } => *control_flow = ControlFlow::Exit,
                    WindowEvent::Resized(_) => window.request_redraw(),
                    _ => {}
                },
                Event::RedrawRequested(id) if id == window.id() => {
                    if let Err(e) = blit(&window, &mut surface, scene, &mut frame) {
                        failure = Some(e);
                        *control_flow = ControlFlow::Exit;
                    }
                }
                _ => {}
            }
        });
        failure.map_or(Ok(()), Err)
    }
}

fn blit(window: &Window, surface: &mut softbuffer::Surface, scene: &Scene, frame: &mut Frame) -> Result<()> {
    let size = window.inner_size();
    // Minimized.
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    if (frame.width, frame.height) != (size.width, size.height) {
        debug!(width = size.width, height = size.height, "re-rasterize for window size");
        *frame = rasterize(scene, size.width, size.height)?;
    }
    surface.resize(w, h).map_err(|e| anyhow!("resize surface: {e}"))?;
    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("map surface buffer: {e}"))?;
    for (dst, px) in buffer.iter_mut().zip(frame.rgba.chunks_exact(4)) {
        *dst = rgba_to_xrgb(px);
    }
    buffer.present().map_err(|e| anyhow!("present surface: {e}"))?;
    Ok(())
}

impl DrawingBackend for WindowBackend {
    fn begin(&mut self, setup: &ChartSetup<'_>) -> Result<()> {
        self.inner.begin(setup)
    }

    fn set_scale(&mut self, axis: AxisId, kind: ScaleKind) -> Result<()> {
        self.inner.set_scale(axis, kind)
    }

    fn plot(&mut self, trace: &Trace<'_>) -> Result<()> {
        self.inner.plot(trace)
    }

    fn legend(&mut self, anchor: LegendPosition) -> Result<()> {
        self.inner.legend(anchor)
    }

    fn present(&mut self) -> Result<()> {
        self.inner.present()?;
        let scene = self.inner.scene().cloned().context("no scene to show")?;
        let frame = self.inner.frame().cloned().context("no frame to show")?;
        self.show(&scene, frame)
    }
}
