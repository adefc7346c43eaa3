// File: crates/benchplot-core/src/scale.rs
// Summary: Data-to-pixel transforms for linear and log10 axes.

use crate::axis::{Axis, ScaleKind};

// Smallest positive f64; keeps log10 finite.
const TINY: f64 = 5e-324;

/// Maps an axis range onto a pixel span.
///
/// `start_px` is where `axis.min` lands and `end_px` where `axis.max` lands,
/// so a Y scale is built with `start_px = bottom`, `end_px = top`.
#[derive(Clone, Copy, Debug)]
pub struct PixelScale {
    pub start_px: f32,
    pub end_px: f32,
    pub kind: ScaleKind,
    // domain endpoints, already in log10 space when kind is Log
    lo: f64,
    hi: f64,
}

impl PixelScale {
    pub fn new(axis: &Axis, start_px: f32, end_px: f32) -> Self {
        let (lo, hi) = match axis.kind {
            ScaleKind::Linear => (axis.min, axis.max),
            ScaleKind::Log => (axis.min.max(TINY).log10(), axis.max.max(TINY).log10()),
        };
        Self { start_px, end_px, kind: axis.kind, lo, hi }
    }

    #[inline]
    fn domain(&self, v: f64) -> f64 {
        match self.kind {
            ScaleKind::Linear => v,
            ScaleKind::Log => v.max(TINY).log10(),
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = (self.hi - self.lo).max(1e-12);
        let t = (self.domain(v) - self.lo) / span;
        self.start_px + t as f32 * (self.end_px - self.start_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_decades_are_evenly_spaced() {
        let s = PixelScale::new(&Axis::new(100.0, 100_000.0, ScaleKind::Log), 0.0, 300.0);
        assert!((s.to_px(100.0) - 0.0).abs() < 1e-3);
        assert!((s.to_px(1_000.0) - 100.0).abs() < 1e-3);
        assert!((s.to_px(10_000.0) - 200.0).abs() < 1e-3);
        assert!((s.to_px(100_000.0) - 300.0).abs() < 1e-3);
    }

    #[test]
    fn inverted_span_for_y() {
        let s = PixelScale::new(&Axis::new(0.0, 10.0, ScaleKind::Linear), 500.0, 100.0);
        assert!((s.to_px(0.0) - 500.0).abs() < 1e-3);
        assert!((s.to_px(10.0) - 100.0).abs() < 1e-3);
        assert!((s.to_px(5.0) - 300.0).abs() < 1e-3);
    }

    #[test]
    fn decades_near_f64_max_stay_apart() {
        let axis = Axis::fit([100.0, 1e5, 1.5e308], ScaleKind::Log);
        let s = PixelScale::new(&axis, 0.0, 612.0);
        let (a, b, c) = (s.to_px(100.0), s.to_px(1e5), s.to_px(1.5e308));
        assert!(a < b && b < c, "{a} {b} {c}");
        assert!((c - 612.0).abs() < 1e-3);
    }
}
