// File: crates/benchplot-core/src/grid.rs
// Summary: Grid/tick layout helpers for linear and log axes.

use crate::axis::{Axis, ScaleKind};

/// Tick positions for an axis: decades for log axes, "nice" steps otherwise.
pub fn ticks(axis: &Axis) -> Vec<f64> {
    match axis.kind {
        ScaleKind::Log => decade_ticks(axis.min, axis.max),
        ScaleKind::Linear => nice_ticks(axis.min, axis.max, 6),
    }
}

/// Powers of ten within `[min, max]`.
pub fn decade_ticks(min: f64, max: f64) -> Vec<f64> {
    if !(min > 0.0) || !max.is_finite() || max <= min {
        return Vec::new();
    }
    // Tolerate log10 rounding at exact powers of ten.
    let first = (min.log10() - 1e-9).ceil() as i32;
    let last = (max.log10() + 1e-9).floor() as i32;
    (first..=last).map(|k| 10f64.powi(k)).collect()
}

/// Roughly `target` ticks on 1/2/5 x 10^k steps covering `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) || !(max - min).is_finite() || target < 2 {
        return vec![min, max];
    }
    let raw = (max - min) / (target as f64 - 1.0);
    let mag = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * mag);
    let start = (min / step).ceil() as i64;
    let end = (max / step).floor() as i64;
    (start..=end).map(|k| k as f64 * step).collect()
}

/// Tick label text: `10ⁿ` for decades, compact decimals otherwise.
pub fn format_tick(v: f64, kind: ScaleKind) -> String {
    match kind {
        ScaleKind::Log => {
            let exp = v.log10().round() as i32;
            format!("10{}", superscript(exp))
        }
        ScaleKind::Linear => {
            if v == 0.0 {
                return "0".into();
            }
            let a = v.abs();
            if a >= 1e6 || a < 1e-3 {
                format!("{v:.1e}")
            } else if v.fract().abs() < 1e-9 {
                format!("{}", v as i64)
            } else {
                let s = format!("{v:.3}");
                s.trim_end_matches('0').trim_end_matches('.').to_string()
            }
        }
    }
}

fn superscript(n: i32) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    let mut out = String::new();
    if n < 0 {
        out.push('⁻');
    }
    for c in n.unsigned_abs().to_string().chars() {
        if let Some(d) = c.to_digit(10) {
            out.push(DIGITS[d as usize]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decades_inside_range() {
        assert_eq!(decade_ticks(100.0, 100_000.0), vec![100.0, 1_000.0, 10_000.0, 100_000.0]);
        assert_eq!(decade_ticks(50.0, 5_000.0), vec![100.0, 1_000.0]);
        assert!(decade_ticks(0.0, 10.0).is_empty());
    }

    #[test]
    fn nice_linear_steps() {
        assert_eq!(nice_ticks(0.0, 10.0, 6), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        let t = nice_ticks(-0.5, 10.5, 6);
        assert_eq!(t.first().copied(), Some(0.0));
        assert_eq!(t.last().copied(), Some(10.0));
    }

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(1000.0, ScaleKind::Log), "10³");
        assert_eq!(format_tick(0.01, ScaleKind::Log), "10⁻²");
        assert_eq!(format_tick(2.5, ScaleKind::Linear), "2.5");
        assert_eq!(format_tick(40.0, ScaleKind::Linear), "40");
    }

    #[test]
    fn decades_of_unbounded_range_are_empty() {
        assert!(decade_ticks(100.0, f64::INFINITY).is_empty());
        assert!(decade_ticks(f64::NAN, 10.0).is_empty());
    }

    #[test]
    fn decades_up_to_f64_max() {
        let t = decade_ticks(100.0, 1.5e308);
        assert_eq!(t.len(), 307);
        let last = t.last().copied().unwrap();
        assert!((last / 1e308 - 1.0).abs() < 1e-9);
        assert!(t.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn nice_ticks_of_overflowing_span() {
        assert_eq!(nice_ticks(-1.5e308, 1.5e308, 6), vec![-1.5e308, 1.5e308]);
    }
}
