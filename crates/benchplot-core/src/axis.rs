// File: crates/benchplot-core/src/axis.rs
// Summary: Axis identity, scale kinds, and data-range fitting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseOptionError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    Linear,
    #[default]
    Log,
}

impl FromStr for ScaleKind {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "lin" => Ok(ScaleKind::Linear),
            "log" | "log10" => Ok(ScaleKind::Log),
            _ => Err(ParseOptionError::new("scale", s, &["linear", "log"])),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisId {
    X,
    Y,
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisId::X => f.write_str("x"),
            AxisId::Y => f.write_str("y"),
        }
    }
}

/// Visible range of one axis after fitting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
}

impl Axis {
    pub fn new(min: f64, max: f64, kind: ScaleKind) -> Self {
        Self { min, max, kind }
    }

    /// Fit a range around `values`.
    ///
    /// Linear ranges get a 5% margin on both ends. Log ranges are widened
    /// outward to whole decades. Non-positive values are ignored under a log
    /// scale; callers validate them before reaching this point.
    pub fn fit(values: impl IntoIterator<Item = f64>, kind: ScaleKind) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values {
            if !v.is_finite() || (kind == ScaleKind::Log && v <= 0.0) {
                continue;
            }
            lo = lo.min(v);
            hi = hi.max(v);
        }

        match kind {
            ScaleKind::Linear => {
                if !lo.is_finite() || !hi.is_finite() {
                    return Self::new(0.0, 1.0, kind);
                }
                if (hi - lo).abs() < 1e-12 {
                    return Self::new(lo - 0.5, hi + 0.5, kind);
                }
                let m = (hi - lo) * 0.05;
                if !m.is_finite() || !(lo - m).is_finite() || !(hi + m).is_finite() {
                    return Self::new(lo, hi, kind);
                }
                Self::new(lo - m, hi + m, kind)
            }
            ScaleKind::Log => {
                if !lo.is_finite() || !hi.is_finite() {
                    return Self::new(1.0, 10.0, kind);
                }
                let mut lo_exp = (lo.log10() + 1e-9).floor();
                let mut hi_exp = (hi.log10() - 1e-9).ceil();
                if hi_exp <= lo_exp {
                    lo_exp -= 1.0;
                    hi_exp += 1.0;
                }
                // Decades past the f64 range fall back to the data extremes.
                let min = 10f64.powi(lo_exp as i32);
                let max = 10f64.powi(hi_exp as i32);
                let min = if min > 0.0 && min.is_normal() { min } else { lo };
                let max = if max.is_finite() { max } else { hi };
                Self::new(min, max, kind)
            }
        }
    }
}
