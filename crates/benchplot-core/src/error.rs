// File: crates/benchplot-core/src/error.rs
// Summary: Error taxonomy for dataset validation and rendering.

use std::fmt;

use thiserror::Error;

use crate::axis::AxisId;

/// Where an offending value came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueOrigin {
    Axis,
    Series(String),
}

impl fmt::Display for ValueOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueOrigin::Axis => f.write_str("the axis"),
            ValueOrigin::Series(label) => write!(f, "series `{label}`"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("series `{label}` has {found} values but the axis has {expected}")]
    Shape {
        label: String,
        expected: usize,
        found: usize,
    },

    #[error("series label `{label}` is used more than once")]
    DuplicateLabel { label: String },

    #[error("invalid axis: {reason}")]
    InvalidAxis { reason: String },

    #[error("series `{label}` has a non-finite value at index {index}")]
    NonFiniteValue { label: String, index: usize },

    #[error("{axis} scale is logarithmic but {origin} has value {value} at index {index}")]
    InvalidScale {
        axis: AxisId,
        origin: ValueOrigin,
        index: usize,
        value: f64,
    },

    #[error("malformed dataset document")]
    Json(#[from] serde_json::Error),

    /// Failure reported by the drawing backend, passed through as-is.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl ChartError {
    pub(crate) fn invalid_axis(reason: impl Into<String>) -> Self {
        ChartError::InvalidAxis { reason: reason.into() }
    }
}

/// Unrecognized value for one of the named render options.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {what} `{got}` (expected one of: {})", .expected.join(", "))]
pub struct ParseOptionError {
    what: &'static str,
    got: String,
    expected: &'static [&'static str],
}

impl ParseOptionError {
    pub(crate) fn new(what: &'static str, got: &str, expected: &'static [&'static str]) -> Self {
        Self { what, got: got.to_string(), expected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LegendPosition, ScaleKind};

    #[test]
    fn unknown_option_lists_accepted_values() {
        let err = "cubic".parse::<ScaleKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown scale `cubic` (expected one of: linear, log)");

        let err = "middle".parse::<LegendPosition>().unwrap_err();
        assert!(err.to_string().starts_with("unknown legend position `middle`"), "{err}");
        assert!(err.to_string().ends_with("1, 2, 3, 4)"), "{err}");
    }
}
