// File: crates/benchplot-core/src/dataset.rs
// Summary: Immutable benchmark dataset: shared x-axis plus labeled, styled value series.
// Notes:
// - All validation happens in the constructors; there are no mutating accessors.
// - Value positivity is a scale concern and is checked by the renderer.

use std::collections::HashSet;

use crate::error::ChartError;
use crate::style::SeriesStyle;

/// Strictly increasing, positive input sizes shared by every series.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSeries {
    values: Vec<f64>,
}

impl AxisSeries {
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self, ChartError> {
        let values = values.into();
        if values.len() < 2 {
            return Err(ChartError::invalid_axis(format!(
                "needs at least 2 points, got {}",
                values.len()
            )));
        }
        for (i, &v) in values.iter().enumerate() {
            if !v.is_finite() || v <= 0.0 {
                return Err(ChartError::invalid_axis(format!(
                    "value {v} at index {i} is not a positive finite number"
                )));
            }
        }
        if let Some(i) = values.windows(2).position(|w| w[1] <= w[0]) {
            return Err(ChartError::invalid_axis(format!(
                "values must be strictly increasing ({} is followed by {})",
                values[i],
                values[i + 1]
            )));
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One measured series aligned to the axis.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedSeries {
    label: String,
    values: Vec<f64>,
    style: SeriesStyle,
}

impl NamedSeries {
    pub fn new(label: impl Into<String>, values: impl Into<Vec<f64>>, style: SeriesStyle) -> Self {
        Self { label: label.into(), values: values.into(), style }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn style(&self) -> &SeriesStyle {
        &self.style
    }
}

/// A validated snapshot of benchmark results, ready to render.
///
/// Series keep their insertion order, which is also draw and legend order.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    axis: AxisSeries,
    series: Vec<NamedSeries>,
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
}

impl Dataset {
    /// Build a dataset, rejecting label collisions, length mismatches and
    /// non-finite values. Series are checked in order; the first offence wins.
    pub fn new(axis: AxisSeries, series: Vec<NamedSeries>) -> Result<Self, ChartError> {
        let mut seen = HashSet::with_capacity(series.len());
        for s in &series {
            if !seen.insert(s.label()) {
                return Err(ChartError::DuplicateLabel { label: s.label.clone() });
            }
            if s.values.len() != axis.len() {
                return Err(ChartError::Shape {
                    label: s.label.clone(),
                    expected: axis.len(),
                    found: s.values.len(),
                });
            }
            if let Some(index) = s.values.iter().position(|v| !v.is_finite()) {
                return Err(ChartError::NonFiniteValue { label: s.label.clone(), index });
            }
        }
        Ok(Self { axis, series, title: None, x_label: None, y_label: None })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_axis_labels(self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.with_x_label(x).with_y_label(y)
    }

    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn axis(&self) -> &AxisSeries {
        &self.axis
    }

    pub fn series(&self) -> &[NamedSeries] {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&NamedSeries> {
        self.series.iter().find(|s| s.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.iter().map(|s| s.label.as_str())
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    /// One trace per series, in insertion order.
    pub fn traces(&self) -> Traces<'_> {
        Traces { axis: self.axis.values(), inner: self.series.iter().enumerate() }
    }
}

/// A series paired with the axis, as handed to a drawing backend.
#[derive(Clone, Copy, Debug)]
pub struct Trace<'a> {
    pub index: usize,
    pub label: &'a str,
    pub style: &'a SeriesStyle,
    axis: &'a [f64],
    values: &'a [f64],
}

impl<'a> Trace<'a> {
    /// `(axis[i], values[i])` pairs, produced lazily.
    pub fn points(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + 'a {
        let (axis, values) = (self.axis, self.values);
        axis.iter().copied().zip(values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub struct Traces<'a> {
    axis: &'a [f64],
    inner: std::iter::Enumerate<std::slice::Iter<'a, NamedSeries>>,
}

impl<'a> Iterator for Traces<'a> {
    type Item = Trace<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, s) = self.inner.next()?;
        Some(Trace {
            index,
            label: &s.label,
            style: &s.style,
            axis: self.axis,
            values: &s.values,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Traces<'_> {}
