// File: crates/benchplot-core/src/interchange.rs
// Summary: Serde interchange form of a Dataset: {axis, series: [{label, values, style}]}.

use serde::{Deserialize, Serialize};

use crate::dataset::{AxisSeries, Dataset, NamedSeries};
use crate::error::ChartError;
use crate::style::SeriesStyle;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub axis: Vec<f64>,
    pub series: Vec<SeriesRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeriesRecord {
    pub label: String,
    pub values: Vec<f64>,
    pub style: SeriesStyle,
}

impl TryFrom<DatasetRecord> for Dataset {
    type Error = ChartError;

    fn try_from(rec: DatasetRecord) -> Result<Self, Self::Error> {
        let axis = AxisSeries::new(rec.axis)?;
        let series = rec
            .series
            .into_iter()
            .map(|s| NamedSeries::new(s.label, s.values, s.style))
            .collect();
        let mut ds = Dataset::new(axis, series)?;
        if let Some(t) = rec.title {
            ds = ds.with_title(t);
        }
        if let Some(x) = rec.x_label {
            ds = ds.with_x_label(x);
        }
        if let Some(y) = rec.y_label {
            ds = ds.with_y_label(y);
        }
        Ok(ds)
    }
}

impl From<&Dataset> for DatasetRecord {
    fn from(ds: &Dataset) -> Self {
        Self {
            axis: ds.axis().values().to_vec(),
            series: ds
                .series()
                .iter()
                .map(|s| SeriesRecord {
                    label: s.label().to_owned(),
                    values: s.values().to_vec(),
                    style: *s.style(),
                })
                .collect(),
            title: ds.title().map(str::to_owned),
            x_label: ds.x_label().map(str::to_owned),
            y_label: ds.y_label().map(str::to_owned),
        }
    }
}

impl Dataset {
    /// Parse the JSON interchange form, running the same checks as [`Dataset::new`].
    pub fn from_json(text: &str) -> Result<Self, ChartError> {
        let rec: DatasetRecord = serde_json::from_str(text)?;
        Dataset::try_from(rec)
    }

    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string_pretty(&DatasetRecord::from(self))?)
    }
}
