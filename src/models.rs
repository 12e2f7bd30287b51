use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// One chart request: a single series plus the text decorating it.
///
/// Key names match the input document (`Legend`, `Title`, `Xvalues`, ...).
/// Every field is optional; absent or `null` fields decode to empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    #[serde(rename = "Legend", alias = "legend")]
    #[serde(default, deserialize_with = "de_null_default")]
    pub legend: String,
    #[serde(rename = "Title", alias = "title")]
    #[serde(default, deserialize_with = "de_null_default")]
    pub title: String,
    #[serde(rename = "Xvalues", alias = "xvalues")]
    #[serde(default, deserialize_with = "de_null_default")]
    pub x_values: Vec<f64>,
    #[serde(rename = "XUnit", alias = "xunit")]
    #[serde(default, deserialize_with = "de_null_default")]
    pub x_unit: String,
    #[serde(rename = "Yvalues", alias = "yvalues")]
    #[serde(default, deserialize_with = "de_null_default")]
    pub y_values: Vec<f64>,
    #[serde(rename = "YUnit", alias = "yunit")]
    #[serde(default, deserialize_with = "de_null_default")]
    pub y_unit: String,
    #[serde(rename = "Y2values", alias = "y2values")]
    #[serde(default, deserialize_with = "de_null_default")]
    pub y2_values: Vec<f64>,
    #[serde(rename = "Y2Unit", alias = "y2unit")]
    #[serde(default, deserialize_with = "de_null_default")]
    pub y2_unit: String,
}

impl ChartRequest {
    /// Legend text split on '\n'. Empty lines are kept; the annotation
    /// renderer skips them.
    pub fn legend_lines(&self) -> Vec<String> {
        self.legend.split('\n').map(str::to_string).collect()
    }

    /// Reject X/Y sequences of different lengths before anything is drawn.
    pub fn validate(&self) -> Result<()> {
        if self.x_values.len() != self.y_values.len() {
            return Err(Error::SeriesLength {
                x: self.x_values.len(),
                y: self.y_values.len(),
            });
        }
        Ok(())
    }

    /// Finite (x, y) pairs in input order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x_values
            .iter()
            .zip(self.y_values.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(x, y)| (*x, *y))
            .collect()
    }
}

/// Serde helper: treat an explicit `null` like a missing field.
fn de_null_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
