//! Per-point color values and per-segment style values.

use serde::{Deserialize, Serialize};

use crate::error::{ColorLineError, Result};

/// `n` evenly spaced values from `start` to `end`, both endpoints included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut v: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            v[n - 1] = end;
            v
        }
    }
}

/// The values driving the color map lookup of a colored line.
///
/// Whatever the variant, the resolved values are reused cyclically when there
/// are fewer of them than segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ColorValues {
    /// Color by position along the line: evenly spaced on `[0, 1]`.
    #[default]
    ByPosition,
    /// A single value for the whole line.
    Uniform(f64),
    /// One value per point (or per segment).
    PerPoint(Vec<f64>),
}

impl ColorValues {
    /// Resolve to the concrete value array for a line of `n_points` points.
    ///
    /// `ByPosition` always yields at least one value so that empty lines stay valid.
    pub fn resolve(&self, n_points: usize) -> Result<Vec<f64>> {
        match self {
            ColorValues::ByPosition => Ok(linspace(0.0, 1.0, n_points.max(1))),
            ColorValues::Uniform(v) => Ok(vec![*v]),
            ColorValues::PerPoint(values) if values.is_empty() => {
                Err(ColorLineError::EmptyColorValues)
            }
            ColorValues::PerPoint(values) => Ok(values.clone()),
        }
    }
}

impl From<f64> for ColorValues {
    fn from(v: f64) -> Self {
        ColorValues::Uniform(v)
    }
}

impl From<Vec<f64>> for ColorValues {
    fn from(v: Vec<f64>) -> Self {
        ColorValues::PerPoint(v)
    }
}

impl From<&[f64]> for ColorValues {
    fn from(v: &[f64]) -> Self {
        ColorValues::PerPoint(v.to_vec())
    }
}

impl From<Option<Vec<f64>>> for ColorValues {
    fn from(v: Option<Vec<f64>>) -> Self {
        v.map(ColorValues::PerPoint).unwrap_or_default()
    }
}

/// A line width or alpha: one value for every segment, or a sequence reused cyclically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StyleValue {
    Uniform(f32),
    PerSegment(Vec<f32>),
}

impl StyleValue {
    /// Value for segment `index`; `None` only for an empty sequence.
    pub fn get(&self, index: usize) -> Option<f32> {
        match self {
            StyleValue::Uniform(v) => Some(*v),
            StyleValue::PerSegment(values) if values.is_empty() => None,
            StyleValue::PerSegment(values) => Some(values[index % values.len()]),
        }
    }

    /// Reject empty sequences; `what` names the parameter in the error.
    pub fn validate(&self, what: &'static str) -> Result<()> {
        match self {
            StyleValue::PerSegment(values) if values.is_empty() => {
                Err(ColorLineError::EmptyStyle(what))
            }
            _ => Ok(()),
        }
    }
}

impl From<f32> for StyleValue {
    fn from(v: f32) -> Self {
        StyleValue::Uniform(v)
    }
}

impl From<Vec<f32>> for StyleValue {
    fn from(v: Vec<f32>) -> Self {
        StyleValue::PerSegment(v)
    }
}

impl From<Vec<f64>> for StyleValue {
    fn from(v: Vec<f64>) -> Self {
        StyleValue::PerSegment(v.into_iter().map(|x| x as f32).collect())
    }
}

impl From<&[f64]> for StyleValue {
    fn from(v: &[f64]) -> Self {
        StyleValue::PerSegment(v.iter().map(|x| *x as f32).collect())
    }
}
