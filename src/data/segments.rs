//! Conversion of point sequences into line segments.

use serde::{Deserialize, Serialize};

use crate::error::{ColorLineError, Result};

/// A straight piece between two consecutive points of a line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: [f64; 2],
    pub end: [f64; 2],
}

impl Segment {
    pub fn new(start: [f64; 2], end: [f64; 2]) -> Self {
        Self { start, end }
    }

    /// Both endpoints are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.start.iter().chain(self.end.iter()).all(|v| v.is_finite())
    }
}

/// Build the `N - 1` segments joining consecutive points of `(x, y)`.
///
/// Segment `i` runs from `(x[i], y[i])` to `(x[i + 1], y[i + 1])`. Fewer than two
/// points produce no segments. Mismatched lengths are rejected.
pub fn build_segments(x: &[f64], y: &[f64]) -> Result<Vec<Segment>> {
    if x.len() != y.len() {
        return Err(ColorLineError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    let segments = x
        .windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| Segment::new([xs[0], ys[0]], [xs[1], ys[1]]))
        .collect();
    Ok(segments)
}
