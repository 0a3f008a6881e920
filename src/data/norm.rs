//! Normalizations: raw color values to color map input.

use serde::{Deserialize, Serialize};

use crate::error::{ColorLineError, Result};

/// Output of a [`Norm`], consumed by [`Colormap::color_at`](crate::Colormap::color_at).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalized {
    /// Position on the map, `[0, 1]` when in range.
    Fraction(f64),
    /// Direct lookup index; `-1` is under range, `len` is over range.
    Index(i64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Norm {
    /// Linear map of `[vmin, vmax]` onto `[0, 1]`.
    Linear { vmin: f64, vmax: f64 },
    /// Discrete bins delimited by `boundaries`, spread over `ncolors` map entries.
    Boundary { boundaries: Vec<f64>, ncolors: usize },
}

impl Default for Norm {
    fn default() -> Self {
        Norm::Linear {
            vmin: 0.0,
            vmax: 1.0,
        }
    }
}

impl Norm {
    pub fn linear(vmin: f64, vmax: f64) -> Result<Self> {
        if vmin.is_nan() || vmax.is_nan() || vmin > vmax {
            return Err(ColorLineError::InvalidNorm(format!(
                "vmin ({vmin}) must be less than or equal to vmax ({vmax})"
            )));
        }
        Ok(Norm::Linear { vmin, vmax })
    }

    pub fn boundary(boundaries: Vec<f64>, ncolors: usize) -> Result<Self> {
        if boundaries.len() < 2 {
            return Err(ColorLineError::InvalidNorm(
                "at least two boundaries are required".to_string(),
            ));
        }
        if boundaries.windows(2).any(|w| !(w[0] < w[1])) {
            return Err(ColorLineError::InvalidNorm(
                "boundaries must be strictly increasing".to_string(),
            ));
        }
        let bins = boundaries.len() - 1;
        if ncolors < bins {
            return Err(ColorLineError::InvalidNorm(format!(
                "there are {bins} color bins but ncolors = {ncolors}; ncolors must be at least the number of bins"
            )));
        }
        Ok(Norm::Boundary {
            boundaries,
            ncolors,
        })
    }

    /// Re-run the constructor checks, e.g. after deserializing.
    pub fn validate(&self) -> Result<()> {
        match self {
            Norm::Linear { vmin, vmax } => Norm::linear(*vmin, *vmax).map(|_| ()),
            Norm::Boundary {
                boundaries,
                ncolors,
            } => Norm::boundary(boundaries.clone(), *ncolors).map(|_| ()),
        }
    }

    pub fn normalize(&self, value: f64) -> Normalized {
        match self {
            Norm::Linear { vmin, vmax } => {
                if value.is_nan() {
                    Normalized::Fraction(f64::NAN)
                } else if vmin == vmax {
                    Normalized::Fraction(0.0)
                } else {
                    Normalized::Fraction((value - vmin) / (vmax - vmin))
                }
            }
            Norm::Boundary {
                boundaries,
                ncolors,
            } => Normalized::Index(boundary_index(boundaries, *ncolors, value)),
        }
    }
}

fn boundary_index(boundaries: &[f64], ncolors: usize, value: f64) -> i64 {
    let (Some(&first), Some(&last)) = (boundaries.first(), boundaries.last()) else {
        return -1;
    };
    // NaN compares false everywhere and lands under range
    if !(value >= first) {
        return -1;
    }
    if value >= last {
        return ncolors as i64;
    }
    // number of boundaries <= value, minus one
    let bin = boundaries.partition_point(|b| *b <= value) as i64 - 1;
    let bins = boundaries.len() as i64 - 1;
    let ncolors = ncolors as i64;
    if ncolors > bins {
        if bins == 1 {
            (ncolors - 1) / 2
        } else {
            ((ncolors - 1) as f64 / (bins - 1) as f64 * bin as f64).floor() as i64
        }
    } else {
        bin
    }
}
