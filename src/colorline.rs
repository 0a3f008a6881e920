//! The colored-line constructor.
//!
//! [`colored_line`] turns coordinates and color values into a
//! [`LineCollection`], registers it on the given [`Axes`] and hands back a
//! mutable handle:
//!
//! ```
//! use colorline::{colored_line, Axes, ColorLineStyle, ColorValues};
//!
//! let mut ax = Axes::new();
//! let lc = colored_line(
//!     &mut ax,
//!     &[0.0, 1.0, 2.0, 3.0],
//!     &[0.0, 1.0, 0.0, 1.0],
//!     ColorValues::ByPosition,
//!     ColorLineStyle::default(),
//! )
//! .unwrap();
//! // one value per point; segment i takes value i
//! assert_eq!(lc.array().len(), 4);
//! assert_eq!(lc.array()[0], 0.0);
//! assert_eq!(lc.array()[3], 1.0);
//! assert_eq!(ax.collections().len(), 1);
//! ```

use crate::data::axes::Axes;
use crate::data::collection::LineCollection;
use crate::data::colormap::Colormap;
use crate::data::norm::Norm;
use crate::data::segments::build_segments;
use crate::data::values::{ColorValues, StyleValue};
use crate::error::Result;

/// Color map, normalization, width and transparency of a colored line.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorLineStyle {
    pub cmap: Colormap,
    pub norm: Norm,
    pub line_width: StyleValue,
    pub alpha: StyleValue,
    pub label: Option<String>,
}

impl Default for ColorLineStyle {
    fn default() -> Self {
        Self {
            cmap: Colormap::Copper,
            norm: Norm::default(),
            line_width: StyleValue::Uniform(3.0),
            alpha: StyleValue::Uniform(1.0),
            label: None,
        }
    }
}

impl ColorLineStyle {
    pub fn cmap(mut self, cmap: Colormap) -> Self {
        self.cmap = cmap;
        self
    }

    pub fn norm(mut self, norm: Norm) -> Self {
        self.norm = norm;
        self
    }

    pub fn line_width(mut self, width: impl Into<StyleValue>) -> Self {
        self.line_width = width.into();
        self
    }

    pub fn alpha(mut self, alpha: impl Into<StyleValue>) -> Self {
        self.alpha = alpha.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Build the collection for a colored line without registering it anywhere.
pub fn make_collection(
    x: &[f64],
    y: &[f64],
    z: impl Into<ColorValues>,
    style: ColorLineStyle,
) -> Result<LineCollection> {
    let segments = build_segments(x, y)?;
    let array = z.into().resolve(x.len())?;
    let mut collection = LineCollection::new(
        segments,
        array,
        style.cmap,
        style.norm,
        style.line_width,
        style.alpha,
    )?;
    collection.label = style.label;
    Ok(collection)
}

/// Draw a (multi-)colored line with coordinates `x` and `y` on `ax`.
///
/// Color values shorter than the segment count wrap around. Each call adds a
/// new, independent collection and returns a handle to it.
pub fn colored_line<'a>(
    ax: &'a mut Axes,
    x: &[f64],
    y: &[f64],
    z: impl Into<ColorValues>,
    style: ColorLineStyle,
) -> Result<&'a mut LineCollection> {
    let collection = make_collection(x, y, z, style)?;
    Ok(ax.add_collection(collection))
}
