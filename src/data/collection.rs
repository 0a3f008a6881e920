//! LineCollection: a set of independently colored segments drawn as one line.

use egui::Color32;

use crate::data::colormap::Colormap;
use crate::data::norm::Norm;
use crate::data::segments::Segment;
use crate::data::values::StyleValue;
use crate::error::{ColorLineError, Result};

/// Axis-aligned extent of some data, `(min, max)` per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataBounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl DataBounds {
    pub fn from_point(p: [f64; 2]) -> Self {
        Self {
            x: (p[0], p[0]),
            y: (p[1], p[1]),
        }
    }

    pub fn include(&mut self, p: [f64; 2]) {
        self.x.0 = self.x.0.min(p[0]);
        self.x.1 = self.x.1.max(p[0]);
        self.y.0 = self.y.0.min(p[1]);
        self.y.1 = self.y.1.max(p[1]);
    }

    pub fn union(self, other: DataBounds) -> Self {
        Self {
            x: (self.x.0.min(other.x.0), self.x.1.max(other.x.1)),
            y: (self.y.0.min(other.y.0), self.y.1.max(other.y.1)),
        }
    }
}

/// One segment with its resolved color and width, ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyledSegment {
    pub segment: Segment,
    pub color: Color32,
    pub width: f32,
}

/// A multi-segment colored line.
///
/// Segment `i` is colored by `cmap(norm(array[i % array.len()]))`; widths and
/// alphas are looked up the same cyclic way.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCollection {
    segments: Vec<Segment>,
    array: Vec<f64>,
    cmap: Colormap,
    norm: Norm,
    line_widths: StyleValue,
    alpha: StyleValue,
    pub label: Option<String>,
    pub visible: bool,
}

impl LineCollection {
    pub fn new(
        segments: Vec<Segment>,
        array: Vec<f64>,
        cmap: Colormap,
        norm: Norm,
        line_widths: StyleValue,
        alpha: StyleValue,
    ) -> Result<Self> {
        if array.is_empty() {
            return Err(ColorLineError::EmptyColorValues);
        }
        norm.validate()?;
        line_widths.validate("line width")?;
        alpha.validate("alpha")?;
        Ok(Self {
            segments,
            array,
            cmap,
            norm,
            line_widths,
            alpha,
            label: None,
            visible: true,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn array(&self) -> &[f64] {
        &self.array
    }

    pub fn cmap(&self) -> &Colormap {
        &self.cmap
    }

    pub fn norm(&self) -> &Norm {
        &self.norm
    }

    pub fn line_widths(&self) -> &StyleValue {
        &self.line_widths
    }

    pub fn alpha(&self) -> &StyleValue {
        &self.alpha
    }

    pub fn set_segments(&mut self, segments: Vec<Segment>) {
        self.segments = segments;
    }

    pub fn set_array(&mut self, array: Vec<f64>) -> Result<()> {
        if array.is_empty() {
            return Err(ColorLineError::EmptyColorValues);
        }
        self.array = array;
        Ok(())
    }

    pub fn set_cmap(&mut self, cmap: Colormap) {
        self.cmap = cmap;
    }

    pub fn set_norm(&mut self, norm: Norm) -> Result<()> {
        norm.validate()?;
        self.norm = norm;
        Ok(())
    }

    pub fn set_line_widths(&mut self, widths: impl Into<StyleValue>) -> Result<()> {
        let widths = widths.into();
        widths.validate("line width")?;
        self.line_widths = widths;
        Ok(())
    }

    pub fn set_alpha(&mut self, alpha: impl Into<StyleValue>) -> Result<()> {
        let alpha = alpha.into();
        alpha.validate("alpha")?;
        self.alpha = alpha;
        Ok(())
    }

    /// Index into the color array used by segment `index`.
    pub fn color_index(&self, index: usize) -> usize {
        index % self.array.len()
    }

    pub fn segment_color(&self, index: usize) -> Color32 {
        let z = self.array[self.color_index(index)];
        let base = self.cmap.color_at(self.norm.normalize(z));
        let alpha = self.alpha.get(index).unwrap_or(1.0).clamp(0.0, 1.0);
        let a = (base.a() as f32 * alpha).round() as u8;
        Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), a)
    }

    pub fn segment_width(&self, index: usize) -> f32 {
        self.line_widths.get(index).unwrap_or(0.0).max(0.0)
    }

    /// Segments with their colors and widths resolved, in drawing order.
    pub fn styled_segments(&self) -> impl Iterator<Item = StyledSegment> + '_ {
        self.segments
            .iter()
            .enumerate()
            .map(move |(i, segment)| StyledSegment {
                segment: *segment,
                color: self.segment_color(i),
                width: self.segment_width(i),
            })
    }

    /// Extent of all finite segment endpoints, `None` if there are none.
    pub fn data_bounds(&self) -> Option<DataBounds> {
        let mut bounds: Option<DataBounds> = None;
        for s in self.segments.iter().filter(|s| s.is_finite()) {
            for p in [s.start, s.end] {
                match bounds.as_mut() {
                    Some(b) => b.include(p),
                    None => bounds = Some(DataBounds::from_point(p)),
                }
            }
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::segments::build_segments;

    fn collection(array: Vec<f64>) -> LineCollection {
        let x: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| v * 2.0).collect();
        LineCollection::new(
            build_segments(&x, &y).unwrap(),
            array,
            Colormap::listed(&["r", "g", "b"]).unwrap(),
            Norm::boundary(vec![0.0, 1.0, 2.0, 3.0], 3).unwrap(),
            StyleValue::Uniform(2.0),
            StyleValue::Uniform(1.0),
        )
        .unwrap()
    }

    #[test]
    fn colors_wrap_around_short_arrays() {
        let lc = collection(vec![0.5, 1.5]);
        assert_eq!(lc.len(), 7);
        for i in 0..lc.len() {
            assert_eq!(lc.color_index(i), i % 2);
        }
        assert_eq!(lc.segment_color(0), Color32::from_rgb(255, 0, 0));
        assert_eq!(lc.segment_color(1), Color32::from_rgb(0, 128, 0));
        assert_eq!(lc.segment_color(6), Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn alpha_scales_color_alpha() {
        let mut lc = collection(vec![2.5]);
        lc.set_alpha(vec![0.5f32, 1.0]).unwrap();
        assert_eq!(lc.segment_color(0).a(), 128);
        assert_eq!(lc.segment_color(1).a(), 255);
        assert_eq!(lc.segment_color(2).a(), 128);
    }

    #[test]
    fn widths_cycle_and_never_go_negative() {
        let mut lc = collection(vec![0.5]);
        lc.set_line_widths(vec![1.0f32, -4.0, 3.0]).unwrap();
        let widths: Vec<f32> = lc.styled_segments().map(|s| s.width).collect();
        assert_eq!(widths, vec![1.0, 0.0, 3.0, 1.0, 0.0, 3.0, 1.0]);
    }

    #[test]
    fn setters_revalidate() {
        let mut lc = collection(vec![0.5]);
        assert!(lc.set_array(Vec::new()).is_err());
        assert!(lc.set_line_widths(Vec::<f32>::new()).is_err());
        assert_eq!(lc.array(), &[0.5]);
    }

    #[test]
    fn malformed_norms_are_rejected() {
        let x = [0.0, 1.0, 2.0];
        let build = |norm: Norm| {
            LineCollection::new(
                build_segments(&x, &x).unwrap(),
                vec![0.5],
                Colormap::default(),
                norm,
                StyleValue::Uniform(1.0),
                StyleValue::Uniform(1.0),
            )
        };
        let empty_bins = Norm::Boundary {
            boundaries: Vec::new(),
            ncolors: 3,
        };
        let inverted = Norm::Linear {
            vmin: 1.0,
            vmax: 0.0,
        };
        assert!(matches!(build(empty_bins.clone()), Err(ColorLineError::InvalidNorm(_))));
        assert!(matches!(build(inverted.clone()), Err(ColorLineError::InvalidNorm(_))));

        let mut lc = collection(vec![0.5]);
        let before = lc.norm().clone();
        assert!(lc.set_norm(empty_bins).is_err());
        assert!(lc.set_norm(inverted).is_err());
        assert_eq!(lc.norm(), &before);
        lc.set_norm(Norm::default()).unwrap();
        assert_eq!(lc.norm(), &Norm::default());
    }

    #[test]
    fn bounds_skip_non_finite_points() {
        let segs = build_segments(&[0.0, f64::NAN, 2.0, 3.0], &[1.0, 5.0, -1.0, 4.0]).unwrap();
        let lc = LineCollection::new(
            segs,
            vec![0.0],
            Colormap::default(),
            Norm::default(),
            StyleValue::Uniform(1.0),
            StyleValue::Uniform(1.0),
        )
        .unwrap();
        let b = lc.data_bounds().unwrap();
        assert_eq!(b.x, (2.0, 3.0));
        assert_eq!(b.y, (-1.0, 4.0));
    }
}
