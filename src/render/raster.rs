//! Off-screen rendering of a [`Figure`] with tiny-skia, and PNG export.
//!
//! The output is deliberately plain: background, colored segments, and (when
//! the frame is not cleared) spines plus tick marks. No text is drawn.

use std::path::Path;

use egui::Color32;
use image::{Rgba, RgbaImage};
use tiny_skia::{LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::data::axes::{Aspect, Axes};
use crate::data::collection::DataBounds;
use crate::data::figure::Figure;
use crate::error::{ColorLineError, Result};

/// Padding around the plot area, in pixels.
const FRAME_PADDING: f32 = 40.0;
/// Padding when axes and spines are hidden.
const CLEARED_PADDING: f32 = 10.0;
const TICK_LENGTH: f32 = 5.0;

/// Maps data coordinates to pixel coordinates (y pointing up in data space).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelTransform {
    /// Plot area `[left, top, right, bottom]` in pixels.
    pub area: [f32; 4],
    view: DataBounds,
    scale: [f64; 2],
    offset: [f64; 2],
}

impl PixelTransform {
    pub fn new(size: [u32; 2], axes: &Axes) -> Self {
        let pad = if axes.frame_cleared() {
            CLEARED_PADDING
        } else {
            FRAME_PADDING
        };
        let (w, h) = (size[0] as f32, size[1] as f32);
        let area = [pad.min(w / 2.0), pad.min(h / 2.0), (w - pad).max(w / 2.0), (h - pad).max(h / 2.0)];
        let view = axes.view_limits();
        let area_w = (area[2] - area[0]) as f64;
        let area_h = (area[3] - area[1]) as f64;
        let dx = span(view.x);
        let dy = span(view.y);
        let (mut sx, mut sy) = (area_w / dx, area_h / dy);
        let mut offset = [0.0, 0.0];
        if axes.aspect == Aspect::Equal {
            let s = sx.min(sy);
            offset = [(area_w - dx * s) / 2.0, (area_h - dy * s) / 2.0];
            sx = s;
            sy = s;
        }
        Self {
            area,
            view,
            scale: [sx, sy],
            offset,
        }
    }

    pub fn to_pixel(&self, p: [f64; 2]) -> [f32; 2] {
        let px = self.area[0] as f64 + self.offset[0] + (p[0] - self.view.x.0) * self.scale[0];
        let py = self.area[3] as f64 - self.offset[1] - (p[1] - self.view.y.0) * self.scale[1];
        [px as f32, py as f32]
    }
}

fn span(range: (f64, f64)) -> f64 {
    let d = range.1 - range.0;
    if d.is_finite() && d > 0.0 {
        d
    } else {
        1.0
    }
}

fn paint_for(color: Color32) -> Paint<'static> {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn stroke_line(pixmap: &mut Pixmap, from: [f32; 2], to: [f32; 2], paint: &Paint, width: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(from[0], from[1]);
    pb.line_to(to[0], to[1]);
    if let Some(path) = pb.finish() {
        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, paint, &stroke, Transform::identity(), None);
    }
}

/// Roughly `target` round-numbered tick positions inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let range = max - min;
    if !range.is_finite() || range <= 0.0 || target == 0 {
        return Vec::new();
    }
    let raw = range / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

fn draw_frame(pixmap: &mut Pixmap, axes: &Axes, tf: &PixelTransform) {
    let paint = paint_for(axes.frame_color);
    let [l, t, r, b] = tf.area;
    let spines = axes.spines;
    if spines.left {
        stroke_line(pixmap, [l, t], [l, b], &paint, 1.0);
    }
    if spines.right {
        stroke_line(pixmap, [r, t], [r, b], &paint, 1.0);
    }
    if spines.top {
        stroke_line(pixmap, [l, t], [r, t], &paint, 1.0);
    }
    if spines.bottom {
        stroke_line(pixmap, [l, b], [r, b], &paint, 1.0);
    }
    let view = axes.view_limits();
    if axes.x_axis.visible {
        for x in nice_ticks(view.x.0, view.x.1, 6) {
            let [px, _] = tf.to_pixel([x, view.y.0]);
            if px >= l && px <= r {
                stroke_line(pixmap, [px, b], [px, b + TICK_LENGTH], &paint, 1.0);
            }
        }
    }
    if axes.y_axis.visible {
        for y in nice_ticks(view.y.0, view.y.1, 6) {
            let [_, py] = tf.to_pixel([view.x.0, y]);
            if py >= t && py <= b {
                stroke_line(pixmap, [l - TICK_LENGTH, py], [l, py], &paint, 1.0);
            }
        }
    }
}

/// Rasterize `figure` at its configured size.
pub fn render_figure(figure: &Figure) -> Result<Pixmap> {
    let [width, height] = figure.size;
    let mut pixmap =
        Pixmap::new(width, height).ok_or(ColorLineError::InvalidSize { width, height })?;
    let [r, g, b, a] = figure.background.to_srgba_unmultiplied();
    pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));

    let axes = &figure.axes;
    let tf = PixelTransform::new(figure.size, axes);
    let mut drawn = 0usize;
    for collection in axes.collections().iter().filter(|c| c.visible) {
        for styled in collection.styled_segments() {
            if !styled.segment.is_finite() || styled.width <= 0.0 || styled.color.a() == 0 {
                continue;
            }
            let paint = paint_for(styled.color);
            let from = tf.to_pixel(styled.segment.start);
            let to = tf.to_pixel(styled.segment.end);
            stroke_line(&mut pixmap, from, to, &paint, styled.width);
            drawn += 1;
        }
    }
    draw_frame(&mut pixmap, axes, &tf);
    log::debug!("rendered '{}' ({drawn} segments, {width}x{height})", figure.title);
    Ok(pixmap)
}

/// Convert a rendered pixmap into an [`RgbaImage`].
pub fn to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let (width, height) = (pixmap.width(), pixmap.height());
    let mut out = RgbaImage::new(width, height);
    for (i, p) in pixmap.pixels().iter().enumerate() {
        let c = p.demultiply();
        let x = i as u32 % width;
        let y = i as u32 / width;
        out.put_pixel(x, y, Rgba([c.red(), c.green(), c.blue(), c.alpha()]));
    }
    out
}

/// Render `figure` and write it as a PNG file.
pub fn save_png<P: AsRef<Path>>(figure: &Figure, path: P) -> Result<()> {
    let pixmap = render_figure(figure)?;
    let image = to_rgba_image(&pixmap);
    image.save(path.as_ref())?;
    log::info!("saved '{}' to {:?}", figure.title, path.as_ref());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorline::{colored_line, ColorLineStyle};
    use crate::data::colormap::Colormap;

    fn pixel(pixmap: &Pixmap, x: u32, y: u32) -> [u8; 4] {
        let c = pixmap.pixel(x, y).unwrap().demultiply();
        [c.red(), c.green(), c.blue(), c.alpha()]
    }

    #[test]
    fn horizontal_line_is_drawn_through_the_middle() {
        let mut fig = Figure::new("line").with_size(100, 100);
        let ax = fig.axes_mut();
        colored_line(
            ax,
            &[0.0, 1.0],
            &[0.0, 0.0],
            0.0f64,
            ColorLineStyle::default()
                .cmap(Colormap::listed(&["r"]).unwrap())
                .line_width(4.0f32),
        )
        .unwrap();
        ax.set_xlim(0.0, 1.0);
        ax.set_ylim(-1.0, 1.0);
        ax.clear_frame();

        let pixmap = render_figure(&fig).unwrap();
        assert_eq!(pixel(&pixmap, 50, 50), [255, 0, 0, 255]);
        assert_eq!(pixel(&pixmap, 50, 20), [255, 255, 255, 255]);
        assert_eq!(pixel(&pixmap, 2, 2), [255, 255, 255, 255]);
    }

    #[test]
    fn cleared_frame_draws_no_spines() {
        let fig = Figure::new("empty").with_size(100, 100);
        let framed = render_figure(&fig).unwrap();
        assert_ne!(pixel(&framed, 40, 50), [255, 255, 255, 255]);

        let mut cleared = fig.clone();
        cleared.axes.clear_frame();
        let pixmap = render_figure(&cleared).unwrap();
        assert!(pixmap
            .pixels()
            .iter()
            .all(|p| p.demultiply() == tiny_skia::ColorU8::from_rgba(255, 255, 255, 255)));
    }

    #[test]
    fn equal_aspect_centers_the_view() {
        let mut ax = Axes::new();
        ax.set_xlim(0.0, 1.0);
        ax.set_ylim(0.0, 1.0);
        ax.set_aspect_equal();
        ax.clear_frame();
        let tf = PixelTransform::new([200, 100], &ax);
        // area is 180x80, so the unit square is 80px wide and centered horizontally
        assert_eq!(tf.to_pixel([0.0, 0.0]), [60.0, 90.0]);
        assert_eq!(tf.to_pixel([1.0, 1.0]), [140.0, 10.0]);
    }

    #[test]
    fn zero_sized_figure_is_rejected() {
        let fig = Figure::new("nothing").with_size(0, 10);
        assert!(matches!(
            render_figure(&fig),
            Err(ColorLineError::InvalidSize { width: 0, height: 10 })
        ));
    }

    #[test]
    fn ticks_are_round_numbers() {
        let close = |got: Vec<f64>, want: &[f64]| {
            got.len() == want.len() && got.iter().zip(want).all(|(a, b)| (a - b).abs() < 1e-9)
        };
        assert!(close(nice_ticks(0.0, 1.0, 5), &[0.0, 0.2, 0.4, 0.6, 0.8, 1.0]));
        assert!(close(nice_ticks(-1.0, 1.0, 4), &[-1.0, -0.5, 0.0, 0.5, 1.0]));
        assert!(close(nice_ticks(3.0, 97.0, 5), &[20.0, 40.0, 60.0, 80.0]));
        assert!(nice_ticks(1.0, 1.0, 5).is_empty());
    }

    #[test]
    fn png_export_writes_a_readable_file() {
        let mut fig = Figure::new("png").with_size(64, 48);
        colored_line(
            fig.axes_mut(),
            &[0.0, 1.0, 2.0],
            &[0.0, 1.0, 0.0],
            crate::ColorValues::ByPosition,
            ColorLineStyle::default(),
        )
        .unwrap();
        let path = std::env::temp_dir().join(format!("colorline_raster_{}.png", std::process::id()));
        save_png(&fig, &path).unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (64, 48));
        let _ = std::fs::remove_file(&path);
    }
}
