//! Ready-made figures showing the typical uses of [`colored_line`].
//!
//! - coloring by position (or time) along the path with a continuous map
//! - one uniform color per curve for a family of curves
//! - colored dash patterns from a short, wrapping color array
//! - a continuous map combined with varying width and transparency
//! - a discrete map driven by the slope of the curve

use std::f64::consts::PI;

use crate::colorline::{colored_line, ColorLineStyle};
use crate::data::colormap::Colormap;
use crate::data::figure::Figure;
use crate::data::norm::Norm;
use crate::data::values::{linspace, ColorValues};
use crate::error::Result;

fn min_max(v: &[f64]) -> (f64, f64) {
    v.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(*x), hi.max(*x))
        })
}

/// Sine wave colored by time.
pub fn sine_by_time() -> Result<Figure> {
    let x = linspace(0.0, 4.0 * PI, 1000);
    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();

    let mut fig = Figure::new("Sine wave colored by time");
    let ax = fig.axes_mut();
    colored_line(ax, &x, &y, ColorValues::ByPosition, ColorLineStyle::default())?;
    let (x0, x1) = min_max(&x);
    ax.set_xlim(x0, x1);
    ax.set_ylim(-1.0, 1.0);
    Ok(fig)
}

/// Ten sine waves, each shifted and given its own uniform color.
pub fn shifted_sines() -> Result<Figure> {
    let x = linspace(0.0, 4.0 * PI, 1000);
    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();

    let mut fig = Figure::new("Shifted sine waves");
    let ax = fig.axes_mut();
    let n = 10;
    for i in 0..n {
        let value = i as f64 / n as f64;
        let shift = 0.2 * i as f64;
        let xs: Vec<f64> = x.iter().map(|v| v - shift).collect();
        colored_line(
            ax,
            &xs,
            &y,
            value,
            ColorLineStyle::default().cmap(Colormap::Cool),
        )?;
    }
    let (x0, x1) = min_max(&x);
    ax.set_xlim(x0, x1);
    ax.set_ylim(-1.0, 1.0);
    Ok(fig)
}

/// The dash pattern used by [`polar_dashes`]: 8 + 4 + 2 values, wrapped along the curve.
pub fn colored_dash_pattern() -> Vec<f64> {
    let mut pattern = vec![0.1; 8];
    pattern.extend(std::iter::repeat(0.5).take(4));
    pattern.extend(std::iter::repeat(0.8).take(2));
    pattern
}

/// A polar curve drawn with a colored dash pattern, equal aspect, no frame.
pub fn polar_dashes() -> Result<Figure> {
    let theta = linspace(0.0, 6.0 * PI, 1000);
    let amplitude = 0.3;
    let r: Vec<f64> = theta
        .iter()
        .map(|t| 1.0 + amplitude * (7.0 / 3.0 * t).sin())
        .collect();
    let x: Vec<f64> = r.iter().zip(&theta).map(|(r, t)| r * t.sin()).collect();
    let y: Vec<f64> = r.iter().zip(&theta).map(|(r, t)| r * t.cos()).collect();

    let mut fig = Figure::new("Polar curve with colored dashes").with_size(600, 600);
    let ax = fig.axes_mut();
    colored_line(
        ax,
        &x,
        &y,
        colored_dash_pattern(),
        ColorLineStyle::default()
            .cmap(Colormap::Jet)
            .line_width(8.0f32),
    )?;
    let (x0, x1) = min_max(&x);
    let (y0, y1) = min_max(&y);
    ax.set_xlim(x0 - 0.1, x1 + 0.1);
    ax.set_ylim(y0 - 0.1, y1 + 0.1);
    ax.set_aspect_equal();
    ax.clear_frame();
    Ok(fig)
}

/// A non-periodic Lissajous curve whose width grows with time.
pub fn lissajous_widths() -> Result<Figure> {
    let t = linspace(0.0, 15.0, 5000);
    let x: Vec<f64> = t.iter().map(|v| v.sin()).collect();
    let y: Vec<f64> = t.iter().map(|v| (v * PI).sin()).collect();

    let mut fig = Figure::new("Lissajous curve with varying width").with_size(600, 600);
    let ax = fig.axes_mut();
    colored_line(
        ax,
        &x,
        &y,
        ColorValues::ByPosition,
        ColorLineStyle::default()
            .cmap(Colormap::Coolwarm)
            .alpha(0.75f32)
            .line_width(t.as_slice()),
    )?;
    let (x0, x1) = min_max(&x);
    let (y0, y1) = min_max(&y);
    ax.set_xlim(x0 - 0.1, x1 + 0.1);
    ax.set_ylim(y0 - 0.1, y1 + 0.1);
    Ok(fig)
}

/// `sin(1/x)` on log-spaced x, colored red/green/blue by the sign and size of its slope.
///
/// The derivative has one value fewer than there are points and the colors
/// wrap around.
pub fn sin_inverse_derivative() -> Result<Figure> {
    let log_x = linspace(0.005f64.ln(), 0.1f64.ln(), 5000);
    let x: Vec<f64> = log_x.iter().map(|v| v.exp()).collect();
    let y: Vec<f64> = x.iter().map(|v| 0.9 * (1.0 / v).sin()).collect();
    let y_deriv: Vec<f64> = x
        .windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (ys[1] - ys[0]) / (xs[1] - xs[0]))
        .collect();

    let cmap = Colormap::listed(&["r", "g", "b"])?;
    let norm = Norm::boundary(vec![-1000.0, -200.0, 200.0, 1000.0], cmap.len())?;
    let widths: Vec<f64> = x.iter().map(|v| 100.0 * v).collect();

    let mut fig = Figure::new("sin(1/x) colored by its derivative");
    let ax = fig.axes_mut();
    colored_line(
        ax,
        &x,
        &y,
        y_deriv,
        ColorLineStyle::default()
            .cmap(cmap)
            .norm(norm)
            .line_width(widths),
    )?;
    let (x0, x1) = min_max(&x);
    ax.set_xlim(x0, x1);
    ax.set_ylim(-1.0, 1.0);
    Ok(fig)
}

/// All gallery figures, in presentation order.
pub fn all() -> Result<Vec<Figure>> {
    Ok(vec![
        sine_by_time()?,
        shifted_sines()?,
        polar_dashes()?,
        lissajous_widths()?,
        sin_inverse_derivative()?,
    ])
}
