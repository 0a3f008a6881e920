//! Interactive drawing of an [`Axes`] with egui_plot.

use std::hash::Hash;
use std::ops::RangeInclusive;

use egui_plot::{Line, Plot, PlotResponse};

use crate::data::axes::{Aspect, Axes};

/// Explicit x and y limits of `axes`, which the plot view is pinned to.
pub fn pinned_ranges(
    axes: &Axes,
) -> (Option<RangeInclusive<f64>>, Option<RangeInclusive<f64>>) {
    let range = |limits: Option<(f64, f64)>| {
        limits
            .filter(|(lo, hi)| lo.is_finite() && hi.is_finite() && lo < hi)
            .map(|(lo, hi)| lo..=hi)
    };
    (range(axes.x_axis.limits), range(axes.y_axis.limits))
}

/// Show `axes` as an egui_plot [`Plot`] and return its response.
///
/// Every segment becomes its own two-point [`Line`] so colors and widths can
/// vary along the curve. Hidden axes also hide the grid and the background
/// frame. Explicit limits are enforced on every frame; unset ones fall back
/// to the padded data range.
pub fn show_axes(
    ui: &mut egui::Ui,
    axes: &Axes,
    id: impl Hash,
    show_grid: bool,
) -> PlotResponse<()> {
    let view = axes.view_limits();
    let framed = axes.spines.any();
    let mut plot = Plot::new(id)
        .show_axes([axes.x_axis.visible, axes.y_axis.visible])
        .show_grid([
            show_grid && axes.x_axis.visible,
            show_grid && axes.y_axis.visible,
        ])
        .show_background(framed)
        .include_x(view.x.0)
        .include_x(view.x.1)
        .include_y(view.y.0)
        .include_y(view.y.1)
        .allow_scroll(false)
        .allow_boxed_zoom(true);
    if axes.aspect == Aspect::Equal {
        plot = plot.data_aspect(1.0);
    }
    if let Some(name) = &axes.x_axis.name {
        plot = plot.x_axis_label(name.clone());
    }
    if let Some(name) = &axes.y_axis.name {
        plot = plot.y_axis_label(name.clone());
    }

    let (pin_x, pin_y) = pinned_ranges(axes);
    plot.show(ui, |plot_ui| {
        if let Some(x) = pin_x {
            plot_ui.set_plot_bounds_x(x);
        }
        if let Some(y) = pin_y {
            plot_ui.set_plot_bounds_y(y);
        }
        for (ci, collection) in axes.collections().iter().enumerate() {
            if !collection.visible {
                continue;
            }
            let name = collection
                .label
                .clone()
                .unwrap_or_else(|| format!("collection {ci}"));
            for styled in collection.styled_segments() {
                if !styled.segment.is_finite() || styled.width <= 0.0 {
                    continue;
                }
                let pts = vec![styled.segment.start, styled.segment.end];
                plot_ui.line(
                    Line::new(name.as_str(), pts)
                        .color(styled.color)
                        .width(styled.width),
                );
            }
        }
    })
}
