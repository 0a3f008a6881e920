use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::data::collection::{DataBounds, LineCollection};

/// Settings of one axis (x or y).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSettings {
    /// Axis line, ticks and tick labels are shown.
    pub visible: bool,
    /// Fixed view limits; autoscaled from the data when `None`.
    pub limits: Option<(f64, f64)>,
    pub name: Option<String>,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            visible: true,
            limits: None,
            name: None,
        }
    }
}

/// The border lines around the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spines {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl Default for Spines {
    fn default() -> Self {
        Self {
            left: true,
            right: true,
            top: true,
            bottom: true,
        }
    }
}

impl Spines {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }

    pub fn set_all(&mut self, visible: bool) {
        *self = Spines {
            left: visible,
            right: visible,
            top: visible,
            bottom: visible,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Aspect {
    /// Stretch each axis independently to fill the area.
    #[default]
    Auto,
    /// One data unit has the same length on both axes.
    Equal,
}

/// A plotting surface holding line collections.
///
/// Every drawing call takes the surface explicitly; there is no "current axes".
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    collections: Vec<LineCollection>,
    pub x_axis: AxisSettings,
    pub y_axis: AxisSettings,
    pub spines: Spines,
    pub aspect: Aspect,
    pub title: Option<String>,
    /// Fraction of the data span added on each side when autoscaling.
    pub margin: f64,
    pub frame_color: Color32,
}

impl Default for Axes {
    fn default() -> Self {
        Self {
            collections: Vec::new(),
            x_axis: AxisSettings::default(),
            y_axis: AxisSettings::default(),
            spines: Spines::default(),
            aspect: Aspect::Auto,
            title: None,
            margin: 0.05,
            frame_color: Color32::from_gray(40),
        }
    }
}

impl Axes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collection and return a handle to it for further changes.
    pub fn add_collection(&mut self, collection: LineCollection) -> &mut LineCollection {
        log::debug!(
            "adding collection #{} with {} segments",
            self.collections.len(),
            collection.len()
        );
        self.collections.push(collection);
        let last = self.collections.len() - 1;
        &mut self.collections[last]
    }

    pub fn collections(&self) -> &[LineCollection] {
        &self.collections
    }

    pub fn collection_mut(&mut self, index: usize) -> Option<&mut LineCollection> {
        self.collections.get_mut(index)
    }

    /// Remove every collection, keeping axis settings.
    pub fn clear(&mut self) {
        self.collections.clear();
    }

    pub fn set_xlim(&mut self, min: f64, max: f64) {
        self.x_axis.limits = Some((min, max));
    }

    pub fn set_ylim(&mut self, min: f64, max: f64) {
        self.y_axis.limits = Some((min, max));
    }

    pub fn set_aspect_equal(&mut self) {
        self.aspect = Aspect::Equal;
    }

    /// Hide axis lines, ticks and spines.
    pub fn clear_frame(&mut self) {
        self.x_axis.visible = false;
        self.y_axis.visible = false;
        self.spines.set_all(false);
    }

    /// `true` once axes and all spines are hidden.
    pub fn frame_cleared(&self) -> bool {
        !self.x_axis.visible && !self.y_axis.visible && !self.spines.any()
    }

    /// Union of the bounds of all visible collections.
    pub fn data_bounds(&self) -> Option<DataBounds> {
        self.collections
            .iter()
            .filter(|c| c.visible)
            .filter_map(|c| c.data_bounds())
            .reduce(DataBounds::union)
    }

    /// Limits to display: explicit limits win, otherwise the padded data range.
    pub fn view_limits(&self) -> DataBounds {
        let data = self.data_bounds();
        let x = self
            .x_axis
            .limits
            .unwrap_or_else(|| pad_range(data.map(|b| b.x), self.margin));
        let y = self
            .y_axis
            .limits
            .unwrap_or_else(|| pad_range(data.map(|b| b.y), self.margin));
        DataBounds { x, y }
    }
}

fn pad_range(range: Option<(f64, f64)>, margin: f64) -> (f64, f64) {
    match range {
        None => (0.0, 1.0),
        Some((min, max)) if min == max => (min - 0.5, max + 0.5),
        Some((min, max)) => {
            let pad = (max - min) * margin;
            (min - pad, max + pad)
        }
    }
}

/// Hide the axis lines, ticks and spines of `ax`.
pub fn clear_frame(ax: &mut Axes) {
    ax.clear_frame();
}
