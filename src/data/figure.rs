use egui::Color32;

use crate::data::axes::Axes;

/// A titled image area holding one [`Axes`].
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    /// Width and height in pixels.
    pub size: [u32; 2],
    pub background: Color32,
    pub axes: Axes,
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            title: "Figure".to_string(),
            size: [640, 480],
            background: Color32::WHITE,
            axes: Axes::default(),
        }
    }
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = [width, height];
        self
    }

    pub fn with_background(mut self, background: Color32) -> Self {
        self.background = background;
        self
    }

    pub fn axes_mut(&mut self) -> &mut Axes {
        &mut self.axes
    }
}
