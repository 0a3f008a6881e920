//! Figure persistence: save and load figures to/from JSON files.
//!
//! This module provides serializable mirror types for data that cannot
//! directly derive serde traits (types holding egui's `Color32`).

use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::data::axes::{Aspect, AxisSettings, Axes, Spines};
use crate::data::collection::LineCollection;
use crate::data::colormap::Colormap;
use crate::data::figure::Figure;
use crate::data::norm::Norm;
use crate::data::segments::Segment;
use crate::data::values::StyleValue;
use crate::error::{ColorLineError, Result};

fn rgba(c: Color32) -> [u8; 4] {
    c.to_srgba_unmultiplied()
}

fn color(c: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3])
}

// ---------- Serializable mirror types ----------

/// Serializable version of [`Colormap`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColormapSerde {
    Named(String),
    Listed(Vec<[u8; 4]>),
}

impl From<&Colormap> for ColormapSerde {
    fn from(c: &Colormap) -> Self {
        match c {
            Colormap::Listed(colors) => ColormapSerde::Listed(colors.iter().map(|c| rgba(*c)).collect()),
            named => ColormapSerde::Named(named.name().to_string()),
        }
    }
}

impl ColormapSerde {
    pub fn into_colormap(self) -> Result<Colormap> {
        match self {
            ColormapSerde::Named(name) => name.parse(),
            ColormapSerde::Listed(colors) if colors.is_empty() => Err(ColorLineError::EmptyColormap),
            ColormapSerde::Listed(colors) => Ok(Colormap::Listed(colors.into_iter().map(color).collect())),
        }
    }
}

/// Serializable version of [`LineCollection`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionSerde {
    pub segments: Vec<Segment>,
    pub array: Vec<f64>,
    pub cmap: ColormapSerde,
    pub norm: Norm,
    pub line_widths: StyleValue,
    pub alpha: StyleValue,
    pub label: Option<String>,
    pub visible: bool,
}

impl From<&LineCollection> for CollectionSerde {
    fn from(c: &LineCollection) -> Self {
        Self {
            segments: c.segments().to_vec(),
            array: c.array().to_vec(),
            cmap: c.cmap().into(),
            norm: c.norm().clone(),
            line_widths: c.line_widths().clone(),
            alpha: c.alpha().clone(),
            label: c.label.clone(),
            visible: c.visible,
        }
    }
}

impl CollectionSerde {
    /// Convert back, re-validating everything a constructor would.
    pub fn into_collection(self) -> Result<LineCollection> {
        let mut c = LineCollection::new(
            self.segments,
            self.array,
            self.cmap.into_colormap()?,
            self.norm,
            self.line_widths,
            self.alpha,
        )?;
        c.label = self.label;
        c.visible = self.visible;
        Ok(c)
    }
}

/// Serializable version of [`Axes`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxesSerde {
    pub collections: Vec<CollectionSerde>,
    pub x_axis: AxisSettings,
    pub y_axis: AxisSettings,
    pub spines: Spines,
    pub aspect: Aspect,
    pub title: Option<String>,
    pub margin: f64,
    pub frame_color_rgba: [u8; 4],
}

impl From<&Axes> for AxesSerde {
    fn from(a: &Axes) -> Self {
        Self {
            collections: a.collections().iter().map(CollectionSerde::from).collect(),
            x_axis: a.x_axis.clone(),
            y_axis: a.y_axis.clone(),
            spines: a.spines,
            aspect: a.aspect,
            title: a.title.clone(),
            margin: a.margin,
            frame_color_rgba: rgba(a.frame_color),
        }
    }
}

impl AxesSerde {
    pub fn into_axes(self) -> Result<Axes> {
        let mut axes = Axes::new();
        for c in self.collections {
            axes.add_collection(c.into_collection()?);
        }
        axes.x_axis = self.x_axis;
        axes.y_axis = self.y_axis;
        axes.spines = self.spines;
        axes.aspect = self.aspect;
        axes.title = self.title;
        axes.margin = self.margin;
        axes.frame_color = color(self.frame_color_rgba);
        Ok(axes)
    }
}

/// Serializable version of [`Figure`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureSerde {
    pub title: String,
    pub size: [u32; 2],
    pub background_rgba: [u8; 4],
    pub axes: AxesSerde,
}

impl From<&Figure> for FigureSerde {
    fn from(f: &Figure) -> Self {
        Self {
            title: f.title.clone(),
            size: f.size,
            background_rgba: rgba(f.background),
            axes: (&f.axes).into(),
        }
    }
}

impl FigureSerde {
    pub fn into_figure(self) -> Result<Figure> {
        Ok(Figure {
            title: self.title,
            size: self.size,
            background: color(self.background_rgba),
            axes: self.axes.into_axes()?,
        })
    }
}

// ---------- File helpers ----------

/// Write `figure` as pretty-printed JSON.
pub fn save_figure_json<P: AsRef<Path>>(figure: &Figure, path: P) -> Result<()> {
    let state = FigureSerde::from(figure);
    let text = serde_json::to_string_pretty(&state)?;
    std::fs::write(path.as_ref(), text)?;
    log::info!("saved figure '{}' to {:?}", figure.title, path.as_ref());
    Ok(())
}

/// Read a figure previously written by [`save_figure_json`].
pub fn load_figure_json<P: AsRef<Path>>(path: P) -> Result<Figure> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let state: FigureSerde = serde_json::from_str(&text)?;
    state.into_figure()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_colormap_mirror_round_trips() {
        let cmap = Colormap::listed(&["r", "#00ff00", "k"]).unwrap();
        let back = ColormapSerde::from(&cmap).into_colormap().unwrap();
        assert_eq!(back, cmap);
        assert_eq!(
            ColormapSerde::Named("jet".into()).into_colormap().unwrap(),
            Colormap::Jet
        );
    }

    #[test]
    fn invalid_state_is_rejected() {
        assert!(ColormapSerde::Named("nope".into()).into_colormap().is_err());
        assert!(ColormapSerde::Listed(vec![]).into_colormap().is_err());
        let bad = CollectionSerde {
            segments: vec![],
            array: vec![0.0],
            cmap: ColormapSerde::Named("copper".into()),
            norm: Norm::Linear { vmin: 1.0, vmax: 0.0 },
            line_widths: StyleValue::Uniform(1.0),
            alpha: StyleValue::Uniform(1.0),
            label: None,
            visible: true,
        };
        assert!(matches!(bad.into_collection(), Err(ColorLineError::InvalidNorm(_))));
    }
}
