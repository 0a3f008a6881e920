//! colorline crate root: re-exports and module wiring.
//!
//! Draw multi-colored 2D lines: every segment between two consecutive points
//! gets its own color (through a color map and a normalization), width and
//! transparency.
//!
//! - `data`: segments, color values, color maps, norms, collections, axes, figures
//! - `colorline`: the [`colored_line`] constructor and its style
//! - `render`: egui_plot drawing and tiny-skia rasterization / PNG export
//! - `app`: native viewer built on eframe
//! - `gallery`: ready-made example figures
//! - `persistence`: figures to/from JSON
//! - `config`: viewer configuration and YAML style defaults

pub mod app;
pub mod colorline;
pub mod config;
pub mod data;
pub mod error;
pub mod gallery;
pub mod persistence;
pub mod render;

// Public re-exports for a compact external API
pub use app::{run_figures, ColorLineApp};
pub use colorline::{colored_line, make_collection, ColorLineStyle};
pub use config::{ColorLineConfig, FeatureFlags, StyleDefaults};
pub use data::axes::{clear_frame, Aspect, Axes};
pub use data::collection::{DataBounds, LineCollection, StyledSegment};
pub use data::colormap::{parse_color, Colormap};
pub use data::figure::Figure;
pub use data::norm::{Norm, Normalized};
pub use data::segments::{build_segments, Segment};
pub use data::values::{linspace, ColorValues, StyleValue};
pub use error::{ColorLineError, Result};
pub use persistence::{load_figure_json, save_figure_json};
pub use render::raster::{render_figure, save_png};

pub use egui::Color32;
