//! Drawing backends: egui_plot for the viewer, tiny-skia for files.

pub mod plot;
pub mod raster;
