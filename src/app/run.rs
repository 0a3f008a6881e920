//! Top-level entry point for showing figures in a native window.

use eframe::egui;

use crate::config::ColorLineConfig;
use crate::data::figure::Figure;

use super::ColorLineApp;

/// Open a native window showing `figures`.
///
/// The first figure is selected initially; the top bar switches between
/// them. The call blocks until the window is closed.
pub fn run_figures(figures: Vec<Figure>, mut cfg: ColorLineConfig) -> eframe::Result<()> {
    let app = ColorLineApp::new(figures, &cfg);
    log::debug!("opening viewer with {} figures", app.figures().len());

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Fall back to the configured size if the native options do not set one.
    if opts.viewport.inner_size.is_none() {
        let [w, h] = cfg.window_size;
        opts.viewport = opts.viewport.clone().with_inner_size(egui::vec2(w, h));
    }

    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
