//! Figure viewer application.
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`run`]    | Top-level [`run_figures()`] entry point |
//!
//! [`ColorLineApp`] shows one figure at a time with a selector in the top bar
//! and can export the selected figure as PNG. It implements [`eframe::App`]
//! and can also be embedded into a parent egui application via
//! [`ColorLineApp::ui_embed`].

mod run;

pub use run::run_figures;

use eframe::egui;

use crate::config::{ColorLineConfig, FeatureFlags};
use crate::data::figure::Figure;
use crate::render::plot::show_axes;
use crate::render::raster::save_png;

pub struct ColorLineApp {
    figures: Vec<Figure>,
    selected: usize,
    pub features: FeatureFlags,
    dark_mode: bool,
    visuals_applied: bool,
    /// Last export failure, shown in the top bar until the next success.
    pub last_error: Option<String>,
}

impl ColorLineApp {
    pub fn new(figures: Vec<Figure>, cfg: &ColorLineConfig) -> Self {
        Self {
            figures,
            selected: 0,
            features: cfg.features.clone(),
            dark_mode: cfg.dark_mode,
            visuals_applied: false,
            last_error: None,
        }
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select figure `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.figures.len() {
            self.selected = index;
        }
    }

    pub fn selected_figure(&self) -> Option<&Figure> {
        self.figures.get(self.selected)
    }

    pub fn push_figure(&mut self, figure: Figure) {
        self.figures.push(figure);
    }

    fn default_png_name() -> String {
        format!(
            "colorline_{:.0}.png",
            chrono::Local::now().timestamp_millis()
        )
    }

    fn prompt_and_save_png(&mut self) {
        let Some(figure) = self.figures.get(self.selected) else {
            return;
        };
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(Self::default_png_name())
            .add_filter("PNG", &["png"])
            .save_file()
        {
            match save_png(figure, &path) {
                Ok(()) => self.last_error = None,
                Err(e) => {
                    log::error!("Failed to save PNG to {:?}: {e}", path);
                    self.last_error = Some(e.to_string());
                }
            }
        }
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let current = self
                .selected_figure()
                .map(|f| f.title.clone())
                .unwrap_or_else(|| "No figures".to_string());
            let mut selected = self.selected;
            egui::ComboBox::from_label("Figure")
                .selected_text(current)
                .show_ui(ui, |ui| {
                    for (i, fig) in self.figures.iter().enumerate() {
                        ui.selectable_value(&mut selected, i, fig.title.as_str());
                    }
                });
            self.select(selected);

            if self.features.export_png
                && ui
                    .add_enabled(!self.figures.is_empty(), egui::Button::new("Save PNG"))
                    .clicked()
            {
                self.prompt_and_save_png();
            }
            if let Some(err) = &self.last_error {
                ui.colored_label(egui::Color32::RED, err);
            }
        });
    }

    /// Render the viewer into an existing `Ui`.
    pub fn ui_embed(&mut self, ui: &mut egui::Ui) {
        if self.features.top_bar {
            self.top_bar(ui);
            ui.separator();
        }
        let grid = self.features.grid;
        match self.figures.get(self.selected) {
            Some(figure) => {
                if let Some(title) = &figure.axes.title {
                    ui.heading(title);
                }
                show_axes(ui, &figure.axes, ("colorline_plot", self.selected), grid);
            }
            None => {
                ui.label("Nothing to show");
            }
        }
    }
}

impl eframe::App for ColorLineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.visuals_applied {
            ctx.set_visuals(if self.dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            self.visuals_applied = true;
        }
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_embed(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_ignores_out_of_range() {
        let figs = vec![Figure::new("a"), Figure::new("b")];
        let mut app = ColorLineApp::new(figs, &ColorLineConfig::default());
        assert_eq!(app.selected_figure().unwrap().title, "a");
        app.select(1);
        assert_eq!(app.selected(), 1);
        app.select(7);
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn empty_app_has_no_selection() {
        let mut app = ColorLineApp::new(Vec::new(), &ColorLineConfig::default());
        assert!(app.selected_figure().is_none());
        app.push_figure(Figure::new("late"));
        assert_eq!(app.figures().len(), 1);
        assert_eq!(app.selected_figure().unwrap().title, "late");
    }

    #[test]
    fn png_name_has_extension() {
        let name = ColorLineApp::default_png_name();
        assert!(name.starts_with("colorline_"));
        assert!(name.ends_with(".png"));
    }
}
