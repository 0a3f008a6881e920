//! Configuration: viewer window settings and persisted style defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::colorline::ColorLineStyle;
use crate::data::colormap::Colormap;
use crate::data::values::StyleValue;
use crate::error::{ColorLineError, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual viewer features on or off.
///
/// All features default to `true` (enabled).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Show the top bar (figure selector and buttons).
    pub top_bar: bool,
    /// Show the "Save PNG" button.
    pub export_png: bool,
    /// Draw the plot grid (only where the axis itself is visible).
    pub grid: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            top_bar: true,
            export_png: true,
            grid: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ColorLineConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the figure viewer.
#[derive(Clone)]
pub struct ColorLineConfig {
    /// Native window title.
    pub title: String,
    /// Inner window size in points, used when `native_options` does not set one.
    pub window_size: [f32; 2],
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
    /// Toggle individual UI features on/off.
    pub features: FeatureFlags,
    /// Use egui's dark visuals (light otherwise).
    pub dark_mode: bool,
}

impl Default for ColorLineConfig {
    fn default() -> Self {
        Self {
            title: "Colored lines".to_string(),
            window_size: [1000.0, 750.0],
            native_options: None,
            features: FeatureFlags::default(),
            dark_mode: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Style defaults (YAML)
// ─────────────────────────────────────────────────────────────────────────────

/// User-level defaults for new colored lines, stored as YAML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleDefaults {
    /// Name of a built-in colormap.
    pub cmap: String,
    pub line_width: f32,
    pub alpha: f32,
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self {
            cmap: Colormap::Copper.name().to_string(),
            line_width: 3.0,
            alpha: 1.0,
        }
    }
}

impl StyleDefaults {
    /// `~/.colorline/style.yaml`
    pub fn default_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").map_err(|e| {
            ColorLineError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("HOME env var not set: {e}"),
            ))
        })?;
        Ok(PathBuf::from(home).join(".colorline").join("style.yaml"))
    }

    /// Build a [`ColorLineStyle`]; fails on an unknown colormap name.
    pub fn to_style(&self) -> Result<ColorLineStyle> {
        Ok(ColorLineStyle {
            cmap: self.cmap.parse()?,
            line_width: StyleValue::Uniform(self.line_width),
            alpha: StyleValue::Uniform(self.alpha),
            ..ColorLineStyle::default()
        })
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let s = serde_yaml::to_string(self)?;
        fs::write(path, s)?;
        log::info!("saved style defaults to {:?}", path);
        Ok(())
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path.as_ref())?;
        let defaults: StyleDefaults = serde_yaml::from_str(&s)?;
        // reject unknown colormaps at load time rather than at first use
        defaults.cmap.parse::<Colormap>()?;
        Ok(defaults)
    }

    pub fn save_to_default_path(&self) -> Result<()> {
        self.save_to_path(Self::default_path()?)
    }

    /// Load from the default path, falling back to built-in defaults when absent.
    pub fn load_or_default() -> Self {
        let path = match Self::default_path() {
            Ok(p) => p,
            Err(_) => return Self::default(),
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_path(&path) {
            Ok(d) => d,
            Err(e) => {
                log::warn!("ignoring style defaults at {:?}: {e}", path);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("colorline_cfg_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn yaml_round_trip() {
        let path = temp_path("style.yaml");
        let d = StyleDefaults {
            cmap: "jet".to_string(),
            line_width: 8.0,
            alpha: 0.5,
        };
        d.save_to_path(&path).unwrap();
        assert_eq!(StyleDefaults::load_from_path(&path).unwrap(), d);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let d: StyleDefaults = serde_yaml::from_str("cmap: cool\n").unwrap();
        assert_eq!(d.cmap, "cool");
        assert_eq!(d.line_width, 3.0);
        assert_eq!(d.alpha, 1.0);
    }

    #[test]
    fn unknown_colormap_is_rejected() {
        let path = temp_path("bad.yaml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "cmap: plaid\n").unwrap();
        assert!(matches!(
            StyleDefaults::load_from_path(&path),
            Err(ColorLineError::UnknownColormap(_))
        ));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn defaults_become_a_style() {
        let style = StyleDefaults::default().to_style().unwrap();
        assert_eq!(style, ColorLineStyle::default());
    }
}
