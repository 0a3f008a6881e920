//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Everything that can go wrong while building, rendering or persisting colored lines.
#[derive(Debug, Error)]
pub enum ColorLineError {
    #[error("x and y must have the same length (x has {x} values, y has {y})")]
    LengthMismatch { x: usize, y: usize },

    #[error("unknown colormap `{0}`")]
    UnknownColormap(String),

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("a listed colormap needs at least one color")]
    EmptyColormap,

    #[error("color value array is empty")]
    EmptyColorValues,

    #[error("{0} must not be an empty sequence")]
    EmptyStyle(&'static str),

    #[error("invalid normalization: {0}")]
    InvalidNorm(String),

    #[error("invalid image size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ColorLineError>;
