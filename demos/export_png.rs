//! Example: render the gallery figures to PNG files without opening a window
//!
//! How to run
//! ```bash
//! cargo run --example export_png -- [output_dir]
//! ```
//! Writes `gallery_1.png` .. `gallery_5.png` (and a JSON copy of each figure)
//! into `output_dir`, defaulting to the current directory.

use std::path::PathBuf;

use colorline::{gallery, save_figure_json, save_png};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)?;

    for (i, figure) in gallery::all()?.iter().enumerate() {
        let png = out_dir.join(format!("gallery_{}.png", i + 1));
        save_png(figure, &png)?;
        save_figure_json(figure, png.with_extension("json"))?;
        println!("{} -> {}", figure.title, png.display());
    }
    Ok(())
}
