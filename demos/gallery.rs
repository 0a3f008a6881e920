//! Example: the colored-line gallery in a native window
//!
//! What it demonstrates
//! - Building figures with `colored_line` (see `colorline::gallery`).
//! - Showing several figures in one viewer and switching between them.
//!
//! How to run
//! ```bash
//! cargo run --example gallery
//! ```
//! Use the "Figure" selector in the top bar to switch figures and "Save PNG" to export one.

use colorline::{gallery, run_figures, ColorLineConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let figures = gallery::all()?;
    let cfg = ColorLineConfig {
        title: "Colored line gallery".to_string(),
        ..Default::default()
    };
    run_figures(figures, cfg)?;
    Ok(())
}
