use std::fs;

mod core;
mod geometry;
mod io;
mod utils;

use crate::core::renderer::Renderer;
use crate::io::simple_cli::SimpleCli;
use crate::utils::render_process::render_single_frame;

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // --- Resolve Settings ---
    let settings = SimpleCli::process()?;
    settings.validate()?;

    // Ensure the output directory exists
    fs::create_dir_all(&settings.output_dir).map_err(|e| {
        format!(
            "Failed to create output directory '{}': {}",
            settings.output_dir, e
        )
    })?;

    // --- Render ---
    let renderer = Renderer::new(settings.width, settings.height);
    render_single_frame(&renderer, &settings)?;

    Ok(())
}
