use crate::core::renderer::Renderer;
use crate::io::render_settings::RenderSettings;
use crate::utils::save_utils::save_render_result;
use log::info;
use std::time::Instant;

/// Renders a single frame and saves the result.
pub fn render_single_frame(renderer: &Renderer, settings: &RenderSettings) -> Result<(), String> {
    let frame_start_time = Instant::now();

    renderer.render(settings);
    save_render_result(renderer, settings)?;

    info!("Frame finished in {:?}", frame_start_time.elapsed());
    Ok(())
}
