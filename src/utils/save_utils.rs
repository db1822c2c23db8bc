use crate::core::renderer::Renderer;
use crate::io::render_settings::RenderSettings;
use image::ColorType;
use log::info;
use std::path::Path;

/// Saves raw RGB bytes as a PNG image.
pub fn save_image(path: &str, data: &[u8], width: u32, height: u32) -> Result<(), String> {
    image::save_buffer(path, data, width, height, ColorType::Rgb8)
        .map_err(|e| format!("Failed to save image to {}: {}", path, e))?;
    info!("Image saved to {}", path);
    Ok(())
}

/// Saves the renderer's color buffer under the configured output directory.
pub fn save_render_result(renderer: &Renderer, settings: &RenderSettings) -> Result<(), String> {
    let color_path = Path::new(&settings.output_dir)
        .join(format!("{}_color.png", settings.output))
        .to_str()
        .ok_or_else(|| "Failed to create color output path string".to_string())?
        .to_string();

    save_image(
        &color_path,
        &renderer.frame_buffer.get_color_buffer_bytes(),
        renderer.frame_buffer.width as u32,
        renderer.frame_buffer.height as u32,
    )
}
