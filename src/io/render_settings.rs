use log::warn;
use nalgebra::Vector3;

/// Pure data struct holding every parameter configurable through TOML.
/// No clap logic lives here, the struct is only data storage.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    // ===== File output settings =====
    /// Base name for output files
    pub output: String,
    /// Directory for output images
    pub output_dir: String,

    // ===== Render basics =====
    /// Output image width
    pub width: usize,
    /// Output image height
    pub height: usize,
    /// Enable gamma correction
    pub use_gamma: bool,
    /// Enable multithreaded rendering
    pub use_multithreading: bool,

    // ===== Colors (strings in "r,g,b" form for TOML round-tripping) =====
    /// Fill color of the triangle
    pub fill_color: String,
    /// Background color of the frame
    pub background_color: String,
}

/// Helper function to parse comma separated floats.
pub fn parse_vec3(s: &str) -> Result<Vector3<f32>, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err("expected 3 comma separated values".to_string());
    }
    let x = parts[0]
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("invalid number '{}': {}", parts[0], e))?;
    let y = parts[1]
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("invalid number '{}': {}", parts[1], e))?;
    let z = parts[2]
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("invalid number '{}': {}", parts[2], e))?;
    Ok(Vector3::new(x, y, z))
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            // ===== File output settings =====
            output: "triangle".to_string(),
            output_dir: "output".to_string(),

            // ===== Render basics =====
            width: 1024,
            height: 1024,
            use_gamma: true,
            use_multithreading: true,

            // ===== Colors =====
            fill_color: "1,0,0".to_string(),
            background_color: "0,0,0".to_string(),
        }
    }
}

impl RenderSettings {
    /// Fill color as a vector (computed on demand).
    pub fn fill_color_vec(&self) -> Vector3<f32> {
        parse_vec3(&self.fill_color).unwrap_or_else(|_| {
            warn!(
                "invalid fill color '{}', falling back to red",
                self.fill_color
            );
            Vector3::new(1.0, 0.0, 0.0)
        })
    }

    /// Background color as a vector (computed on demand).
    pub fn background_color_vec(&self) -> Vector3<f32> {
        parse_vec3(&self.background_color).unwrap_or_else(|_| Vector3::new(0.0, 0.0, 0.0))
    }

    /// Validates the render parameters.
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err("Error: image width and height must be greater than 0".to_string());
        }

        if self.output_dir.trim().is_empty() {
            return Err("Error: output directory must not be empty".to_string());
        }

        if self.output.trim().is_empty() {
            return Err("Error: output file name must not be empty".to_string());
        }

        if parse_vec3(&self.fill_color).is_err() {
            return Err("Error: fill color must use the r,g,b format".to_string());
        }

        if parse_vec3(&self.background_color).is_err() {
            return Err("Error: background color must use the r,g,b format".to_string());
        }

        Ok(())
    }
}
