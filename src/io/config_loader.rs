use crate::io::render_settings::RenderSettings;
use log::warn;
use std::path::Path;
use toml::Value;

/// TOML configuration manager - single place for reading and writing every
/// setting.
pub struct TomlConfigLoader;

impl TomlConfigLoader {
    /// Loads the full configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<RenderSettings, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::load_from_content(&content)
    }

    /// Loads the configuration from a TOML content string.
    pub fn load_from_content(content: &str) -> Result<RenderSettings, String> {
        let toml_value: Value =
            toml::from_str(content).map_err(|e| format!("Failed to parse TOML: {}", e))?;

        Self::parse_toml_to_settings(toml_value)
    }

    /// Saves the configuration to a TOML file.
    pub fn save_to_file<P: AsRef<Path>>(settings: &RenderSettings, path: P) -> Result<(), String> {
        let toml_content = Self::settings_to_toml(settings);
        std::fs::write(path, toml_content)
            .map_err(|e| format!("Failed to write config file: {}", e))
    }

    /// Generates an example configuration file from the built-in defaults.
    pub fn create_example_config<P: AsRef<Path>>(path: P) -> Result<(), String> {
        Self::save_to_file(&RenderSettings::default(), path)
            .map_err(|e| format!("Failed to create example config: {}", e))
    }

    // ===== TOML -> RenderSettings conversion =====

    fn parse_toml_to_settings(toml: Value) -> Result<RenderSettings, String> {
        let mut settings = RenderSettings::default();

        // [files] section
        if let Some(files) = toml.get("files").and_then(|v| v.as_table()) {
            Self::parse_files_section(&mut settings, files);
        }

        // [render] section
        if let Some(render) = toml.get("render").and_then(|v| v.as_table()) {
            Self::parse_render_section(&mut settings, render);
        }

        // [color] section
        if let Some(color) = toml.get("color").and_then(|v| v.as_table()) {
            Self::parse_color_section(&mut settings, color);
        }

        Ok(settings)
    }

    fn parse_files_section(settings: &mut RenderSettings, files: &toml::Table) {
        if let Some(output) = files.get("output").and_then(|v| v.as_str()) {
            settings.output = output.to_string();
        }
        if let Some(output_dir) = files.get("output_dir").and_then(|v| v.as_str()) {
            settings.output_dir = output_dir.to_string();
        }
    }

    fn parse_render_section(settings: &mut RenderSettings, render: &toml::Table) {
        if let Some(width) = render.get("width").and_then(|v| v.as_integer()) {
            if width > 0 {
                settings.width = width as usize;
            } else {
                warn!("invalid width {}, keeping {}", width, settings.width);
            }
        }
        if let Some(height) = render.get("height").and_then(|v| v.as_integer()) {
            if height > 0 {
                settings.height = height as usize;
            } else {
                warn!("invalid height {}, keeping {}", height, settings.height);
            }
        }
        if let Some(use_gamma) = render.get("use_gamma").and_then(|v| v.as_bool()) {
            settings.use_gamma = use_gamma;
        }
        if let Some(use_multithreading) =
            render.get("use_multithreading").and_then(|v| v.as_bool())
        {
            settings.use_multithreading = use_multithreading;
        }
    }

    fn parse_color_section(settings: &mut RenderSettings, color: &toml::Table) {
        if let Some(fill) = color.get("fill").and_then(|v| v.as_str()) {
            settings.fill_color = fill.to_string();
        }
        if let Some(background) = color.get("background").and_then(|v| v.as_str()) {
            settings.background_color = background.to_string();
        }
    }

    // ===== RenderSettings -> TOML conversion =====

    fn settings_to_toml(settings: &RenderSettings) -> String {
        let mut content = String::new();

        // File header comment
        content.push_str("# first_triangle render configuration\n");
        content.push_str("# Generated from the RenderSettings defaults\n\n");

        // [files] section
        content.push_str("[files]\n");
        content.push_str(&format!("output = \"{}\"\n", settings.output));
        content.push_str(&format!("output_dir = \"{}\"\n", settings.output_dir));
        content.push('\n');

        // [render] section
        content.push_str("[render]\n");
        content.push_str(&format!("width = {}\n", settings.width));
        content.push_str(&format!("height = {}\n", settings.height));
        content.push_str(&format!("use_gamma = {}\n", settings.use_gamma));
        content.push_str(&format!(
            "use_multithreading = {}\n",
            settings.use_multithreading
        ));
        content.push('\n');

        // [color] section
        content.push_str("[color]\n");
        content.push_str("# Colors are \"r,g,b\" strings with components in [0.0, 1.0]\n");
        content.push_str(&format!("fill = \"{}\"\n", settings.fill_color));
        content.push_str(&format!("background = \"{}\"\n", settings.background_color));

        content
    }
}
