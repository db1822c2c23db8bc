use crate::io::config_loader::TomlConfigLoader;
use crate::io::render_settings::RenderSettings;
use clap::Parser;

/// Minimal CLI - the TOML file is the real configuration surface.
#[derive(Parser, Debug)]
#[command(name = "first_triangle")]
#[command(about = "Software-rasterized first triangle")]
pub struct SimpleCli {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Write an example configuration file and render with it
    #[arg(long)]
    pub use_example_config: bool,
}

impl SimpleCli {
    /// Processes the CLI arguments and returns the effective RenderSettings.
    pub fn process() -> Result<RenderSettings, String> {
        let cli = Self::parse();

        // Handle the example configuration
        if cli.use_example_config {
            let example_config_path = "example_config.toml";

            TomlConfigLoader::create_example_config(example_config_path)?;
            println!("Created example config: {}", example_config_path);

            // The file stays around, users can keep it as a template
            return TomlConfigLoader::load_from_file(example_config_path);
        }

        // Load the configuration file or fall back to the defaults
        if let Some(config_path) = &cli.config {
            println!("Loading config file: {}", config_path);
            TomlConfigLoader::load_from_file(config_path)
                .map_err(|e| format!("Failed to load config: {}", e))
        } else {
            println!("Using default settings");
            Ok(RenderSettings::default())
        }
    }
}
