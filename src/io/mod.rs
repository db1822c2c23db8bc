// io/mod.rs
// Exports the configuration and CLI modules
pub mod config_loader;
pub mod render_settings;
pub mod simple_cli;
