// utils/mod.rs
// Exports the color, saving and render flow helper modules
pub mod color;
pub mod render_process;
pub mod save_utils;
