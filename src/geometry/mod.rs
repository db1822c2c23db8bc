// geometry/mod.rs
// Exports the geometry and screen-space transform modules
pub mod interpolation;
pub mod transform;
