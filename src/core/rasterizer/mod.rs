//! # Triangle rasterization
//!
//! Bounding box scan conversion with barycentric coverage tests and atomic
//! depth and color writes.

pub mod pixel_processor;
pub mod triangle_data;

// Re-export the main types and functions
pub use pixel_processor::{rasterize_triangle, rasterize_triangle_parallel};
pub use triangle_data::{TriangleData, VertexRenderData};
