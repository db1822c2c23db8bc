use crate::core::vertex_stage;
use crate::geometry::transform::{clip_to_ndc, ndc_to_pixel};
use nalgebra::Point3;

/// Geometry stage result: one screen-space position per vertex, in index
/// order. x and y are pixel coordinates, z is the NDC depth.
pub type ScreenCoords = Vec<Point3<f32>>;

/// Geometry processor, responsible for running the vertex stage and the
/// fixed-function transforms that follow it.
pub struct GeometryProcessor;

impl GeometryProcessor {
    /// Runs the geometry stages of the pipeline: vertex stage invocations,
    /// perspective division, viewport mapping.
    pub fn process(frame_width: usize, frame_height: usize, parallel: bool) -> ScreenCoords {
        let clip_coords = vertex_stage::invoke_all(parallel);
        let ndc_coords = clip_to_ndc(&clip_coords);
        ndc_to_pixel(&ndc_coords, frame_width as f32, frame_height as f32)
    }
}
