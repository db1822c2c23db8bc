use nalgebra::{Point3, Vector4};

/// Converts clip space coordinates to NDC coordinates (perspective division).
pub fn clip_to_ndc(clip_coords: &[Vector4<f32>]) -> Vec<Point3<f32>> {
    clip_coords
        .iter()
        .map(|clip| {
            let w = clip.w;
            if w.abs() > 1e-8 {
                Point3::new(clip.x / w, clip.y / w, clip.z / w)
            } else {
                Point3::origin() // Avoid division by zero
            }
        })
        .collect()
}

/// Converts NDC coordinates to screen pixel coordinates.
pub fn ndc_to_pixel(ndc_coords: &[Point3<f32>], width: f32, height: f32) -> Vec<Point3<f32>> {
    ndc_coords
        .iter()
        .map(|ndc| {
            let screen_x = (ndc.x + 1.0) * 0.5 * width;
            // Flip Y axis: +1 is the top in NDC, 0 is the top in screen coordinates
            let screen_y = (1.0 - (ndc.y + 1.0) * 0.5) * height;
            Point3::new(screen_x, screen_y, ndc.z)
        })
        .collect()
}
