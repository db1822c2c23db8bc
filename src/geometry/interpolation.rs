use nalgebra::{Point2, Vector3};

const EPSILON: f32 = 1e-5; // Small value for float comparisons

/// Calculates barycentric coordinates (alpha, beta, gamma) for point p
/// with respect to the 2D triangle (v1, v2, v3).
/// Returns None if the triangle is degenerate.
/// Alpha corresponds to v1, Beta to v2, Gamma to v3.
pub fn barycentric_coordinates(
    p: Point2<f32>,
    v1: Point2<f32>,
    v2: Point2<f32>,
    v3: Point2<f32>,
) -> Option<Vector3<f32>> {
    let e1 = v2 - v1;
    let e2 = v3 - v1;
    let p_v1 = p - v1;

    // Area of the main triangle (times 2) using 2D cross product determinant
    let total_area_x2 = e1.x * e2.y - e1.y * e2.x;

    if total_area_x2.abs() < EPSILON {
        return None; // Degenerate triangle
    }

    let inv_total_area_x2 = 1.0 / total_area_x2;

    // Area of subtriangle opposite v2 (p, v3, v1) / total_area -> bary for v2 (beta)
    let area2_x2 = p_v1.x * e2.y - p_v1.y * e2.x;
    let beta = area2_x2 * inv_total_area_x2;

    // Area of subtriangle opposite v3 (p, v1, v2) / total_area -> bary for v3 (gamma)
    let area3_x2 = e1.x * p_v1.y - e1.y * p_v1.x;
    let gamma = area3_x2 * inv_total_area_x2;

    // Bary for v1 (alpha)
    let alpha = 1.0 - beta - gamma;

    Some(Vector3::new(alpha, beta, gamma))
}

/// Checks if the barycentric coordinates indicate the point is inside the triangle.
#[inline(always)]
pub fn is_inside_triangle(bary: Vector3<f32>) -> bool {
    bary.x >= -EPSILON && bary.y >= -EPSILON && bary.z >= -EPSILON
}

/// Interpolates depth (z) linearly using barycentric coordinates.
/// The vertices carry w = 1 out of the vertex stage, so screen-space
/// interpolation needs no perspective correction.
/// Returns f32::INFINITY if the point lies outside the triangle.
pub fn interpolate_depth(bary: Vector3<f32>, z1: f32, z2: f32, z3: f32) -> f32 {
    if !is_inside_triangle(bary) {
        return f32::INFINITY;
    }

    bary.x * z1 + bary.y * z2 + bary.z * z3
}
