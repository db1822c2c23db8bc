use super::triangle_data::{BoundingBox, TriangleData};
use crate::geometry::interpolation::{
    barycentric_coordinates, interpolate_depth, is_inside_triangle,
};
use crate::io::render_settings::RenderSettings;
use crate::utils::color::linear_rgb_to_u8;
use atomic_float::AtomicF32;
use nalgebra::{Point2, Vector3};
use rayon::prelude::*;
use std::sync::atomic::{AtomicU8, Ordering};

/// Rasterizes a single triangle serially.
pub fn rasterize_triangle(
    triangle: &TriangleData,
    width: usize,
    height: usize,
    depth_buffer: &[AtomicF32],
    color_buffer: &[AtomicU8],
    settings: &RenderSettings,
) {
    if !triangle.is_valid() {
        return;
    }

    let bbox = match BoundingBox::from_triangle(triangle, width, height) {
        Some(bbox) => bbox,
        None => return,
    };

    bbox.for_each_pixel(|x, y| {
        let pixel_center = Point2::new(x as f32 + 0.5, y as f32 + 0.5);
        let pixel_index = y * width + x;
        process_pixel(
            triangle,
            pixel_center,
            pixel_index,
            depth_buffer,
            color_buffer,
            settings,
        );
    });
}

/// Rasterizes a single triangle with one rayon task per bounding box row.
/// Rows never overlap and pixel writes go through atomics, so the rows can
/// run in any order.
pub fn rasterize_triangle_parallel(
    triangle: &TriangleData,
    width: usize,
    height: usize,
    depth_buffer: &[AtomicF32],
    color_buffer: &[AtomicU8],
    settings: &RenderSettings,
) {
    if !triangle.is_valid() {
        return;
    }

    let bbox = match BoundingBox::from_triangle(triangle, width, height) {
        Some(bbox) => bbox,
        None => return,
    };

    (bbox.min_y..bbox.max_y).into_par_iter().for_each(|y| {
        for x in bbox.min_x..bbox.max_x {
            let pixel_center = Point2::new(x as f32 + 0.5, y as f32 + 0.5);
            let pixel_index = y * width + x;
            process_pixel(
                triangle,
                pixel_center,
                pixel_index,
                depth_buffer,
                color_buffer,
                settings,
            );
        }
    });
}

/// Coverage test, depth test and color write for one pixel.
fn process_pixel(
    triangle: &TriangleData,
    pixel_center: Point2<f32>,
    pixel_index: usize,
    depth_buffer: &[AtomicF32],
    color_buffer: &[AtomicU8],
    settings: &RenderSettings,
) {
    let v0 = &triangle.vertices[0].pix;
    let v1 = &triangle.vertices[1].pix;
    let v2 = &triangle.vertices[2].pix;

    let bary = match barycentric_coordinates(pixel_center, *v0, *v1, *v2) {
        Some(bary) => bary,
        None => return,
    };

    if !is_inside_triangle(bary) {
        return;
    }

    let interpolated_depth = interpolate_depth(
        bary,
        triangle.vertices[0].z_ndc,
        triangle.vertices[1].z_ndc,
        triangle.vertices[2].z_ndc,
    );

    if !interpolated_depth.is_finite() {
        return;
    }

    // fetch_min keeps the closest depth; only the winning write gets the color
    let old_depth = depth_buffer[pixel_index].fetch_min(interpolated_depth, Ordering::Relaxed);
    if old_depth <= interpolated_depth {
        return;
    }

    write_pixel_color(
        pixel_index,
        &triangle.fill_color,
        color_buffer,
        settings.use_gamma,
    );
}

#[inline]
fn write_pixel_color(
    pixel_index: usize,
    color: &Vector3<f32>,
    color_buffer: &[AtomicU8],
    apply_gamma: bool,
) {
    let buffer_start_index = pixel_index * 3;
    if buffer_start_index + 2 < color_buffer.len() {
        let [r, g, b] = linear_rgb_to_u8(color, apply_gamma);
        color_buffer[buffer_start_index].store(r, Ordering::Relaxed);
        color_buffer[buffer_start_index + 1].store(g, Ordering::Relaxed);
        color_buffer[buffer_start_index + 2].store(b, Ordering::Relaxed);
    }
}
