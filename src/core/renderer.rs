use crate::core::frame_buffer::FrameBuffer;
use crate::core::geometry_processor::GeometryProcessor;
use crate::core::rasterizer::{
    TriangleData, VertexRenderData, rasterize_triangle, rasterize_triangle_parallel,
};
use crate::io::render_settings::RenderSettings;
use log::{debug, info};
use nalgebra::Point2;
use std::time::Instant;

pub struct Renderer {
    pub frame_buffer: FrameBuffer,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Renderer {
            frame_buffer: FrameBuffer::new(width, height),
        }
    }

    /// Renders the built-in triangle into the frame buffer.
    pub fn render(&self, settings: &RenderSettings) {
        let start_time = Instant::now();

        self.frame_buffer.clear(settings);

        // Geometry stages: vertex stage, perspective division, viewport mapping
        let transform_start_time = Instant::now();
        let screen_coords = GeometryProcessor::process(
            self.frame_buffer.width,
            self.frame_buffer.height,
            settings.use_multithreading,
        );
        let transform_duration = transform_start_time.elapsed();

        debug!("screen space vertices: {:?}", screen_coords);

        // Primitive assembly: the three invocations form a single triangle
        let vertices = [
            VertexRenderData {
                pix: Point2::new(screen_coords[0].x, screen_coords[0].y),
                z_ndc: screen_coords[0].z,
            },
            VertexRenderData {
                pix: Point2::new(screen_coords[1].x, screen_coords[1].y),
                z_ndc: screen_coords[1].z,
            },
            VertexRenderData {
                pix: Point2::new(screen_coords[2].x, screen_coords[2].y),
                z_ndc: screen_coords[2].z,
            },
        ];
        let triangle = TriangleData {
            vertices,
            fill_color: settings.fill_color_vec(),
        };

        let raster_start_time = Instant::now();
        if settings.use_multithreading {
            rasterize_triangle_parallel(
                &triangle,
                self.frame_buffer.width,
                self.frame_buffer.height,
                &self.frame_buffer.depth_buffer,
                &self.frame_buffer.color_buffer,
                settings,
            );
        } else {
            rasterize_triangle(
                &triangle,
                self.frame_buffer.width,
                self.frame_buffer.height,
                &self.frame_buffer.depth_buffer,
                &self.frame_buffer.color_buffer,
                settings,
            );
        }
        let raster_duration = raster_start_time.elapsed();

        info!(
            "Render finished. transform: {:?}, rasterization: {:?}, total: {:?}",
            transform_duration,
            raster_duration,
            start_time.elapsed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings(width: usize, height: usize) -> RenderSettings {
        RenderSettings {
            width,
            height,
            ..Default::default()
        }
    }

    fn count_fill_pixels(renderer: &Renderer, fill: [u8; 3]) -> usize {
        let mut count = 0;
        for y in 0..renderer.frame_buffer.height {
            for x in 0..renderer.frame_buffer.width {
                if renderer.frame_buffer.get_pixel_rgb(x, y) == Some(fill) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn triangle_covers_the_centroid_and_spares_the_corners() {
        let settings = test_settings(64, 64);
        let renderer = Renderer::new(64, 64);
        renderer.render(&settings);

        // The default red fill and black background survive gamma exactly
        let fill = [255, 0, 0];
        let background = [0, 0, 0];

        // Screen-space vertices are (32, 48), (16, 16) and (48, 48); the
        // centroid pixel lies inside the triangle
        assert_eq!(renderer.frame_buffer.get_pixel_rgb(32, 37), Some(fill));

        assert_eq!(renderer.frame_buffer.get_pixel_rgb(0, 0), Some(background));
        assert_eq!(renderer.frame_buffer.get_pixel_rgb(63, 0), Some(background));
        assert_eq!(renderer.frame_buffer.get_pixel_rgb(0, 63), Some(background));
        assert_eq!(
            renderer.frame_buffer.get_pixel_rgb(63, 63),
            Some(background)
        );
    }

    #[test]
    fn coverage_roughly_matches_the_triangle_area() {
        let settings = test_settings(64, 64);
        let renderer = Renderer::new(64, 64);
        renderer.render(&settings);

        // The screen-space triangle spans 256 square pixels at 64x64
        let covered = count_fill_pixels(&renderer, [255, 0, 0]);
        assert!((200..=320).contains(&covered), "covered {} pixels", covered);
    }

    #[test]
    fn covered_pixels_carry_zero_depth() {
        let settings = test_settings(64, 64);
        let renderer = Renderer::new(64, 64);
        renderer.render(&settings);

        let depth = renderer.frame_buffer.get_depth_buffer_f32();
        let covered = count_fill_pixels(&renderer, [255, 0, 0]);
        let finite = depth.iter().filter(|d| d.is_finite()).count();

        // Every vertex sits on z = 0, so coverage and depth agree exactly
        assert_eq!(finite, covered);
        assert!(depth.iter().filter(|d| d.is_finite()).all(|d| *d == 0.0));
    }

    #[test]
    fn serial_and_parallel_renders_are_identical() {
        let parallel_settings = test_settings(64, 64);
        let serial_settings = RenderSettings {
            use_multithreading: false,
            ..test_settings(64, 64)
        };

        let parallel = Renderer::new(64, 64);
        parallel.render(&parallel_settings);
        let serial = Renderer::new(64, 64);
        serial.render(&serial_settings);

        assert_eq!(
            parallel.frame_buffer.get_color_buffer_bytes(),
            serial.frame_buffer.get_color_buffer_bytes()
        );
        assert_eq!(
            parallel.frame_buffer.get_depth_buffer_f32(),
            serial.frame_buffer.get_depth_buffer_f32()
        );
    }

    #[test]
    fn rendering_twice_produces_the_same_frame() {
        let settings = test_settings(32, 32);
        let renderer = Renderer::new(32, 32);

        renderer.render(&settings);
        let first = renderer.frame_buffer.get_color_buffer_bytes();
        renderer.render(&settings);
        let second = renderer.frame_buffer.get_color_buffer_bytes();

        assert_eq!(first, second);
    }

    #[test]
    fn custom_fill_and_background_colors_are_respected() {
        let settings = RenderSettings {
            fill_color: "0,1,0".to_string(),
            background_color: "0,0,1".to_string(),
            use_gamma: false,
            ..test_settings(64, 64)
        };
        let renderer = Renderer::new(64, 64);
        renderer.render(&settings);

        assert_eq!(renderer.frame_buffer.get_pixel_rgb(32, 37), Some([0, 255, 0]));
        assert_eq!(renderer.frame_buffer.get_pixel_rgb(0, 0), Some([0, 0, 255]));
    }
}
