use crate::io::render_settings::RenderSettings;
use crate::utils::color::linear_rgb_to_u8;
use atomic_float::AtomicF32;
use rayon::prelude::*;
use std::sync::atomic::{AtomicU8, Ordering};

/// Frame buffer holding the render result.
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    /// Depth values, smaller is closer. Atomic to support parallel writes.
    pub depth_buffer: Vec<AtomicF32>,
    /// RGB color values [0, 255] as u8. Atomic to support parallel writes.
    pub color_buffer: Vec<AtomicU8>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        let num_pixels = width * height;

        // Atomic float vector for the depth buffer
        let depth_buffer = (0..num_pixels)
            .map(|_| AtomicF32::new(f32::INFINITY))
            .collect();

        // Build the color buffer from an iterator to avoid the vec! macro
        let color_buffer = (0..num_pixels * 3).map(|_| AtomicU8::new(0)).collect();

        FrameBuffer {
            width,
            height,
            depth_buffer,
            color_buffer,
        }
    }

    /// Resets the depth buffer and repaints the background color.
    pub fn clear(&self, settings: &RenderSettings) {
        self.depth_buffer.par_iter().for_each(|atomic_depth| {
            atomic_depth.store(f32::INFINITY, Ordering::Relaxed);
        });

        let background = settings.background_color_vec();
        let background_u8 = linear_rgb_to_u8(&background, settings.use_gamma);

        (0..self.width * self.height)
            .into_par_iter()
            .for_each(|pixel_index| {
                let color_index = pixel_index * 3;
                self.color_buffer[color_index].store(background_u8[0], Ordering::Relaxed);
                self.color_buffer[color_index + 1].store(background_u8[1], Ordering::Relaxed);
                self.color_buffer[color_index + 2].store(background_u8[2], Ordering::Relaxed);
            });
    }

    /// Returns the stored RGB bytes of one pixel, or None outside the frame.
    pub fn get_pixel_rgb(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let color_index = (y * self.width + x) * 3;
        Some([
            self.color_buffer[color_index].load(Ordering::Relaxed),
            self.color_buffer[color_index + 1].load(Ordering::Relaxed),
            self.color_buffer[color_index + 2].load(Ordering::Relaxed),
        ])
    }

    /// Returns the color buffer as raw bytes.
    pub fn get_color_buffer_bytes(&self) -> Vec<u8> {
        self.color_buffer
            .iter()
            .map(|atomic_color| atomic_color.load(Ordering::Relaxed))
            .collect()
    }

    /// Returns the depth buffer as floats.
    pub fn get_depth_buffer_f32(&self) -> Vec<f32> {
        self.depth_buffer
            .iter()
            .map(|atomic_depth| atomic_depth.load(Ordering::Relaxed))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffers_have_the_expected_sizes() {
        let frame_buffer = FrameBuffer::new(16, 8);
        assert_eq!(frame_buffer.depth_buffer.len(), 16 * 8);
        assert_eq!(frame_buffer.color_buffer.len(), 16 * 8 * 3);
        assert!(
            frame_buffer
                .get_depth_buffer_f32()
                .iter()
                .all(|d| *d == f32::INFINITY)
        );
    }

    #[test]
    fn clear_paints_the_background_color() {
        let frame_buffer = FrameBuffer::new(4, 4);
        let settings = RenderSettings {
            background_color: "0,0,1".to_string(),
            use_gamma: false,
            ..Default::default()
        };

        frame_buffer.depth_buffer[0].store(0.25, Ordering::Relaxed);
        frame_buffer.clear(&settings);

        assert_eq!(frame_buffer.get_pixel_rgb(0, 0), Some([0, 0, 255]));
        assert_eq!(frame_buffer.get_pixel_rgb(3, 3), Some([0, 0, 255]));
        assert_eq!(frame_buffer.get_pixel_rgb(4, 0), None);
        assert_eq!(frame_buffer.get_depth_buffer_f32()[0], f32::INFINITY);
    }
}
