use nalgebra::{Point2, Vector3};

/// Per-vertex data left over after the geometry stages: the screen-space
/// position in pixels and the NDC depth carried through the viewport
/// mapping.
#[derive(Debug, Clone, Copy)]
pub struct VertexRenderData {
    pub pix: Point2<f32>,
    pub z_ndc: f32,
}

/// A screen-space triangle ready for rasterization.
#[derive(Debug, Clone)]
pub struct TriangleData {
    pub vertices: [VertexRenderData; 3],
    /// Flat fill color in linear RGB.
    pub fill_color: Vector3<f32>,
}

/// Screen space bounding box, clamped to the frame.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl BoundingBox {
    /// Computes the clamped bounding box of a triangle.
    /// Returns None when the triangle lies entirely outside the frame.
    pub fn from_triangle(triangle: &TriangleData, width: usize, height: usize) -> Option<Self> {
        let v0 = &triangle.vertices[0].pix;
        let v1 = &triangle.vertices[1].pix;
        let v2 = &triangle.vertices[2].pix;

        let min_x = v0.x.min(v1.x).min(v2.x).floor().max(0.0) as usize;
        let min_y = v0.y.min(v1.y).min(v2.y).floor().max(0.0) as usize;
        let max_x = v0.x.max(v1.x).max(v2.x).ceil().min(width as f32) as usize;
        let max_y = v0.y.max(v1.y).max(v2.y).ceil().min(height as f32) as usize;

        if max_x <= min_x || max_y <= min_y {
            None
        } else {
            Some(Self {
                min_x,
                min_y,
                max_x,
                max_y,
            })
        }
    }

    /// Visits every pixel covered by the box (max bounds are exclusive).
    pub fn for_each_pixel<F>(&self, mut callback: F)
    where
        F: FnMut(usize, usize),
    {
        for y in self.min_y..self.max_y {
            for x in self.min_x..self.max_x {
                callback(x, y);
            }
        }
    }
}

impl TriangleData {
    /// A triangle is drawable when its screen-space area is above the
    /// degenerate threshold. NaN coordinates fail this check as well.
    pub fn is_valid(&self) -> bool {
        let v0 = &self.vertices[0].pix;
        let v1 = &self.vertices[1].pix;
        let v2 = &self.vertices[2].pix;

        let area = 0.5 * ((v1.x - v0.x) * (v2.y - v0.y) - (v2.x - v0.x) * (v1.y - v0.y)).abs();
        area > 1e-6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(coords: [(f32, f32); 3]) -> TriangleData {
        TriangleData {
            vertices: coords.map(|(x, y)| VertexRenderData {
                pix: Point2::new(x, y),
                z_ndc: 0.0,
            }),
            fill_color: Vector3::new(1.0, 0.0, 0.0),
        }
    }

    #[test]
    fn bounding_box_is_clamped_to_the_frame() {
        let tri = triangle([(32.0, 48.0), (16.0, 16.0), (48.0, 48.0)]);
        let bbox = BoundingBox::from_triangle(&tri, 64, 64).unwrap();
        assert_eq!((bbox.min_x, bbox.min_y), (16, 16));
        assert_eq!((bbox.max_x, bbox.max_y), (48, 48));

        let spilling = triangle([(-8.0, -8.0), (40.0, 10.0), (10.0, 80.0)]);
        let bbox = BoundingBox::from_triangle(&spilling, 64, 64).unwrap();
        assert_eq!((bbox.min_x, bbox.min_y), (0, 0));
        assert_eq!(bbox.max_y, 64);
    }

    #[test]
    fn offscreen_triangle_has_no_bounding_box() {
        let beyond = triangle([(100.0, 100.0), (120.0, 100.0), (110.0, 120.0)]);
        assert!(BoundingBox::from_triangle(&beyond, 64, 64).is_none());

        let negative = triangle([(-30.0, -30.0), (-10.0, -30.0), (-20.0, -10.0)]);
        assert!(BoundingBox::from_triangle(&negative, 64, 64).is_none());
    }

    #[test]
    fn degenerate_triangles_are_invalid() {
        assert!(!triangle([(5.0, 5.0), (5.0, 5.0), (5.0, 5.0)]).is_valid());
        assert!(!triangle([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).is_valid());
        assert!(!triangle([(f32::NAN, 0.0), (1.0, 0.0), (0.0, 1.0)]).is_valid());
        assert!(triangle([(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]).is_valid());
    }
}
