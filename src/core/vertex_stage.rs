use nalgebra::Vector4;
use rayon::prelude::*;

/// Number of vertices the pipeline draws. A draw call always covers the
/// index range 0..VERTEX_COUNT.
pub const VERTEX_COUNT: usize = 3;

/// Built-in position table of the vertex stage. The entries are clip-space
/// x and y values; every vertex sits on the z = 0 plane.
const VERTEX_POSITIONS: [[f32; 2]; 3] = [[0.0, -0.5], [-0.5, 0.5], [0.5, -0.5]];

/// Computes the clip-space position for one vertex index.
///
/// This is the whole vertex stage: a table lookup extended to homogeneous
/// coordinates with z = 0 and w = 1. No transformation or projection is
/// applied, and invocations share no state, so the same index always
/// produces the same position.
///
/// The caller guarantees `vertex_index < VERTEX_COUNT`, the same contract a
/// draw call gives a vertex shader.
pub fn compute_position(vertex_index: usize) -> Vector4<f32> {
    let [x, y] = VERTEX_POSITIONS[vertex_index];
    Vector4::new(x, y, 0.0, 1.0)
}

/// Runs one vertex stage invocation per index and gathers the clip-space
/// positions in index order. The parallel path makes no ordering guarantee
/// between invocations; the collected output is ordered by index either way.
pub fn invoke_all(parallel: bool) -> Vec<Vector4<f32>> {
    if parallel {
        (0..VERTEX_COUNT)
            .into_par_iter()
            .map(compute_position)
            .collect()
    } else {
        (0..VERTEX_COUNT).map(compute_position).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_index_maps_to_its_table_entry() {
        assert_eq!(VERTEX_POSITIONS.len(), VERTEX_COUNT);
        assert_eq!(compute_position(0), Vector4::new(0.0, -0.5, 0.0, 1.0));
        assert_eq!(compute_position(1), Vector4::new(-0.5, 0.5, 0.0, 1.0));
        assert_eq!(compute_position(2), Vector4::new(0.5, -0.5, 0.0, 1.0));
    }

    #[test]
    fn z_and_w_are_pinned_for_every_index() {
        for index in 0..VERTEX_COUNT {
            let position = compute_position(index);
            assert_eq!(position.z, 0.0);
            assert_eq!(position.w, 1.0);
        }
    }

    #[test]
    fn repeated_invocations_are_identical() {
        for index in 0..VERTEX_COUNT {
            assert_eq!(compute_position(index), compute_position(index));
        }
    }

    #[test]
    fn batch_runs_match_single_invocations_in_index_order() {
        let parallel = invoke_all(true);
        let serial = invoke_all(false);

        assert_eq!(parallel.len(), VERTEX_COUNT);
        assert_eq!(parallel, serial);
        for (index, clip) in parallel.iter().enumerate() {
            assert_eq!(*clip, compute_position(index));
        }
    }
}
