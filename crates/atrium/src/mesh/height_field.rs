//! Height-field surfaces sampled from a function `y = f(x, z)`.
//!
//! The grid is `grid_n × grid_n` vertices over a square of side `size`
//! centered on the origin. Normals come from central differences:
//! `n = normalize(-∂f/∂x, 1, -∂f/∂z)`.

use super::{MeshData, MeshVertex};
use crate::math::Vec3;

/// Step used for the finite-difference normals.
pub const NORMAL_EPSILON: f32 = 0.01;

/// The demo surface: `sin x · cos z`.
pub fn wave(x: f32, z: f32) -> f32 {
    x.sin() * z.cos()
}

/// Sample `f` over a regular XZ grid and triangulate it.
///
/// `grid_n` is clamped to at least 2. Each cell `(i0, i1, i2, i3)` (row-major,
/// `i2 = i0 + grid_n`) becomes triangles `(i0, i2, i1)` and `(i1, i2, i3)`,
/// counter-clockwise seen from above.
pub fn height_field(grid_n: u32, size: f32, f: impl Fn(f32, f32) -> f32) -> MeshData {
    let n = grid_n.max(2);
    let step = size / (n - 1) as f32;
    let half = size * 0.5;
    let mut mesh = MeshData::with_capacity((n * n) as usize, ((n - 1) * (n - 1) * 6) as usize);

    for row in 0..n {
        let z = -half + row as f32 * step;
        for col in 0..n {
            let x = -half + col as f32 * step;
            let y = f(x, z);
            let dx = (f(x + NORMAL_EPSILON, z) - f(x - NORMAL_EPSILON, z)) / (2.0 * NORMAL_EPSILON);
            let dz = (f(x, z + NORMAL_EPSILON) - f(x, z - NORMAL_EPSILON)) / (2.0 * NORMAL_EPSILON);
            let normal = Vec3::new(-dx, 1.0, -dz).normalize();
            let uv = [col as f32 / (n - 1) as f32, row as f32 / (n - 1) as f32];
            mesh.vertices.push(MeshVertex::new([x, y, z], normal.to_array(), uv));
        }
    }

    for row in 0..n - 1 {
        for col in 0..n - 1 {
            let i0 = row * n + col;
            let i1 = i0 + 1;
            let i2 = i0 + n;
            let i3 = i2 + 1;
            mesh.indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::assert_outward_winding;

    #[test]
    fn flat_field_has_up_normals() {
        let mesh = height_field(4, 3.0, |_, _| 0.0);
        assert_eq!(mesh.vertices.len(), 16);
        assert_eq!(mesh.indices.len(), 9 * 6);
        assert!(mesh.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
        assert_outward_winding(&mesh);
    }

    #[test]
    fn grid_spans_size_centered() {
        let (lo, hi) = height_field(11, 10.0, |_, _| 0.0).bounds().unwrap();
        assert!((lo.x + 5.0).abs() < 1e-5 && (hi.x - 5.0).abs() < 1e-5);
        assert!((lo.z + 5.0).abs() < 1e-5 && (hi.z - 5.0).abs() < 1e-5);
    }

    #[test]
    fn wave_normals_match_analytic_gradient() {
        let mesh = height_field(21, 10.0, wave);
        for v in &mesh.vertices {
            let [x, y, z] = v.position;
            assert!((y - wave(x, z)).abs() < 1e-6);
            let expected = Vec3::new(-(x.cos() * z.cos()), 1.0, x.sin() * z.sin()).normalize();
            assert!((Vec3::from(v.normal) - expected).length() < 1e-3);
        }
        assert_outward_winding(&mesh);
    }

    #[test]
    fn degenerate_grid_is_clamped() {
        let mesh = height_field(0, 1.0, wave);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.triangle_count(), 2);
    }
}
