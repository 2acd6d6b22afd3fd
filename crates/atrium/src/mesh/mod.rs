//! # Mesh — CPU-Side Geometry
//!
//! Every primitive the scene builders reference (unit cube, UV sphere,
//! checkerboard ground grid, cylinder, plane, rectangle, height field) is
//! generated here as a [`MeshData`]: interleaved [`MeshVertex`] data plus a
//! `u32` index list of counter-clockwise triangles.
//!
//! The builders in [`fixtures`](crate::fixtures) never touch vertices. They
//! emit draw commands that say "unit cube, scaled and moved here"; a renderer
//! generates (or caches) the mesh once and applies the transform.

pub mod height_field;
pub mod shapes;
pub mod vertex;

pub use height_field::{height_field, wave};
pub use shapes::{checker_tiles, cube, cylinder, ground_grid, plane, rectangle, sphere, CheckerTile, GroundGrid};
pub use vertex::MeshVertex;

use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// The built-in unit meshes a draw command can reference by name.
///
/// Unit-sized like a modelling package's defaults: cube side 1, sphere and
/// cylinder radius 0.5, cylinder height 1, plane and rectangle side 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    Cube,
    Sphere,
    Cylinder,
    Plane,
    Rectangle,
}

impl Primitive {
    /// Generate the unit mesh for this primitive.
    pub fn mesh(self) -> MeshData {
        match self {
            Primitive::Cube => cube(1.0),
            Primitive::Sphere => sphere(0.5, 32, 16),
            Primitive::Cylinder => cylinder(0.5, 0.5, 32),
            Primitive::Plane => plane(10, 10),
            Primitive::Rectangle => rectangle(),
        }
    }
}

/// Vertex and index data for one mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(vertices: Vec<MeshVertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Vertex data as raw bytes, ready for a vertex buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as raw bytes, ready for an index buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Append another mesh, rebasing its indices.
    pub fn append(&mut self, other: &MeshData) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    /// Axis-aligned bounds of all vertex positions, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.vertices.iter().map(|v| Vec3::from(v.position));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    /// Iterate triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [&MeshVertex; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |t| {
            [
                &self.vertices[t[0] as usize],
                &self.vertices[t[1] as usize],
                &self.vertices[t[2] as usize],
            ]
        })
    }
}

/// Test helper: every non-degenerate triangle's winding agrees with its
/// vertex normals (counter-clockwise seen from the side the normals face).
#[cfg(test)]
pub(crate) fn assert_outward_winding(mesh: &MeshData) {
    for (n, [a, b, c]) in mesh.triangles().enumerate() {
        let pa = Vec3::from(a.position);
        let pb = Vec3::from(b.position);
        let pc = Vec3::from(c.position);
        let face = (pb - pa).cross(pc - pa);
        if face.length() < 1e-9 {
            continue;
        }
        let avg = Vec3::from(a.normal) + Vec3::from(b.normal) + Vec3::from(c.normal);
        assert!(face.dot(avg) > 0.0, "triangle {n} winds against its normals");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_rebases_indices() {
        let mut a = cube(1.0);
        let b = cube(1.0);
        a.append(&b);
        assert_eq!(a.vertices.len(), 48);
        assert_eq!(a.indices.len(), 72);
        assert_eq!(a.indices[36], 24);
    }

    #[test]
    fn bounds_of_unit_cube() {
        let (lo, hi) = cube(2.0).bounds().unwrap();
        assert_eq!(lo, Vec3::splat(-1.0));
        assert_eq!(hi, Vec3::splat(1.0));
        assert!(MeshData::default().bounds().is_none());
    }

    #[test]
    fn primitives_are_unit_sized() {
        for prim in [Primitive::Cube, Primitive::Sphere, Primitive::Cylinder, Primitive::Plane, Primitive::Rectangle] {
            let (lo, hi) = prim.mesh().bounds().unwrap();
            let extent = hi - lo;
            assert!(extent.max_element() <= 1.0 + 1e-5, "{prim:?} extent {extent:?}");
            assert!((extent.max_element() - 1.0).abs() < 1e-5, "{prim:?} extent {extent:?}");
        }
    }

    #[test]
    fn byte_views_match_lengths() {
        let m = cube(1.0);
        assert_eq!(m.vertex_bytes().len(), 24 * MeshVertex::STRIDE);
        assert_eq!(m.index_bytes().len(), 36 * 4);
    }
}
