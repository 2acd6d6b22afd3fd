//! # Shapes — Built-In Mesh Generators
//!
//! ## Winding Order and Normals
//!
//! All triangles use counter-clockwise (CCW) winding when viewed from the
//! side the normal points to. Each cube face owns its four vertices (24 total)
//! so that corner vertices can carry a different normal per face; sharing
//! them would smear lighting across edges.
//!
//! ## Face Order
//!
//! The cube emits faces in a fixed order — front (+Z), back (−Z), top (+Y),
//! bottom (−Y), right (+X), left (−X) — so a renderer that batches per face
//! (or a test that inspects them) can rely on indices `4f..4f+4`.
//!
//! ## Sphere Parameterization
//!
//! Latitude runs over `[−π/2, π/2]` in `stacks` bands and longitude over
//! `[0, 2π]` in `slices` steps. Each band is the indexed equivalent of a quad
//! strip of `2·(slices+1)` vertices. Normals are the unit position.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::{MeshData, MeshVertex};
use crate::math::Vec2;

/// (normal, u direction, v direction) for each cube face, in emission order.
/// `u × v == normal` so the corner order below is CCW from outside.
const CUBE_FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    // front (+Z)
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    // back (-Z)
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    // top (+Y)
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    // bottom (-Y)
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    // right (+X)
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    // left (-X)
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
];

/// Generate a cube with side length `size`, centered at the origin.
///
/// Returns 24 vertices (4 per face, one constant outward normal each) and 36
/// indices.
pub fn cube(size: f32) -> MeshData {
    let mut mesh = MeshData::with_capacity(24, 36);
    let h = size * 0.5;

    let corners = [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]];
    let uvs = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

    for (normal, u_dir, v_dir) in &CUBE_FACES {
        let base = mesh.vertices.len() as u32;
        let center = [normal[0] * h, normal[1] * h, normal[2] * h];

        for (corner, uv) in corners.iter().zip(uvs) {
            let position = [
                center[0] + (u_dir[0] * corner[0] + v_dir[0] * corner[1]) * h,
                center[1] + (u_dir[1] * corner[0] + v_dir[1] * corner[1]) * h,
                center[2] + (u_dir[2] * corner[0] + v_dir[2] * corner[1]) * h,
            ];
            mesh.vertices.push(MeshVertex::new(position, *normal, uv));
        }

        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    mesh
}

/// Generate a UV sphere of the given radius centered at the origin.
///
/// Produces `(stacks + 1) · (slices + 1)` vertices (the seam column is
/// duplicated for UVs) and `stacks · slices · 6` indices.
pub fn sphere(radius: f32, slices: u32, stacks: u32) -> MeshData {
    let slices = slices.max(3);
    let stacks = stacks.max(2);
    let mut mesh = MeshData::with_capacity(
        ((stacks + 1) * (slices + 1)) as usize,
        (stacks * slices * 6) as usize,
    );

    for i in 0..=stacks {
        let t = i as f32 / stacks as f32;
        let lat = -FRAC_PI_2 + PI * t;
        let (y, ring) = (lat.sin(), lat.cos());

        for j in 0..=slices {
            let s = j as f32 / slices as f32;
            let lng = TAU * s;
            let normal = [lng.cos() * ring, y, lng.sin() * ring];
            let position = [normal[0] * radius, normal[1] * radius, normal[2] * radius];
            mesh.vertices.push(MeshVertex::new(position, normal, [s, 1.0 - t]));
        }
    }

    let row = slices + 1;
    for i in 0..stacks {
        for j in 0..slices {
            let current = i * row + j;
            let above = current + row;
            mesh.indices.extend_from_slice(&[current, above, current + 1]);
            mesh.indices.extend_from_slice(&[current + 1, above, above + 1]);
        }
    }

    mesh
}

/// Generate a unit plane on the XZ plane (normal +Y), subdivided into a
/// `subdivisions_w × subdivisions_d` grid.
pub fn plane(subdivisions_w: u32, subdivisions_d: u32) -> MeshData {
    let sw = subdivisions_w.max(1);
    let sd = subdivisions_d.max(1);
    let mut mesh = MeshData::with_capacity(((sw + 1) * (sd + 1)) as usize, (sw * sd * 6) as usize);

    for j in 0..=sd {
        let v = j as f32 / sd as f32;
        for i in 0..=sw {
            let u = i as f32 / sw as f32;
            mesh.vertices
                .push(MeshVertex::new([u - 0.5, 0.0, v - 0.5], [0.0, 1.0, 0.0], [u, v]));
        }
    }

    let row = sw + 1;
    for j in 0..sd {
        for i in 0..sw {
            let a = j * row + i;
            let b = a + 1;
            let c = a + row;
            let d = c + 1;
            mesh.indices.extend_from_slice(&[a, c, b, b, c, d]);
        }
    }

    mesh
}

/// Generate a unit rectangle on the XY plane facing +Z.
pub fn rectangle() -> MeshData {
    let h = 0.5;
    let n = [0.0, 0.0, 1.0];
    MeshData::new(
        vec![
            MeshVertex::new([-h, -h, 0.0], n, [0.0, 1.0]),
            MeshVertex::new([h, -h, 0.0], n, [1.0, 1.0]),
            MeshVertex::new([h, h, 0.0], n, [1.0, 0.0]),
            MeshVertex::new([-h, h, 0.0], n, [0.0, 0.0]),
        ],
        vec![0, 1, 2, 0, 2, 3],
    )
}

/// Generate a cylinder centered at the origin, oriented along Y.
///
/// Side quads carry radial normals; the caps are center fans with ±Y normals.
pub fn cylinder(radius: f32, half_height: f32, segments: u32) -> MeshData {
    let seg = segments.max(3);
    let mut mesh = MeshData::with_capacity(
        ((seg + 1) * 2 + (seg + 1) * 2) as usize,
        (seg * 12) as usize,
    );

    // ── Side ──
    for i in 0..=seg {
        let u = i as f32 / seg as f32;
        let theta = u * TAU;
        let (sin, cos) = theta.sin_cos();
        mesh.vertices.push(MeshVertex::new(
            [cos * radius, half_height, sin * radius],
            [cos, 0.0, sin],
            [u, 0.0],
        ));
        mesh.vertices.push(MeshVertex::new(
            [cos * radius, -half_height, sin * radius],
            [cos, 0.0, sin],
            [u, 1.0],
        ));
    }
    for i in 0..seg {
        let top0 = i * 2;
        let bot0 = top0 + 1;
        let top1 = top0 + 2;
        let bot1 = top0 + 3;
        mesh.indices
            .extend_from_slice(&[top0, top1, bot0, top1, bot1, bot0]);
    }

    // ── Caps ──
    for (y, ny) in [(half_height, 1.0), (-half_height, -1.0)] {
        let center = mesh.vertices.len() as u32;
        mesh.vertices
            .push(MeshVertex::new([0.0, y, 0.0], [0.0, ny, 0.0], [0.5, 0.5]));
        for i in 0..seg {
            let theta = i as f32 / seg as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            mesh.vertices.push(MeshVertex::new(
                [cos * radius, y, sin * radius],
                [0.0, ny, 0.0],
                [0.5 + cos * 0.5, 0.5 + sin * 0.5],
            ));
        }
        for i in 0..seg {
            let curr = center + 1 + i;
            let next = center + 1 + (i + 1) % seg;
            if ny > 0.0 {
                mesh.indices.extend_from_slice(&[center, next, curr]);
            } else {
                mesh.indices.extend_from_slice(&[center, curr, next]);
            }
        }
    }

    mesh
}

/// One tile of a checkerboard grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckerTile {
    pub i: u32,
    pub j: u32,
    /// Minimum (x, z) corner.
    pub min: Vec2,
    /// Tile extent along x and z.
    pub size: Vec2,
    /// `(i + j)` is even.
    pub light: bool,
}

/// Enumerate the tiles of an `divisions × divisions` checkerboard spanning
/// `[min_x, max_x] × [min_z, max_z]`.
pub fn checker_tiles(
    min_x: f32,
    max_x: f32,
    min_z: f32,
    max_z: f32,
    divisions: u32,
) -> impl Iterator<Item = CheckerTile> {
    let n = divisions.max(1);
    let size = Vec2::new((max_x - min_x) / n as f32, (max_z - min_z) / n as f32);
    (0..n).flat_map(move |i| {
        (0..n).map(move |j| CheckerTile {
            i,
            j,
            min: Vec2::new(min_x + i as f32 * size.x, min_z + j as f32 * size.y),
            size,
            light: (i + j) % 2 == 0,
        })
    })
}

/// A checkerboard ground grid split into its two shade batches.
///
/// Materials are render state, so each batch is drawn with its own material
/// (see [`palette::GROUND_LIGHT`](crate::material::palette::GROUND_LIGHT)).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroundGrid {
    pub light: MeshData,
    pub dark: MeshData,
}

impl GroundGrid {
    pub fn tile_count(&self) -> usize {
        (self.light.vertices.len() + self.dark.vertices.len()) / 4
    }
}

/// Generate a flat checkerboard at height `y`; every quad faces up.
pub fn ground_grid(min_x: f32, max_x: f32, y: f32, min_z: f32, max_z: f32, divisions: u32) -> GroundGrid {
    let mut grid = GroundGrid::default();
    let up = [0.0, 1.0, 0.0];

    for tile in checker_tiles(min_x, max_x, min_z, max_z, divisions) {
        let batch = if tile.light { &mut grid.light } else { &mut grid.dark };
        let base = batch.vertices.len() as u32;
        let (x0, z0) = (tile.min.x, tile.min.y);
        let (x1, z1) = (x0 + tile.size.x, z0 + tile.size.y);
        batch.vertices.extend_from_slice(&[
            MeshVertex::new([x0, y, z0], up, [0.0, 0.0]),
            MeshVertex::new([x1, y, z0], up, [1.0, 0.0]),
            MeshVertex::new([x1, y, z1], up, [1.0, 1.0]),
            MeshVertex::new([x0, y, z1], up, [0.0, 1.0]),
        ]);
        // (x0,z0) -> (x0,z1) -> (x1,z1) is CCW seen from +Y.
        batch
            .indices
            .extend_from_slice(&[base, base + 3, base + 2, base, base + 2, base + 1]);
    }

    grid
}
