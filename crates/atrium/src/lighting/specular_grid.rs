//! # Specular Grid — Shininess Comparison Scene
//!
//! Eight identical terracotta cubes in a 2×4 grid, each with a different
//! specular exponent, plus an optional ninth "query" cube below the grid
//! whose shininess arrives from the console prompt.
//!
//! ```text
//!   col:    0      1      2      3
//!   row 0 [ 2 ]  [ 4 ]  [ 8 ]  [ 16 ]
//!   row 1 [32 ]  [64 ]  [128]  [256 ]
//!                 [query]
//! ```
//!
//! Every cube gets its own point light, placed so the mirror reflection of
//! the view ray off the cube's front face hits the light. The highlight then
//! always sits at the face center regardless of where the camera moves, and
//! only its size varies with shininess.

use super::{LightTerms, PointLight, reflect};
use crate::camera::{CameraPose, CameraState, Viewport};
use crate::material::{palette, Color, Material};
use crate::math::{Quat, Transform, Vec3};
use crate::scene::{DrawCommand, Frame, LabelCommand, SceneBuilder};

pub const ROWS: usize = 2;
pub const COLS: usize = 4;
pub const CUBE_SIZE: f32 = 1.35;
pub const COL_SPACING: f32 = 3.10;
pub const ROW_SPACING: f32 = 3.30;
pub const CUBE_YAW_DEGREES: f32 = -24.0;
pub const CUBE_PITCH_DEGREES: f32 = 7.0;

/// Shininess printed under each cube.
pub const SHININESS_LABELS: [[u32; COLS]; ROWS] = [[2, 4, 8, 16], [32, 64, 128, 256]];

/// Distance from a cube's front-face center to its light.
pub const LIGHT_DISTANCE: f32 = 4.0;
pub const SPECULAR_BOOST: f32 = 0.5;
pub const AMBIENT_SCALE: f32 = 0.16;

pub const CLEAR_COLOR: [f32; 4] = [0.15, 0.15, 0.15, 1.0];
pub const LABEL_COLOR: Color = Color::gray(0.93);
pub const QUERY_LABEL_COLOR: Color = Color::new(1.0, 0.85, 0.30);

/// Camera pose the demo starts from.
pub const HOME: CameraPose = CameraPose::new(Vec3::new(0.60, 0.35, 13.50), -1.48, -2.54);

/// World X of a column's cube centers.
pub fn column_x(col: usize) -> f32 {
    (col as f32 - (COLS as f32 - 1.0) * 0.5) * COL_SPACING
}

/// World Y of a row's cube centers; row 0 is on top.
pub fn row_y(row: usize) -> f32 {
    ((ROWS as f32 - 1.0) * 0.5 - row as f32) * ROW_SPACING
}

/// Exponent actually used for a label. Labels stay exact, but the two largest
/// are capped so their hotspot stays visible at the demo's viewing distance.
pub fn effective_shininess(label: u32) -> f32 {
    match label {
        l if l >= 256 => 256.0,
        l if l >= 128 => 128.0,
        l => l as f32,
    }
}

/// Shared cube orientation: yaw about Y applied after pitch about X.
pub fn cube_rotation() -> Quat {
    Quat::from_rotation_y(CUBE_YAW_DEGREES.to_radians()) * Quat::from_rotation_x(CUBE_PITCH_DEGREES.to_radians())
}

/// World-space normal of every cube's front (+Z) face.
pub fn front_normal() -> Vec3 {
    (cube_rotation() * Vec3::Z).normalize()
}

/// Direction from `surface` to a light whose reflection reaches `eye`.
///
/// The normal is flipped toward the eye first so a lobe is always solvable.
pub fn aligned_light_dir(surface: Vec3, normal: Vec3, eye: Vec3) -> Vec3 {
    let v = (eye - surface).normalize_or_zero();
    let mut n = normal.normalize_or_zero();
    if n.dot(v) < 0.0 {
        n = -n;
    }
    reflect(v, n).normalize_or_zero()
}

pub fn light_terms() -> LightTerms {
    LightTerms {
        ambient: Color::gray(0.08),
        diffuse: Color::gray(0.88),
        specular: Color::WHITE,
        specular_boost: SPECULAR_BOOST,
    }
}

pub fn cube_material(shininess: f32) -> Material {
    Material::new(palette::TERRACOTTA)
        .with_shininess(shininess)
        .with_ambient_scale(AMBIENT_SCALE)
}

/// `"Query: 64"` for whole numbers, `"Query: 64.5"` otherwise.
pub fn query_label(shininess: f32) -> String {
    if shininess == shininess.floor() {
        format!("Query: {}", shininess as i64)
    } else {
        format!("Query: {shininess:.1}")
    }
}

/// One cube of the comparison scene with its dedicated light.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecularCube {
    pub label: String,
    pub center: Vec3,
    pub shininess: f32,
    pub transform: Transform,
    pub light: PointLight,
    /// Where the label text is anchored, below the cube.
    pub label_anchor: Vec3,
    pub is_query: bool,
}

impl SpecularCube {
    fn new(center: Vec3, shininess: f32, label: String, eye: Vec3, is_query: bool) -> Self {
        let normal = front_normal();
        let face_center = center + normal * (CUBE_SIZE * 0.5);
        let light_dir = aligned_light_dir(face_center, normal, eye);
        Self {
            label,
            center,
            shininess,
            transform: Transform {
                translation: center,
                rotation: cube_rotation(),
                scale: Vec3::splat(CUBE_SIZE),
            },
            light: PointLight {
                position: face_center + light_dir * LIGHT_DISTANCE,
                terms: light_terms(),
            },
            label_anchor: center - Vec3::Y * (CUBE_SIZE * 0.80 + 0.45),
            is_query,
        }
    }

    pub fn face_center(&self) -> Vec3 {
        self.center + front_normal() * (CUBE_SIZE * 0.5)
    }
}

/// The comparison scene. Only the query value changes at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpecularGrid {
    /// Shininess of the ninth cube; `None` until the prompt delivers one.
    pub query_shininess: Option<f32>,
}

impl SpecularGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, shininess: Option<f32>) -> Self {
        self.query_shininess = shininess.filter(|s| *s > 0.0);
        self
    }

    /// Center of the query cube, one row spacing below the last row.
    pub fn query_center() -> Vec3 {
        Vec3::new(0.0, row_y(ROWS - 1) - ROW_SPACING, 0.0)
    }

    /// All cubes in draw order, lights solved for `eye`.
    pub fn cubes(&self, eye: Vec3) -> Vec<SpecularCube> {
        let mut cubes = Vec::with_capacity(ROWS * COLS + 1);
        for (row, labels) in SHININESS_LABELS.iter().enumerate() {
            for (col, &label) in labels.iter().enumerate() {
                let center = Vec3::new(column_x(col), row_y(row), 0.0);
                cubes.push(SpecularCube::new(center, effective_shininess(label), label.to_string(), eye, false));
            }
        }
        if let Some(q) = self.query_shininess {
            cubes.push(SpecularCube::new(Self::query_center(), q, query_label(q), eye, true));
        }
        cubes
    }

    /// Assemble one frame for the given camera.
    pub fn frame(&self, camera: &CameraState, viewport: &Viewport) -> Frame {
        let eye = camera.position();
        let cubes = self.cubes(eye);
        SceneBuilder::new("specular")
            .pass("clear", |out| out.push(DrawCommand::Clear { color: CLEAR_COLOR }))
            .pass("view", |out| {
                out.push(DrawCommand::SetView {
                    view: camera.view_matrix(),
                    projection: viewport.projection(),
                    eye,
                })
            })
            .pass("cubes", |out| {
                for cube in &cubes {
                    out.push(DrawCommand::SetPointLight(cube.light));
                    out.cuboid(cube.transform, cube_material(cube.shininess));
                }
            })
            .pass("labels", |out| {
                for cube in &cubes {
                    out.push(DrawCommand::Label(LabelCommand {
                        anchor: cube.label_anchor,
                        text: cube.label.clone(),
                        color: if cube.is_query { QUERY_LABEL_COLOR } else { LABEL_COLOR },
                    }));
                }
            })
            .pass("present", |out| out.push(DrawCommand::Present))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lighting::{phong, PhongMaterial};
    use crate::scene::command::cuboids;

    const EPS: f32 = 1e-4;

    #[test]
    fn grid_positions() {
        assert!((column_x(0) + 4.65).abs() < EPS);
        assert!((column_x(3) - 4.65).abs() < EPS);
        assert!((row_y(0) - 1.65).abs() < EPS);
        assert!((row_y(1) + 1.65).abs() < EPS);
        assert!((SpecularGrid::query_center().y + 4.95).abs() < EPS);
    }

    #[test]
    fn eight_cubes_without_query() {
        let cubes = SpecularGrid::new().cubes(HOME.position);
        assert_eq!(cubes.len(), 8);
        let labels: Vec<_> = cubes.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["2", "4", "8", "16", "32", "64", "128", "256"]);
        assert!(cubes.iter().all(|c| !c.is_query));
    }

    #[test]
    fn query_cube_appears_below_grid() {
        let cubes = SpecularGrid::new().with_query(Some(64.5)).cubes(HOME.position);
        assert_eq!(cubes.len(), 9);
        let q = &cubes[8];
        assert!(q.is_query);
        assert_eq!(q.label, "Query: 64.5");
        assert_eq!(q.center, SpecularGrid::query_center());
        assert_eq!(SpecularGrid::new().with_query(Some(0.0)).query_shininess, None);
    }

    #[test]
    fn large_labels_are_capped() {
        assert_eq!(effective_shininess(2), 2.0);
        assert_eq!(effective_shininess(128), 128.0);
        assert_eq!(effective_shininess(256), 256.0);
        assert_eq!(effective_shininess(1000), 256.0);
    }

    #[test]
    fn query_labels() {
        assert_eq!(query_label(64.0), "Query: 64");
        assert_eq!(query_label(1000.0), "Query: 1000");
        assert_eq!(query_label(12.34), "Query: 12.3");
    }

    #[test]
    fn front_normal_is_rotated_z() {
        let n = front_normal();
        assert!((n.length() - 1.0).abs() < EPS);
        // yaw -24 turns the face toward -X, pitch 7 tips it down
        assert!(n.x < 0.0 && n.y < 0.0 && n.z > 0.0);
    }

    #[test]
    fn light_reflects_into_eye_at_face_center() {
        let eye = HOME.position;
        for cube in SpecularGrid::new().cubes(eye) {
            let face = cube.face_center();
            let to_light = cube.light.to_light(face);
            let r = reflect(to_light, front_normal());
            let to_eye = (eye - face).normalize();
            assert!((r - to_eye).length() < 1e-3, "cube {}", cube.label);
            assert!((cube.light.position.distance(face) - LIGHT_DISTANCE).abs() < 1e-3);
        }
    }

    #[test]
    fn highlight_peaks_at_face_center() {
        let eye = HOME.position;
        let cube = &SpecularGrid::new().cubes(eye)[0];
        let face = cube.face_center();
        let m = PhongMaterial::from(&cube_material(cube.shininess));
        let lit = phong(front_normal(), cube.light.to_light(face), eye - face, &m, &cube.light.terms);
        // ambient + diffuse + full boosted specular, saturated
        assert!(lit.r >= 0.5);
        assert!(lit.b > m.diffuse.b * 0.88 * front_normal().dot(cube.light.to_light(face)));
    }

    #[test]
    fn frame_emits_light_before_each_cube() {
        let cam = CameraState::new(HOME);
        let frame = SpecularGrid::new().with_query(Some(32.0)).frame(&cam, &Viewport::new(1200, 700));
        assert_eq!(frame.commands.pass_names(), vec!["clear", "view", "cubes", "labels", "present"]);
        let cubes_pass = frame.commands.pass("cubes").unwrap();
        assert_eq!(cubes_pass.len(), 18);
        for pair in cubes_pass.chunks(2) {
            assert!(matches!(pair[0], DrawCommand::SetPointLight(_)));
            assert!(matches!(pair[1], DrawCommand::Cuboid(_)));
        }
        let shininess: Vec<f32> = cuboids(cubes_pass).map(|c| c.material.shininess).collect();
        assert_eq!(shininess, vec![2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0, 32.0]);
        assert!(cuboids(cubes_pass).all(|c| (c.material.ambient_scale - AMBIENT_SCALE).abs() < 1e-6));
    }
}
