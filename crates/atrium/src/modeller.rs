//! # Modeller — Primitive Shape Gallery
//!
//! A tiny scene description language: place built-in primitives with a
//! position, Euler rotation (degrees), scale and color, then turn the list
//! into a frame. Model matrices are `T · Rx · Ry · Rz · S`.
//!
//! The module also hosts the wave-surface demo parameters, the other
//! animated scene that orbits a camera around the origin.

use serde::{Deserialize, Serialize};

use crate::camera::Viewport;
use crate::lighting::{LightTerms, PointLight};
use crate::material::{Color, Material};
use crate::math::{Mat4, Transform, Vec3};
use crate::mesh::{height_field, wave, MeshData, Primitive};
use crate::scene::{DrawCommand, Frame, SceneBuilder, ShapeCommand};

pub const DEFAULT_COLOR: Color = Color::gray(0.7);
pub const CLEAR_COLOR: [f32; 4] = [0.1, 0.1, 0.15, 1.0];
pub const LIGHT_POSITION: Vec3 = Vec3::new(5.0, 8.0, 5.0);
/// Shader-style constant exponent shared by every object.
pub const SHININESS: f32 = 32.0;

pub const ORBIT_RADIUS: f32 = 10.0;
pub const ORBIT_HEIGHT: f32 = 4.0;
pub const ORBIT_SPEED: f32 = 0.3;

/// One placed primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Object3d {
    pub primitive: Primitive,
    pub position: Vec3,
    /// Euler angles in degrees, applied X then Y then Z.
    pub rotation: Vec3,
    pub scale: Vec3,
    pub color: Color,
}

impl Object3d {
    pub fn new(primitive: Primitive) -> Self {
        Self {
            primitive,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            color: DEFAULT_COLOR,
        }
    }

    pub fn cube() -> Self {
        Self::new(Primitive::Cube)
    }

    pub fn sphere() -> Self {
        Self::new(Primitive::Sphere)
    }

    pub fn cylinder() -> Self {
        Self::new(Primitive::Cylinder)
    }

    pub fn plane() -> Self {
        Self::new(Primitive::Plane)
    }

    pub fn rectangle() -> Self {
        Self::new(Primitive::Rectangle)
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }

    pub fn scaled(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = Vec3::new(x, y, z);
        self
    }

    pub fn uniform(self, s: f32) -> Self {
        self.scaled(s, s, s)
    }

    pub fn colored(mut self, r: f32, g: f32, b: f32) -> Self {
        self.color = Color::new(r, g, b);
        self
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position)
            .with_euler_degrees(self.rotation)
            .with_scale(self.scale)
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.transform().matrix()
    }

    /// Flat-colored material with full ambient response, as the gallery
    /// shader multiplies every term by the object color.
    pub fn material(&self) -> Material {
        Material::new(self.color).with_shininess(SHININESS).with_ambient_scale(1.0)
    }

    pub fn command(&self) -> ShapeCommand {
        ShapeCommand {
            primitive: self.primitive,
            model: self.model_matrix(),
            material: self.material(),
        }
    }
}

/// An ordered set of objects; draw order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeList {
    pub objects: Vec<Object3d>,
}

impl ShapeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object and return its index.
    pub fn add(&mut self, object: Object3d) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Object3d> {
        self.objects.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn commands(&self) -> impl Iterator<Item = ShapeCommand> + '_ {
        self.objects.iter().map(Object3d::command)
    }

    /// Unit meshes the list references, deduplicated, in first-use order.
    pub fn primitives(&self) -> Vec<Primitive> {
        let mut out = Vec::new();
        for o in &self.objects {
            if !out.contains(&o.primitive) {
                out.push(o.primitive);
            }
        }
        out
    }

    /// The gallery's nine objects.
    pub fn demo() -> Self {
        let mut list = Self::new();
        list.add(Object3d::plane().at(0.0, -2.0, 0.0).scaled(10.0, 1.0, 10.0).colored(0.9, 0.9, 0.9));
        list.add(Object3d::cube().at(-3.0, 0.0, 0.0).uniform(1.5).colored(1.0, 0.2, 0.2));
        list.add(Object3d::sphere().uniform(1.2).colored(0.2, 1.0, 0.2));
        list.add(Object3d::cylinder().at(3.0, 0.0, 0.0).colored(0.2, 0.4, 1.0));
        list.add(Object3d::cube().at(0.0, 2.5, 0.0).uniform(0.7).colored(1.0, 1.0, 0.2));
        list.add(Object3d::sphere().at(-2.0, 0.0, -3.0).colored(1.0, 0.5, 0.0));
        list.add(Object3d::sphere().at(2.0, 0.0, -3.0).colored(0.5, 0.0, 1.0));
        list.add(
            Object3d::rectangle()
                .at(-4.0, 1.0, -2.0)
                .rotated(0.0, 45.0, 0.0)
                .scaled(1.5, 2.0, 1.0)
                .colored(1.0, 0.5, 0.8),
        );
        list.add(
            Object3d::cylinder()
                .at(4.0, -1.0, -1.0)
                .rotated(0.0, 0.0, 90.0)
                .scaled(0.3, 2.0, 0.3)
                .colored(0.6, 0.4, 0.2),
        );
        list
    }

    /// Apply the demo animation at time `t` seconds: the red cube spins,
    /// the green sphere bobs, the yellow cube tumbles.
    ///
    /// Indices refer to [`ShapeList::demo`]; a shorter list is left alone
    /// where an index is missing.
    pub fn animate(&mut self, t: f32) {
        if let Some(cube) = self.get_mut(1) {
            cube.rotation.y = t * 30.0;
        }
        if let Some(ball) = self.get_mut(2) {
            ball.position.y = (t * 2.0).sin() * 0.5;
        }
        if let Some(small) = self.get_mut(4) {
            small.rotation.x = t * 45.0;
            small.rotation.z = t * 60.0;
        }
    }

    /// Assemble a frame with the orbit camera at time `t`.
    pub fn frame(&self, t: f32, viewport: &Viewport) -> Frame {
        let eye = orbit_eye(t);
        SceneBuilder::new("modeller")
            .pass("clear", |out| out.push(DrawCommand::Clear { color: CLEAR_COLOR }))
            .pass("view", |out| {
                out.push(DrawCommand::SetView {
                    view: Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y),
                    projection: viewport.projection(),
                    eye,
                })
            })
            .pass("lighting", |out| out.push(DrawCommand::SetPointLight(gallery_light())))
            .pass("shapes", |out| {
                for cmd in self.commands() {
                    out.push(DrawCommand::Shape(cmd));
                }
            })
            .pass("present", |out| out.push(DrawCommand::Present))
            .build()
    }
}

/// Camera position on the orbit at time `t`.
pub fn orbit_eye(t: f32) -> Vec3 {
    let a = t * ORBIT_SPEED;
    Vec3::new(a.sin() * ORBIT_RADIUS, ORBIT_HEIGHT, a.cos() * ORBIT_RADIUS)
}

/// White point light: 0.3 ambient, full diffuse, half-strength specular.
pub fn gallery_light() -> PointLight {
    PointLight {
        position: LIGHT_POSITION,
        terms: LightTerms {
            ambient: Color::gray(0.3),
            diffuse: Color::WHITE,
            specular: Color::gray(0.5),
            specular_boost: 1.0,
        },
    }
}

// ── Wave surface ──

/// The `sin x · cos z` surface demo: a height field lit by one directional
/// light and tinted by height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveSurface {
    pub grid_n: u32,
    pub size: f32,
    pub fov_y_degrees: f32,
    pub orbit_radius: f32,
    pub orbit_height: f32,
    pub orbit_speed: f32,
    /// Direction toward the light.
    pub light_dir: Vec3,
    pub ambient: f32,
    pub low_color: Color,
    pub high_color: Color,
    pub clear_color: [f32; 4],
}

impl Default for WaveSurface {
    fn default() -> Self {
        Self {
            grid_n: 150,
            size: 10.0,
            fov_y_degrees: 55.0,
            orbit_radius: 14.0,
            orbit_height: 6.0,
            orbit_speed: 0.35,
            light_dir: Vec3::new(0.6, 1.0, 0.4),
            ambient: 0.2,
            low_color: Color::new(0.1, 0.3, 0.7),
            high_color: Color::new(0.1, 0.8, 0.2),
            clear_color: [0.08, 0.08, 0.10, 1.0],
        }
    }
}

impl WaveSurface {
    pub fn mesh(&self) -> MeshData {
        height_field(self.grid_n, self.size, wave)
    }

    pub fn eye(&self, t: f32) -> Vec3 {
        let a = t * self.orbit_speed;
        Vec3::new(a.cos() * self.orbit_radius, self.orbit_height, a.sin() * self.orbit_radius)
    }

    pub fn view_projection(&self, t: f32, viewport: &Viewport) -> Mat4 {
        let proj = Mat4::perspective_rh_gl(
            self.fov_y_degrees.to_radians(),
            viewport.aspect(),
            Viewport::NEAR,
            Viewport::FAR,
        );
        proj * Mat4::look_at_rh(self.eye(t), Vec3::ZERO, Vec3::Y)
    }

    /// Blend from low to high color as `h` goes from -1 to 1.
    pub fn height_color(&self, h: f32) -> Color {
        let k = (h * 0.5 + 0.5).clamp(0.0, 1.0);
        self.low_color.scaled(1.0 - k).add(self.high_color.scaled(k))
    }

    /// Final color at a surface point: height tint times
    /// `ambient + (1 − ambient) · max(N·L, 0)`.
    pub fn shade(&self, height: f32, normal: Vec3) -> Color {
        let n_dot_l = normal.normalize_or_zero().dot(self.light_dir.normalize_or_zero()).max(0.0);
        self.height_color(height).scaled(self.ambient + (1.0 - self.ambient) * n_dot_l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn demo_has_nine_objects() {
        let list = ShapeList::demo();
        assert_eq!(list.len(), 9);
        assert_eq!(list.objects[0].primitive, Primitive::Plane);
        assert_eq!(list.objects[8].primitive, Primitive::Cylinder);
        assert_eq!(
            list.primitives(),
            [Primitive::Plane, Primitive::Cube, Primitive::Sphere, Primitive::Cylinder, Primitive::Rectangle]
        );
    }

    #[test]
    fn defaults_are_neutral() {
        let o = Object3d::cube();
        assert_eq!(o.color, DEFAULT_COLOR);
        assert_eq!(o.model_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn model_matrix_scales_before_rotating() {
        let log = ShapeList::demo().objects[8];
        // Local +Y (the long axis, scaled 2) ends up along -X after 90° about Z.
        let tip = log.model_matrix().transform_point3(Vec3::new(0.0, 0.5, 0.0));
        assert!((tip - Vec3::new(3.0, -1.0, -1.0)).length() < EPS);
    }

    #[test]
    fn animation_moves_the_right_objects() {
        let mut list = ShapeList::demo();
        let before = list.clone();
        list.animate(1.0);
        assert_eq!(list.objects[1].rotation.y, 30.0);
        assert!((list.objects[2].position.y - 2.0f32.sin() * 0.5).abs() < EPS);
        assert_eq!(list.objects[4].rotation, Vec3::new(45.0, 0.0, 60.0));
        assert_eq!(list.objects[0], before.objects[0]);
        assert_eq!(list.objects[8], before.objects[8]);
    }

    #[test]
    fn animate_tolerates_short_lists() {
        let mut list = ShapeList::new();
        list.add(Object3d::cube());
        list.animate(2.0);
        assert_eq!(list.objects[0].rotation, Vec3::ZERO);
    }

    #[test]
    fn orbit_stays_on_circle() {
        for t in [0.0, 1.0, 7.5] {
            let eye = orbit_eye(t);
            assert!((Vec3::new(eye.x, 0.0, eye.z).length() - ORBIT_RADIUS).abs() < 1e-4);
            assert_eq!(eye.y, ORBIT_HEIGHT);
        }
        assert!((orbit_eye(0.0) - Vec3::new(0.0, 4.0, 10.0)).length() < EPS);
    }

    #[test]
    fn frame_has_one_shape_per_object() {
        let frame = ShapeList::demo().frame(0.0, &Viewport::new(800, 600));
        assert_eq!(frame.commands.pass_names(), ["clear", "view", "lighting", "shapes", "present"]);
        let shapes = frame.commands.pass("shapes").unwrap();
        assert_eq!(shapes.len(), 9);
        assert!(shapes.iter().all(|c| c.kind() == "shape"));
    }

    #[test]
    fn wave_colors_track_height() {
        let w = WaveSurface::default();
        assert_eq!(w.height_color(-1.0), w.low_color);
        assert_eq!(w.height_color(5.0), w.high_color);
        let flat = w.shade(0.0, Vec3::NEG_Y);
        let mid = w.height_color(0.0).scaled(0.2);
        assert!((flat.g - mid.g).abs() < EPS);
    }

    #[test]
    fn wave_mesh_matches_grid() {
        let w = WaveSurface { grid_n: 10, ..Default::default() };
        let mesh = w.mesh();
        assert_eq!(mesh.vertices.len(), 100);
        assert_eq!(mesh.indices.len(), 81 * 6);
    }
}
