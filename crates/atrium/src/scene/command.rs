//! # Draw Commands
//!
//! The scene is described as a flat, ordered list of [`DrawCommand`]s. Each
//! command carries everything a renderer needs (world transform, material,
//! blend state) so no graphics context is required to build or inspect one.
//!
//! ```text
//!  fixtures / layout                 CommandList
//!  ┌──────────────┐   push    ┌──────────────────────────────┐
//!  │ WindowFrame  │ ────────▶ │ pass "frames"   [0 .. 42)    │
//!  │ CurtainSeg.  │ ────────▶ │ pass "curtains" [42 .. 67)   │
//!  │ ...          │           │ ...                          │
//!  └──────────────┘           └──────────────────────────────┘
//! ```
//!
//! Passes are named ranges over the command vector. They exist for
//! inspection and tests; a renderer simply iterates the commands in order.

use serde::Serialize;

use crate::lighting::{DirectionalLight, PointLight};
use crate::material::{Color, Material};
use crate::math::{Mat4, Transform, UvRect, Vec2, Vec3};
use crate::mesh::{self, GroundGrid, MeshData, MeshVertex, Primitive};
use crate::overlay::ScreenOverlay;

/// Textures a command may sample. Resolved to real images by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TextureSlot {
    /// The decoded window texture file.
    Window,
    /// The procedural carpet grain.
    Carpet,
}

/// How a command's fragments combine with the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Blend {
    Opaque,
    /// Source-alpha blending with the given constant alpha.
    Alpha(f32),
}

/// A single planar quad.
///
/// Corners are top-left, top-right, bottom-right, bottom-left as seen from
/// the side `normal` points to; [`QuadCommand::INDICES`] triangulates them
/// counter-clockwise from that side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuadCommand {
    pub corners: [Vec3; 4],
    pub normal: Vec3,
    pub uv: UvRect,
    pub material: Material,
    pub texture: Option<TextureSlot>,
    pub blend: Blend,
    pub depth_write: bool,
    pub lit: bool,
}

impl QuadCommand {
    pub const INDICES: [u32; 6] = [0, 2, 1, 0, 3, 2];

    /// An upright quad in the plane `z`, facing +Z, spanning `min..max` in XY.
    pub fn upright(min: Vec2, max: Vec2, z: f32, uv: UvRect, material: Material) -> Self {
        Self {
            corners: [
                Vec3::new(min.x, max.y, z),
                Vec3::new(max.x, max.y, z),
                Vec3::new(max.x, min.y, z),
                Vec3::new(min.x, min.y, z),
            ],
            normal: Vec3::Z,
            uv,
            material,
            texture: None,
            blend: Blend::Opaque,
            depth_write: true,
            lit: true,
        }
    }

    /// A horizontal quad at height `y`, facing +Y. `near_z` is the edge
    /// mapped to the top of the UV rect.
    pub fn horizontal(min_x: f32, max_x: f32, y: f32, near_z: f32, far_z: f32, uv: UvRect, material: Material) -> Self {
        Self {
            corners: [
                Vec3::new(min_x, y, near_z),
                Vec3::new(max_x, y, near_z),
                Vec3::new(max_x, y, far_z),
                Vec3::new(min_x, y, far_z),
            ],
            normal: Vec3::Y,
            uv,
            material,
            texture: None,
            blend: Blend::Opaque,
            depth_write: true,
            lit: true,
        }
    }

    /// Sample the given texture (modulated by the material color).
    pub fn textured(mut self, slot: TextureSlot) -> Self {
        self.texture = Some(slot);
        self
    }

    /// Alpha-blend with a constant alpha. Depth test stays on, depth writes
    /// are disabled.
    pub fn blended(mut self, alpha: f32) -> Self {
        self.blend = Blend::Alpha(alpha);
        self.depth_write = false;
        self
    }

    /// Skip lighting; the color is used as-is.
    pub fn unlit(mut self) -> Self {
        self.lit = false;
        self
    }

    pub fn center(&self) -> Vec3 {
        self.corners.iter().copied().sum::<Vec3>() / 4.0
    }

    /// Extent along the top edge and the left edge.
    pub fn size(&self) -> Vec2 {
        Vec2::new(
            self.corners[0].distance(self.corners[1]),
            self.corners[0].distance(self.corners[3]),
        )
    }

    /// World-space mesh for this quad.
    pub fn mesh(&self) -> MeshData {
        let uvs = self.uv.corners();
        let n = self.normal.to_array();
        let vertices = self
            .corners
            .iter()
            .zip(uvs)
            .map(|(p, uv)| MeshVertex::new(p.to_array(), n, uv.to_array()))
            .collect();
        MeshData::new(vertices, Self::INDICES.to_vec())
    }
}

/// A unit cube placed by a transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CuboidCommand {
    pub transform: Transform,
    pub material: Material,
}

/// A UV sphere centered in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SphereCommand {
    pub center: Vec3,
    pub radius: f32,
    pub slices: u32,
    pub stacks: u32,
    pub material: Material,
}

impl SphereCommand {
    pub fn mesh(&self) -> MeshData {
        let mut m = mesh::sphere(self.radius, self.slices, self.stacks);
        for v in &mut m.vertices {
            let p = Vec3::from(v.position) + self.center;
            v.position = p.to_array();
        }
        m
    }
}

/// A checkerboard floor drawn in two material batches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckerGridCommand {
    pub min_x: f32,
    pub max_x: f32,
    pub y: f32,
    pub min_z: f32,
    pub max_z: f32,
    pub divisions: u32,
    pub light: Material,
    pub dark: Material,
}

impl CheckerGridCommand {
    pub fn mesh(&self) -> GroundGrid {
        mesh::ground_grid(self.min_x, self.max_x, self.y, self.min_z, self.max_z, self.divisions)
    }
}

/// A built-in primitive with an arbitrary model matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapeCommand {
    pub primitive: Primitive,
    pub model: Mat4,
    pub material: Material,
}

/// Text anchored at a world position and projected to the screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelCommand {
    pub anchor: Vec3,
    pub text: String,
    pub color: Color,
}

/// One step of a frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear { color: [f32; 4] },
    SetView { view: Mat4, projection: Mat4, eye: Vec3 },
    SetLighting(DirectionalLight),
    SetPointLight(PointLight),
    Cuboid(CuboidCommand),
    Sphere(SphereCommand),
    Quad(QuadCommand),
    CheckerGrid(CheckerGridCommand),
    Shape(ShapeCommand),
    Label(LabelCommand),
    ScreenOverlay(ScreenOverlay),
    Present,
}

impl DrawCommand {
    /// Short name of the variant, used by the inspector.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCommand::Clear { .. } => "clear",
            DrawCommand::SetView { .. } => "view",
            DrawCommand::SetLighting(_) => "lighting",
            DrawCommand::SetPointLight(_) => "point-light",
            DrawCommand::Cuboid(_) => "cuboid",
            DrawCommand::Sphere(_) => "sphere",
            DrawCommand::Quad(_) => "quad",
            DrawCommand::CheckerGrid(_) => "checker-grid",
            DrawCommand::Shape(_) => "shape",
            DrawCommand::Label(_) => "label",
            DrawCommand::ScreenOverlay(_) => "overlay",
            DrawCommand::Present => "present",
        }
    }
}

/// A named, contiguous range of commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pass {
    pub name: String,
    pub start: usize,
    pub end: usize,
}

impl Pass {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Ordered draw commands grouped into named passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
    passes: Vec<Pass>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new named pass; later pushes belong to it.
    pub fn begin_pass(&mut self, name: impl Into<String>) {
        let at = self.commands.len();
        self.passes.push(Pass {
            name: name.into(),
            start: at,
            end: at,
        });
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
        if let Some(pass) = self.passes.last_mut() {
            pass.end = self.commands.len();
        }
    }

    pub fn cuboid(&mut self, transform: Transform, material: Material) {
        self.push(DrawCommand::Cuboid(CuboidCommand { transform, material }));
    }

    pub fn sphere(&mut self, center: Vec3, radius: f32, segments: u32, material: Material) {
        self.push(DrawCommand::Sphere(SphereCommand {
            center,
            radius,
            slices: segments,
            stacks: segments,
            material,
        }));
    }

    pub fn quad(&mut self, quad: QuadCommand) {
        self.push(DrawCommand::Quad(quad));
    }

    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|p| p.name.as_str()).collect()
    }

    /// Commands of the first pass with this name.
    pub fn pass(&self, name: &str) -> Option<&[DrawCommand]> {
        self.passes
            .iter()
            .find(|p| p.name == name)
            .map(|p| &self.commands[p.start..p.end])
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    /// Append another list, keeping its pass names.
    pub fn extend(&mut self, other: CommandList) {
        let base = self.commands.len();
        self.passes.extend(other.passes.into_iter().map(|p| Pass {
            start: p.start + base,
            end: p.end + base,
            ..p
        }));
        self.commands.extend(other.commands);
    }
}

impl<'a> IntoIterator for &'a CommandList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cuboids in a command slice, in order.
pub fn cuboids(commands: &[DrawCommand]) -> impl Iterator<Item = &CuboidCommand> {
    commands.iter().filter_map(|c| match c {
        DrawCommand::Cuboid(b) => Some(b),
        _ => None,
    })
}

/// Quads in a command slice, in order.
pub fn quads(commands: &[DrawCommand]) -> impl Iterator<Item = &QuadCommand> {
    commands.iter().filter_map(|c| match c {
        DrawCommand::Quad(q) => Some(q),
        _ => None,
    })
}

/// Spheres in a command slice, in order.
pub fn spheres(commands: &[DrawCommand]) -> impl Iterator<Item = &SphereCommand> {
    commands.iter().filter_map(|c| match c {
        DrawCommand::Sphere(s) => Some(s),
        _ => None,
    })
}
