//! Math types and glam re-exports.
//!
//! We re-export [glam](https://docs.rs/glam) types so users don't need to
//! depend on it directly. [`Transform`] places unit primitives in the world;
//! [`UvRect`] selects the texture range a quad samples.

use serde::{Deserialize, Serialize};

pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

/// A 3D transform: position, rotation, and scale.
///
/// Fixtures are built from unit cubes, so almost every transform in a room
/// scene is a translation plus a non-uniform scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    /// Identity transform (origin, no rotation, uniform scale of 1).
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Create a transform at the given position.
    pub fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self::from_translation(Vec3::new(x, y, z))
    }

    /// Create a transform at the given position.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// A unit cube scaled to `size` and centered on `center`.
    pub fn boxed(center: Vec3, size: Vec3) -> Self {
        Self::from_translation(center).with_scale(size)
    }

    /// Return a copy with a per-axis scale applied.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Return a copy with a uniform scale applied.
    pub fn with_uniform_scale(self, scale: f32) -> Self {
        self.with_scale(Vec3::splat(scale))
    }

    /// Return a copy rotated by Euler angles in degrees, applied X then Y then Z
    /// in the local frame (`R = Rx * Ry * Rz`).
    pub fn with_euler_degrees(mut self, degrees: Vec3) -> Self {
        self.rotation = Quat::from_rotation_x(degrees.x.to_radians())
            * Quat::from_rotation_y(degrees.y.to_radians())
            * Quat::from_rotation_z(degrees.z.to_radians());
        self
    }

    /// Compute the 4x4 model matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// World-space minimum corner of a transformed unit cube (rotation ignored).
    pub fn box_min(&self) -> Vec3 {
        self.translation - self.scale.abs() * 0.5
    }

    /// World-space maximum corner of a transformed unit cube (rotation ignored).
    pub fn box_max(&self) -> Vec3 {
        self.translation + self.scale.abs() * 0.5
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A rectangle in texture space.
///
/// Unlike a sprite-sheet rect, coordinates here are not limited to `[0, 1]`:
/// textures repeat, and overlays tile one texture unit per world unit, so a
/// 15-unit-wide pane samples `u` in `[0, 15]`. `min.y` is the V at the top edge
/// of the quad and `max.y` the V at its bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl UvRect {
    /// The full texture (0,0) to (1,1).
    pub const FULL: Self = Self {
        min: Vec2::ZERO,
        max: Vec2::ONE,
    };

    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Corner UVs in quad order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.min.x, self.min.y),
            Vec2::new(self.max.x, self.min.y),
            Vec2::new(self.max.x, self.max.y),
            Vec2::new(self.min.x, self.max.y),
        ]
    }
}

impl Default for UvRect {
    fn default() -> Self {
        Self::FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxed_transform_reports_extents() {
        let t = Transform::boxed(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(t.box_min(), Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(t.box_max(), Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn euler_rotation_about_y_turns_forward_to_right() {
        let t = Transform::IDENTITY.with_euler_degrees(Vec3::new(0.0, 90.0, 0.0));
        let v = t.matrix().transform_vector3(Vec3::Z);
        assert!((v - Vec3::X).length() < 1e-5, "got {v:?}");
    }

    #[test]
    fn uv_corners_follow_quad_order() {
        let uv = UvRect::new(Vec2::new(0.0, 0.25), Vec2::new(2.0, 0.75));
        let c = uv.corners();
        assert_eq!(c[0], Vec2::new(0.0, 0.25));
        assert_eq!(c[2], Vec2::new(2.0, 0.75));
    }
}
