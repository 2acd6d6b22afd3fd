//! # Lighting — Light Sources and Phong Shading
//!
//! Lights are plain values carried by draw commands. [`phong`] evaluates the
//! classic ambient + diffuse + specular model on the CPU so that shading
//! behavior (highlight tightness vs. shininess, back-facing cutoff) can be
//! tested without a GPU.
//!
//! ```text
//!          N
//!     L    ▲    R
//!      ╲   │   ╱
//!       ╲  │  ╱        R = 2(N·L)N − L
//!        ╲ │ ╱         spec = max(R·V, 0)^shininess
//!  ───────●───────
//! ```

#[cfg(feature = "specular")]
pub mod specular_grid;

#[cfg(feature = "specular")]
pub use specular_grid::{SpecularCube, SpecularGrid};

use serde::{Deserialize, Serialize};

use crate::material::{Color, Material};
use crate::math::Vec3;

/// Colors a light contributes to each Phong term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightTerms {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    /// Multiplier on the specular term.
    #[serde(default = "one")]
    pub specular_boost: f32,
}

fn one() -> f32 {
    1.0
}

/// A light infinitely far away; only its direction matters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    /// Direction *toward* the light. Need not be normalized.
    pub direction: Vec3,
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

impl DirectionalLight {
    pub fn terms(&self) -> LightTerms {
        LightTerms {
            ambient: self.ambient,
            diffuse: self.diffuse,
            specular: self.specular,
            specular_boost: 1.0,
        }
    }

    pub fn to_light(&self) -> Vec3 {
        self.direction.normalize_or_zero()
    }
}

impl Default for DirectionalLight {
    /// The room's overbright sun: strong ambient so the interior never goes dark.
    fn default() -> Self {
        Self {
            direction: Vec3::new(0.0, 2.0, 1.0),
            ambient: Color::gray(0.9),
            diffuse: Color::gray(1.3),
            specular: Color::WHITE,
        }
    }
}

/// A positioned light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub terms: LightTerms,
}

impl PointLight {
    pub fn to_light(&self, surface: Vec3) -> Vec3 {
        (self.position - surface).normalize_or_zero()
    }
}

/// Reflectances of a surface for each Phong term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongMaterial {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub shininess: f32,
}

impl From<&Material> for PhongMaterial {
    fn from(m: &Material) -> Self {
        Self {
            ambient: m.ambient(),
            diffuse: m.diffuse(),
            specular: m.specular(),
            shininess: m.shininess,
        }
    }
}

/// Mirror `to_light` about `normal`: `R = 2(N·L)N − L`.
pub fn reflect(to_light: Vec3, normal: Vec3) -> Vec3 {
    2.0 * normal.dot(to_light) * normal - to_light
}

/// Shade one point.
///
/// `normal`, `to_light` and `to_eye` are normalized internally. Specular is
/// only added when the light reaches the front of the surface. The result is
/// saturated to `[0, 1]`.
pub fn phong(normal: Vec3, to_light: Vec3, to_eye: Vec3, material: &PhongMaterial, light: &LightTerms) -> Color {
    let n = normal.normalize_or_zero();
    let l = to_light.normalize_or_zero();
    let v = to_eye.normalize_or_zero();

    let n_dot_l = n.dot(l).max(0.0);
    let ambient = light.ambient.modulate(material.ambient);
    let diffuse = light.diffuse.modulate(material.diffuse).scaled(n_dot_l);

    let spec = if n_dot_l > 0.0 {
        reflect(l, n).dot(v).max(0.0).powf(material.shininess)
    } else {
        0.0
    };
    let specular = light
        .specular
        .modulate(material.specular)
        .scaled(spec * light.specular_boost);

    ambient.add(diffuse).add(specular).saturate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matte() -> PhongMaterial {
        PhongMaterial {
            ambient: Color::gray(0.1),
            diffuse: Color::gray(0.5),
            specular: Color::WHITE,
            shininess: 32.0,
        }
    }

    fn dim() -> LightTerms {
        LightTerms {
            ambient: Color::gray(0.2),
            diffuse: Color::gray(0.8),
            specular: Color::gray(0.5),
            specular_boost: 1.0,
        }
    }

    #[test]
    fn reflect_mirrors_about_normal() {
        let r = reflect(Vec3::new(1.0, 1.0, 0.0).normalize(), Vec3::Y);
        assert!((r - Vec3::new(-1.0, 1.0, 0.0).normalize()).length() < 1e-6);
    }

    #[test]
    fn back_facing_light_gets_ambient_only() {
        let c = phong(Vec3::Y, -Vec3::Y, Vec3::Y, &matte(), &dim());
        assert!((c.r - 0.02).abs() < 1e-6);
    }

    #[test]
    fn head_on_light_adds_full_highlight() {
        let c = phong(Vec3::Z, Vec3::Z, Vec3::Z, &matte(), &dim());
        // 0.02 ambient + 0.4 diffuse + 0.5 specular
        assert!((c.g - 0.92).abs() < 1e-5);
    }

    #[test]
    fn higher_shininess_tightens_highlight() {
        let off_axis = Vec3::new(0.2, 0.0, 1.0);
        let loose = phong(Vec3::Z, Vec3::Z, off_axis, &PhongMaterial { shininess: 2.0, ..matte() }, &dim());
        let tight = phong(Vec3::Z, Vec3::Z, off_axis, &PhongMaterial { shininess: 256.0, ..matte() }, &dim());
        assert!(loose.r > tight.r);
    }

    #[test]
    fn overbright_room_light_saturates() {
        let sun = DirectionalLight::default();
        let m = PhongMaterial::from(&Material::new(Color::WHITE));
        let c = phong(Vec3::Y, sun.to_light(), Vec3::Y, &m, &sun.terms());
        assert_eq!(c, Color::WHITE);
    }
}
