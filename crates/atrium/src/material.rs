//! Colors and fixed-function style materials.
//!
//! A [`Material`] is render state attached to a draw command, not to
//! vertices: ambient is derived as 20% of the color, specular is white.

use serde::{Deserialize, Serialize};

/// Linear RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from 8-bit channel values.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// A neutral gray.
    pub const fn gray(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Multiply every channel by `k`.
    pub fn scaled(self, k: f32) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }

    /// Component-wise product.
    pub fn modulate(self, other: Color) -> Self {
        Self::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }

    /// Component-wise sum.
    pub fn add(self, other: Color) -> Self {
        Self::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }

    /// Clamp each channel into `[0, 1]`.
    pub fn saturate(self) -> Self {
        Self::new(self.r.clamp(0.0, 1.0), self.g.clamp(0.0, 1.0), self.b.clamp(0.0, 1.0))
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Surface color plus specular exponent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub color: Color,
    pub shininess: f32,
    #[serde(default = "Material::default_ambient_scale")]
    pub ambient_scale: f32,
}

impl Material {
    /// Shininess used when a fixture doesn't pick one.
    pub const DEFAULT_SHININESS: f32 = 50.0;
    /// Ambient reflectance as a fraction of the color.
    pub const DEFAULT_AMBIENT_SCALE: f32 = 0.2;

    /// A material with the default shininess.
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            shininess: Self::DEFAULT_SHININESS,
            ambient_scale: Self::DEFAULT_AMBIENT_SCALE,
        }
    }

    pub const fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    pub const fn with_ambient_scale(mut self, scale: f32) -> Self {
        self.ambient_scale = scale;
        self
    }

    fn default_ambient_scale() -> f32 {
        Self::DEFAULT_AMBIENT_SCALE
    }

    pub fn ambient(&self) -> Color {
        self.color.scaled(self.ambient_scale)
    }

    pub fn diffuse(&self) -> Color {
        self.color
    }

    pub fn specular(&self) -> Color {
        Color::WHITE
    }
}

/// Named colors used by the room, facade, and outlet builders.
pub mod palette {
    use super::Color;

    /// Aluminum window frames, curtain panels, and the baseboard.
    pub const FRAME_METAL: Color = Color::from_rgb8(90, 94, 98);
    /// Warm orange-beige of the lower wall and room shell.
    pub const WALL_BEIGE: Color = Color::from_rgb8(225, 184, 142);
    /// Building body and lower roof layer.
    pub const BUILDING_CREAM: Color = Color::from_rgb8(255, 245, 227);
    /// Upper roof trim band.
    pub const ROOF_TRIM: Color = Color::from_rgb8(65, 65, 65);

    pub const WINDOW_BLUE: Color = Color::from_rgb8(137, 144, 196);
    pub const WINDOW_CHARCOAL: Color = Color::from_rgb8(65, 67, 82);
    pub const WINDOW_MIST: Color = Color::from_rgb8(201, 206, 242);
    pub const WINDOW_MINT: Color = Color::from_rgb8(201, 242, 233);
    pub const WINDOW_SAGE: Color = Color::from_rgb8(155, 189, 181);
    /// Fallback facade window color when no styles are supplied.
    pub const WINDOW_DEFAULT: Color = Color::new(0.3, 0.5, 0.8);

    pub const CORD: Color = Color::new(0.85, 0.83, 0.78);

    pub const OUTLET_PLATE: Color = Color::new(0.90, 0.89, 0.85);
    pub const OUTLET_FACE: Color = Color::new(0.95, 0.94, 0.90);
    pub const OUTLET_SCREW: Color = Color::gray(0.45);
    pub const OUTLET_SLOT: Color = Color::gray(0.08);

    pub const CARPET: Color = Color::gray(0.68);
    pub const GROUND_LIGHT: Color = Color::gray(0.4);
    pub const GROUND_DARK: Color = Color::gray(0.2);

    /// Terracotta of the specular demo cubes.
    pub const TERRACOTTA: Color = Color::from_rgb8(174, 87, 54);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_conversion() {
        let c = Color::from_rgb8(255, 0, 51);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-6);
    }

    #[test]
    fn ambient_is_a_fifth_of_diffuse() {
        let m = Material::new(Color::new(0.5, 1.0, 0.25));
        let a = m.ambient();
        assert!((a.r - 0.1).abs() < 1e-6);
        assert!((a.g - 0.2).abs() < 1e-6);
        assert!((a.b - 0.05).abs() < 1e-6);
        assert_eq!(m.specular(), Color::WHITE);
        assert_eq!(m.shininess, Material::DEFAULT_SHININESS);
    }

    #[test]
    fn saturate_clamps_overbright_light() {
        let c = Color::new(1.3, -0.2, 0.5).saturate();
        assert_eq!(c, Color::new(1.0, 0.0, 0.5));
    }
}
