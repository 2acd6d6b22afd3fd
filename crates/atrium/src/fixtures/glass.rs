use crate::material::{Color, Material};
use crate::math::{UvRect, Vec2};
use crate::scene::{CommandList, QuadCommand, TextureSlot};

/// A translucent textured pane laid over a box's front face.
///
/// The texture repeats once per world unit, so `u` runs over `[0, width]`.
/// `tex_v_top`/`tex_v_bottom` pick a fraction of the pane height, which lets
/// several stacked panes share one continuous V range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlassOverlay {
    pub center: Vec2,
    /// Front face of the box the pane covers.
    pub front_z: f32,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub alpha: f32,
    pub forward_offset: f32,
    pub tex_v_top: f32,
    pub tex_v_bottom: f32,
    pub texture: TextureSlot,
}

impl GlassOverlay {
    pub fn new(center: Vec2, front_z: f32, width: f32, height: f32, depth: f32) -> Self {
        Self {
            center,
            front_z,
            width,
            height,
            depth,
            alpha: 0.5,
            forward_offset: 0.02,
            tex_v_top: 0.0,
            tex_v_bottom: 1.0,
            texture: TextureSlot::Window,
        }
    }

    pub fn with_alpha(mut self, alpha: f32, forward_offset: f32) -> Self {
        self.alpha = alpha;
        self.forward_offset = forward_offset;
        self
    }

    pub fn with_v_range(mut self, top: f32, bottom: f32) -> Self {
        self.tex_v_top = top;
        self.tex_v_bottom = bottom;
        self
    }

    /// Z of the pane: past the back of the box plus the offset.
    pub fn z(&self) -> f32 {
        self.front_z + self.depth + self.forward_offset
    }

    pub fn uv(&self) -> UvRect {
        UvRect::new(
            Vec2::new(0.0, self.tex_v_top * self.height),
            Vec2::new(self.width, self.tex_v_bottom * self.height),
        )
    }

    pub fn quad(&self) -> QuadCommand {
        let half = Vec2::new(self.width, self.height) * 0.5;
        QuadCommand::upright(
            self.center - half,
            self.center + half,
            self.z(),
            self.uv(),
            Material::new(Color::WHITE),
        )
        .textured(self.texture)
        .blended(self.alpha)
        .unlit()
    }

    pub fn build(&self, out: &mut CommandList) {
        out.quad(self.quad());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Blend;

    #[test]
    fn pane_sits_past_the_box() {
        let g = GlassOverlay::new(Vec2::new(0.0, 6.5), -6.0, 15.4, 14.0, 0.12);
        assert!((g.z() - (-6.0 + 0.12 + 0.02)).abs() < 1e-6);
        let q = g.quad();
        assert_eq!(q.blend, Blend::Alpha(0.5));
        assert!(!q.depth_write && !q.lit);
        assert_eq!(q.texture, Some(TextureSlot::Window));
        assert_eq!(q.corners[0].y, 13.5);
        assert_eq!(q.corners[2].y, -0.5);
    }

    #[test]
    fn uv_tiles_one_unit_per_world_unit() {
        let g = GlassOverlay::new(Vec2::ZERO, 0.0, 4.0, 10.0, 0.1).with_v_range(0.25, 0.75);
        let uv = g.uv();
        assert_eq!(uv.min, Vec2::new(0.0, 2.5));
        assert_eq!(uv.max, Vec2::new(4.0, 7.5));
    }
}
