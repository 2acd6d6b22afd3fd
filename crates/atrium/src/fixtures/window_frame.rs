use crate::material::{palette, Material};
use crate::math::{Transform, Vec2, Vec3};
use crate::scene::CommandList;

/// Brushed-aluminum look shared by frames and curtains.
pub const FRAME_MATERIAL: Material = Material::new(palette::FRAME_METAL).with_shininess(30.0);

/// Which bar of a frame a box is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePiece {
    LeftBorder,
    RightBorder,
    TopBar,
    BottomBar,
    Divider,
}

/// A rectangular window frame built from up to five boxes.
///
/// ```text
///  ┌───────────┬───────────┐  ← top bar
///  │           │           │
///  │           │ ← divider │
///  │           │           │
///  └───────────┴───────────┘  ← bottom bar
///  ↑ left border            ↑ right border
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowFrame {
    pub center: Vec2,
    /// Z of the face pointing into the room's window side.
    pub front_z: f32,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub border_thickness: f32,
    pub divider_thickness: f32,
    pub include_middle_divider: bool,
    pub draw_left_border: bool,
    pub draw_right_border: bool,
}

impl WindowFrame {
    /// A frame with every bar enabled.
    pub fn new(center: Vec2, front_z: f32, width: f32, height: f32) -> Self {
        Self {
            center,
            front_z,
            width,
            height,
            depth: 0.12,
            border_thickness: 0.28,
            divider_thickness: 0.25,
            include_middle_divider: true,
            draw_left_border: true,
            draw_right_border: true,
        }
    }

    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_thickness(mut self, border: f32, divider: f32) -> Self {
        self.border_thickness = border;
        self.divider_thickness = divider;
        self
    }

    pub fn with_divider(mut self, include: bool) -> Self {
        self.include_middle_divider = include;
        self
    }

    pub fn with_borders(mut self, left: bool, right: bool) -> Self {
        self.draw_left_border = left;
        self.draw_right_border = right;
        self
    }

    /// Height of the center divider: the inner opening, never thinner than a border.
    pub fn divider_height(&self) -> f32 {
        (self.height - 2.0 * self.border_thickness).max(self.border_thickness)
    }

    /// Box transforms in emission order.
    pub fn pieces(&self) -> Vec<(FramePiece, Transform)> {
        let half_w = self.width * 0.5;
        let half_h = self.height * 0.5;
        let b = self.border_thickness;
        let z = self.front_z + self.depth * 0.5;
        let Vec2 { x: cx, y: cy } = self.center;

        let mut out = Vec::with_capacity(5);
        if self.draw_left_border {
            out.push((
                FramePiece::LeftBorder,
                Transform::boxed(Vec3::new(cx - half_w + b * 0.5, cy, z), Vec3::new(b, self.height, self.depth)),
            ));
        }
        if self.draw_right_border {
            out.push((
                FramePiece::RightBorder,
                Transform::boxed(Vec3::new(cx + half_w - b * 0.5, cy, z), Vec3::new(b, self.height, self.depth)),
            ));
        }
        out.push((
            FramePiece::TopBar,
            Transform::boxed(Vec3::new(cx, cy + half_h - b * 0.5, z), Vec3::new(self.width, b, self.depth)),
        ));
        out.push((
            FramePiece::BottomBar,
            Transform::boxed(Vec3::new(cx, cy - half_h + b * 0.5, z), Vec3::new(self.width, b, self.depth)),
        ));
        if self.include_middle_divider {
            out.push((
                FramePiece::Divider,
                Transform::boxed(
                    Vec3::new(cx, cy, z),
                    Vec3::new(self.divider_thickness, self.divider_height(), self.depth),
                ),
            ));
        }
        out
    }

    pub fn build(&self, out: &mut CommandList) {
        for (_, transform) in self.pieces() {
            out.cuboid(transform, FRAME_MATERIAL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::command::cuboids;

    const EPS: f32 = 1e-5;

    fn frame() -> WindowFrame {
        WindowFrame::new(Vec2::new(-2.75, 6.5), -6.0, 15.4, 14.0)
    }

    #[test]
    fn full_frame_has_five_bars() {
        let kinds: Vec<_> = frame().pieces().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            [
                FramePiece::LeftBorder,
                FramePiece::RightBorder,
                FramePiece::TopBar,
                FramePiece::BottomBar,
                FramePiece::Divider
            ]
        );
    }

    #[test]
    fn optional_bars_are_skipped() {
        let f = frame().with_divider(false).with_borders(false, true);
        let kinds: Vec<_> = f.pieces().into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, [FramePiece::RightBorder, FramePiece::TopBar, FramePiece::BottomBar]);
    }

    #[test]
    fn borders_sit_inside_the_outline() {
        let f = frame();
        let pieces = f.pieces();
        let left = pieces[0].1;
        let right = pieces[1].1;
        assert!((left.box_min().x - (-2.75 - 7.7)).abs() < EPS);
        assert!((right.box_max().x - (-2.75 + 7.7)).abs() < EPS);
        assert!((pieces[2].1.box_max().y - 13.5).abs() < EPS);
        assert!((pieces[3].1.box_min().y + 0.5).abs() < EPS);
        // Boxes start at the front face.
        assert!((left.box_min().z + 6.0).abs() < EPS);
    }

    #[test]
    fn divider_height_is_floored() {
        let mut f = frame();
        assert!((f.divider_height() - 13.44).abs() < EPS);
        f.height = 0.5;
        assert!((f.divider_height() - 0.28).abs() < EPS);
    }

    #[test]
    fn build_uses_frame_metal() {
        let mut out = CommandList::new();
        frame().build(&mut out);
        assert_eq!(out.len(), 5);
        assert!(cuboids(out.commands()).all(|c| c.material == FRAME_MATERIAL));
        assert_eq!(FRAME_MATERIAL.shininess, 30.0);
    }
}
