//! The room around the window row, derived entirely from the row layout.
//!
//! ```text
//!        side view                         top view
//!   shell_top ┌──── ceiling ───────┐     ┌── back wall ─────┐
//!             │▓ frame row         │     │                  │
//!   wall_top  │▓────               │     │ side    carpet   │ side
//!             │▓ lower wall        │     │ wall    + grid   │ wall
//!             │▓ ▄ baseboard       │     │                  │
//!   shell_bot └──── floor ─────────┘     └── lower wall ────┘
//!              wall_center_z →  +span        row_left → row_right
//! ```
//!
//! The lower wall spans the frame row exactly; side walls run back from it by
//! `span` (the row width); thickness everywhere is the frame depth.

use serde::{Deserialize, Serialize};

use super::frame_row::{FrameSlot, RowLayout};
use crate::config::FrameRowConfig;
use crate::fixtures::ElectricalOutlet;
use crate::material::{palette, Material};
use crate::math::{Transform, UvRect, Vec2, Vec3};
use crate::scene::{CheckerGridCommand, CommandList, DrawCommand, QuadCommand, TextureSlot};

pub const WALL_MATERIAL: Material = Material::new(palette::WALL_BEIGE);
pub const BASEBOARD_MATERIAL: Material = Material::new(palette::FRAME_METAL).with_shininess(20.0);
pub const CARPET_MATERIAL: Material = Material::new(palette::CARPET).with_shininess(8.0);
pub const GROUND_LIGHT: Material = Material::new(palette::GROUND_LIGHT).with_shininess(10.0);
pub const GROUND_DARK: Material = Material::new(palette::GROUND_DARK).with_shininess(10.0);

/// Wall, floor and fixture constants of the room shell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WallConfig {
    /// How far the lower wall reaches below the anchor building's base.
    pub drop_below_building: f32,
    /// The lower wall sits this much behind the frame's front face.
    pub wall_inset: f32,
    pub baseboard_height: f32,
    pub baseboard_protrude: f32,
    /// World size of one carpet texture repeat.
    pub carpet_tile: f32,
    /// Carpet lift above the floor slab.
    pub carpet_lift: f32,
    pub ground_divisions: u32,
    /// Outlet plate width used when placing the outlet.
    pub outlet_plate_width: f32,
    /// Gap between the anchor frame's right-half midpoint and the outlet.
    pub outlet_gap: f32,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            drop_below_building: 3.0,
            wall_inset: 0.01,
            baseboard_height: 0.70,
            baseboard_protrude: 0.03,
            carpet_tile: 1.2,
            carpet_lift: 0.002,
            ground_divisions: 200,
            outlet_plate_width: 0.85,
            outlet_gap: 0.10,
        }
    }
}

/// Resolved room dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoomShell {
    pub left: f32,
    pub right: f32,
    pub wall_top: f32,
    pub wall_bottom: f32,
    pub wall_center_z: f32,
    pub thickness: f32,
    /// Depth of the room from the lower wall to the back wall.
    pub span: f32,
    pub shell_top: f32,
    #[serde(skip)]
    walls: WallConfig,
}

impl RoomShell {
    pub fn derive(layout: &RowLayout, frames: &FrameRowConfig, building_bottom: f32, walls: &WallConfig) -> Self {
        let wall_top = frames.frame_bottom();
        Self {
            left: layout.row_left(),
            right: layout.row_right(),
            wall_top,
            wall_bottom: building_bottom - walls.drop_below_building,
            wall_center_z: frames.front_z - walls.wall_inset + frames.depth * 0.5,
            thickness: frames.depth,
            span: layout.row_width(),
            shell_top: wall_top + frames.height,
            walls: *walls,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) * 0.5
    }

    pub fn wall_height(&self) -> f32 {
        self.wall_top - self.wall_bottom
    }

    pub fn shell_height(&self) -> f32 {
        self.shell_top - self.wall_bottom
    }

    pub fn shell_center_y(&self) -> f32 {
        self.wall_bottom + self.shell_height() * 0.5
    }

    /// Room-side face of the lower wall.
    pub fn wall_front_z(&self) -> f32 {
        self.wall_center_z + self.thickness * 0.5
    }

    fn mid_z(&self) -> f32 {
        self.wall_center_z + self.span * 0.5
    }

    pub fn wall_section(&self) -> Transform {
        Transform::boxed(
            Vec3::new(self.center_x(), self.wall_bottom + self.wall_height() * 0.5, self.wall_center_z),
            Vec3::new(self.width(), self.wall_height(), self.thickness),
        )
    }

    pub fn baseboard(&self) -> Transform {
        let h = self.walls.baseboard_height;
        let p = self.walls.baseboard_protrude;
        Transform::boxed(
            Vec3::new(self.center_x(), self.wall_bottom + h * 0.5, self.wall_center_z + p * 0.5),
            Vec3::new(self.width(), h, self.thickness + p),
        )
    }

    pub fn left_wall(&self) -> Transform {
        self.side_wall(self.left + self.thickness * 0.5)
    }

    pub fn right_wall(&self) -> Transform {
        self.side_wall(self.right - self.thickness * 0.5)
    }

    fn side_wall(&self, x: f32) -> Transform {
        Transform::boxed(
            Vec3::new(x, self.shell_center_y(), self.mid_z()),
            Vec3::new(self.thickness, self.shell_height(), self.span),
        )
    }

    pub fn back_wall(&self) -> Transform {
        Transform::boxed(
            Vec3::new(self.center_x(), self.shell_center_y(), self.wall_center_z + self.span),
            Vec3::new(self.width(), self.shell_height(), self.thickness),
        )
    }

    pub fn floor(&self) -> Transform {
        self.slab(self.wall_bottom + self.thickness * 0.5)
    }

    pub fn ceiling(&self) -> Transform {
        self.slab(self.shell_top - self.thickness * 0.5)
    }

    fn slab(&self, y: f32) -> Transform {
        Transform::boxed(
            Vec3::new(self.center_x(), y, self.mid_z()),
            Vec3::new(self.width(), self.thickness, self.span),
        )
    }

    /// Checkerboard inside the walls, on top of the floor slab.
    pub fn ground(&self) -> CheckerGridCommand {
        CheckerGridCommand {
            min_x: self.left + self.thickness,
            max_x: self.right - self.thickness,
            y: self.wall_bottom + self.thickness,
            min_z: self.wall_center_z,
            max_z: self.wall_center_z + self.span - self.thickness,
            divisions: self.walls.ground_divisions,
            light: GROUND_LIGHT,
            dark: GROUND_DARK,
        }
    }

    /// Carpet quad over the whole floor, repeating every `carpet_tile` units.
    pub fn carpet(&self) -> QuadCommand {
        let tile = self.walls.carpet_tile;
        QuadCommand::horizontal(
            self.left,
            self.right,
            self.wall_bottom + self.thickness + self.walls.carpet_lift,
            self.wall_center_z,
            self.wall_center_z + self.span,
            UvRect::new(Vec2::ZERO, Vec2::new(self.width() / tile, self.span / tile)),
            CARPET_MATERIAL,
        )
        .textured(TextureSlot::Carpet)
    }

    /// The outlet sits just right of the anchor frame's right-half midpoint,
    /// halfway up the lower wall.
    pub fn outlet(&self, anchor: &FrameSlot) -> ElectricalOutlet {
        let left_edge = anchor.center + anchor.width * 0.25 + self.walls.outlet_gap;
        ElectricalOutlet::new(
            Vec2::new(
                left_edge + self.walls.outlet_plate_width * 0.5,
                self.wall_bottom + self.wall_height() * 0.5,
            ),
            self.wall_front_z(),
        )
    }

    /// Lower wall, baseboard, ground grid, shell boxes and carpet, in draw order.
    pub fn build(&self, out: &mut CommandList) {
        out.cuboid(self.wall_section(), WALL_MATERIAL);
        out.cuboid(self.baseboard(), BASEBOARD_MATERIAL);
        out.push(DrawCommand::CheckerGrid(self.ground()));
        for wall in [self.left_wall(), self.right_wall(), self.back_wall(), self.floor()] {
            out.cuboid(wall, WALL_MATERIAL);
        }
        out.quad(self.carpet());
        out.cuboid(self.ceiling(), WALL_MATERIAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FrameRow;
    use crate::scene::command::cuboids;

    const EPS: f32 = 1e-4;

    fn shell() -> (RoomShell, RowLayout) {
        let frames = FrameRowConfig::default();
        let layout = frames.row().layout().unwrap();
        let shell = RoomShell::derive(&layout, &frames, 3.25 - 6.5, &WallConfig::default());
        (shell, layout)
    }

    #[test]
    fn lower_wall_spans_the_row() {
        let (s, layout) = shell();
        let wall = s.wall_section();
        assert!((wall.box_min().x - layout.row_left()).abs() < EPS);
        assert!((wall.box_max().x - layout.row_right()).abs() < EPS);
        assert!((wall.box_max().y - (-0.5)).abs() < EPS);
        assert!((wall.box_min().y - (-6.25)).abs() < EPS);
        assert!((s.wall_center_z - (-5.95)).abs() < EPS);
    }

    #[test]
    fn shell_height_is_wall_plus_frame() {
        let (s, _) = shell();
        assert!((s.shell_height() - (5.75 + 14.0)).abs() < EPS);
        assert!((s.left_wall().scale.z - s.width()).abs() < EPS);
        assert!((s.back_wall().translation.z - (s.wall_center_z + s.span)).abs() < EPS);
        assert!((s.ceiling().box_max().y - 13.5).abs() < EPS);
    }

    #[test]
    fn baseboard_protrudes_into_the_room() {
        let (s, _) = shell();
        let b = s.baseboard();
        assert!((b.box_max().z - (s.wall_front_z() + 0.03)).abs() < EPS);
        assert!((b.box_min().z - s.wall_section().box_min().z).abs() < EPS);
        assert!((b.scale.y - 0.7).abs() < EPS);
    }

    #[test]
    fn ground_and_carpet_sit_on_the_floor() {
        let (s, _) = shell();
        let g = s.ground();
        assert!((g.y - s.floor().box_max().y).abs() < EPS);
        assert_eq!(g.divisions, 200);
        let c = s.carpet();
        assert!((c.corners[0].y - (g.y + 0.002)).abs() < EPS);
        assert!((c.uv.max.x - s.width() / 1.2).abs() < EPS);
        assert_eq!(c.texture, Some(TextureSlot::Carpet));
        assert!(c.lit);
    }

    #[test]
    fn outlet_right_of_anchor_midpoint() {
        let (s, layout) = shell();
        let anchor = &layout[3];
        let outlet = s.outlet(anchor);
        assert!((outlet.center.x - (-2.75 + 3.85 + 0.10 + 0.425)).abs() < EPS);
        assert!((outlet.center.y - (-6.25 + 5.75 * 0.5)).abs() < EPS);
        assert!((outlet.wall_front_z - (-5.89)).abs() < EPS);
    }

    #[test]
    fn build_order() {
        let (s, _) = shell();
        let mut out = CommandList::new();
        s.build(&mut out);
        let kinds: Vec<_> = out.iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            ["cuboid", "cuboid", "checker-grid", "cuboid", "cuboid", "cuboid", "cuboid", "quad", "cuboid"]
        );
        assert_eq!(cuboids(out.commands()).nth(1).unwrap().material, BASEBOARD_MATERIAL);
    }

    #[test]
    fn shell_follows_the_row() {
        let frames = FrameRowConfig::default();
        let row = FrameRow::new(frames.frames.clone(), 0, 0.0);
        let layout = row.layout().unwrap();
        let s = RoomShell::derive(&layout, &frames, 0.0, &WallConfig::default());
        assert!((s.left - (-7.7)).abs() < EPS);
        assert!((s.span - 84.7).abs() < EPS);
    }
}
