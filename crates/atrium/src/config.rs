//! Room scene configuration.
//!
//! Every number the room scene uses lives here, grouped by fixture. The
//! [`Default`] impls reproduce the reference room; a JSON file only needs
//! the fields it changes:
//!
//! ```json
//! {
//!   "frames": { "anchor_center_x": 0.0 },
//!   "curtains": { "style": { "overlay_alpha": 0.2 } }
//! }
//! ```
//!
//! Unknown fields are rejected so typos fail loudly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;
use crate::error::SceneError;
use crate::fixtures::{CurtainPlan, CurtainStyle, DrawString, GlassOverlay, WindowFrame};
use crate::layout::{Building, FrameRow, FrameSlot, FrameSpec, RowLayout, WallConfig};
use crate::lighting::DirectionalLight;
use crate::math::{Vec2, Vec3};

// ── Frame row ──────────────────────────────────────────────────────────

/// Width of a standard frame; the last frame of the row is half of it.
pub const STANDARD_FRAME_WIDTH: f32 = 15.4;

/// Geometry shared by every frame in the row, plus the row itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameRowConfig {
    pub frames: Vec<FrameSpec>,
    pub anchor_index: usize,
    pub anchor_center_x: f32,
    pub center_y: f32,
    pub height: f32,
    pub depth: f32,
    pub front_z: f32,
    pub border_thickness: f32,
    pub divider_thickness: f32,
    pub glass_alpha: f32,
    pub glass_forward_offset: f32,
}

impl Default for FrameRowConfig {
    fn default() -> Self {
        let mut frames = vec![FrameSpec::new(STANDARD_FRAME_WIDTH, true); 5];
        frames.push(FrameSpec::new(STANDARD_FRAME_WIDTH * 0.5, false));
        Self {
            frames,
            anchor_index: 3,
            anchor_center_x: -2.75,
            center_y: 6.5,
            height: 14.0,
            depth: 0.12,
            front_z: -6.0,
            border_thickness: 0.28,
            divider_thickness: 0.25,
            glass_alpha: 0.5,
            glass_forward_offset: 0.02,
        }
    }
}

impl FrameRowConfig {
    pub fn row(&self) -> FrameRow {
        FrameRow::new(self.frames.clone(), self.anchor_index, self.anchor_center_x)
    }

    pub fn frame_top(&self) -> f32 {
        self.center_y + self.height * 0.5
    }

    pub fn frame_bottom(&self) -> f32 {
        self.center_y - self.height * 0.5
    }

    /// Frame center at the front face, for a slot.
    pub fn center_of(&self, slot: &FrameSlot) -> Vec3 {
        Vec3::new(slot.center, self.center_y, self.front_z)
    }

    pub fn window_frame(&self, index: usize, slot: &FrameSlot) -> WindowFrame {
        WindowFrame::new(Vec2::new(slot.center, self.center_y), self.front_z, slot.width, self.height)
            .with_depth(self.depth)
            .with_thickness(self.border_thickness, self.divider_thickness)
            .with_divider(slot.has_middle)
            .with_borders(RowLayout::draws_left_border(index), true)
    }

    pub fn glass(&self, slot: &FrameSlot) -> GlassOverlay {
        GlassOverlay::new(
            Vec2::new(slot.center, self.center_y),
            self.front_z,
            slot.width,
            self.height,
            self.depth,
        )
        .with_alpha(self.glass_alpha, self.glass_forward_offset)
    }
}

// ── Curtains ───────────────────────────────────────────────────────────

/// Height fractions of the five curtains, left to right.
pub const CURTAIN_FAR_LEFT_HEIGHT: f32 = 0.52;
pub const CURTAIN_MID_LEFT_HEIGHT: f32 = 0.60;
pub const CURTAIN_NEAR_LEFT_HEIGHT: f32 = 0.45;
pub const CURTAIN_RIGHT_HEIGHT: f32 = 1.0;
pub const CURTAIN_FAR_RIGHT_HEIGHT: f32 = 0.85;

/// Band height multipliers of the two outer left curtains.
pub const CURTAIN_FAR_LEFT_BAND: f32 = 1.08;
pub const CURTAIN_MID_LEFT_BAND: f32 = 0.92;

/// Band lifts above the frame bottom.
pub const CURTAIN_FAR_LEFT_LIFT: f32 = 1.14;
pub const CURTAIN_NEAR_LEFT_LIFT: f32 = 2.02;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurtainConfig {
    pub style: CurtainStyle,
    /// Drawn in this order.
    pub plans: Vec<CurtainPlan>,
}

impl Default for CurtainConfig {
    /// Curtains on every frame except the anchor, which faces the camera.
    fn default() -> Self {
        Self {
            style: CurtainStyle::default(),
            plans: vec![
                CurtainPlan::new(0, CURTAIN_FAR_LEFT_HEIGHT).with_band(CURTAIN_FAR_LEFT_BAND, CURTAIN_FAR_LEFT_LIFT),
                CurtainPlan::new(1, CURTAIN_MID_LEFT_HEIGHT).with_band(CURTAIN_MID_LEFT_BAND, 0.0),
                CurtainPlan::new(2, CURTAIN_NEAR_LEFT_HEIGHT).with_band(1.0, CURTAIN_NEAR_LEFT_LIFT),
                CurtainPlan::new(4, CURTAIN_RIGHT_HEIGHT),
                CurtainPlan::new(5, CURTAIN_FAR_RIGHT_HEIGHT),
            ],
        }
    }
}

// ── Cords ──────────────────────────────────────────────────────────────

/// One bead chain, placed relative to its frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CordPlan {
    /// X offset from the frame's left edge.
    pub x_offset: f32,
    /// Distance of the chain top below the frame top.
    pub top_drop: f32,
    pub length: f32,
    pub knob: bool,
}

impl CordPlan {
    pub const fn new(x_offset: f32, top_drop: f32, length: f32, knob: bool) -> Self {
        Self {
            x_offset,
            top_drop,
            length,
            knob,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CordConfig {
    /// Frame the cords hang beside.
    pub frame: usize,
    /// Distance in front of the frame's back face.
    pub z_offset: f32,
    pub bead_radius: f32,
    pub segments: u32,
    pub cords: Vec<CordPlan>,
}

impl Default for CordConfig {
    /// Two pull cords on the left edge of the right curtain: an outer chain
    /// split in two and an inner chain split in three.
    fn default() -> Self {
        Self {
            frame: 4,
            z_offset: 0.05,
            bead_radius: 0.03,
            segments: 8,
            cords: vec![
                CordPlan::new(-0.08, 0.0, 10.75, true),
                CordPlan::new(-0.08, 10.75, 1.25, false),
                CordPlan::new(-0.23, 0.0, 11.5, true),
                CordPlan::new(-0.23, 11.5, 1.0, true),
                CordPlan::new(-0.23, 12.5, 1.0, false),
            ],
        }
    }
}

impl CordConfig {
    pub fn draw_string(&self, plan: &CordPlan, slot: &FrameSlot, frames: &FrameRowConfig) -> DrawString {
        let top = Vec3::new(
            slot.left + plan.x_offset,
            frames.frame_top() - plan.top_drop,
            frames.front_z + frames.depth + self.z_offset,
        );
        DrawString {
            top,
            length: plan.length,
            bead_radius: self.bead_radius,
            segments: self.segments,
            knob: plan.knob,
        }
    }
}

// ── Room ───────────────────────────────────────────────────────────────

pub const ROOM_CLEAR_COLOR: [f32; 4] = [0.5, 0.7, 1.0, 1.0];

/// Every parameter of the room scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoomConfig {
    pub frames: FrameRowConfig,
    pub curtains: CurtainConfig,
    pub cords: CordConfig,
    pub walls: WallConfig,
    /// The first building anchors the floor height.
    pub buildings: Vec<Building>,
    pub home: CameraPose,
    pub clear_color: [f32; 4],
    pub sun: DirectionalLight,
    pub window_texture: PathBuf,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            frames: FrameRowConfig::default(),
            curtains: CurtainConfig::default(),
            cords: CordConfig::default(),
            walls: WallConfig::default(),
            buildings: vec![
                Building::office(Vec3::new(0.0, 3.25, -10.0)),
                Building::office(Vec3::new(16.0, 3.25, -10.0)),
            ],
            home: CameraPose::ROOM_HOME,
            clear_color: ROOM_CLEAR_COLOR,
            sun: DirectionalLight::default(),
            window_texture: PathBuf::from("window_texture.png"),
        }
    }
}

impl RoomConfig {
    /// Load from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| SceneError::Io(format!("{}: {e}", path.display())))?;
        let config = Self::from_json(&text)?;
        log::info!("loaded room config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check layout preconditions before assembly.
    pub fn validate(&self) -> Result<(), SceneError> {
        let layout = self.frames.row().layout()?;
        let n = layout.len();

        if !(self.frames.height > 0.0) || !(self.frames.depth > 0.0) {
            return Err(SceneError::Layout("frame height and depth must be positive".into()));
        }
        if let Some(plan) = self.curtains.plans.iter().find(|p| p.frame >= n) {
            return Err(SceneError::Layout(format!(
                "curtain on frame {} but the row has {n} frames",
                plan.frame
            )));
        }
        if !self.cords.cords.is_empty() && self.cords.frame >= n {
            return Err(SceneError::Layout(format!(
                "cords on frame {} but the row has {n} frames",
                self.cords.frame
            )));
        }
        if !self.cords.cords.is_empty() && !(self.cords.bead_radius > 0.0) {
            return Err(SceneError::Layout(format!(
                "cord bead radius must be positive, got {}",
                self.cords.bead_radius
            )));
        }
        if self.buildings.is_empty() {
            return Err(SceneError::Layout("the floor is anchored to the first building; none configured".into()));
        }
        if self.walls.carpet_tile <= 0.0 {
            return Err(SceneError::Layout("carpet tile size must be positive".into()));
        }
        Ok(())
    }

    /// Base of the building the room's floor hangs from.
    pub fn anchor_building_bottom(&self) -> Option<f32> {
        self.buildings.first().map(Building::bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        RoomConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = RoomConfig::from_json(r#"{ "frames": { "anchor_center_x": 1.5 } }"#).unwrap();
        assert_eq!(c.frames.anchor_center_x, 1.5);
        assert_eq!(c.frames.height, 14.0);
        assert_eq!(c.curtains.plans.len(), 5);
        assert_eq!(c.home, CameraPose::ROOM_HOME);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = RoomConfig::from_json(r#"{ "frames": { "widht": 3 } }"#).unwrap_err();
        assert!(matches!(err, SceneError::Config(_)));
    }

    #[test]
    fn bad_curtain_frame_is_a_layout_error() {
        let mut c = RoomConfig::default();
        c.curtains.plans.push(CurtainPlan::new(9, 0.5));
        assert!(matches!(c.validate(), Err(SceneError::Layout(_))));
    }

    #[test]
    fn bad_anchor_is_a_layout_error() {
        let mut c = RoomConfig::default();
        c.frames.anchor_index = 6;
        assert!(matches!(c.validate(), Err(SceneError::Layout(_))));
    }

    #[test]
    fn zero_bead_radius_is_a_layout_error() {
        let c = RoomConfig::from_json(r#"{ "cords": { "bead_radius": 0.0 } }"#).unwrap();
        assert!(matches!(c.validate(), Err(SceneError::Layout(_))));
    }

    #[test]
    fn round_trips_through_json() {
        let c = RoomConfig::default();
        let back = RoomConfig::from_json(&c.to_json_pretty().unwrap()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = RoomConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }

    #[test]
    fn cords_hang_from_frame_top() {
        let c = RoomConfig::default();
        let layout = c.frames.row().layout().unwrap();
        let slot = &layout[c.cords.frame];
        let strings: Vec<_> = c.cords.cords.iter().map(|p| c.cords.draw_string(p, slot, &c.frames)).collect();
        assert!((strings[0].top.y - 13.5).abs() < 1e-5);
        assert!((strings[1].top.y - 2.75).abs() < 1e-5);
        assert!((strings[4].top.y - 1.0).abs() < 1e-5);
        assert!((strings[0].top.x - (slot.left - 0.08)).abs() < 1e-5);
        assert!((strings[0].top.z - (-5.83)).abs() < 1e-5);
        assert!(strings[0].knob && !strings[1].knob);
    }

    #[test]
    fn frames_share_seams_once() {
        let c = RoomConfig::default();
        let layout = c.frames.row().layout().unwrap();
        let first = c.frames.window_frame(0, &layout[0]);
        let last = c.frames.window_frame(5, &layout[5]);
        assert!(first.draw_left_border && first.draw_right_border);
        assert!(!last.draw_left_border && !last.include_middle_divider);
    }
}
