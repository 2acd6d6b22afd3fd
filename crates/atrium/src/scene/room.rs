//! # Room Scene — Interior Behind the Window Row
//!
//! Assembles one frame of the room from a [`RoomConfig`] and the camera.
//! Layout is resolved once in [`RoomScene::new`]; [`RoomScene::assemble`]
//! only re-emits commands, so it is cheap to call every frame.
//!
//! Pass order is fixed:
//!
//! ```text
//!  clear → view → lighting → buildings → frames → curtains → cords
//!        → walls → outlet → [overlay] → present
//! ```
//!
//! Opaque fixtures come before the translucent glass and curtain overlays
//! that follow them in each pass; overlays never write depth.

use super::builder::{Frame, SceneBuilder};
use super::command::DrawCommand;
use crate::camera::{CameraState, Viewport};
use crate::config::RoomConfig;
use crate::error::SceneError;
use crate::fixtures::{CurtainSegment, DrawString};
use crate::layout::{RoomShell, RowLayout};
use crate::overlay;

/// The room with its layout resolved.
#[derive(Debug, Clone)]
pub struct RoomScene {
    config: RoomConfig,
    layout: RowLayout,
    shell: RoomShell,
    curtains: Vec<CurtainSegment>,
    cords: Vec<DrawString>,
}

impl RoomScene {
    /// Validate the config and resolve the frame row, shell, curtains and cords.
    pub fn new(config: RoomConfig) -> Result<Self, SceneError> {
        config
            .validate()
            .inspect_err(|e| log::error!("room config rejected: {e}"))?;
        let layout = config.frames.row().layout()?;
        let building_bottom = config
            .anchor_building_bottom()
            .ok_or_else(|| SceneError::Layout("no anchor building".into()))?;
        let shell = RoomShell::derive(&layout, &config.frames, building_bottom, &config.walls);

        let frames = &config.frames;
        let curtains = config
            .curtains
            .plans
            .iter()
            .map(|plan| {
                let slot = &layout[plan.frame];
                plan.segment(slot, frames.height, frames.center_of(slot), frames.depth, &config.curtains.style)
            })
            .collect();

        let cords = match layout.get(config.cords.frame) {
            Some(slot) => config
                .cords
                .cords
                .iter()
                .map(|plan| config.cords.draw_string(plan, slot, frames))
                .collect(),
            None => Vec::new(),
        };

        log::info!(
            "room: {} frames spanning {:.2}..{:.2}, {} curtains, {} cords",
            layout.len(),
            layout.row_left(),
            layout.row_right(),
            config.curtains.plans.len(),
            config.cords.cords.len()
        );

        Ok(Self {
            config,
            layout,
            shell,
            curtains,
            cords,
        })
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    pub fn layout(&self) -> &RowLayout {
        &self.layout
    }

    pub fn shell(&self) -> &RoomShell {
        &self.shell
    }

    pub fn curtains(&self) -> &[CurtainSegment] {
        &self.curtains
    }

    pub fn cords(&self) -> &[DrawString] {
        &self.cords
    }

    /// A camera starting at the configured home pose.
    pub fn camera(&self) -> CameraState {
        CameraState::new(self.config.home)
    }

    /// Build the frame for the current camera.
    pub fn assemble(&self, camera: &CameraState, viewport: &Viewport, overlay_on: bool) -> Frame {
        let config = &self.config;
        let frames = &config.frames;

        SceneBuilder::new("room")
            .pass("clear", |out| out.push(DrawCommand::Clear { color: config.clear_color }))
            .pass("view", |out| {
                out.push(DrawCommand::SetView {
                    view: camera.view_matrix(),
                    projection: viewport.projection(),
                    eye: camera.position(),
                })
            })
            .pass("lighting", |out| out.push(DrawCommand::SetLighting(config.sun)))
            .pass("buildings", |out| {
                for building in &config.buildings {
                    building.build(out);
                }
            })
            .pass("frames", |out| {
                for (i, slot) in self.layout.iter().enumerate() {
                    frames.window_frame(i, slot).build(out);
                    frames.glass(slot).build(out);
                }
            })
            .pass("curtains", |out| {
                for curtain in &self.curtains {
                    curtain.build(out);
                }
            })
            .pass("cords", |out| {
                for cord in &self.cords {
                    cord.build(out);
                }
            })
            .pass("walls", |out| self.shell.build(out))
            .pass("outlet", |out| {
                let anchor = &self.layout[frames.anchor_index];
                self.shell.outlet(anchor).build(out);
            })
            .pass_if(overlay_on, "overlay", |out| {
                out.push(DrawCommand::ScreenOverlay(overlay::coordinate_axes(viewport, camera.position())))
            })
            .pass("present", |out| out.push(DrawCommand::Present))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraAction;
    use crate::fixtures::ElectricalOutlet;
    use crate::scene::command::{cuboids, quads, spheres};
    use crate::scene::TextureSlot;

    fn scene() -> RoomScene {
        RoomScene::new(RoomConfig::default()).unwrap()
    }

    fn frame(overlay: bool) -> Frame {
        let s = scene();
        s.assemble(&s.camera(), &Viewport::default(), overlay)
    }

    #[test]
    fn pass_sequence_is_fixed() {
        assert_eq!(
            frame(true).commands.pass_names(),
            [
                "clear", "view", "lighting", "buildings", "frames", "curtains", "cords", "walls", "outlet", "overlay",
                "present"
            ]
        );
        assert!(!frame(false).commands.pass_names().contains(&"overlay"));
    }

    #[test]
    fn frame_row_emits_frame_then_glass() {
        let f = frame(false);
        let pass = f.commands.pass("frames").unwrap();
        // Six frames, only the first draws a left border, the last has no divider.
        assert_eq!(cuboids(pass).count(), 5 + 4 * 4 + 3);
        assert_eq!(quads(pass).count(), 6);
        assert_eq!(pass.last().map(DrawCommand::kind), Some("quad"));
    }

    #[test]
    fn curtains_follow_their_frames() {
        let s = scene();
        let lefts: Vec<_> = s.curtains().iter().map(|c| c.left_x).collect();
        let expected: Vec<_> = [0, 1, 2, 4, 5].iter().map(|&i| s.layout()[i].left).collect();
        assert_eq!(lefts, expected);
        for c in s.curtains() {
            assert_eq!(c.top_y, 13.5);
            assert!(c.clamped_band_bottom() >= c.min_band_bottom_y);
        }
    }

    #[test]
    fn cords_hang_beside_the_right_curtain() {
        let f = frame(false);
        let pass = f.commands.pass("cords").unwrap();
        assert_eq!(pass.len(), spheres(pass).count());
        let knobs = spheres(pass).filter(|s| (s.radius - 0.075).abs() < 1e-6).count();
        assert_eq!(knobs, 3);
    }

    #[test]
    fn walls_include_textured_carpet() {
        let f = frame(false);
        let pass = f.commands.pass("walls").unwrap();
        let carpet: Vec<_> = quads(pass).collect();
        assert_eq!(carpet.len(), 1);
        assert_eq!(carpet[0].texture, Some(TextureSlot::Carpet));
    }

    #[test]
    fn outlet_pass_has_ten_boxes() {
        let f = frame(false);
        assert_eq!(f.commands.pass("outlet").unwrap().len(), ElectricalOutlet::BOX_COUNT);
    }

    #[test]
    fn overlay_tracks_the_camera() {
        let s = scene();
        let mut cam = s.camera();
        cam.apply(CameraAction::MoveForward);
        let f = s.assemble(&cam, &Viewport::new(800, 600), true);
        let overlay = f.commands.pass("overlay").unwrap();
        match &overlay[0] {
            DrawCommand::ScreenOverlay(o) => {
                assert!(o.labels.iter().any(|l| l.text == "Z: -1.05"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = RoomConfig::default();
        config.frames.frames.clear();
        assert!(matches!(RoomScene::new(config), Err(SceneError::Layout(_))));
    }

    #[test]
    fn anchor_frame_has_no_curtain() {
        let s = scene();
        assert!(s.config().curtains.plans.iter().all(|p| p.frame != s.config().frames.anchor_index));
    }
}
