//! Curtain segments: a top-aligned main panel, a separately placed bottom
//! band, and translucent overlays that read as one continuous fabric.
//!
//! ```text
//!   top_y ─┬─────────────┐  main panel      V 0
//!          │             │
//!          │             │                  V main_bottom
//!          ├ ─ ─ ─ ─ ─ ─ ┤  bridge overlay  (gap only)
//!          │             │                  V band_top
//!          ├─────────────┤  bottom band
//!          └─────────────┘  band bottom ≥ frame bottom   V 1
//! ```
//!
//! All three overlays share one V range over the combined height from the
//! main panel's top to the band's bottom, so the texture continues through
//! the gap.

use serde::{Deserialize, Serialize};

use super::glass::GlassOverlay;
use super::window_frame::FRAME_MATERIAL;
use crate::layout::FrameSlot;
use crate::math::{Transform, Vec2, Vec3};
use crate::scene::CommandList;

/// Below this, widths, heights and gaps count as zero.
pub const MIN_EXTENT: f32 = 0.001;

/// Z offset of the band box in front of the main panel.
const BAND_Z_OFFSET: f32 = 0.01;
/// Z offset of the bridge overlay; between main and band.
const BRIDGE_Z_OFFSET: f32 = 0.005;

/// Shared curtain constants for a whole row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurtainStyle {
    pub depth: f32,
    /// Distance from the frame's mid-depth to the curtain's center.
    pub z_offset: f32,
    pub overlay_alpha: f32,
    pub overlay_forward_offset: f32,
    pub base_band_height: f32,
    /// Subtracted from every curtain height so panels stay under the frame top.
    pub height_trim: f32,
}

impl Default for CurtainStyle {
    fn default() -> Self {
        Self {
            depth: 0.03,
            z_offset: 0.05,
            overlay_alpha: 0.1,
            overlay_forward_offset: 0.015,
            base_band_height: 0.38,
            height_trim: 1.0,
        }
    }
}

/// A curtain hung on one frame of the row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurtainPlan {
    /// Index into the frame row.
    pub frame: usize,
    /// Panel height as a fraction of the frame height (before the trim).
    pub height_fraction: f32,
    /// Band height as a multiple of [`CurtainStyle::base_band_height`].
    #[serde(default = "unit")]
    pub band_scale: f32,
    /// How far the band bottom sits above the frame bottom.
    #[serde(default)]
    pub band_lift: f32,
}

fn unit() -> f32 {
    1.0
}

impl CurtainPlan {
    pub fn new(frame: usize, height_fraction: f32) -> Self {
        Self {
            frame,
            height_fraction,
            band_scale: 1.0,
            band_lift: 0.0,
        }
    }

    pub fn with_band(mut self, scale: f32, lift: f32) -> Self {
        self.band_scale = scale;
        self.band_lift = lift;
        self
    }

    /// Bind the plan to its frame. Left edge and width always come from the
    /// frame; every curtain hangs from the frame top.
    pub fn segment(&self, slot: &FrameSlot, frame_height: f32, frame_center: Vec3, frame_depth: f32, style: &CurtainStyle) -> CurtainSegment {
        let frame_top = frame_center.y + frame_height * 0.5;
        let frame_bottom = frame_center.y - frame_height * 0.5;
        CurtainSegment {
            left_x: slot.left,
            width: slot.width,
            top_y: frame_top,
            height: frame_height * self.height_fraction - style.height_trim,
            center_z: frame_center.z + frame_depth * 0.5 + style.z_offset,
            depth: style.depth,
            band_height: style.base_band_height * self.band_scale,
            min_band_bottom_y: frame_bottom,
            band_bottom_y: frame_bottom + self.band_lift,
            overlay_alpha: style.overlay_alpha,
            overlay_forward_offset: style.overlay_forward_offset,
        }
    }
}

/// One curtain with every number resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurtainSegment {
    pub left_x: f32,
    pub width: f32,
    pub top_y: f32,
    pub height: f32,
    pub center_z: f32,
    pub depth: f32,
    pub band_height: f32,
    /// The band bottom never goes below this.
    pub min_band_bottom_y: f32,
    /// Requested band bottom.
    pub band_bottom_y: f32,
    pub overlay_alpha: f32,
    pub overlay_forward_offset: f32,
}

/// Resolved boxes and overlays of a curtain.
#[derive(Debug, Clone, PartialEq)]
pub struct CurtainGeometry {
    pub main: Transform,
    pub band: Transform,
    pub main_overlay: GlassOverlay,
    pub band_overlay: GlassOverlay,
    pub bridge_overlay: Option<GlassOverlay>,
}

impl CurtainSegment {
    pub fn is_degenerate(&self) -> bool {
        self.width <= MIN_EXTENT || self.height <= MIN_EXTENT
    }

    /// Band height limited to the panel height and kept positive.
    pub fn clamped_band_height(&self) -> f32 {
        self.band_height.min(self.height).max(MIN_EXTENT)
    }

    pub fn clamped_band_bottom(&self) -> f32 {
        self.band_bottom_y.max(self.min_band_bottom_y)
    }

    pub fn main_bottom(&self) -> f32 {
        self.top_y - self.height
    }

    pub fn band_top(&self) -> f32 {
        self.clamped_band_bottom() + self.clamped_band_height()
    }

    /// Returns `None` when the curtain is too small to draw.
    pub fn geometry(&self) -> Option<CurtainGeometry> {
        if self.is_degenerate() {
            return None;
        }

        let cx = self.left_x + self.width * 0.5;
        let main_cy = self.top_y - self.height * 0.5;
        let band_h = self.clamped_band_height();
        let band_bottom = self.clamped_band_bottom();
        let band_cy = band_bottom + band_h * 0.5;
        let band_z = self.center_z + BAND_Z_OFFSET;

        let main_top = self.top_y;
        let main_bottom = self.main_bottom();
        let band_top = self.band_top();
        let combined = (main_top - band_bottom).max(MIN_EXTENT);

        let main_v_bottom = (main_top - main_bottom) / combined;
        let band_v_top = (main_top - band_top) / combined;

        let overlay = |center_y: f32, center_z: f32, height: f32, v_top: f32, v_bottom: f32| {
            GlassOverlay::new(
                Vec2::new(cx, center_y),
                center_z - self.depth * 0.5,
                self.width,
                height,
                self.depth,
            )
            .with_alpha(self.overlay_alpha, self.overlay_forward_offset)
            .with_v_range(v_top, v_bottom)
        };

        let gap = main_bottom - band_top;
        let bridge_overlay = (gap > MIN_EXTENT).then(|| {
            overlay(
                (main_bottom + band_top) * 0.5,
                self.center_z + BRIDGE_Z_OFFSET,
                gap,
                main_v_bottom,
                band_v_top,
            )
        });

        Some(CurtainGeometry {
            main: Transform::boxed(Vec3::new(cx, main_cy, self.center_z), Vec3::new(self.width, self.height, self.depth)),
            band: Transform::boxed(Vec3::new(cx, band_cy, band_z), Vec3::new(self.width, band_h, self.depth)),
            main_overlay: overlay(main_cy, self.center_z, self.height, 0.0, main_v_bottom),
            band_overlay: overlay(band_cy, band_z, band_h, band_v_top, 1.0),
            bridge_overlay,
        })
    }

    pub fn build(&self, out: &mut CommandList) {
        let Some(g) = self.geometry() else {
            log::debug!("skipping degenerate curtain at x={}", self.left_x);
            return;
        };
        out.cuboid(g.main, FRAME_MATERIAL);
        out.cuboid(g.band, FRAME_MATERIAL);
        g.main_overlay.build(out);
        g.band_overlay.build(out);
        if let Some(bridge) = g.bridge_overlay {
            bridge.build(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::command::{cuboids, quads};

    const EPS: f32 = 1e-5;

    fn segment() -> CurtainSegment {
        CurtainSegment {
            left_x: 0.0,
            width: 15.4,
            top_y: 13.5,
            height: 14.0 * 0.45 - 1.0,
            center_z: -5.89,
            depth: 0.03,
            band_height: 0.38,
            min_band_bottom_y: -0.5,
            band_bottom_y: -0.5 + 2.02,
            overlay_alpha: 0.1,
            overlay_forward_offset: 0.015,
        }
    }

    #[test]
    fn band_never_drops_below_frame_bottom() {
        let mut s = segment();
        s.band_bottom_y = -3.0;
        let g = s.geometry().unwrap();
        assert!((g.band.box_min().y - s.min_band_bottom_y).abs() < EPS);
        assert!(g.band.box_min().y >= s.min_band_bottom_y - EPS);
    }

    #[test]
    fn band_height_is_clamped() {
        let mut s = segment();
        s.band_height = 100.0;
        assert_eq!(s.clamped_band_height(), s.height);
        s.band_height = 0.0;
        assert_eq!(s.clamped_band_height(), MIN_EXTENT);
    }

    #[test]
    fn v_range_is_continuous_across_the_gap() {
        let g = segment().geometry().unwrap();
        let bridge = g.bridge_overlay.expect("gap expected");
        assert_eq!(g.main_overlay.tex_v_top, 0.0);
        assert_eq!(g.main_overlay.tex_v_bottom, bridge.tex_v_top);
        assert_eq!(bridge.tex_v_bottom, g.band_overlay.tex_v_top);
        assert_eq!(g.band_overlay.tex_v_bottom, 1.0);
        // The bridge exactly fills the gap.
        let s = segment();
        assert!((bridge.center.y + bridge.height * 0.5 - s.main_bottom()).abs() < EPS);
        assert!((bridge.center.y - bridge.height * 0.5 - s.band_top()).abs() < EPS);
    }

    #[test]
    fn overlapping_band_has_no_bridge() {
        let mut s = segment();
        s.height = 14.0 - 1.0;
        s.band_bottom_y = s.min_band_bottom_y + 2.02;
        assert!(s.geometry().unwrap().bridge_overlay.is_none());

        let mut out = CommandList::new();
        s.build(&mut out);
        assert_eq!(cuboids(out.commands()).count(), 2);
        assert_eq!(quads(out.commands()).count(), 2);
    }

    #[test]
    fn build_emits_boxes_then_overlays() {
        let mut out = CommandList::new();
        segment().build(&mut out);
        let kinds: Vec<_> = out.iter().map(|c| c.kind()).collect();
        assert_eq!(kinds, ["cuboid", "cuboid", "quad", "quad", "quad"]);
        let band = cuboids(out.commands()).nth(1).unwrap();
        assert!((band.transform.translation.z - (-5.88)).abs() < EPS);
    }

    #[test]
    fn degenerate_curtains_are_skipped() {
        let mut s = segment();
        s.width = 0.0005;
        let mut out = CommandList::new();
        s.build(&mut out);
        assert!(out.is_empty());
        s.width = 1.0;
        s.height = -1.0;
        assert!(s.geometry().is_none());
    }

    #[test]
    fn plan_binds_to_frame() {
        let slot = FrameSlot {
            width: 15.4,
            left: -10.0,
            right: 5.4,
            center: -2.3,
            has_middle: true,
        };
        let plan = CurtainPlan::new(2, 0.52).with_band(1.08, 1.14);
        let s = plan.segment(&slot, 14.0, Vec3::new(-2.3, 6.5, -6.0), 0.12, &CurtainStyle::default());
        assert_eq!(s.left_x, -10.0);
        assert_eq!(s.width, 15.4);
        assert_eq!(s.top_y, 13.5);
        assert!((s.height - 6.28).abs() < EPS);
        assert!((s.band_height - 0.4104).abs() < EPS);
        assert!((s.band_bottom_y - 0.64).abs() < EPS);
        assert!((s.center_z - (-5.89)).abs() < EPS);
    }
}
