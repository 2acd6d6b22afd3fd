//! Screen-space overlays: the camera readout and the coordinate-axis gizmo.
//!
//! Coordinates are pixels with the origin at the bottom-left of the window
//! and Y pointing up, so both overlays hug the top edge.
//!
//! ```text
//!  ┌──────────────────────────────────────────┐
//!  │ Camera: X 4.00 ...    X: 4.00     Y      │
//!  │                       Y: 1.75     │      │
//!  │                       Z: -0.55    ●── X  │
//!  │                                  ╱       │
//!  │                                 Z        │
//! ```

use serde::Serialize;

use crate::camera::Viewport;
use crate::material::Color;
use crate::math::{Vec2, Vec3};

/// Pixel length of the X and Y axes.
pub const AXIS_LENGTH: f32 = 55.0;
/// Gap between the gizmo and the window edge.
pub const AXIS_MARGIN: f32 = 16.0;
/// The Z axis is drawn diagonally and shorter.
pub const Z_AXIS_SCALE: f32 = 0.45;

pub const X_AXIS_COLOR: Color = Color::new(0.95, 0.2, 0.2);
pub const Y_AXIS_COLOR: Color = Color::new(0.2, 0.85, 0.2);
pub const Z_AXIS_COLOR: Color = Color::new(0.2, 0.45, 0.95);

const READOUT_SHADOW: Color = Color::gray(0.95);

/// A 2D line segment in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayLine {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Color,
}

/// Text placed at a pixel position (baseline left).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayLabel {
    pub position: Vec2,
    pub text: String,
    pub color: Color,
}

/// Everything drawn on top of the 3D scene in one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScreenOverlay {
    pub width: u32,
    pub height: u32,
    pub lines: Vec<OverlayLine>,
    pub labels: Vec<OverlayLabel>,
}

impl ScreenOverlay {
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            ..Default::default()
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.lines.push(OverlayLine { from, to, color });
    }

    fn label(&mut self, x: f32, y: f32, text: impl Into<String>, color: Color) {
        self.labels.push(OverlayLabel {
            position: Vec2::new(x, y),
            text: text.into(),
            color,
        });
    }
}

/// The top-left position readout, e.g. `Camera: X 4.00  Y 1.75  Z -0.55`.
pub fn camera_readout(position: Vec3) -> String {
    format!(
        "Camera: X {:.2}  Y {:.2}  Z {:.2}",
        position.x, position.y, position.z
    )
}

/// Camera readout only: dark text over a light drop shadow.
pub fn camera_readout_overlay(viewport: &Viewport, position: Vec3) -> ScreenOverlay {
    let mut overlay = ScreenOverlay::new(viewport);
    let h = viewport.height as f32;
    let text = camera_readout(position);
    overlay.label(11.0, h - 19.0, text.clone(), READOUT_SHADOW);
    overlay.label(10.0, h - 20.0, text, Color::BLACK);
    overlay
}

/// The axis gizmo in the top-right corner plus per-axis numeric readouts.
pub fn coordinate_axes(viewport: &Viewport, position: Vec3) -> ScreenOverlay {
    let mut overlay = ScreenOverlay::new(viewport);
    let w = viewport.width as f32;
    let h = viewport.height as f32;

    let ox = w - AXIS_MARGIN - AXIS_LENGTH;
    let oy = h - AXIS_MARGIN - AXIS_LENGTH;
    let origin = Vec2::new(ox, oy);
    let z = AXIS_LENGTH * Z_AXIS_SCALE;

    overlay.line(origin, Vec2::new(ox + AXIS_LENGTH, oy), X_AXIS_COLOR);
    overlay.line(origin, Vec2::new(ox, oy + AXIS_LENGTH), Y_AXIS_COLOR);
    overlay.line(origin, Vec2::new(ox - z, oy - z), Z_AXIS_COLOR);

    overlay.label(ox + AXIS_LENGTH + 6.0, oy - 4.0, "X", X_AXIS_COLOR);
    overlay.label(ox - 4.0, oy + AXIS_LENGTH + 8.0, "Y", Y_AXIS_COLOR);
    overlay.label(ox - z - 12.0, oy - z - 4.0, "Z", Z_AXIS_COLOR);

    let rx = w - 150.0;
    overlay.label(rx, h - 20.0, format!("X: {:.2}", position.x), X_AXIS_COLOR);
    overlay.label(rx, h - 36.0, format!("Y: {:.2}", position.y), Y_AXIS_COLOR);
    overlay.label(rx, h - 52.0, format!("Z: {:.2}", position.z), Z_AXIS_COLOR);

    overlay
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_uses_two_decimals() {
        assert_eq!(
            camera_readout(Vec3::new(4.0, 1.75, -0.55)),
            "Camera: X 4.00  Y 1.75  Z -0.55"
        );
    }

    #[test]
    fn readout_has_shadow_then_text() {
        let o = camera_readout_overlay(&Viewport::new(800, 600), Vec3::ZERO);
        assert_eq!(o.labels.len(), 2);
        assert_eq!(o.labels[0].position, Vec2::new(11.0, 581.0));
        assert_eq!(o.labels[1].position, Vec2::new(10.0, 580.0));
        assert_eq!(o.labels[1].color, Color::BLACK);
    }

    #[test]
    fn axes_anchor_top_right() {
        let o = coordinate_axes(&Viewport::new(800, 600), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(o.lines.len(), 3);
        assert_eq!(o.lines[0].from, Vec2::new(729.0, 529.0));
        assert_eq!(o.lines[0].to, Vec2::new(784.0, 529.0));
        assert_eq!(o.lines[1].to, Vec2::new(729.0, 584.0));
        let z_len = o.lines[2].from.distance(o.lines[2].to);
        assert!((z_len - 24.75 * 2f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn axes_readout_lines() {
        let o = coordinate_axes(&Viewport::new(800, 600), Vec3::new(1.0, -2.5, 3.1));
        let texts: Vec<_> = o.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["X", "Y", "Z", "X: 1.00", "Y: -2.50", "Z: 3.10"]);
        assert_eq!(o.labels[3].position, Vec2::new(650.0, 580.0));
    }
}
