use serde::{Deserialize, Serialize};

use crate::material::{palette, Material};
use crate::math::Vec3;
use crate::scene::CommandList;

pub const CORD_MATERIAL: Material = Material::new(palette::CORD).with_shininess(10.0);

/// Bead pitch as a multiple of the bead radius.
pub const BEAD_SPACING: f32 = 2.2;
/// Knob radius as a multiple of the bead radius.
pub const KNOB_SCALE: f32 = 2.5;

/// A blinds pull cord: a vertical chain of beads hanging from `top`, with an
/// optional larger knob at `top.y - length`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawString {
    pub top: Vec3,
    pub length: f32,
    pub bead_radius: f32,
    /// Slices and stacks of every bead sphere.
    pub segments: u32,
    pub knob: bool,
}

impl DrawString {
    pub fn new(top: Vec3, length: f32) -> Self {
        Self {
            top,
            length,
            bead_radius: 0.03,
            segments: 8,
            knob: true,
        }
    }

    pub fn with_knob(mut self, knob: bool) -> Self {
        self.knob = knob;
        self
    }

    pub fn spacing(&self) -> f32 {
        self.bead_radius * BEAD_SPACING
    }

    /// Always at least one bead. A non-positive spacing keeps only the top bead.
    pub fn bead_count(&self) -> usize {
        let spacing = self.spacing();
        if !(spacing > 0.0) || !self.length.is_finite() {
            return 1;
        }
        ((self.length / spacing).floor() as usize).max(1)
    }

    pub fn bead_centers(&self) -> impl Iterator<Item = Vec3> + '_ {
        let spacing = self.spacing();
        (0..self.bead_count()).map(move |i| self.top - Vec3::Y * (i as f32 * spacing))
    }

    pub fn knob_center(&self) -> Option<Vec3> {
        self.knob.then(|| self.top - Vec3::Y * self.length)
    }

    pub fn build(&self, out: &mut CommandList) {
        for center in self.bead_centers() {
            out.sphere(center, self.bead_radius, self.segments, CORD_MATERIAL);
        }
        if let Some(center) = self.knob_center() {
            out.sphere(center, self.bead_radius * KNOB_SCALE, self.segments, CORD_MATERIAL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::command::spheres;

    #[test]
    fn beads_are_evenly_spaced() {
        let s = DrawString::new(Vec3::new(1.0, 13.5, -5.83), 1.0);
        assert_eq!(s.bead_count(), 15);
        let centers: Vec<_> = s.bead_centers().collect();
        assert_eq!(centers[0], s.top);
        assert!((centers[1].y - (13.5 - 0.066)).abs() < 1e-5);
    }

    #[test]
    fn short_cord_keeps_one_bead() {
        let s = DrawString::new(Vec3::ZERO, 0.01);
        assert_eq!(s.bead_count(), 1);
    }

    #[test]
    fn zero_bead_radius_keeps_one_bead() {
        let s = DrawString { bead_radius: 0.0, ..DrawString::new(Vec3::ZERO, 10.75) };
        assert_eq!(s.bead_count(), 1);
        let s = DrawString { bead_radius: -0.03, ..DrawString::new(Vec3::ZERO, 10.75) };
        assert_eq!(s.bead_count(), 1);
        assert_eq!(s.bead_centers().count(), 1);
    }

    #[test]
    fn knob_hangs_at_the_end() {
        let mut out = CommandList::new();
        DrawString::new(Vec3::new(0.0, 2.0, 0.0), 1.25).build(&mut out);
        let beads: Vec<_> = spheres(out.commands()).collect();
        let knob = beads.last().unwrap();
        assert!((knob.center.y - 0.75).abs() < 1e-6);
        assert!((knob.radius - 0.075).abs() < 1e-6);
        assert_eq!(knob.slices, 8);
        assert_eq!(knob.material, CORD_MATERIAL);
    }

    #[test]
    fn knob_is_optional() {
        let s = DrawString::new(Vec3::ZERO, 1.0).with_knob(false);
        assert!(s.knob_center().is_none());
        let mut out = CommandList::new();
        s.build(&mut out);
        assert_eq!(out.len(), s.bead_count());
    }
}
