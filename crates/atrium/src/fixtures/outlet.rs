use crate::material::{palette, Material};
use crate::math::{Transform, Vec2, Vec3};
use crate::scene::CommandList;

const PLATE: Vec3 = Vec3::new(0.58, 0.90, 0.03);
const INSET: Vec3 = Vec3::new(0.50, 0.82, 0.015);
const DETAIL_DEPTH: f32 = 0.01;

const PLATE_MATERIAL: Material = Material::new(palette::OUTLET_PLATE).with_shininess(30.0);
const FACE_MATERIAL: Material = Material::new(palette::OUTLET_FACE).with_shininess(20.0);
const SCREW_MATERIAL: Material = Material::new(palette::OUTLET_SCREW).with_shininess(60.0);
const SLOT_MATERIAL: Material = Material::new(palette::OUTLET_SLOT).with_shininess(5.0);

/// Screws, then slots: (offset from center, size in XY).
const DETAILS: [(Vec2, Vec2, Material); 8] = [
    (Vec2::new(0.0, 0.32), Vec2::new(0.05, 0.05), SCREW_MATERIAL),
    (Vec2::new(0.0, -0.32), Vec2::new(0.05, 0.05), SCREW_MATERIAL),
    (Vec2::new(-0.08, 0.16), Vec2::new(0.03, 0.14), SLOT_MATERIAL),
    (Vec2::new(0.08, 0.16), Vec2::new(0.03, 0.14), SLOT_MATERIAL),
    (Vec2::new(0.0, 0.08), Vec2::new(0.07, 0.05), SLOT_MATERIAL),
    (Vec2::new(-0.08, -0.16), Vec2::new(0.03, 0.14), SLOT_MATERIAL),
    (Vec2::new(0.08, -0.16), Vec2::new(0.03, 0.14), SLOT_MATERIAL),
    (Vec2::new(0.0, -0.24), Vec2::new(0.07, 0.05), SLOT_MATERIAL),
];

/// A duplex wall outlet: plate, raised face, two screws and two receptacles.
/// Layers stack outward from the wall so nothing z-fights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricalOutlet {
    pub center: Vec2,
    pub wall_front_z: f32,
}

impl ElectricalOutlet {
    pub const BOX_COUNT: usize = 2 + DETAILS.len();

    pub fn new(center: Vec2, wall_front_z: f32) -> Self {
        Self { center, wall_front_z }
    }

    /// Boxes from the wall outward.
    pub fn pieces(&self) -> Vec<(Transform, Material)> {
        let z0 = self.wall_front_z;
        let at = |offset: Vec2, z: f32| Vec3::new(self.center.x + offset.x, self.center.y + offset.y, z);

        let mut out = Vec::with_capacity(Self::BOX_COUNT);
        out.push((Transform::boxed(at(Vec2::ZERO, z0 + PLATE.z * 0.5), PLATE), PLATE_MATERIAL));
        out.push((
            Transform::boxed(at(Vec2::ZERO, z0 + PLATE.z + INSET.z * 0.5), INSET),
            FACE_MATERIAL,
        ));
        let detail_z = z0 + PLATE.z + INSET.z + DETAIL_DEPTH * 0.5;
        for (offset, size, material) in DETAILS {
            out.push((
                Transform::boxed(at(offset, detail_z), size.extend(DETAIL_DEPTH)),
                material,
            ));
        }
        out
    }

    pub fn build(&self, out: &mut CommandList) {
        for (transform, material) in self.pieces() {
            out.cuboid(transform, material);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_boxes() {
        let o = ElectricalOutlet::new(Vec2::new(2.0, -3.0), -5.89);
        assert_eq!(o.pieces().len(), 10);
        assert_eq!(ElectricalOutlet::BOX_COUNT, 10);
    }

    #[test]
    fn layers_stack_off_the_wall() {
        let o = ElectricalOutlet::new(Vec2::ZERO, 0.0);
        let pieces = o.pieces();
        let plate = pieces[0].0;
        let face = pieces[1].0;
        assert!(plate.box_min().z.abs() < 1e-6);
        assert!((face.box_min().z - plate.box_max().z).abs() < 1e-6);
        for (detail, _) in &pieces[2..] {
            assert!((detail.box_min().z - face.box_max().z).abs() < 1e-6);
        }
    }

    #[test]
    fn details_stay_inside_the_face() {
        let o = ElectricalOutlet::new(Vec2::new(1.0, 1.0), 0.0);
        let pieces = o.pieces();
        let face = pieces[1].0;
        for (detail, _) in &pieces[2..] {
            assert!(detail.box_min().x > face.box_min().x && detail.box_max().x < face.box_max().x);
            assert!(detail.box_min().y > face.box_min().y && detail.box_max().y < face.box_max().y);
        }
    }
}
