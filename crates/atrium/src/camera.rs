//! # Camera — First-Person Pose, Steps and Fly Controls
//!
//! The camera is an explicit value passed by reference to the frame
//! builders. It is only mutated through [`CameraAction`]s (discrete key
//! presses) or a [`FlyController`] update (held keys scaled by delta time).
//!
//! ## Conventions
//!
//! Angles are degrees. Yaw 0 looks down −Z; positive yaw turns right
//! (toward +X). Positive pitch looks up and is clamped to ±89° so the view
//! never flips over the pole.
//!
//! ```text
//!   direction = (cos p · sin y,  sin p,  −cos p · cos y)
//!   forward   = (sin y, 0, −cos y)        // ground-plane motion ignores pitch
//!   right     = (cos y, 0,  sin y)
//! ```

use serde::{Deserialize, Serialize};

use crate::math::{Mat4, Vec3};

/// Highest (and, negated, lowest) allowed pitch in degrees.
pub const PITCH_LIMIT: f32 = 89.0;

/// Position plus yaw/pitch in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub pitch: f32,
    pub yaw: f32,
}

impl CameraPose {
    /// Standing inside the room, facing the window row.
    pub const ROOM_HOME: Self = Self::new(Vec3::new(4.0, 1.75, -0.55), 0.0, 0.0);

    pub const fn new(position: Vec3, pitch: f32, yaw: f32) -> Self {
        Self { position, pitch, yaw }
    }

    /// Unit look direction.
    pub fn direction(&self) -> Vec3 {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        Vec3::new(cp * sy, sp, -cp * cy)
    }

    /// Horizontal forward vector (pitch ignored).
    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        Vec3::new(sy, 0.0, -cy)
    }

    /// Horizontal right vector.
    pub fn right(&self) -> Vec3 {
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        Vec3::new(cy, 0.0, sy)
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::ROOM_HOME
    }
}

/// A discrete camera step, one per key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraAction {
    MoveForward,
    MoveBack,
    StrafeLeft,
    StrafeRight,
    Ascend,
    Descend,
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
    Reset,
}

/// The live camera: current pose, the pose `Reset` returns to, and step sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub pose: CameraPose,
    pub home: CameraPose,
    /// World units per movement step.
    pub move_step: f32,
    /// Degrees per rotation step.
    pub rotate_step: f32,
}

impl CameraState {
    pub const DEFAULT_MOVE_STEP: f32 = 0.5;
    pub const DEFAULT_ROTATE_STEP: f32 = 2.0;

    /// A camera at `home` with the default step sizes.
    pub fn new(home: CameraPose) -> Self {
        Self {
            pose: home,
            home,
            move_step: Self::DEFAULT_MOVE_STEP,
            rotate_step: Self::DEFAULT_ROTATE_STEP,
        }
    }

    pub fn with_steps(mut self, move_step: f32, rotate_step: f32) -> Self {
        self.move_step = move_step;
        self.rotate_step = rotate_step;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    pub fn pitch(&self) -> f32 {
        self.pose.pitch
    }

    pub fn yaw(&self) -> f32 {
        self.pose.yaw
    }

    /// Apply one discrete step.
    pub fn apply(&mut self, action: CameraAction) {
        let s = self.move_step;
        let forward = self.pose.forward();
        let right = self.pose.right();
        match action {
            CameraAction::MoveForward => self.pose.position += forward * s,
            CameraAction::MoveBack => self.pose.position -= forward * s,
            CameraAction::StrafeLeft => self.pose.position -= right * s,
            CameraAction::StrafeRight => self.pose.position += right * s,
            CameraAction::Ascend => self.pose.position.y += s,
            CameraAction::Descend => self.pose.position.y -= s,
            CameraAction::PitchUp => self.add_pitch(self.rotate_step),
            CameraAction::PitchDown => self.add_pitch(-self.rotate_step),
            CameraAction::YawLeft => self.pose.yaw -= self.rotate_step,
            CameraAction::YawRight => self.pose.yaw += self.rotate_step,
            CameraAction::Reset => self.reset(),
        }
    }

    pub fn reset(&mut self) {
        self.pose = self.home;
    }

    /// Add to pitch, clamped to ±[`PITCH_LIMIT`].
    pub fn add_pitch(&mut self, degrees: f32) {
        self.pose.pitch = (self.pose.pitch + degrees).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn direction(&self) -> Vec3 {
        self.pose.direction()
    }

    /// The point one unit along the look direction.
    pub fn look_at(&self) -> Vec3 {
        self.pose.position + self.direction()
    }

    /// Right-handed view matrix with +Y up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.pose.position, self.look_at(), Vec3::Y)
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(CameraPose::ROOM_HOME)
    }
}

/// Window size and perspective parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Vertical field of view in degrees.
    pub const FOV_Y_DEGREES: f32 = 45.0;
    pub const NEAR: f32 = 0.1;
    pub const FAR: f32 = 100.0;

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; a zero height counts as 1.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(Self::FOV_Y_DEGREES.to_radians(), self.aspect(), Self::NEAR, Self::FAR)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(625, 738)
    }
}

/// Held-key motion for one frame, each axis in `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionIntent {
    pub forward: f32,
    pub right: f32,
    pub up: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl MotionIntent {
    /// Accumulate the continuous part of a camera action.
    pub fn add(&mut self, action: CameraAction) {
        match action {
            CameraAction::MoveForward => self.forward += 1.0,
            CameraAction::MoveBack => self.forward -= 1.0,
            CameraAction::StrafeRight => self.right += 1.0,
            CameraAction::StrafeLeft => self.right -= 1.0,
            CameraAction::Ascend => self.up += 1.0,
            CameraAction::Descend => self.up -= 1.0,
            CameraAction::YawRight => self.yaw += 1.0,
            CameraAction::YawLeft => self.yaw -= 1.0,
            CameraAction::PitchUp => self.pitch += 1.0,
            CameraAction::PitchDown => self.pitch -= 1.0,
            CameraAction::Reset => {}
        }
    }
}

/// Frame-rate independent movement from held keys.
///
/// The move vector is normalized so diagonals are no faster than a single
/// axis, and delta time is capped so a stalled frame can't teleport the
/// camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyController {
    /// World units per second.
    pub move_speed: f32,
    /// Degrees per second.
    pub look_speed: f32,
    /// Largest delta time applied in one update, in seconds.
    pub max_delta: f32,
}

impl Default for FlyController {
    fn default() -> Self {
        Self {
            move_speed: 7.5,
            look_speed: 90.0,
            max_delta: 0.05,
        }
    }
}

impl FlyController {
    pub fn update(&self, camera: &mut CameraState, intent: MotionIntent, dt: f32) {
        let dt = dt.clamp(0.0, self.max_delta);

        let pose = camera.pose;
        let motion = pose.forward() * intent.forward + pose.right() * intent.right + Vec3::Y * intent.up;
        if motion.length() > 1e-4 {
            camera.pose.position += motion.normalize() * self.move_speed * dt;
        }

        camera.pose.yaw += intent.yaw * self.look_speed * dt;
        camera.add_pitch(intent.pitch * self.look_speed * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn forward_step_at_zero_yaw_moves_down_negative_z() {
        let mut cam = CameraState::default();
        cam.apply(CameraAction::MoveForward);
        assert!((cam.position() - Vec3::new(4.0, 1.75, -1.05)).length() < EPS);
    }

    #[test]
    fn strafe_follows_yaw() {
        let mut cam = CameraState::new(CameraPose::new(Vec3::ZERO, 0.0, 90.0));
        cam.apply(CameraAction::StrafeLeft);
        // right = (cos 90, 0, sin 90) = +Z, so left is -Z
        assert!((cam.position() - Vec3::new(0.0, 0.0, -0.5)).length() < EPS);
        cam.apply(CameraAction::MoveForward);
        assert!((cam.position() - Vec3::new(0.5, 0.0, -0.5)).length() < EPS);
    }

    #[test]
    fn vertical_steps() {
        let mut cam = CameraState::default();
        cam.apply(CameraAction::Ascend);
        cam.apply(CameraAction::Ascend);
        cam.apply(CameraAction::Descend);
        assert!((cam.position().y - 2.25).abs() < EPS);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = CameraState::default();
        for _ in 0..60 {
            cam.apply(CameraAction::PitchUp);
        }
        assert_eq!(cam.pitch(), PITCH_LIMIT);
        for _ in 0..120 {
            cam.apply(CameraAction::PitchDown);
        }
        assert_eq!(cam.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn yaw_is_unbounded() {
        let mut cam = CameraState::default();
        for _ in 0..200 {
            cam.apply(CameraAction::YawRight);
        }
        assert!((cam.yaw() - 400.0).abs() < 1e-3);
    }

    #[test]
    fn reset_returns_home() {
        let mut cam = CameraState::default();
        cam.apply(CameraAction::MoveForward);
        cam.apply(CameraAction::PitchUp);
        cam.apply(CameraAction::Reset);
        assert_eq!(cam.pose, CameraPose::ROOM_HOME);
    }

    #[test]
    fn direction_is_unit_and_matches_formula() {
        let pose = CameraPose::new(Vec3::ZERO, 30.0, 45.0);
        let d = pose.direction();
        assert!((d.length() - 1.0).abs() < EPS);
        let (p, y) = (30f32.to_radians(), 45f32.to_radians());
        assert!((d - Vec3::new(p.cos() * y.sin(), p.sin(), -p.cos() * y.cos())).length() < EPS);
    }

    #[test]
    fn view_matrix_maps_look_at_onto_negative_z() {
        let cam = CameraState::new(CameraPose::new(Vec3::new(1.0, 2.0, 3.0), 10.0, -20.0));
        let p = cam.view_matrix().transform_point3(cam.look_at());
        assert!((p - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4);
    }

    #[test]
    fn zero_height_viewport_is_safe() {
        let vp = Viewport::new(800, 0);
        assert_eq!(vp.aspect(), 800.0);
        assert!(vp.projection().is_finite());
    }

    #[test]
    fn fly_moves_at_speed_and_clamps_dt() {
        let fly = FlyController::default();
        let mut cam = CameraState::new(CameraPose::new(Vec3::ZERO, 0.0, 0.0));
        let mut intent = MotionIntent::default();
        intent.add(CameraAction::MoveForward);
        fly.update(&mut cam, intent, 1.0);
        // dt capped at 0.05 s -> 0.375 units
        assert!((cam.position() - Vec3::new(0.0, 0.0, -0.375)).length() < EPS);
    }

    #[test]
    fn fly_diagonals_are_normalized() {
        let fly = FlyController::default();
        let mut cam = CameraState::new(CameraPose::new(Vec3::ZERO, 0.0, 0.0));
        let mut intent = MotionIntent::default();
        intent.add(CameraAction::MoveForward);
        intent.add(CameraAction::StrafeRight);
        intent.add(CameraAction::Ascend);
        fly.update(&mut cam, intent, 0.02);
        assert!((cam.position().length() - 7.5 * 0.02).abs() < EPS);
    }

    #[test]
    fn fly_pitch_respects_limit() {
        let fly = FlyController::default();
        let mut cam = CameraState::default();
        let intent = MotionIntent { pitch: 1.0, ..Default::default() };
        for _ in 0..100 {
            fly.update(&mut cam, intent, 0.05);
        }
        assert_eq!(cam.pitch(), PITCH_LIMIT);
    }
}
