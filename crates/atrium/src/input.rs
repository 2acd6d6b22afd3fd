//! Keyboard state and the key-to-action contract.
//!
//! The [`Input`] tracker records which keys are currently held, just pressed
//! this frame, or just released this frame. [`KeyMap`] turns physical keys
//! into [`Action`]s:
//!
//! | Key          | Action                    |
//! |--------------|---------------------------|
//! | W / S        | move forward / back       |
//! | A / D        | strafe left / right       |
//! | Q / E        | move up / down            |
//! | ↑ / ↓        | pitch up / down (±89°)    |
//! | ← / →        | yaw left / right          |
//! | R            | reset to the home pose    |
//! | C            | toggle coordinate overlay |
//! | Esc          | exit                      |

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

pub use winit::keyboard::KeyCode;

use crate::camera::{CameraAction, MotionIntent};

/// Tracks the state of a set of inputs (keys or buttons).
///
/// - `pressed`: currently held down
/// - `just_pressed`: pressed this frame (not held last frame)
/// - `just_released`: released this frame
#[derive(Debug, Clone)]
pub struct Input<T: Eq + Hash + Copy> {
    pressed: HashSet<T>,
    just_pressed: HashSet<T>,
    just_released: HashSet<T>,
}

impl<T: Eq + Hash + Copy> Input<T> {
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
        }
    }

    /// Returns `true` if the input is currently held down.
    pub fn pressed(&self, input: T) -> bool {
        self.pressed.contains(&input)
    }

    /// Returns `true` if the input was pressed this frame.
    pub fn just_pressed(&self, input: T) -> bool {
        self.just_pressed.contains(&input)
    }

    /// Returns `true` if the input was released this frame.
    pub fn just_released(&self, input: T) -> bool {
        self.just_released.contains(&input)
    }

    /// Call when an input is pressed. Key repeat does not re-trigger
    /// `just_pressed`.
    pub fn press(&mut self, input: T) {
        if self.pressed.insert(input) {
            self.just_pressed.insert(input);
        }
    }

    /// Call when an input is released.
    pub fn release(&mut self, input: T) {
        if self.pressed.remove(&input) {
            self.just_released.insert(input);
        }
    }

    /// Clear per-frame state. Call once at the start of each frame.
    pub fn clear_just(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    pub fn held(&self) -> impl Iterator<Item = &T> {
        self.pressed.iter()
    }
}

impl<T: Eq + Hash + Copy> Default for Input<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// What a key press means to a demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Camera(CameraAction),
    ToggleOverlay,
    Exit,
}

/// Physical key to [`Action`] bindings.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<KeyCode, Action>,
}

impl KeyMap {
    /// An empty map.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn bind(mut self, key: KeyCode, action: Action) -> Self {
        self.bindings.insert(key, action);
        self
    }

    pub fn action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Discrete actions for keys pressed this frame.
    pub fn just_pressed(&self, input: &Input<KeyCode>) -> Vec<Action> {
        let mut out: Vec<Action> = input
            .just_pressed
            .iter()
            .filter_map(|k| self.action(*k))
            .collect();
        // HashSet order is arbitrary; keep the output stable.
        out.sort_by_key(|a| format!("{a:?}"));
        out
    }

    /// Continuous camera motion for every held key.
    pub fn intent(&self, input: &Input<KeyCode>) -> MotionIntent {
        let mut intent = MotionIntent::default();
        for key in input.held() {
            if let Some(Action::Camera(action)) = self.action(*key) {
                intent.add(action);
            }
        }
        intent
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        use CameraAction::*;
        Self::empty()
            .bind(KeyCode::KeyW, Action::Camera(MoveForward))
            .bind(KeyCode::KeyS, Action::Camera(MoveBack))
            .bind(KeyCode::KeyA, Action::Camera(StrafeLeft))
            .bind(KeyCode::KeyD, Action::Camera(StrafeRight))
            .bind(KeyCode::KeyQ, Action::Camera(Ascend))
            .bind(KeyCode::KeyE, Action::Camera(Descend))
            .bind(KeyCode::ArrowUp, Action::Camera(PitchUp))
            .bind(KeyCode::ArrowDown, Action::Camera(PitchDown))
            .bind(KeyCode::ArrowLeft, Action::Camera(YawLeft))
            .bind(KeyCode::ArrowRight, Action::Camera(YawRight))
            .bind(KeyCode::KeyR, Action::Camera(Reset))
            .bind(KeyCode::KeyC, Action::ToggleOverlay)
            .bind(KeyCode::Escape, Action::Exit)
    }
}
