//! Convenience re-exports — `use atrium::prelude::*` for the common items.

// Core
pub use crate::camera::{CameraAction, CameraPose, CameraState, FlyController, MotionIntent, Viewport};
pub use crate::config::{CordConfig, CurtainConfig, FrameRowConfig, RoomConfig};
pub use crate::error::SceneError;
pub use crate::input::{Action, Input, KeyCode, KeyMap};
pub use crate::material::{Color, Material};
pub use crate::math::{Mat4, Quat, Transform, UvRect, Vec2, Vec3, Vec4};
pub use crate::scene::{CommandList, DrawCommand, Frame, RoomScene, SceneBuilder};
pub use crate::texture::{Texture, TextureSet};
pub use crate::time::FrameClock;

// Fixtures and layout
pub use crate::fixtures::{CurtainSegment, DrawString, ElectricalOutlet, GlassOverlay, WindowFrame};
pub use crate::layout::{Building, FacadeWindows, FrameRow, FrameSlot, RoomShell, RowLayout};

// Lighting
pub use crate::lighting::{DirectionalLight, PointLight};
#[cfg(feature = "specular")]
pub use crate::lighting::SpecularGrid;

// Modeller (feature-gated)
#[cfg(feature = "modeller")]
pub use crate::modeller::{Object3d, ShapeList, WaveSurface};

// Shininess prompt (feature-gated)
#[cfg(feature = "specular")]
pub use crate::prompt::{LatestReceiver, LatestSender, PromptOutcome};
