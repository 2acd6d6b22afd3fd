//! # Scene — Ordered Draw Commands
//!
//! A frame is a flat list of [`DrawCommand`]s grouped into named passes.
//! Scenes never touch a graphics API: they describe what to draw, and a
//! renderer (or the terminal inspector, or a test) walks the list.
//!
//! - [`command`]: the command vocabulary and [`CommandList`].
//! - [`builder`]: [`SceneBuilder`], composing passes from closures.
//! - [`room`]: the parametric room behind the window row.

pub mod builder;
pub mod command;
pub mod room;

pub use builder::{Frame, SceneBuilder};
pub use command::{
    Blend, CheckerGridCommand, CommandList, CuboidCommand, DrawCommand, LabelCommand, Pass, QuadCommand, ShapeCommand,
    SphereCommand, TextureSlot,
};
pub use room::RoomScene;
