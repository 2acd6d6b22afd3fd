//! # Atrium — Parametric Room Scenes
//!
//! Builds a room behind a row of tall window frames (buildings outside,
//! curtains, draw-string cords, walls, carpet, an outlet) as an ordered list
//! of draw commands. Nothing here talks to a GPU: a frame is data that a
//! renderer, the terminal inspector, or a test can walk.
//!
//! Start with `use atrium::prelude::*`, load a [`RoomConfig`](config::RoomConfig)
//! (or take the default), and call
//! [`RoomScene::assemble`](scene::RoomScene::assemble) once per frame.

pub mod camera;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod input;
pub mod layout;
pub mod lighting;
pub mod material;
pub mod math;
pub mod mesh;
pub mod overlay;
pub mod prelude;
pub mod scene;
pub mod texture;
pub mod time;

#[cfg(feature = "modeller")]
pub mod modeller;

#[cfg(feature = "specular")]
pub mod prompt;
