//! Errors raised while loading configuration or laying out a scene.
//!
//! Missing textures are not errors: [`load_texture`](crate::texture::load_texture)
//! degrades to [`Texture::Missing`](crate::texture::Texture::Missing) and logs.

use std::fmt;

/// Errors that can occur while building a scene.
#[derive(Debug)]
pub enum SceneError {
    /// Reading or writing a file failed.
    Io(String),
    /// A configuration document could not be parsed or serialized.
    Config(String),
    /// Layout parameters violate a precondition (empty row, bad anchor, ...).
    Layout(String),
    /// Writing a generated texture failed.
    Texture(String),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Io(e) => write!(f, "io error: {e}"),
            SceneError::Config(e) => write!(f, "invalid config: {e}"),
            SceneError::Layout(e) => write!(f, "invalid layout: {e}"),
            SceneError::Texture(e) => write!(f, "texture error: {e}"),
        }
    }
}

impl std::error::Error for SceneError {}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        SceneError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(e: serde_json::Error) -> Self {
        SceneError::Config(e.to_string())
    }
}
