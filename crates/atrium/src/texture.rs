//! Texture loading and the procedural carpet grain.
//!
//! A texture that fails to load is not fatal: [`load_texture`] logs a
//! warning and returns [`Texture::Missing`], and renderers treat that as
//! plain white so the material color shows through.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::error::SceneError;
use crate::scene::TextureSlot;

/// Side length of the generated carpet texture.
pub const CARPET_SIZE: u32 = 64;

/// Decoded RGB8 pixels, row-major from the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl TextureImage {
    pub fn from_rgb(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 3) as usize;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }
}

/// A texture that may have failed to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Texture {
    Loaded(TextureImage),
    Missing,
}

impl Texture {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Texture::Loaded(_))
    }

    pub fn image(&self) -> Option<&TextureImage> {
        match self {
            Texture::Loaded(img) => Some(img),
            Texture::Missing => None,
        }
    }
}

/// Decode an image file to RGB8.
pub fn load_texture(path: impl AsRef<Path>) -> Texture {
    let path = path.as_ref();
    match image::open(path) {
        Ok(img) => {
            let img = TextureImage::from_rgb(img.to_rgb8());
            log::info!("loaded texture {} ({}x{})", path.display(), img.width, img.height);
            Texture::Loaded(img)
        }
        Err(e) => {
            log::warn!("failed to load texture '{}': {e}", path.display());
            Texture::Missing
        }
    }
}

/// Gray level of carpet pixel `(x, y)`: a base shade with two small
/// non-repeating-looking perturbations.
pub fn carpet_shade(x: u32, y: u32) -> u8 {
    let (x, y) = (x as i32, y as i32);
    let grain = (x * 37 + y * 91 + x * y * 11) % 17 - 8;
    let fleck = (x * 3 + y * 5) % 9 - 4;
    (122 + grain + fleck).clamp(0, 255) as u8
}

/// Dark, non-checkered carpet grain.
pub fn carpet_texture() -> RgbImage {
    RgbImage::from_fn(CARPET_SIZE, CARPET_SIZE, |x, y| {
        let s = carpet_shade(x, y);
        Rgb([s, s, s])
    })
}

/// Write a generated texture to disk (png or jpeg by extension).
pub fn save_texture(img: &RgbImage, path: impl AsRef<Path>) -> Result<(), SceneError> {
    let path = path.as_ref();
    img.save(path)
        .map_err(|e| SceneError::Texture(format!("{}: {e}", path.display())))
}

/// The textures a room frame samples, by slot.
#[derive(Debug, Clone)]
pub struct TextureSet {
    pub window: Texture,
    pub carpet: Texture,
}

impl TextureSet {
    /// Load the window texture from `window_path` and generate the carpet.
    pub fn load(window_path: impl AsRef<Path>) -> Self {
        Self {
            window: load_texture(window_path),
            carpet: Texture::Loaded(TextureImage::from_rgb(carpet_texture())),
        }
    }

    pub fn get(&self, slot: TextureSlot) -> &Texture {
        match slot {
            TextureSlot::Window => &self.window,
            TextureSlot::Carpet => &self.carpet,
        }
    }
}
