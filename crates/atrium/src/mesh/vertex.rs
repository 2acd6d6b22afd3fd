//! # Vertex — Per-Corner Data for Generated Meshes
//!
//! ```text
//! MeshVertex (32 bytes)
//! ┌──────────────┬──────────────┬──────────────┐
//! │ position     │ normal       │ uv           │
//! │ [f32; 3]     │ [f32; 3]     │ [f32; 2]     │
//! │ offset 0     │ offset 12    │ offset 24    │
//! └──────────────┴──────────────┴──────────────┘
//! ```
//!
//! The layout is `#[repr(C)]` and `Pod`, so a vertex slice can be handed to any
//! GPU backend with [`bytemuck::cast_slice`]. Attribute locations 0/1/2 match
//! the order above.

use bytemuck::{Pod, Zeroable};

/// Per-vertex data for generated meshes: position, surface normal, and texture UV.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl MeshVertex {
    /// Byte stride of one vertex.
    pub const STRIDE: usize = std::mem::size_of::<Self>();
    /// Byte offset of `normal`.
    pub const NORMAL_OFFSET: usize = 12;
    /// Byte offset of `uv`.
    pub const UV_OFFSET: usize = 24;

    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self { position, normal, uv }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_32_bytes() {
        assert_eq!(MeshVertex::STRIDE, 32);
        let v = MeshVertex::new([1.0, 2.0, 3.0], [0.0, 1.0, 0.0], [0.5, 0.25]);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        let normal_y = f32::from_ne_bytes(bytes[16..20].try_into().unwrap());
        assert_eq!(normal_y, 1.0);
        let u = f32::from_ne_bytes(
            bytes[MeshVertex::UV_OFFSET..MeshVertex::UV_OFFSET + 4].try_into().unwrap(),
        );
        assert_eq!(u, 0.5);
    }
}
