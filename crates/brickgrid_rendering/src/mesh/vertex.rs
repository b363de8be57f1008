//! Brick vertex format.

use bytemuck::{Pod, Zeroable};

/// Vertex of a brick face - 8-bit chunk-local coordinates.
///
/// Components range over `0..=chunk_size`: the far corners of the last
/// brick sit one past the last brick index. The shading layer derives UVs
/// from the position, so nothing else is stored.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct BrickVertex {
    /// X in bricks from the chunk's minimum corner.
    pub x: u8,
    /// Y in bricks from the chunk's minimum corner.
    pub y: u8,
    /// Z in bricks from the chunk's minimum corner.
    pub z: u8,
    /// Padding to a 4-byte stride.
    pub pad: u8,
}

impl BrickVertex {
    /// Vertex buffer layout for WGPU.
    pub const ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![
        0 => Uint8x4,  // position
    ];

    /// Creates a vertex.
    #[inline]
    #[must_use]
    pub const fn new(x: u8, y: u8, z: u8) -> Self {
        Self { x, y, z, pad: 0 }
    }

    /// Position as an array.
    #[inline]
    #[must_use]
    pub const fn position(self) -> [u8; 3] {
        [self.x, self.y, self.z]
    }

    /// Vertex buffer layout descriptor.
    #[must_use]
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BrickVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_four_bytes() {
        let v = BrickVertex::new(1, 2, 3);
        assert_eq!(bytemuck::bytes_of(&v), &[1, 2, 3, 0]);
        assert_eq!(BrickVertex::desc().array_stride, 4);
    }
}
