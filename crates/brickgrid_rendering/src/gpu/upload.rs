//! GPU buffers for one chunk mesh.

use std::ops::Range;

use brickgrid_shared::{ChunkCoord, MaterialIndex};
use wgpu::util::DeviceExt;

use crate::mesh::{BrickVertex, ChunkMesh, MeshElement, PackedTangentBasis};

/// Owns the vertex, index and tangent buffers of one chunk.
///
/// Buffers are released when this value is dropped.
#[derive(Debug)]
pub struct ChunkGpuMesh {
    chunk: ChunkCoord,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    tangent_buffer: wgpu::Buffer,
    elements: Vec<MeshElement>,
}

impl ChunkGpuMesh {
    /// Creates the buffers for `mesh`.
    ///
    /// Returns `None` for a mesh without geometry: there is nothing to draw
    /// and zero-sized vertex buffers are not worth creating.
    #[must_use]
    pub fn upload(device: &wgpu::Device, mesh: &ChunkMesh) -> Option<Self> {
        if mesh.is_empty() {
            tracing::trace!(
                "Skipping upload of empty chunk [{},{},{}]",
                mesh.chunk.x,
                mesh.chunk.y,
                mesh.chunk.z
            );
            return None;
        }

        let chunk = mesh.chunk;
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("Chunk {chunk:?} Vertices")),
            contents: mesh.vertex_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("Chunk {chunk:?} Indices")),
            contents: mesh.index_bytes(),
            usage: wgpu::BufferUsages::INDEX,
        });

        let tangents = mesh.packed_tangents();
        let tangent_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("Chunk {chunk:?} Tangents")),
            contents: bytemuck::cast_slice(&tangents),
            usage: wgpu::BufferUsages::VERTEX,
        });

        tracing::debug!(
            "Uploaded chunk [{},{},{}]: {} bytes of vertices, {} bytes of indices",
            chunk.x,
            chunk.y,
            chunk.z,
            mesh.vertex_bytes().len(),
            mesh.index_bytes().len()
        );

        Some(Self {
            chunk,
            vertex_buffer,
            index_buffer,
            tangent_buffer,
            elements: mesh.elements.clone(),
        })
    }

    /// Vertex buffer layouts in slot order: positions (slot 0), then the
    /// per-instance tangent table (slot 1).
    #[must_use]
    pub fn vertex_layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
        [BrickVertex::desc(), PackedTangentBasis::desc()]
    }

    /// Chunk these buffers belong to.
    #[inline]
    #[must_use]
    pub const fn chunk(&self) -> ChunkCoord {
        self.chunk
    }

    /// Draw elements, in index-buffer order.
    #[inline]
    #[must_use]
    pub fn elements(&self) -> &[MeshElement] {
        &self.elements
    }

    /// Vertex buffer (slot 0).
    #[inline]
    #[must_use]
    pub const fn vertex_buffer(&self) -> &wgpu::Buffer {
        &self.vertex_buffer
    }

    /// 16-bit index buffer.
    #[inline]
    #[must_use]
    pub const fn index_buffer(&self) -> &wgpu::Buffer {
        &self.index_buffer
    }

    /// Tangent table buffer (slot 1).
    #[inline]
    #[must_use]
    pub const fn tangent_buffer(&self) -> &wgpu::Buffer {
        &self.tangent_buffer
    }

    /// Records one indexed draw per element.
    ///
    /// `bind_material` runs before each draw so the host can bind the
    /// element's surface material. The pipeline must use
    /// [`ChunkGpuMesh::vertex_layouts`].
    pub fn draw<'a, F>(&'a self, pass: &mut wgpu::RenderPass<'a>, mut bind_material: F)
    where
        F: FnMut(&mut wgpu::RenderPass<'a>, MaterialIndex),
    {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_vertex_buffer(1, self.tangent_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);

        for (element, indices, instances) in draw_calls(&self.elements) {
            bind_material(pass, element.material);
            pass.draw_indexed(indices, 0, instances);
        }
    }
}

/// Index and instance ranges for each element.
///
/// The instance range selects the element's entry in the per-instance
/// tangent table, so every vertex of the draw sees its direction's basis.
fn draw_calls(
    elements: &[MeshElement],
) -> impl Iterator<Item = (&MeshElement, Range<u32>, Range<u32>)> {
    elements.iter().map(|element| {
        let first = element.first_index;
        let face = u32::from(element.face as u8);
        (element, first..first + element.index_count(), face..face + 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{FaceDirection, FACE_COUNT};

    #[test]
    fn test_vertex_layouts() {
        let [positions, tangents] = ChunkGpuMesh::vertex_layouts();
        assert_eq!(positions.array_stride, 4);
        assert_eq!(positions.step_mode, wgpu::VertexStepMode::Vertex);
        assert_eq!(tangents.array_stride, 8);
        assert_eq!(tangents.step_mode, wgpu::VertexStepMode::Instance);

        let locations: Vec<u32> = positions
            .attributes
            .iter()
            .chain(tangents.attributes)
            .map(|a| a.shader_location)
            .collect();
        assert_eq!(locations, vec![0, 1, 2]);
    }

    #[test]
    fn test_draw_calls_select_tangent_entry() {
        let elements = [
            MeshElement {
                first_index: 0,
                triangle_count: 2,
                material: MaterialIndex(1),
                face: FaceDirection::NegY,
            },
            MeshElement {
                first_index: 6,
                triangle_count: 4,
                material: MaterialIndex(2),
                face: FaceDirection::PosZ,
            },
        ];
        let calls: Vec<(Range<u32>, Range<u32>)> = draw_calls(&elements)
            .map(|(_, indices, instances)| (indices, instances))
            .collect();
        assert_eq!(calls, vec![(0..6, 2..3), (6..18, 5..6)]);
    }

    #[test]
    fn test_tangent_table_size() {
        let mesh = ChunkMesh::empty(ChunkCoord::new(0, 0, 0));
        let tangents = mesh.packed_tangents();
        assert_eq!(bytemuck::cast_slice::<_, u8>(&tangents).len(), FACE_COUNT * 8);
    }
}
