//! Mesher output.

use std::ops::{Range, RangeInclusive};

use brickgrid_shared::{ChunkCoord, MaterialIndex};

use super::face::{FaceDirection, FACE_COUNT};
use super::tangent::{tangent_bases, PackedTangentBasis, TangentBasis};
use super::vertex::BrickVertex;

/// A drawable run of the index buffer: all faces of one material facing one
/// direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshElement {
    /// Offset of the first index in [`ChunkMesh::indices`].
    pub first_index: u32,
    /// Number of triangles (three indices each).
    pub triangle_count: u32,
    /// Material shared by every face of the element.
    pub material: MaterialIndex,
    /// Direction shared by every face of the element.
    pub face: FaceDirection,
}

impl MeshElement {
    /// Number of indices covered.
    #[inline]
    #[must_use]
    pub const fn index_count(&self) -> u32 {
        self.triangle_count * 3
    }

    /// Range of [`ChunkMesh::indices`] covered.
    #[inline]
    #[must_use]
    pub const fn index_range(&self) -> Range<usize> {
        let start = self.first_index as usize;
        start..start + self.index_count() as usize
    }
}

/// Complete mesh data for one chunk.
///
/// Vertices are chunk-local; the host positions the chunk at
/// `chunk.min_brick(chunk_size_log2)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ChunkMesh {
    /// The chunk this mesh was built for.
    pub chunk: ChunkCoord,
    /// Four vertices per visible face.
    pub vertices: Vec<BrickVertex>,
    /// Index buffer, grouped into [`MeshElement`] runs.
    pub indices: Vec<u16>,
    /// One element per non-empty (material, direction) batch, ordered by
    /// material then canonical direction.
    pub elements: Vec<MeshElement>,
    /// Tangent frame per direction, in canonical order.
    pub tangent_bases: [TangentBasis; FACE_COUNT],
}

impl ChunkMesh {
    /// A mesh with no geometry.
    #[must_use]
    pub fn empty(chunk: ChunkCoord) -> Self {
        Self {
            chunk,
            vertices: Vec::new(),
            indices: Vec::new(),
            elements: Vec::new(),
            tangent_bases: tangent_bases(),
        }
    }

    /// Check if mesh is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get vertex count.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Indices of one element.
    ///
    /// # Panics
    /// Panics if `element` does not belong to this mesh.
    #[must_use]
    pub fn element_indices(&self, element: &MeshElement) -> &[u16] {
        &self.indices[element.index_range()]
    }

    /// Smallest and largest vertex referenced by an element.
    ///
    /// Faces are appended in traversal order, so the first and last index of
    /// a run bound it.
    #[must_use]
    pub fn element_vertex_range(&self, element: &MeshElement) -> Option<RangeInclusive<u16>> {
        let run = self.indices.get(element.index_range())?;
        Some(*run.first()?..=*run.last()?)
    }

    /// Vertex buffer contents.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer contents.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Tangent table as uploaded, in canonical face order.
    #[must_use]
    pub fn packed_tangents(&self) -> [PackedTangentBasis; FACE_COUNT] {
        self.tangent_bases.map(|basis| basis.packed())
    }
}
