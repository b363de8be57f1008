//! Chunk mesher.
//!
//! Walks every brick of a chunk, emits one quad for each face whose
//! neighbour is empty and sorts the quads into `(material, direction)`
//! batches. Neighbours are always read through the grid, so faces on chunk
//! boundaries see the adjacent chunk's bricks (a one-brick halo).
//!
//! A face between two chunks is emitted only by the chunk holding the solid
//! brick; the other chunk sees a solid neighbour from its empty side and
//! emits nothing.

use std::time::Instant;

use brickgrid_shared::{BrickQuery, ChunkCoord, GridParameters, MaterialIndex};

use super::chunk_mesh::{ChunkMesh, MeshElement};
use super::face::{FaceDirection, FACE_COUNT, QUAD_INDICES};
use super::vertex::BrickVertex;
use crate::config::{MesherConfig, INDICES_PER_FACE, MAX_CHUNK_VERTICES, VERTICES_PER_FACE};
use crate::error::{MeshError, MeshResult};

/// Indices of one material, one list per face direction.
type MaterialBatches = [Vec<u16>; FACE_COUNT];

/// Builds [`ChunkMesh`]es from any [`BrickQuery`].
///
/// Holds only validated configuration. `build` takes `&self`, so one mesher
/// can serve any number of threads.
#[derive(Clone, Debug)]
pub struct ChunkMesher {
    config: MesherConfig,
    max_vertices: usize,
}

impl ChunkMesher {
    /// Creates a mesher after validating `config`.
    ///
    /// # Errors
    /// Returns [`MeshError::Config`] if the configuration is inconsistent.
    pub fn new(config: MesherConfig) -> MeshResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            max_vertices: MAX_CHUNK_VERTICES,
        })
    }

    /// Creates a mesher for a grid described by `params`.
    ///
    /// # Errors
    /// Returns [`MeshError::Config`] if the parameters are inconsistent.
    pub fn from_parameters(params: &GridParameters) -> MeshResult<Self> {
        params.validate()?;
        Self::new(MesherConfig::from_parameters(params))
    }

    /// Lowers the vertex ceiling so overflow can be provoked with small chunks.
    #[cfg(test)]
    fn with_vertex_limit(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices.min(MAX_CHUNK_VERTICES);
        self
    }

    /// The configuration this mesher was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &MesherConfig {
        &self.config
    }

    /// Meshes one chunk.
    ///
    /// Output is a pure function of `chunk` and the bricks `grid` returns
    /// for the chunk and its halo: the same snapshot always yields the same
    /// vertices, indices and elements, in the same order.
    ///
    /// # Errors
    /// - [`MeshError::MaterialOutOfRange`] if the grid returns a non-empty
    ///   material outside the configured slots.
    /// - [`MeshError::CapacityExceeded`] if the chunk needs more vertices
    ///   than a 16-bit index can address.
    pub fn build<Q: BrickQuery + ?Sized>(
        &self,
        chunk: ChunkCoord,
        grid: &Q,
    ) -> MeshResult<ChunkMesh> {
        let start = Instant::now();

        let empty = self.config.empty_material_index;
        let material_count = self.config.material_count;
        // Validated: chunk_size_log2 <= 4.
        let size = 1u8 << self.config.chunk_size_log2;
        let min = chunk.min_brick(self.config.chunk_size_log2);

        let mut mesh = ChunkMesh::empty(chunk);
        let mut batches: Vec<MaterialBatches> = vec![MaterialBatches::default(); material_count];

        for y in 0..size {
            for x in 0..size {
                for z in 0..size {
                    let brick = min.offset([i32::from(x), i32::from(y), i32::from(z)]);
                    let material = grid.brick(brick);
                    if material == empty {
                        continue;
                    }
                    let Some(batch) = batches.get_mut(material.as_usize()) else {
                        return Err(MeshError::MaterialOutOfRange {
                            brick,
                            material,
                            material_count,
                        });
                    };

                    for face in FaceDirection::ALL {
                        if grid.brick(brick.offset(face.normal())) != empty {
                            continue;
                        }

                        let base = match u16::try_from(mesh.vertices.len()) {
                            Ok(base) if usize::from(base) + VERTICES_PER_FACE <= self.max_vertices => {
                                base
                            }
                            _ => return Err(self.capacity_exceeded(chunk)),
                        };

                        mesh.vertices.extend(face.corner_offsets().map(|[ox, oy, oz]| {
                            BrickVertex::new(x + ox, y + oy, z + oz)
                        }));
                        batch[face.index()].extend(QUAD_INDICES.map(|i| base + i));
                    }
                }
            }
        }

        (mesh.indices, mesh.elements) = Self::concatenate(batches);

        if mesh.is_empty() {
            tracing::trace!("Chunk [{},{},{}] has no visible faces", chunk.x, chunk.y, chunk.z);
        } else {
            tracing::debug!(
                "Meshed chunk [{},{},{}]: {} vertices, {} indices, {} elements in {:.3}ms",
                chunk.x,
                chunk.y,
                chunk.z,
                mesh.vertices.len(),
                mesh.indices.len(),
                mesh.elements.len(),
                start.elapsed().as_secs_f64() * 1000.0
            );
        }

        Ok(mesh)
    }

    #[cold]
    fn capacity_exceeded(&self, chunk: ChunkCoord) -> MeshError {
        MeshError::CapacityExceeded {
            chunk,
            limit: self.max_vertices,
        }
    }

    /// Joins the batches into one index buffer, material ascending then
    /// canonical face order, with one element per non-empty batch.
    fn concatenate(batches: Vec<MaterialBatches>) -> (Vec<u16>, Vec<MeshElement>) {
        let total: usize = batches.iter().flatten().map(Vec::len).sum();
        let mut indices = Vec::with_capacity(total);
        let mut elements = Vec::new();

        for (material, faces) in (0..=u8::MAX).zip(batches) {
            for (face, batch) in FaceDirection::ALL.into_iter().zip(faces) {
                if batch.is_empty() {
                    continue;
                }
                // At most 2^16 vertices, so offsets and counts fit u32.
                let first_index = u32::try_from(indices.len()).unwrap_or(u32::MAX);
                let triangle_count = u32::try_from(batch.len() / 3).unwrap_or(u32::MAX);
                elements.push(MeshElement {
                    first_index,
                    triangle_count,
                    material: MaterialIndex(material),
                    face,
                });
                indices.extend(batch);
            }
        }

        debug_assert_eq!(indices.len() % INDICES_PER_FACE, 0);
        (indices, elements)
    }
}
