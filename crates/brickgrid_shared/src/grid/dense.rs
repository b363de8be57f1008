//! Dense brick storage.
//!
//! One material index per brick for a power-of-two sized grid. Queries
//! outside the grid follow the configured [`BoundaryPolicy`].

use ndshape::{RuntimeShape, Shape};

use super::dirty::DirtyChunks;
use crate::coord::{BrickCoord, ChunkCoord};
use crate::error::ConfigResult;
use crate::material::MaterialIndex;
use crate::params::{BoundaryPolicy, GridParameters};
use crate::query::BrickQuery;

/// A fully allocated brick grid.
pub struct DenseBrickGrid {
    shape: RuntimeShape<u32, 3>,
    size: [u32; 3],
    size_log2: [u8; 3],
    chunk_size_log2: u8,
    boundary: BoundaryPolicy,
    empty: MaterialIndex,
    bricks: Vec<MaterialIndex>,
    dirty: DirtyChunks,
}

impl DenseBrickGrid {
    /// Allocates a grid filled with the empty material.
    ///
    /// Note: This allocates the whole grid. Only call during loading.
    ///
    /// # Errors
    /// Returns the validation error if `params` are inconsistent.
    pub fn new(params: &GridParameters) -> ConfigResult<Self> {
        params.validate()?;
        let size = params.size();
        let volume: usize = size.iter().map(|&s| s as usize).product();
        Ok(Self {
            shape: RuntimeShape::<u32, 3>::new(size),
            size,
            size_log2: params.size_log2,
            chunk_size_log2: params.chunk_size_log2,
            boundary: params.boundary,
            empty: params.empty_material_index,
            bricks: vec![params.empty_material_index; volume],
            dirty: DirtyChunks::new(),
        })
    }

    /// Grid extent in bricks per axis.
    #[must_use]
    pub const fn size(&self) -> [u32; 3] {
        self.size
    }

    /// The empty material sentinel.
    #[inline]
    #[must_use]
    pub const fn empty_material(&self) -> MaterialIndex {
        self.empty
    }

    /// Maps a world coordinate to a storage position, or `None` when the
    /// boundary policy treats it as empty.
    fn resolve(&self, coord: BrickCoord) -> Option<[u32; 3]> {
        let mut out = [0u32; 3];
        for (axis, c) in coord.to_array().into_iter().enumerate() {
            let size = 1i32 << self.size_log2[axis];
            let resolved = match self.boundary {
                BoundaryPolicy::Empty if !(0..size).contains(&c) => return None,
                BoundaryPolicy::Empty => c,
                BoundaryPolicy::Clamp => c.clamp(0, size - 1),
                BoundaryPolicy::Wrap => c & (size - 1),
            };
            // In range by construction of every arm above.
            out[axis] = resolved.unsigned_abs();
        }
        Some(out)
    }

    /// Writes a brick and marks affected chunks dirty.
    ///
    /// Coordinates outside the grid are wrapped under [`BoundaryPolicy::Wrap`]
    /// and ignored otherwise. Returns true if the stored value changed.
    pub fn set_brick(&mut self, coord: BrickCoord, material: MaterialIndex) -> bool {
        let in_bounds = coord
            .to_array()
            .iter()
            .zip(self.size_log2)
            .all(|(&c, log2)| (0..1i32 << log2).contains(&c));
        if !in_bounds && self.boundary != BoundaryPolicy::Wrap {
            return false;
        }
        let Some(position) = self.resolve(coord) else {
            return false;
        };

        let idx = self.shape.linearize(position) as usize;
        if self.bricks[idx] == material {
            return false;
        }
        self.bricks[idx] = material;

        let stored = position.map(|p| i32::try_from(p).unwrap_or(i32::MAX));
        let chunk_counts = self.chunk_counts();
        let boundary = self.boundary;
        self.dirty.mark_brick_with(
            BrickCoord::from_array(stored),
            self.chunk_size_log2,
            |chunk| Self::boundary_chunk(chunk, chunk_counts, boundary),
        );
        true
    }

    /// Number of render chunks per axis.
    #[must_use]
    pub fn chunk_counts(&self) -> [i32; 3] {
        self.size_log2
            .map(|log2| 1i32 << log2.saturating_sub(self.chunk_size_log2))
    }

    /// Maps a chunk next to an edited brick onto the grid chunk whose halo
    /// reads that brick. Under `Wrap` the last chunk on an axis reads the
    /// first one; otherwise chunks outside the grid are never meshed.
    fn boundary_chunk(
        chunk: ChunkCoord,
        chunk_counts: [i32; 3],
        boundary: BoundaryPolicy,
    ) -> Option<ChunkCoord> {
        let mut out = [0i32; 3];
        let coords = [chunk.x, chunk.y, chunk.z];
        for ((slot, c), count) in out.iter_mut().zip(coords).zip(chunk_counts) {
            *slot = match boundary {
                _ if (0..count).contains(&c) => c,
                BoundaryPolicy::Wrap => c.rem_euclid(count),
                BoundaryPolicy::Empty | BoundaryPolicy::Clamp => return None,
            };
        }
        Some(ChunkCoord::from(out))
    }

    /// Fills an axis-aligned box `[min, max)` with one material.
    pub fn fill(&mut self, min: BrickCoord, max: BrickCoord, material: MaterialIndex) {
        for y in min.y..max.y {
            for x in min.x..max.x {
                for z in min.z..max.z {
                    self.set_brick(BrickCoord::new(x, y, z), material);
                }
            }
        }
    }

    /// Returns and clears the chunks that need re-meshing.
    pub fn take_dirty_chunks(&mut self) -> Vec<ChunkCoord> {
        self.dirty.take()
    }

    /// Number of non-empty bricks.
    #[must_use]
    pub fn solid_count(&self) -> usize {
        self.bricks.iter().filter(|&&m| m != self.empty).count()
    }
}

impl BrickQuery for DenseBrickGrid {
    #[inline]
    fn brick(&self, coord: BrickCoord) -> MaterialIndex {
        match self.resolve(coord) {
            Some(position) => self.bricks[self.shape.linearize(position) as usize],
            None => self.empty,
        }
    }
}
