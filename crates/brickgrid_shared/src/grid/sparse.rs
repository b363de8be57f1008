//! Sparse brick storage.
//!
//! Stores only chunks that contain at least one written brick. Unloaded
//! chunks read as the empty material, so the grid is unbounded.

use std::collections::HashMap;

use ndshape::{RuntimeShape, Shape};

use super::dirty::DirtyChunks;
use crate::coord::{BrickCoord, ChunkCoord};
use crate::error::ConfigResult;
use crate::material::MaterialIndex;
use crate::params::GridParameters;
use crate::query::BrickQuery;

/// Maximum chunks pre-allocated in the hash map.
const INITIAL_CHUNK_CAPACITY: usize = 256;

/// Brick grid made of independently allocated chunks.
pub struct SparseBrickGrid {
    chunk_shape: RuntimeShape<u32, 3>,
    chunk_size_log2: u8,
    empty: MaterialIndex,
    chunks: HashMap<ChunkCoord, Box<[MaterialIndex]>>,
    dirty: DirtyChunks,
}

impl SparseBrickGrid {
    /// Creates an empty sparse grid. `size_log2` and `boundary` are ignored.
    ///
    /// # Errors
    /// Returns the validation error if `params` are inconsistent.
    pub fn new(params: &GridParameters) -> ConfigResult<Self> {
        params.validate()?;
        let edge = params.chunk_size();
        Ok(Self {
            chunk_shape: RuntimeShape::<u32, 3>::new([edge; 3]),
            chunk_size_log2: params.chunk_size_log2,
            empty: params.empty_material_index,
            chunks: HashMap::with_capacity(INITIAL_CHUNK_CAPACITY),
            dirty: DirtyChunks::new(),
        })
    }

    /// Splits a brick into its chunk and the linear index inside that chunk.
    #[inline]
    fn locate(&self, coord: BrickCoord) -> (ChunkCoord, usize) {
        let chunk = ChunkCoord::containing(coord, self.chunk_size_log2);
        let local = (coord - chunk.min_brick(self.chunk_size_log2))
            .to_array()
            .map(i32::unsigned_abs);
        (chunk, self.chunk_shape.linearize(local) as usize)
    }

    /// Writes a brick, allocating its chunk on first use.
    ///
    /// Returns true if the stored value changed.
    pub fn set_brick(&mut self, coord: BrickCoord, material: MaterialIndex) -> bool {
        let (chunk, idx) = self.locate(coord);
        let empty = self.empty;

        if material == empty && !self.chunks.contains_key(&chunk) {
            return false;
        }
        let volume = 1usize << (3 * u32::from(self.chunk_size_log2));
        let bricks = self
            .chunks
            .entry(chunk)
            .or_insert_with(|| vec![empty; volume].into_boxed_slice());
        if bricks[idx] == material {
            return false;
        }
        bricks[idx] = material;

        self.dirty.mark_brick(coord, self.chunk_size_log2);
        true
    }

    /// Drops a chunk's storage, returning true if it was loaded.
    ///
    /// The chunk and its face neighbours are marked dirty.
    pub fn unload_chunk(&mut self, chunk: ChunkCoord) -> bool {
        if self.chunks.remove(&chunk).is_none() {
            return false;
        }
        self.dirty.mark(chunk);
        for axis in 0..3 {
            for step in [-1, 1] {
                let mut offset = [0i32; 3];
                offset[axis] = step;
                self.dirty.mark(chunk.offset(offset));
            }
        }
        true
    }

    /// Number of allocated chunks.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Coordinates of all allocated chunks.
    #[must_use]
    pub fn chunk_coords(&self) -> Vec<ChunkCoord> {
        self.chunks.keys().copied().collect()
    }

    /// Returns and clears the chunks that need re-meshing.
    pub fn take_dirty_chunks(&mut self) -> Vec<ChunkCoord> {
        self.dirty.take()
    }
}

impl BrickQuery for SparseBrickGrid {
    #[inline]
    fn brick(&self, coord: BrickCoord) -> MaterialIndex {
        let (chunk, idx) = self.locate(coord);
        self.chunks
            .get(&chunk)
            .map_or(self.empty, |bricks| bricks[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unloaded_reads_empty() {
        let grid = SparseBrickGrid::new(&GridParameters::default()).unwrap();
        assert_eq!(grid.brick(BrickCoord::new(1000, -1000, 5)), MaterialIndex(0));
        assert_eq!(grid.chunk_count(), 0);
    }

    #[test]
    fn test_set_allocates_chunk() {
        let mut grid = SparseBrickGrid::new(&GridParameters::default()).unwrap();

        // Writing empty into an unloaded chunk is a no-op.
        assert!(!grid.set_brick(BrickCoord::new(3, 3, 3), MaterialIndex(0)));
        assert_eq!(grid.chunk_count(), 0);

        assert!(grid.set_brick(BrickCoord::new(-5, 10, 40), MaterialIndex(1)));
        assert_eq!(grid.chunk_count(), 1);
        assert_eq!(grid.chunk_coords(), vec![ChunkCoord::new(-1, 0, 2)]);
        assert_eq!(grid.brick(BrickCoord::new(-5, 10, 40)), MaterialIndex(1));
        assert_eq!(grid.brick(BrickCoord::new(-4, 10, 40)), MaterialIndex(0));
    }

    #[test]
    fn test_unload_marks_neighbours() {
        let mut grid = SparseBrickGrid::new(&GridParameters::default()).unwrap();
        grid.set_brick(BrickCoord::new(5, 5, 5), MaterialIndex(1));
        grid.take_dirty_chunks();

        assert!(grid.unload_chunk(ChunkCoord::new(0, 0, 0)));
        assert!(!grid.unload_chunk(ChunkCoord::new(0, 0, 0)));
        assert_eq!(grid.take_dirty_chunks().len(), 7);
        assert_eq!(grid.brick(BrickCoord::new(5, 5, 5)), MaterialIndex(0));
    }
}
