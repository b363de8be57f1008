//! Dirty chunk tracking.
//!
//! A brick edit invalidates the chunk that owns the brick and, when the brick
//! sits on a chunk face, the neighbour chunk across that face: the
//! neighbour's boundary faces are culled against this brick.

use std::collections::HashSet;

use crate::coord::{BrickCoord, ChunkCoord};

/// Ordered, duplicate-free set of chunks awaiting a remesh.
#[derive(Debug, Default)]
pub struct DirtyChunks {
    order: Vec<ChunkCoord>,
    members: HashSet<ChunkCoord>,
}

impl DirtyChunks {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks one chunk dirty.
    pub fn mark(&mut self, chunk: ChunkCoord) {
        if self.members.insert(chunk) {
            self.order.push(chunk);
        }
    }

    /// Marks every chunk whose mesh can change when `brick` changes.
    ///
    /// Chunk space is unbounded; grids with an extent use
    /// [`DirtyChunks::mark_brick_with`].
    pub fn mark_brick(&mut self, brick: BrickCoord, chunk_size_log2: u8) {
        self.mark_brick_with(brick, chunk_size_log2, Some);
    }

    /// Like [`DirtyChunks::mark_brick`], but passes each affected chunk
    /// through `remap` first. `remap` returns `None` for chunks that do not
    /// exist, or the chunk that actually reads the brick (e.g. wrapped
    /// around the grid).
    pub fn mark_brick_with<F>(&mut self, brick: BrickCoord, chunk_size_log2: u8, mut remap: F)
    where
        F: FnMut(ChunkCoord) -> Option<ChunkCoord>,
    {
        let chunk = ChunkCoord::containing(brick, chunk_size_log2);
        if let Some(owner) = remap(chunk) {
            self.mark(owner);
        }

        let last = (1i32 << chunk_size_log2) - 1;
        let local = (brick - chunk.min_brick(chunk_size_log2)).to_array();
        for (axis, &l) in local.iter().enumerate() {
            for (touches, dir) in [(l == 0, -1), (l == last, 1)] {
                if !touches {
                    continue;
                }
                let mut step = [0i32; 3];
                step[axis] = dir;
                if let Some(neighbour) = remap(chunk.offset(step)) {
                    self.mark(neighbour);
                }
            }
        }
    }

    /// Returns true if no chunk is dirty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of dirty chunks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns and clears the dirty chunks, in the order they were marked.
    pub fn take(&mut self) -> Vec<ChunkCoord> {
        self.members.clear();
        std::mem::take(&mut self.order)
    }
}
