//! Integer coordinates for bricks and chunks.
//!
//! Bricks are addressed in world space. A chunk is a cube of
//! `1 << chunk_size_log2` bricks per axis, so converting between the two is a
//! shift; arithmetic shifts floor toward negative infinity, which keeps
//! negative bricks inside negative chunks.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Coordinate of a single brick cell in world space.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Pod, Zeroable, Serialize, Deserialize)]
pub struct BrickCoord {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl BrickCoord {
    /// The origin brick.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Creates a new brick coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Creates from array.
    #[inline]
    #[must_use]
    pub const fn from_array(arr: [i32; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Converts to array.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the brick one step along `offset`.
    #[inline]
    #[must_use]
    pub const fn offset(self, offset: [i32; 3]) -> Self {
        Self::new(self.x + offset[0], self.y + offset[1], self.z + offset[2])
    }
}

impl std::ops::Add for BrickCoord {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for BrickCoord {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<[i32; 3]> for BrickCoord {
    fn from(arr: [i32; 3]) -> Self {
        Self::from_array(arr)
    }
}

/// Coordinate of a render chunk.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Pod, Zeroable, Serialize, Deserialize)]
pub struct ChunkCoord {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the chunk containing `brick`.
    #[inline]
    #[must_use]
    pub const fn containing(brick: BrickCoord, chunk_size_log2: u8) -> Self {
        Self::new(
            brick.x >> chunk_size_log2,
            brick.y >> chunk_size_log2,
            brick.z >> chunk_size_log2,
        )
    }

    /// First brick of this chunk (inclusive).
    #[inline]
    #[must_use]
    pub const fn min_brick(self, chunk_size_log2: u8) -> BrickCoord {
        BrickCoord::new(
            self.x << chunk_size_log2,
            self.y << chunk_size_log2,
            self.z << chunk_size_log2,
        )
    }

    /// One past the last brick of this chunk on every axis.
    #[inline]
    #[must_use]
    pub const fn max_brick_exclusive(self, chunk_size_log2: u8) -> BrickCoord {
        let size = 1i32 << chunk_size_log2;
        let min = self.min_brick(chunk_size_log2);
        BrickCoord::new(min.x + size, min.y + size, min.z + size)
    }

    /// Returns the chunk one step along `offset`.
    #[inline]
    #[must_use]
    pub const fn offset(self, offset: [i32; 3]) -> Self {
        Self::new(self.x + offset[0], self.y + offset[1], self.z + offset[2])
    }
}

impl From<[i32; 3]> for ChunkCoord {
    fn from(arr: [i32; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}
