//! # Mesh Error Types
//!
//! A build either produces a complete mesh or one of these. Partial meshes
//! are never returned: a truncated index buffer would reference vertices
//! that do not exist.

use brickgrid_shared::{BrickCoord, ChunkCoord, ConfigError, MaterialIndex};
use thiserror::Error;

/// Errors that can occur while meshing a chunk.
#[derive(Error, Debug)]
pub enum MeshError {
    /// The mesher configuration is inconsistent.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The grid returned a material outside the configured slot list.
    #[error("brick {brick:?} holds material {material}, but only {material_count} materials are configured")]
    MaterialOutOfRange {
        /// Offending brick.
        brick: BrickCoord,
        /// Material the grid returned.
        material: MaterialIndex,
        /// Configured slot count.
        material_count: usize,
    },

    /// The chunk's geometry does not fit 16-bit vertex indices.
    #[error("chunk {chunk:?} needs more than {limit} vertices")]
    CapacityExceeded {
        /// Chunk being meshed.
        chunk: ChunkCoord,
        /// Vertex limit that was hit.
        limit: usize,
    },
}

/// Result type for meshing operations.
pub type MeshResult<T> = Result<T, MeshError>;
