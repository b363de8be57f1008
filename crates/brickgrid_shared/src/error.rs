//! # Configuration Error Types
//!
//! Everything that can be wrong with grid or mesher parameters. These are
//! caller contract violations: they are reported before any meshing starts.

use thiserror::Error;

/// Errors produced while loading or validating grid parameters.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read grid config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for grid parameters.
    #[error("failed to parse grid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The material list is empty.
    #[error("grid declares no material slots")]
    NoMaterials,

    /// More material slots than an 8-bit index can address.
    #[error("grid declares {count} material slots, maximum is {max}")]
    TooManyMaterials {
        /// Declared slot count.
        count: usize,
        /// Maximum slot count.
        max: usize,
    },

    /// The empty sentinel does not name a declared slot.
    #[error("empty material index {index} is out of range for {material_count} materials")]
    EmptyMaterialOutOfRange {
        /// Configured empty index.
        index: u8,
        /// Declared slot count.
        material_count: usize,
    },

    /// A chunk this large could overflow 16-bit vertex indices.
    #[error("chunk size 2^{log2} exceeds the maximum of 2^{max_log2} bricks per axis")]
    ChunkTooLarge {
        /// Requested chunk size log2.
        log2: u8,
        /// Largest supported chunk size log2.
        max_log2: u8,
    },

    /// The grid extent is too large to allocate densely.
    #[error("grid size 2^{log2} on axis {axis} exceeds the maximum of 2^{max_log2}")]
    GridTooLarge {
        /// Axis index (0 = X, 1 = Y, 2 = Z).
        axis: usize,
        /// Requested size log2.
        log2: u8,
        /// Largest supported size log2.
        max_log2: u8,
    },

    /// A render chunk does not fit inside the grid.
    #[error("chunk size 2^{chunk_log2} is larger than grid axis {axis} (2^{grid_log2})")]
    ChunkLargerThanGrid {
        /// Axis index (0 = X, 1 = Y, 2 = Z).
        axis: usize,
        /// Chunk size log2.
        chunk_log2: u8,
        /// Grid size log2 on that axis.
        grid_log2: u8,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
