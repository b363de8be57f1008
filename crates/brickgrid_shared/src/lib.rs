//! # BrickGrid Shared
//!
//! Grid-side types used by the mesher, by editors and by servers.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - `wgpu`
//! - Any GPU or window-related crate
//!
//! If you need graphics types, put them in `brickgrid_rendering`.
//!
//! ## Contents
//!
//! - [`BrickCoord`] / [`ChunkCoord`]: integer coordinates
//! - [`MaterialIndex`]: 8-bit material slot index
//! - [`BrickQuery`]: the only capability the mesher consumes
//! - [`GridParameters`]: TOML grid configuration
//! - [`DenseBrickGrid`], [`SparseBrickGrid`], [`SharedBrickGrid`]: storage

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod coord;
pub mod error;
pub mod grid;
pub mod material;
pub mod params;
pub mod query;

pub use coord::{BrickCoord, ChunkCoord};
pub use error::{ConfigError, ConfigResult};
pub use grid::{DenseBrickGrid, DirtyChunks, SharedBrickGrid, SparseBrickGrid};
pub use material::{MaterialIndex, MaterialSlot, DEFAULT_SURFACE_MATERIAL, MAX_MATERIALS};
pub use params::{BoundaryPolicy, GridParameters, MAX_CHUNK_SIZE_LOG2, MAX_GRID_SIZE_LOG2};
pub use query::{BrickQuery, BrickQueryFn};
