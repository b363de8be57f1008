//! # BrickGrid Rendering
//!
//! Chunk meshing for brick grids:
//! - Face culling against a one-brick halo read through [`BrickQuery`]
//! - One draw element per (material, direction) batch
//! - 16-bit indices: a chunk never exceeds 65,536 vertices
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                      MESH PIPELINE                            │
//! ├───────────────────────────────────────────────────────────────┤
//! │  BrickQuery → ChunkMesher::build → ChunkMesh                  │
//! │                                       ↓                       │
//! │          (host, explicit)   ChunkGpuMesh::upload → draw       │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## MANDATE
//!
//! - `build` is a pure function of the chunk coordinate and the bricks it reads
//! - Same snapshot, same bytes
//! - No partial meshes: a build either succeeds or returns a [`MeshError`]
//!
//! [`BrickQuery`]: brickgrid_shared::BrickQuery

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod gpu;
pub mod mesh;

pub use config::{MesherConfig, INDICES_PER_FACE, MAX_CHUNK_VERTICES, VERTICES_PER_FACE};
pub use error::{MeshError, MeshResult};
pub use gpu::ChunkGpuMesh;
pub use mesh::{
    corner_offset, tangent_bases, BrickVertex, ChunkMesh, ChunkMesher, FaceDirection,
    MeshElement, PackedNormal, PackedTangentBasis, TangentBasis, FACE_COUNT, QUAD_INDICES,
};
