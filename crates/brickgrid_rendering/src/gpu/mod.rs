//! # GPU Upload
//!
//! Host-side counterpart of the mesher. Meshing never touches the GPU; the
//! host moves a finished [`ChunkMesh`](crate::ChunkMesh) here when it wants
//! it drawn.

pub mod upload;

pub use upload::ChunkGpuMesh;
