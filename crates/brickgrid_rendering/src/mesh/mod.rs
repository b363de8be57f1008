//! # Chunk Meshing
//!
//! Turns the bricks of one chunk into a face-culled, material-batched mesh:
//!
//! - [`face`]: direction, normal and winding tables
//! - [`vertex`]: the 4-byte [`BrickVertex`]
//! - [`tangent`]: the six per-direction [`TangentBasis`] entries
//! - [`chunk_mesh`]: the [`ChunkMesh`] output and its [`MeshElement`] runs
//! - [`mesher`]: [`ChunkMesher`], the build pass itself

pub mod chunk_mesh;
pub mod face;
pub mod mesher;
pub mod tangent;
pub mod vertex;

pub use chunk_mesh::{ChunkMesh, MeshElement};
pub use face::{corner_offset, FaceDirection, FACE_COUNT, QUAD_INDICES};
pub use mesher::ChunkMesher;
pub use tangent::{tangent_bases, PackedNormal, PackedTangentBasis, TangentBasis};
pub use vertex::BrickVertex;
