//! Reference brick grid storage.
//!
//! The mesher never sees these types directly, only [`BrickQuery`]. They
//! exist so hosts have ready-made backends and tests have fixtures.
//!
//! [`BrickQuery`]: crate::query::BrickQuery

mod dense;
mod dirty;
mod shared;
mod sparse;

pub use dense::DenseBrickGrid;
pub use dirty::DirtyChunks;
pub use shared::SharedBrickGrid;
pub use sparse::SparseBrickGrid;
