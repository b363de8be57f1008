//! Grids shared between an editing thread and meshing threads.
//!
//! Meshing a chunk must observe one consistent grid state. Writers take the
//! write lock; every `build` runs against a read snapshot held for its
//! whole duration.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::coord::BrickCoord;
use crate::material::MaterialIndex;
use crate::query::BrickQuery;

/// Reader/writer wrapper around any grid backend.
#[derive(Debug, Default)]
pub struct SharedBrickGrid<G> {
    inner: RwLock<G>,
}

impl<G> SharedBrickGrid<G> {
    /// Wraps a grid.
    #[must_use]
    pub fn new(grid: G) -> Self {
        Self {
            inner: RwLock::new(grid),
        }
    }

    /// Takes a stable read snapshot. Writers block until it is dropped.
    pub fn snapshot(&self) -> RwLockReadGuard<'_, G> {
        self.inner.read()
    }

    /// Takes exclusive write access.
    pub fn write(&self) -> RwLockWriteGuard<'_, G> {
        self.inner.write()
    }

    /// Unwraps the grid.
    pub fn into_inner(self) -> G {
        self.inner.into_inner()
    }
}

impl<G: BrickQuery + ?Sized> BrickQuery for RwLockReadGuard<'_, G> {
    #[inline]
    fn brick(&self, coord: BrickCoord) -> MaterialIndex {
        (**self).brick(coord)
    }
}
