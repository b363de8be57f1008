//! The brick query capability.
//!
//! The mesher only ever asks "which material is at this brick?". Any storage
//! (dense array, hash of chunks, paged, procedural) can feed it by
//! implementing [`BrickQuery`].

use crate::coord::BrickCoord;
use crate::material::MaterialIndex;

/// Read access to brick materials.
///
/// Implementations must answer for every coordinate, including coordinates
/// outside any stored region (typically by returning the empty material,
/// clamping or wrapping). The mesher queries a one-brick halo around each
/// chunk.
pub trait BrickQuery {
    /// Returns the material at `coord`.
    fn brick(&self, coord: BrickCoord) -> MaterialIndex;
}

impl<T: BrickQuery + ?Sized> BrickQuery for &T {
    #[inline]
    fn brick(&self, coord: BrickCoord) -> MaterialIndex {
        (**self).brick(coord)
    }
}

impl<T: BrickQuery + ?Sized> BrickQuery for Box<T> {
    #[inline]
    fn brick(&self, coord: BrickCoord) -> MaterialIndex {
        (**self).brick(coord)
    }
}

/// Adapts a closure into a [`BrickQuery`].
///
/// ```
/// use brickgrid_shared::{BrickCoord, BrickQuery, BrickQueryFn, MaterialIndex};
///
/// let floor = BrickQueryFn(|c: BrickCoord| MaterialIndex(u8::from(c.z < 0)));
/// assert_eq!(floor.brick(BrickCoord::new(3, 3, -1)), MaterialIndex(1));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BrickQueryFn<F>(pub F);

impl<F> BrickQuery for BrickQueryFn<F>
where
    F: Fn(BrickCoord) -> MaterialIndex,
{
    #[inline]
    fn brick(&self, coord: BrickCoord) -> MaterialIndex {
        (self.0)(coord)
    }
}
