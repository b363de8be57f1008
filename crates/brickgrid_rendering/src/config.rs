//! Mesher configuration.
//!
//! A plain value derived from [`GridParameters`]. Everything the mesher
//! needs to know about the grid lives here; nothing is discovered at build
//! time.

use brickgrid_shared::{
    ConfigError, ConfigResult, GridParameters, MaterialIndex, MAX_CHUNK_SIZE_LOG2, MAX_MATERIALS,
};

/// Vertices emitted per visible face (no sharing between faces).
pub const VERTICES_PER_FACE: usize = 4;

/// Indices emitted per visible face (two triangles).
pub const INDICES_PER_FACE: usize = 6;

/// Hard ceiling on vertices per chunk: everything must be addressable by a `u16`.
pub const MAX_CHUNK_VERTICES: usize = 1 << 16;

const _: () = assert!(MesherConfig::worst_case_vertices(MAX_CHUNK_SIZE_LOG2) <= MAX_CHUNK_VERTICES);
// Vertex components are u8 and reach `chunk_size` inclusive.
const _: () = assert!((1u32 << MAX_CHUNK_SIZE_LOG2) <= u8::MAX as u32);

/// Parameters consumed by [`ChunkMesher`](crate::ChunkMesher).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MesherConfig {
    /// Chunk edge length, as log2 of the brick count (uniform on all axes).
    pub chunk_size_log2: u8,
    /// Number of material slots; batches are pre-sized to this.
    pub material_count: usize,
    /// Sentinel marking empty bricks.
    pub empty_material_index: MaterialIndex,
}

impl MesherConfig {
    /// Creates a configuration.
    #[must_use]
    pub const fn new(
        chunk_size_log2: u8,
        material_count: usize,
        empty_material_index: MaterialIndex,
    ) -> Self {
        Self {
            chunk_size_log2,
            material_count,
            empty_material_index,
        }
    }

    /// Extracts the mesher's view of a grid.
    #[must_use]
    pub fn from_parameters(params: &GridParameters) -> Self {
        Self::new(
            params.chunk_size_log2,
            params.material_count(),
            params.empty_material_index,
        )
    }

    /// Chunk edge length in bricks.
    #[inline]
    #[must_use]
    pub const fn chunk_size(&self) -> u32 {
        1u32 << self.chunk_size_log2
    }

    /// Vertex count of the worst case chunk: every other brick solid
    /// (3D checkerboard), each exposing all six faces.
    #[must_use]
    pub const fn worst_case_vertices(chunk_size_log2: u8) -> usize {
        let volume = match 1usize.checked_shl(3 * chunk_size_log2 as u32) {
            Some(volume) => volume,
            None => return usize::MAX,
        };
        volume.div_ceil(2).saturating_mul(6 * VERTICES_PER_FACE)
    }

    /// Checks the configuration before any meshing happens.
    ///
    /// # Errors
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.material_count == 0 {
            return Err(ConfigError::NoMaterials);
        }
        if self.material_count > MAX_MATERIALS {
            return Err(ConfigError::TooManyMaterials {
                count: self.material_count,
                max: MAX_MATERIALS,
            });
        }
        if self.empty_material_index.as_usize() >= self.material_count {
            return Err(ConfigError::EmptyMaterialOutOfRange {
                index: self.empty_material_index.raw(),
                material_count: self.material_count,
            });
        }
        if self.chunk_size_log2 > MAX_CHUNK_SIZE_LOG2
            || Self::worst_case_vertices(self.chunk_size_log2) > MAX_CHUNK_VERTICES
        {
            return Err(ConfigError::ChunkTooLarge {
                log2: self.chunk_size_log2,
                max_log2: MAX_CHUNK_SIZE_LOG2,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worst_case_bounds() {
        assert_eq!(MesherConfig::worst_case_vertices(1), 4 * 24);
        assert_eq!(MesherConfig::worst_case_vertices(4), 2048 * 24);
        assert!(MesherConfig::worst_case_vertices(5) > MAX_CHUNK_VERTICES);
    }

    #[test]
    fn test_validate_accepts_limits() {
        let config = MesherConfig::new(MAX_CHUNK_SIZE_LOG2, 256, MaterialIndex(255));
        assert!(config.validate().is_ok());
        assert_eq!(config.chunk_size(), 16);
    }

    #[test]
    fn test_validate_rejects_large_chunk() {
        let config = MesherConfig::new(5, 2, MaterialIndex(0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ChunkTooLarge { log2: 5, max_log2: 4 })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_empty_index() {
        let config = MesherConfig::new(2, 3, MaterialIndex(3));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyMaterialOutOfRange { index: 3, material_count: 3 })
        ));
        assert!(matches!(
            MesherConfig::new(2, 0, MaterialIndex(0)).validate(),
            Err(ConfigError::NoMaterials)
        ));
        assert!(matches!(
            MesherConfig::new(2, 300, MaterialIndex(0)).validate(),
            Err(ConfigError::TooManyMaterials { count: 300, .. })
        ));
    }

    #[test]
    fn test_from_parameters() {
        let params = GridParameters::default();
        let config = MesherConfig::from_parameters(&params);
        assert_eq!(config.chunk_size_log2, params.chunk_size_log2);
        assert_eq!(config.material_count, 2);
        assert_eq!(config.empty_material_index, MaterialIndex(0));
    }
}
