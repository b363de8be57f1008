//! Grid parameters.
//!
//! Loaded once from TOML when a grid is created:
//!
//! ```toml
//! size_log2 = [6, 6, 5]
//! chunk_size_log2 = 4
//! empty_material_index = 0
//! boundary = "empty"
//!
//! [[materials]]
//! name = "air"
//!
//! [[materials]]
//! name = "stone"
//! surface_material = "M_Stone"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::material::{MaterialIndex, MaterialSlot, DEFAULT_SURFACE_MATERIAL, MAX_MATERIALS};

/// Largest render chunk edge (log2) whose worst-case mesh still fits 16-bit indices.
///
/// A 16^3 checkerboard exposes 2048 isolated bricks, 24 vertices each: 49,152.
/// At 32^3 the same pattern needs 393,216.
pub const MAX_CHUNK_SIZE_LOG2: u8 = 4;

/// Largest dense grid extent per axis (log2).
pub const MAX_GRID_SIZE_LOG2: u8 = 10;

/// How a grid answers queries outside its extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Everything outside the grid is empty.
    #[default]
    Empty,
    /// Coordinates are clamped to the nearest edge brick.
    Clamp,
    /// Coordinates wrap around (toroidal grid).
    Wrap,
}

/// Parameters describing a brick grid and how it is chunked for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridParameters {
    /// Grid extent per axis, as log2 of the brick count.
    pub size_log2: [u8; 3],
    /// Render chunk edge length, as log2 of the brick count.
    pub chunk_size_log2: u8,
    /// Slot index that marks a brick as empty.
    #[serde(default)]
    pub empty_material_index: MaterialIndex,
    /// Out-of-bounds query behaviour.
    #[serde(default)]
    pub boundary: BoundaryPolicy,
    /// Ordered material slots.
    pub materials: Vec<MaterialSlot>,
}

impl Default for GridParameters {
    fn default() -> Self {
        Self {
            size_log2: [6, 6, 6],
            chunk_size_log2: MAX_CHUNK_SIZE_LOG2,
            empty_material_index: MaterialIndex(0),
            boundary: BoundaryPolicy::Empty,
            materials: vec![MaterialSlot::new("empty"), MaterialSlot::new("solid")],
        }
    }
}

impl GridParameters {
    /// Parses and validates parameters from a TOML string.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML and the matching
    /// validation error for inconsistent values.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let params: Self = toml::from_str(source)?;
        params.validate()?;
        Ok(params)
    }

    /// Reads, parses and validates parameters from a TOML file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`GridParameters::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let params = Self::from_toml_str(&source)?;
        tracing::debug!(
            "Loaded grid parameters from {}: size_log2={:?} chunk_size_log2={} materials={}",
            path.display(),
            params.size_log2,
            params.chunk_size_log2,
            params.materials.len()
        );
        Ok(params)
    }

    /// Checks that the parameters describe a grid the mesher can handle.
    ///
    /// # Errors
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.materials.is_empty() {
            return Err(ConfigError::NoMaterials);
        }
        if self.materials.len() > MAX_MATERIALS {
            return Err(ConfigError::TooManyMaterials {
                count: self.materials.len(),
                max: MAX_MATERIALS,
            });
        }
        if self.empty_material_index.as_usize() >= self.materials.len() {
            return Err(ConfigError::EmptyMaterialOutOfRange {
                index: self.empty_material_index.raw(),
                material_count: self.materials.len(),
            });
        }
        if self.chunk_size_log2 > MAX_CHUNK_SIZE_LOG2 {
            return Err(ConfigError::ChunkTooLarge {
                log2: self.chunk_size_log2,
                max_log2: MAX_CHUNK_SIZE_LOG2,
            });
        }
        for (axis, &log2) in self.size_log2.iter().enumerate() {
            if log2 > MAX_GRID_SIZE_LOG2 {
                return Err(ConfigError::GridTooLarge {
                    axis,
                    log2,
                    max_log2: MAX_GRID_SIZE_LOG2,
                });
            }
            if self.chunk_size_log2 > log2 {
                return Err(ConfigError::ChunkLargerThanGrid {
                    axis,
                    chunk_log2: self.chunk_size_log2,
                    grid_log2: log2,
                });
            }
        }
        Ok(())
    }

    /// Grid extent in bricks per axis.
    #[must_use]
    pub fn size(&self) -> [u32; 3] {
        self.size_log2.map(|log2| 1u32 << log2)
    }

    /// Render chunk edge length in bricks.
    #[must_use]
    pub const fn chunk_size(&self) -> u32 {
        1u32 << self.chunk_size_log2
    }

    /// Number of render chunks per axis.
    #[must_use]
    pub fn chunk_counts(&self) -> [u32; 3] {
        self.size_log2
            .map(|log2| 1u32 << log2.saturating_sub(self.chunk_size_log2))
    }

    /// Number of material slots.
    #[must_use]
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Surface material for a slot, falling back to the default surface.
    #[must_use]
    pub fn surface_material(&self, index: MaterialIndex) -> &str {
        self.materials
            .get(index.as_usize())
            .and_then(|slot| slot.surface_material.as_deref())
            .unwrap_or(DEFAULT_SURFACE_MATERIAL)
    }
}
