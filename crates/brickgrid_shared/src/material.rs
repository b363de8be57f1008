//! Material slots.
//!
//! A brick stores a small index into the grid's ordered material list. One
//! configured index is reserved as the "empty" sentinel.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Maximum number of material slots a grid can declare (8-bit indices).
pub const MAX_MATERIALS: usize = 256;

/// Surface material used when a slot does not name one.
pub const DEFAULT_SURFACE_MATERIAL: &str = "default_surface";

/// Index of a material slot.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Pod, Zeroable, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialIndex(pub u8);

impl MaterialIndex {
    /// Creates a new material index.
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Returns the index as a slot position.
    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u8> for MaterialIndex {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for MaterialIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the grid's material list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSlot {
    /// Human readable slot name.
    pub name: String,
    /// Surface material asset assigned by the host renderer.
    #[serde(default)]
    pub surface_material: Option<String>,
}

impl MaterialSlot {
    /// Creates a slot without a surface material.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surface_material: None,
        }
    }

    /// Assigns a surface material.
    #[must_use]
    pub fn with_surface(mut self, surface_material: impl Into<String>) -> Self {
        self.surface_material = Some(surface_material.into());
        self
    }
}
