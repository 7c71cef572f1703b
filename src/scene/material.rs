use serde::{Deserialize, Serialize};

/// Handle to a material stored in a [`Scene`](super::Scene).
///
/// Handles are never reused, so a restored handle compares equal to the
/// one that was saved if and only if it is the same material.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct MaterialId(pub(crate) u32);

impl MaterialId {
    /// Raw handle value.
    #[must_use]
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Surface appearance the selection highlight touches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Base colour (linear RGB).
    pub color: [f32; 3],
    /// Emissive colour (linear RGB).
    pub emissive: [f32; 3],
    /// Emissive multiplier.
    pub emissive_intensity: f32,
}

impl Material {
    /// Non-emissive material of the given colour.
    #[must_use]
    pub const fn solid(color: [f32; 3]) -> Self {
        Self {
            color,
            emissive: [0.0; 3],
            emissive_intensity: 0.0,
        }
    }

    /// Copy of this material glowing with `emissive` at `intensity`.
    #[must_use]
    pub fn with_emissive(self, emissive: [f32; 3], intensity: f32) -> Self {
        Self {
            emissive,
            emissive_intensity: intensity,
            ..self
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::solid([0.8, 0.8, 0.8])
    }
}
