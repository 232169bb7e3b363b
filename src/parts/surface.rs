//! Surface attributes and the renderer-side material cache

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Visual surface attributes of a part
///
/// A plain value type; the pipeline emits these inline and performs no
/// caching of its own. Deduplication of identical materials is the
/// rendering collaborator's concern (see [`SurfaceCache`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    /// Linear RGB colour
    pub color: [f64; 3],
    /// PBR metalness factor
    pub metalness: f64,
    /// PBR roughness factor
    pub roughness: f64,
}

impl Surface {
    /// Powder-coated steel frame finish
    pub fn powder_coat(color: [f64; 3]) -> Self {
        Self {
            color,
            metalness: 0.6,
            roughness: 0.35,
        }
    }

    /// Pre-painted roof sheeting finish
    pub fn roofing(color: [f64; 3]) -> Self {
        Self {
            color,
            metalness: 0.7,
            roughness: 0.3,
        }
    }

    /// Matte non-metallic finish (ground, walls)
    pub fn matte(color: [f64; 3]) -> Self {
        Self {
            color,
            metalness: 0.0,
            roughness: 0.9,
        }
    }

    /// Moulded fitting finish (downpipes, light housings)
    pub fn fitting(color: [f64; 3]) -> Self {
        Self {
            color,
            metalness: 0.1,
            roughness: 0.55,
        }
    }

    /// Canonical cache key over the visual parameters
    pub fn key(&self) -> String {
        format!(
            "{:.4}:{:.4}:{:.4}|m{:.3}|r{:.3}",
            self.color[0], self.color[1], self.color[2], self.metalness, self.roughness
        )
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::matte([0.5, 0.5, 0.5])
    }
}

/// Keyed memoization of reusable surface objects.
///
/// Owned by the rendering collaborator, never by the pipeline: evicting or
/// bypassing it cannot affect correctness, it only avoids duplicate
/// allocation of identical material objects across many parts.
#[derive(Debug, Default)]
pub struct SurfaceCache {
    entries: HashMap<String, Arc<Surface>>,
}

impl SurfaceCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the shared surface for these attributes, inserting on first use
    pub fn get_or_insert(&mut self, surface: &Surface) -> Arc<Surface> {
        self.entries
            .entry(surface.key())
            .or_insert_with(|| Arc::new(surface.clone()))
            .clone()
    }

    /// Number of distinct materials seen
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no materials have been interned yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all cached materials
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_dedupes_identical_surfaces() {
        let mut cache = SurfaceCache::new();
        let a = cache.get_or_insert(&Surface::powder_coat([0.2, 0.2, 0.2]));
        let b = cache.get_or_insert(&Surface::powder_coat([0.2, 0.2, 0.2]));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_distinguishes_finishes() {
        let mut cache = SurfaceCache::new();
        cache.get_or_insert(&Surface::powder_coat([0.2, 0.2, 0.2]));
        cache.get_or_insert(&Surface::matte([0.2, 0.2, 0.2]));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_bypass_is_harmless() {
        // A cleared cache hands out equal values again
        let mut cache = SurfaceCache::new();
        let before = cache.get_or_insert(&Surface::roofing([0.9, 0.9, 0.85]));
        cache.clear();
        let after = cache.get_or_insert(&Surface::roofing([0.9, 0.9, 0.85]));
        assert_eq!(*before, *after);
    }
}
