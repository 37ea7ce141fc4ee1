//! Asset registry for front-face lookup.
//!
//! The deck builder only asks two questions of its asset source: does this
//! asset exist, and (optionally) how big is it. `AssetResolver` captures that,
//! and `AssetRegistry` is the in-memory implementation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::AssetId;

/// Pixel dimensions of an image asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Metadata for one registered asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetInfo {
    /// The asset's identifier.
    pub id: AssetId,

    /// Image size, if the resolver measured it.
    pub dimensions: Option<Dimensions>,

    /// Position in which this asset was first registered.
    pub discovery_order: usize,
}

/// Read-only view of an asset source.
pub trait AssetResolver {
    /// Check whether an asset exists.
    fn contains(&self, id: &AssetId) -> bool;

    /// Image size of an asset, when known.
    fn dimensions(&self, _id: &AssetId) -> Option<Dimensions> {
        None
    }
}

/// Registry of image assets.
///
/// ## Example
///
/// ```
/// use tabletop_deck::assets::{AssetRegistry, AssetResolver, Dimensions};
/// use tabletop_deck::core::AssetId;
///
/// let mut registry = AssetRegistry::new();
/// registry.register(AssetId::new("AntQueen"));
/// registry.register_with_dimensions(AssetId::new("LMR"), Dimensions::new(750, 1050));
///
/// assert!(registry.contains(&AssetId::new("AntQueen")));
/// assert_eq!(registry.dimensions(&AssetId::new("LMR")), Some(Dimensions::new(750, 1050)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AssetRegistry {
    assets: FxHashMap<AssetId, AssetInfo>,
    order: Vec<AssetId>,
}

impl AssetRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset without dimensions.
    ///
    /// Returns the discovery order. Registering the same id again keeps
    /// the original entry.
    pub fn register(&mut self, id: AssetId) -> usize {
        self.insert(id, None)
    }

    /// Register an asset with known dimensions.
    pub fn register_with_dimensions(&mut self, id: AssetId, dimensions: Dimensions) -> usize {
        self.insert(id, Some(dimensions))
    }

    fn insert(&mut self, id: AssetId, dimensions: Option<Dimensions>) -> usize {
        if let Some(existing) = self.assets.get(&id) {
            return existing.discovery_order;
        }
        let discovery_order = self.order.len();
        self.order.push(id.clone());
        self.assets.insert(
            id.clone(),
            AssetInfo {
                id,
                dimensions,
                discovery_order,
            },
        );
        discovery_order
    }

    /// Get an asset's metadata.
    #[must_use]
    pub fn get(&self, id: &AssetId) -> Option<&AssetInfo> {
        self.assets.get(id)
    }

    /// Get the number of registered assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over assets in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &AssetInfo> {
        self.order.iter().filter_map(|id| self.assets.get(id))
    }
}

impl AssetResolver for AssetRegistry {
    fn contains(&self, id: &AssetId) -> bool {
        self.assets.contains_key(id)
    }

    fn dimensions(&self, id: &AssetId) -> Option<Dimensions> {
        self.assets.get(id).and_then(|info| info.dimensions)
    }
}

impl FromIterator<AssetId> for AssetRegistry {
    fn from_iter<I: IntoIterator<Item = AssetId>>(iter: I) -> Self {
        let mut registry = Self::new();
        for id in iter {
            registry.register(id);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = AssetRegistry::new();
        registry.register(AssetId::new("Goblin"));

        let found = registry.get(&AssetId::new("Goblin"));
        assert!(found.is_some());
        assert_eq!(found.unwrap().discovery_order, 0);

        assert!(registry.get(&AssetId::new("Orc")).is_none());
    }

    #[test]
    fn test_discovery_order() {
        let mut registry = AssetRegistry::new();

        assert_eq!(registry.register(AssetId::new("B")), 0);
        assert_eq!(registry.register(AssetId::new("A")), 1);
        assert_eq!(registry.register(AssetId::new("C")), 2);

        let ids: Vec<_> = registry.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_duplicate_registration_keeps_first() {
        let mut registry = AssetRegistry::new();

        registry.register(AssetId::new("A"));
        registry.register(AssetId::new("B"));
        let order = registry.register_with_dimensions(AssetId::new("A"), Dimensions::new(1, 1));

        assert_eq!(order, 0);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.dimensions(&AssetId::new("A")), None);
    }

    #[test]
    fn test_contains() {
        let registry: AssetRegistry = ["A", "B"].into_iter().map(AssetId::new).collect();

        assert!(registry.contains(&AssetId::new("A")));
        assert!(!registry.contains(&AssetId::new("Missing")));
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_resolver_default_dimensions() {
        struct Everything;
        impl AssetResolver for Everything {
            fn contains(&self, _id: &AssetId) -> bool {
                true
            }
        }

        assert!(Everything.contains(&AssetId::new("anything")));
        assert_eq!(Everything.dimensions(&AssetId::new("anything")), None);
    }
}
