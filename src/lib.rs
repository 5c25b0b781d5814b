//! Workspace umbrella crate for craftdex.
//!
//! This crate stitches together ingredient identity canonicalization and
//! the inverted recipe index so hosts can register interpreters, build
//! the index from a full rule set, and serve lookups with a single API
//! entry point.
//!
//! The core is a synchronous, single-call-at-a-time data structure:
//! registration and index building happen in a load phase, queries in the
//! phase after it. For hosts whose readers overlap a rule-set reload,
//! [`SharedRecipeMap`] publishes a freshly built index as one atomic
//! handle swap, so no partial state is ever observable mid-rebuild.
//!
//! ```
//! use craftdex::{
//!     CanonicalConfig, CategoryTag, Ingredient, IngredientKind, IngredientsForType,
//!     InterpreterRegistry, RecipeMap, SharedRecipeMap,
//! };
//!
//! let iron = IngredientKind::new("modid:iron_ingot").unwrap();
//! let registry = InterpreterRegistry::new();
//!
//! let mut map = RecipeMap::new(registry.snapshot(), CanonicalConfig::default());
//! let smelting = CategoryTag::new("minecraft:smelting").unwrap();
//! let ingot = Ingredient::new(iron);
//! map.add_recipe(
//!     "iron_block",
//!     &smelting,
//!     &[IngredientsForType::new(vec![vec![Some(ingot.clone())]])],
//! );
//!
//! let shared = SharedRecipeMap::new(map);
//! assert_eq!(shared.load().recipes(&smelting, &ingot), vec!["iron_block"]);
//! ```

pub use identity::{
    canonicalize, digest_discriminator, uids_with_wildcard, wildcard_uid, AllMetadata,
    CanonicalConfig, IdentityError, Ingredient, IngredientKind, InterpreterRegistry,
    InterpreterSnapshot, KindId, PotionEffects, RegisterOutcome, SubtypeInterpreter, UidContext,
    NO_SUBTYPE,
};
pub use recipe_index::{
    natural_order, CategoryTag, IngredientsForType, RecipeIndexError, RecipeMap, RecipeSlot,
    TagComparator,
};

use std::sync::{Arc, RwLock};

use tracing::debug;

/// Publication point for wholesale index rebuilds.
///
/// Readers [`load`](Self::load) an `Arc` handle and query it freely; a
/// reload builds a new [`RecipeMap`] off to the side and
/// [`publish`](Self::publish)es it as a single pointer swap. Handles
/// taken before the swap keep observing the old, fully consistent index.
pub struct SharedRecipeMap<R> {
    inner: RwLock<Arc<RecipeMap<R>>>,
}

impl<R: Clone> SharedRecipeMap<R> {
    pub fn new(map: RecipeMap<R>) -> Self {
        Self {
            inner: RwLock::new(Arc::new(map)),
        }
    }

    /// The currently published index.
    pub fn load(&self) -> Arc<RecipeMap<R>> {
        Arc::clone(&self.inner.read().unwrap())
    }

    /// Replace the published index wholesale.
    pub fn publish(&self, map: RecipeMap<R>) {
        *self.inner.write().unwrap() = Arc::new(map);
        debug!("published rebuilt recipe map");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_map() -> RecipeMap<&'static str> {
        RecipeMap::new(InterpreterRegistry::new().snapshot(), CanonicalConfig::default())
    }

    #[test]
    fn publish_swaps_the_visible_map() {
        let crystal = IngredientKind::new("modid:crystal").unwrap();
        let growing = CategoryTag::new("modid:growing").unwrap();
        let instance = Ingredient::new(crystal);

        let shared = SharedRecipeMap::new(empty_map());
        let stale = shared.load();
        assert!(stale.recipes(&growing, &instance).is_empty());

        let mut rebuilt = empty_map();
        rebuilt.add_recipe(
            "grow_crystal",
            &growing,
            &[IngredientsForType::new(vec![vec![Some(instance.clone())]])],
        );
        shared.publish(rebuilt);

        // Pre-swap handle keeps its consistent (empty) view.
        assert!(stale.recipes(&growing, &instance).is_empty());
        assert_eq!(
            shared.load().recipes(&growing, &instance),
            vec!["grow_crystal"]
        );
    }
}
