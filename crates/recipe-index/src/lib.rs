//! # Craftdex Recipe Index
//!
//! An inverted index linking ingredient identity strings to the recipe
//! categories and recipes that reference them. Two queryable tables are
//! built from repeated [`RecipeMap::add_recipe`] calls:
//!
//! - identity → categories, answering "which categories accept an
//!   ingredient with this identity",
//! - (category, identity) → recipes, with tagged small-cardinality
//!   storage ([`RecipeSlot`]) so the common one-recipe-per-cell case
//!   allocates no collection.
//!
//! Lookups always probe the exact identity first and the kind's wildcard
//! identity second, so recipes registered against subtype-less
//! ingredients still match subtype-bearing queries.
//!
//! ## Phase discipline
//!
//! The index is append-only during the build phase (repeated
//! `add_recipe`), then frozen for queries. This is a documented boundary,
//! not a lock; for rebuilds that overlap live readers, build a fresh map
//! off to the side and publish it with a single handle swap.
//!
//! ## Example
//!
//! ```
//! use identity::{CanonicalConfig, Ingredient, IngredientKind, InterpreterRegistry};
//! use recipe_index::{CategoryTag, IngredientsForType, RecipeMap};
//!
//! let iron = IngredientKind::new("modid:iron_ingot").unwrap();
//! let registry = InterpreterRegistry::new();
//! let mut map: RecipeMap<&str> =
//!     RecipeMap::new(registry.snapshot(), CanonicalConfig::default());
//!
//! let smelting = CategoryTag::new("minecraft:smelting").unwrap();
//! let ingot = Ingredient::new(iron);
//! map.add_recipe(
//!     "iron_block",
//!     &smelting,
//!     &[IngredientsForType::new(vec![vec![Some(ingot.clone())]])],
//! );
//!
//! assert_eq!(map.recipes(&smelting, &ingot), vec!["iron_block"]);
//! assert_eq!(map.recipe_categories(&ingot), vec![smelting]);
//! ```

mod category;
mod map;
mod slot;

pub use category::{natural_order, CategoryTag, TagComparator};
pub use map::{IngredientsForType, RecipeMap};
pub use slot::RecipeSlot;

use thiserror::Error;

/// Errors from recipe-index construction APIs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecipeIndexError {
    #[error("recipe category requires a non-empty tag")]
    EmptyCategoryTag,
}
