//! The recipe map: build-time registration and query-time lookup.

use std::collections::HashSet;

use hashbrown::HashMap;
use tracing::debug;

use identity::{
    canonicalize, uids_with_wildcard, CanonicalConfig, Ingredient, InterpreterSnapshot, UidContext,
};

use crate::category::{natural_order, CategoryTag, TagComparator};
use crate::slot::RecipeSlot;


/// One typed group of a recipe's inputs.
///
/// The outer vec is the recipe's slots; each slot lists its "any of N"
/// candidate instances, with `None` marking a blank position.
#[derive(Clone, Debug, Default)]
pub struct IngredientsForType {
    pub ingredients: Vec<Vec<Option<Ingredient>>>,
}

impl IngredientsForType {
    pub fn new(ingredients: Vec<Vec<Option<Ingredient>>>) -> Self {
        Self { ingredients }
    }
}

/// Inverted index from ingredient identity to categories and recipes.
///
/// The recipe type `R` is opaque; the map never inspects it, only stores
/// it per (category, identity) cell. Identities are computed through the
/// same [`canonicalize`] pipeline at build and query time, so keys are
/// always comparable by plain string equality.
pub struct RecipeMap<R> {
    snapshot: InterpreterSnapshot,
    config: CanonicalConfig,
    tag_order: TagComparator,
    recipes_by_category: HashMap<CategoryTag, HashMap<String, RecipeSlot<R>>>,
    categories_by_uid: HashMap<String, Vec<CategoryTag>>,
}

impl<R: Clone> RecipeMap<R> {
    /// A map with the host's default (lexicographic) category ordering.
    pub fn new(snapshot: InterpreterSnapshot, config: CanonicalConfig) -> Self {
        Self::with_tag_order(snapshot, config, natural_order())
    }

    /// A map sorting [`recipe_categories`](Self::recipe_categories) output
    /// with the supplied comparator.
    pub fn with_tag_order(
        snapshot: InterpreterSnapshot,
        config: CanonicalConfig,
        tag_order: TagComparator,
    ) -> Self {
        Self {
            snapshot,
            config,
            tag_order,
            recipes_by_category: HashMap::new(),
            categories_by_uid: HashMap::new(),
        }
    }

    /// Register a recipe under a category for every distinct ingredient
    /// identity across all its slots.
    ///
    /// Identities are de-duplicated within this single call: a recipe
    /// whose five slots all require the same ingredient contributes one
    /// index row per identity, not five.
    pub fn add_recipe(
        &mut self,
        recipe: R,
        category: &CategoryTag,
        ingredients_by_type: &[IngredientsForType],
    ) {
        let mut seen: HashSet<String> = HashSet::new();
        for group in ingredients_by_type {
            for slot in &group.ingredients {
                for ingredient in slot.iter().flatten() {
                    let uid =
                        canonicalize(&self.snapshot, ingredient, UidContext::Recipe, &self.config);
                    if !seen.insert(uid.clone()) {
                        continue;
                    }
                    self.recipes_by_category
                        .entry(category.clone())
                        .or_default()
                        .entry(uid.clone())
                        .or_default()
                        .push(recipe.clone());
                    self.record_category(uid, category);
                }
            }
        }
        debug!(category = %category, uids = seen.len(), "indexed recipe");
    }

    fn record_category(&mut self, uid: String, category: &CategoryTag) {
        let categories = self
            .categories_by_uid
            .entry(uid)
            .or_insert_with(|| Vec::with_capacity(2));
        if !categories.contains(category) {
            categories.push(category.clone());
        }
    }

    /// Categories accepting an ingredient with this instance's identity,
    /// wildcard matches included, sorted by the tag comparator.
    pub fn recipe_categories(&self, ingredient: &Ingredient) -> Vec<CategoryTag> {
        let (exact, wildcard) =
            uids_with_wildcard(&self.snapshot, ingredient, UidContext::Recipe, &self.config);

        let mut out: Vec<CategoryTag> = Vec::new();
        for uid in std::iter::once(exact).chain(wildcard) {
            if let Some(categories) = self.categories_by_uid.get(&uid) {
                for category in categories {
                    if !out.contains(category) {
                        out.push(category.clone());
                    }
                }
            }
        }
        out.sort_by(|a, b| (self.tag_order)(a, b));
        out
    }

    /// Recipes stored under (category, identity) for this instance:
    /// exact-identity hits first, then wildcard hits. No cross-identity
    /// de-duplication is performed.
    pub fn recipes(&self, category: &CategoryTag, ingredient: &Ingredient) -> Vec<R> {
        let Some(by_uid) = self.recipes_by_category.get(category) else {
            return Vec::new();
        };

        let (exact, wildcard) =
            uids_with_wildcard(&self.snapshot, ingredient, UidContext::Recipe, &self.config);

        let mut out: Vec<R> = Vec::new();
        for uid in std::iter::once(exact).chain(wildcard) {
            if let Some(slot) = by_uid.get(&uid) {
                out.extend_from_slice(slot.as_slice());
            }
        }
        out
    }
}
