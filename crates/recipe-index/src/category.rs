//! Category tags and their ordering.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::RecipeIndexError;

/// Stable, globally unique tag identifying a recipe category.
///
/// The category value itself is opaque to this crate; only its tag enters
/// the index and the deterministic ordering of query results.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryTag(String);

impl CategoryTag {
    /// # Errors
    ///
    /// Returns [`RecipeIndexError::EmptyCategoryTag`] for an empty or
    /// blank tag.
    pub fn new(tag: impl Into<String>) -> Result<Self, RecipeIndexError> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(RecipeIndexError::EmptyCategoryTag);
        }
        Ok(Self(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Total ordering over category tags, supplied by the host's category
/// registry and used to sort [`RecipeMap::recipe_categories`] output.
///
/// [`RecipeMap::recipe_categories`]: crate::RecipeMap::recipe_categories
pub type TagComparator = Arc<dyn Fn(&CategoryTag, &CategoryTag) -> Ordering + Send + Sync>;

/// Lexicographic tag order, the default when the host supplies none.
pub fn natural_order() -> TagComparator {
    Arc::new(|a, b| a.cmp(b))
}
