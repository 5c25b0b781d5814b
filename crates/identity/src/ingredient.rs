//! Ingredient kinds and instances.
//!
//! A kind is an identity-keyed handle: [`IngredientKind::new`] interns a
//! fresh [`KindId`] per call, so equality is registration identity, never
//! structural equality. The host may legitimately hold two kinds that look
//! identical but are distinct registrable entities.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde_json::Value;

use crate::error::IdentityError;

static NEXT_KIND_ID: AtomicU64 = AtomicU64::new(1);

/// Interned identity of an [`IngredientKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KindId(u64);

/// The immutable family/type classifier of an ingredient.
///
/// The name enters identity strings as the kind token, so hosts are
/// expected to use registry-style unique names (`"minecraft:potion"`).
#[derive(Debug)]
pub struct IngredientKind {
    id: KindId,
    name: String,
}

impl IngredientKind {
    /// Create a kind with a fresh interned id.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::EmptyKindName`] for an empty or blank name.
    pub fn new(name: impl Into<String>) -> Result<Arc<Self>, IdentityError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(IdentityError::EmptyKindName);
        }
        let id = KindId(NEXT_KIND_ID.fetch_add(1, Ordering::Relaxed));
        Ok(Arc::new(Self { id, name }))
    }

    pub fn id(&self) -> KindId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for IngredientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A read-only ingredient instance: a kind plus optional nested metadata.
///
/// The metadata tree is arbitrary JSON-shaped data (primitives, arrays,
/// nested maps); this crate never mutates it.
#[derive(Clone, Debug)]
pub struct Ingredient {
    kind: Arc<IngredientKind>,
    metadata: Option<Value>,
}

impl Ingredient {
    /// An instance carrying no auxiliary metadata.
    pub fn new(kind: Arc<IngredientKind>) -> Self {
        Self {
            kind,
            metadata: None,
        }
    }

    /// An instance carrying the given auxiliary metadata tree.
    pub fn with_metadata(kind: Arc<IngredientKind>, metadata: Value) -> Self {
        Self {
            kind,
            metadata: Some(metadata),
        }
    }

    pub fn kind(&self) -> &Arc<IngredientKind> {
        &self.kind
    }

    pub fn metadata(&self) -> Option<&Value> {
        self.metadata.as_ref()
    }

    /// Human-readable description for diagnostics and error logs.
    pub fn description(&self) -> String {
        match &self.metadata {
            Some(metadata) => format!("{} {}", self.kind.name(), metadata),
            None => self.kind.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kinds_with_equal_names_are_distinct() {
        let a = IngredientKind::new("modid:gear").unwrap();
        let b = IngredientKind::new("modid:gear").unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn blank_kind_name_is_rejected() {
        assert_eq!(
            IngredientKind::new("   ").unwrap_err(),
            IdentityError::EmptyKindName
        );
        assert_eq!(
            IngredientKind::new("").unwrap_err(),
            IdentityError::EmptyKindName
        );
    }

    #[test]
    fn description_includes_metadata() {
        let kind = IngredientKind::new("modid:cell").unwrap();
        let plain = Ingredient::new(Arc::clone(&kind));
        assert_eq!(plain.description(), "modid:cell");

        let tagged = Ingredient::with_metadata(kind, json!({ "fluid": "water" }));
        assert_eq!(tagged.description(), r##"modid:cell {"fluid":"water"}"##);
    }
}
