//! Subtype interpreters and the per-kind interpreter registry.
//!
//! Registration happens once during load, before any recipe is indexed:
//! single writer, then read-many. The registry is therefore a plain
//! identity-keyed map, and the index build works from an immutable
//! [`InterpreterSnapshot`] so later registry mutation can never shift
//! already-built keys.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::error;

use crate::builtin::AllMetadata;
use crate::ingredient::{Ingredient, IngredientKind, KindId};

/// Discriminator meaning "no distinguishing metadata".
///
/// Interpreters return this (or any empty string) to signal that the
/// instance has nothing subtype-worthy; canonicalization then degrades to
/// the kind's wildcard uid.
pub const NO_SUBTYPE: &str = "";

/// Usage context a uid is computed for.
///
/// The built-in interpreters ignore it, but custom interpreters may derive
/// different canonical forms for UI labeling vs. recipe matching. Build
/// and lookup must always use the same context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UidContext {
    Display,
    Recipe,
}

/// A pure function deriving a subtype discriminator from an instance's
/// mutable metadata.
pub trait SubtypeInterpreter: Send + Sync {
    fn apply(&self, ingredient: &Ingredient, context: UidContext) -> String;
}

impl<F> SubtypeInterpreter for F
where
    F: Fn(&Ingredient, UidContext) -> String + Send + Sync,
{
    fn apply(&self, ingredient: &Ingredient, context: UidContext) -> String {
        self(ingredient, context)
    }
}

/// Outcome of [`InterpreterRegistry::register`].
///
/// Duplicate registration is non-fatal (the first registration wins and
/// the duplicate is logged), but the outcome is surfaced so callers and
/// tests can observe it directly rather than scraping logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum RegisterOutcome {
    Registered,
    RejectedDuplicate,
}

impl RegisterOutcome {
    pub fn is_registered(self) -> bool {
        matches!(self, RegisterOutcome::Registered)
    }
}

/// Per-kind registry of subtype interpreters. At most one interpreter per
/// kind at any time.
#[derive(Default)]
pub struct InterpreterRegistry {
    interpreters: HashMap<KindId, Arc<dyn SubtypeInterpreter>>,
}

impl InterpreterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an interpreter for a kind. First registration wins;
    /// duplicates are logged and ignored so one misbehaving plugin cannot
    /// abort a whole load.
    pub fn register(
        &mut self,
        kind: &Arc<IngredientKind>,
        interpreter: Arc<dyn SubtypeInterpreter>,
    ) -> RegisterOutcome {
        if self.interpreters.contains_key(&kind.id()) {
            error!(
                kind = kind.name(),
                "an interpreter is already registered for this kind"
            );
            return RegisterOutcome::RejectedDuplicate;
        }
        self.interpreters.insert(kind.id(), interpreter);
        RegisterOutcome::Registered
    }

    /// Convenience registration of the built-in [`AllMetadata`] interpreter
    /// for each given kind. Duplicates are rejected per kind with the same
    /// first-wins semantics as [`register`](Self::register).
    pub fn use_metadata_for_subtypes<'a>(
        &mut self,
        kinds: impl IntoIterator<Item = &'a Arc<IngredientKind>>,
    ) {
        for kind in kinds {
            let _ = self.register(kind, Arc::new(AllMetadata));
        }
    }

    /// Whether the instance's kind has a registered interpreter.
    pub fn has_interpreter(&self, ingredient: &Ingredient) -> bool {
        self.interpreters.contains_key(&ingredient.kind().id())
    }

    /// Immutable defensive copy of the current registrations.
    ///
    /// Mutations to the registry after a snapshot never affect previously
    /// taken snapshots.
    pub fn snapshot(&self) -> InterpreterSnapshot {
        InterpreterSnapshot {
            interpreters: Arc::new(self.interpreters.clone()),
        }
    }
}

/// Frozen view of an [`InterpreterRegistry`], shared by the index build
/// and by query-time canonicalization. Cheap to clone.
#[derive(Clone, Default)]
pub struct InterpreterSnapshot {
    interpreters: Arc<HashMap<KindId, Arc<dyn SubtypeInterpreter>>>,
}

impl InterpreterSnapshot {
    pub fn get(&self, kind: KindId) -> Option<&Arc<dyn SubtypeInterpreter>> {
        self.interpreters.get(&kind)
    }

    pub fn has_interpreter(&self, ingredient: &Ingredient) -> bool {
        self.interpreters.contains_key(&ingredient.kind().id())
    }

    pub fn len(&self) -> usize {
        self.interpreters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interpreters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(discriminator: &'static str) -> Arc<dyn SubtypeInterpreter> {
        Arc::new(move |_: &Ingredient, _: UidContext| discriminator.to_string())
    }

    #[test]
    fn first_registration_wins() {
        let kind = IngredientKind::new("modid:widget").unwrap();
        let mut registry = InterpreterRegistry::new();

        assert_eq!(
            registry.register(&kind, fixed("first")),
            RegisterOutcome::Registered
        );
        assert_eq!(
            registry.register(&kind, fixed("second")),
            RegisterOutcome::RejectedDuplicate
        );

        let snapshot = registry.snapshot();
        let instance = Ingredient::new(kind);
        let kept = snapshot
            .get(instance.kind().id())
            .expect("interpreter retained");
        assert_eq!(kept.apply(&instance, UidContext::Recipe), "first");
    }

    #[test]
    fn has_interpreter_is_kind_scoped() {
        let registered = IngredientKind::new("modid:a").unwrap();
        let unregistered = IngredientKind::new("modid:b").unwrap();
        let mut registry = InterpreterRegistry::new();
        let _ = registry.register(&registered, fixed("x"));

        assert!(registry.has_interpreter(&Ingredient::new(registered)));
        assert!(!registry.has_interpreter(&Ingredient::new(unregistered)));
    }

    #[test]
    fn snapshot_is_isolated_from_later_registrations() {
        let kind = IngredientKind::new("modid:late").unwrap();
        let mut registry = InterpreterRegistry::new();

        let before = registry.snapshot();
        let _ = registry.register(&kind, fixed("x"));
        let after = registry.snapshot();

        let instance = Ingredient::new(kind);
        assert!(!before.has_interpreter(&instance));
        assert!(after.has_interpreter(&instance));
    }

    #[test]
    fn same_name_kinds_register_independently() {
        let a = IngredientKind::new("modid:gear").unwrap();
        let b = IngredientKind::new("modid:gear").unwrap();
        let mut registry = InterpreterRegistry::new();

        assert!(registry.register(&a, fixed("a")).is_registered());
        assert!(registry.register(&b, fixed("b")).is_registered());
        assert_eq!(registry.snapshot().len(), 2);
    }
}
