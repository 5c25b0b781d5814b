//! The canonicalization pipeline: instance + interpreter → identity string.
//!
//! Identity strings are kind-scoped:
//!
//! - `"{kind}"`: the wildcard uid, produced when the kind has no
//!   interpreter or the interpreter reports no distinguishing metadata.
//! - `"{kind}#{subtype}"`: otherwise, where the subtype part is the raw
//!   discriminator verbatim when short, or its truncated hex digest when
//!   long.
//!
//! Scoping the wildcard to the kind keeps instances of different kinds
//! from colliding on a single global sentinel. The hard length bound is
//! `kind-token + 1 + max(verbatim_max, 2 * digest_bytes)` bytes,
//! independent of metadata size.

use crate::config::CanonicalConfig;
use crate::hash::digest_discriminator;
use crate::ingredient::Ingredient;
use crate::interpreter::{InterpreterSnapshot, UidContext};

const SUBTYPE_SEPARATOR: char = '#';

/// Compute the canonical identity string for an instance.
///
/// Pure over its inputs: equal instance, context, snapshot and config
/// always yield an identical uid. Build-time and query-time callers must
/// use the same context so keys stay comparable by plain string equality.
pub fn canonicalize(
    snapshot: &InterpreterSnapshot,
    ingredient: &Ingredient,
    context: UidContext,
    cfg: &CanonicalConfig,
) -> String {
    let kind = ingredient.kind();
    let Some(interpreter) = snapshot.get(kind.id()) else {
        return wildcard_uid(ingredient);
    };

    let raw = interpreter.apply(ingredient, context);
    if raw.is_empty() {
        return wildcard_uid(ingredient);
    }

    let subtype = if raw.len() <= cfg.verbatim_max {
        raw
    } else {
        digest_discriminator(raw.as_bytes(), cfg.digest_bytes)
    };
    format!("{}{SUBTYPE_SEPARATOR}{subtype}", kind.name())
}

/// The uid an instance would have with no subtype information at all, i.e.
/// as if no interpreter were registered for its kind.
pub fn wildcard_uid(ingredient: &Ingredient) -> String {
    ingredient.kind().name().to_string()
}

/// The exact uid plus the wildcard uid when it differs.
///
/// Both the index build and every lookup go through this helper, so a
/// recipe registered against a wildcard-identity ingredient still matches
/// queries for a specific subtype of the same kind.
pub fn uids_with_wildcard(
    snapshot: &InterpreterSnapshot,
    ingredient: &Ingredient,
    context: UidContext,
    cfg: &CanonicalConfig,
) -> (String, Option<String>) {
    let exact = canonicalize(snapshot, ingredient, context, cfg);
    let wildcard = wildcard_uid(ingredient);
    if exact == wildcard {
        (exact, None)
    } else {
        (exact, Some(wildcard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient::IngredientKind;
    use crate::interpreter::{InterpreterRegistry, SubtypeInterpreter};
    use std::sync::Arc;

    fn echo_metadata_str() -> Arc<dyn SubtypeInterpreter> {
        // Interpreter returning the metadata tree's "tag" string field.
        Arc::new(|ingredient: &Ingredient, _: UidContext| {
            ingredient
                .metadata()
                .and_then(|m| m.get("tag"))
                .and_then(|t| t.as_str())
                .unwrap_or_default()
                .to_string()
        })
    }

    fn setup(kind_name: &str) -> (Arc<IngredientKind>, InterpreterSnapshot) {
        let kind = IngredientKind::new(kind_name).unwrap();
        let mut registry = InterpreterRegistry::new();
        let _ = registry.register(&kind, echo_metadata_str());
        (kind, registry.snapshot())
    }

    fn tagged(kind: &Arc<IngredientKind>, tag: &str) -> Ingredient {
        Ingredient::with_metadata(Arc::clone(kind), serde_json::json!({ "tag": tag }))
    }

    #[test]
    fn unregistered_kind_gets_wildcard_uid() {
        let kind = IngredientKind::new("modid:plain").unwrap();
        let snapshot = InterpreterRegistry::new().snapshot();
        let instance = Ingredient::new(kind);
        let cfg = CanonicalConfig::default();

        assert_eq!(
            canonicalize(&snapshot, &instance, UidContext::Recipe, &cfg),
            "modid:plain"
        );
        assert_eq!(
            canonicalize(&snapshot, &instance, UidContext::Display, &cfg),
            "modid:plain"
        );
    }

    #[test]
    fn empty_discriminator_degrades_to_wildcard() {
        let (kind, snapshot) = setup("modid:tool");
        let cfg = CanonicalConfig::default();
        // Registered interpreter, but nothing distinguishing in metadata.
        let instance = Ingredient::new(kind);
        assert_eq!(
            canonicalize(&snapshot, &instance, UidContext::Recipe, &cfg),
            "modid:tool"
        );
    }

    #[test]
    fn short_discriminator_is_verbatim() {
        let (kind, snapshot) = setup("modid:tool");
        let cfg = CanonicalConfig::default();
        let instance = tagged(&kind, "sharp");
        assert_eq!(
            canonicalize(&snapshot, &instance, UidContext::Recipe, &cfg),
            "modid:tool#sharp"
        );
    }

    #[test]
    fn verbatim_hash_boundary_is_exact() {
        let (kind, snapshot) = setup("modid:tool");
        let cfg = CanonicalConfig::default();

        let at_threshold = "a".repeat(20);
        let uid = canonicalize(
            &snapshot,
            &tagged(&kind, &at_threshold),
            UidContext::Recipe,
            &cfg,
        );
        assert_eq!(uid, format!("modid:tool#{at_threshold}"));

        let over_threshold = "a".repeat(21);
        let uid = canonicalize(
            &snapshot,
            &tagged(&kind, &over_threshold),
            UidContext::Recipe,
            &cfg,
        );
        let subtype = uid.strip_prefix("modid:tool#").expect("kind-scoped uid");
        assert_eq!(subtype.len(), 20);
        assert_ne!(subtype, over_threshold);
        assert!(subtype.bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[test]
    fn uid_length_is_bounded_regardless_of_metadata_size() {
        let (kind, snapshot) = setup("modid:tool");
        let cfg = CanonicalConfig::default();
        let bound = kind.name().len() + 1 + cfg.verbatim_max.max(2 * cfg.digest_bytes);

        let huge = "x".repeat(64 * 1024);
        let uid = canonicalize(&snapshot, &tagged(&kind, &huge), UidContext::Recipe, &cfg);
        assert!(uid.len() <= bound);
        assert!(!uid.is_empty());
    }

    #[test]
    fn canonicalize_is_deterministic() {
        let (kind, snapshot) = setup("modid:tool");
        let cfg = CanonicalConfig::default();
        let instance = tagged(&kind, &"long-discriminator-".repeat(4));

        let first = canonicalize(&snapshot, &instance, UidContext::Recipe, &cfg);
        let second = canonicalize(&snapshot, &instance, UidContext::Recipe, &cfg);
        assert_eq!(first, second);
    }

    #[test]
    fn wildcard_pair_skips_duplicate() {
        let (kind, snapshot) = setup("modid:tool");
        let cfg = CanonicalConfig::default();

        let plain = Ingredient::new(Arc::clone(&kind));
        let (exact, wildcard) = uids_with_wildcard(&snapshot, &plain, UidContext::Recipe, &cfg);
        assert_eq!(exact, "modid:tool");
        assert_eq!(wildcard, None);

        let subtyped = tagged(&kind, "sharp");
        let (exact, wildcard) = uids_with_wildcard(&snapshot, &subtyped, UidContext::Recipe, &cfg);
        assert_eq!(exact, "modid:tool#sharp");
        assert_eq!(wildcard.as_deref(), Some("modid:tool"));
    }

    #[test]
    fn same_name_kinds_do_not_share_interpreters() {
        // Identity-keyed registry: the second same-name kind stays wildcard.
        let (kind_a, snapshot) = setup("modid:gear");
        let kind_b = IngredientKind::new("modid:gear").unwrap();
        let cfg = CanonicalConfig::default();

        let a = tagged(&kind_a, "iron");
        let b = tagged(&kind_b, "iron");
        assert_eq!(
            canonicalize(&snapshot, &a, UidContext::Recipe, &cfg),
            "modid:gear#iron"
        );
        assert_eq!(
            canonicalize(&snapshot, &b, UidContext::Recipe, &cfg),
            "modid:gear"
        );
    }
}
