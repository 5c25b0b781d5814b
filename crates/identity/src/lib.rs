//! # Craftdex Identity
//!
//! This crate computes stable, bounded-length **identity strings** ("uids")
//! for ingredient instances: values that pair an immutable ingredient kind
//! with an optional tree of mutable auxiliary metadata. The uid is the sole
//! join key between ingredients and the recipe index built on top of them.
//!
//! ## Core Concepts
//!
//! - **[`IngredientKind`]**: the immutable family/type classifier of an
//!   ingredient. Kinds compare by interned identity ([`KindId`]), never by
//!   value, so two kinds carrying the same name remain distinct registrable
//!   entities.
//! - **[`SubtypeInterpreter`]**: a pluggable pure function deriving a
//!   discriminator string from an instance's metadata. At most one
//!   interpreter may be registered per kind; duplicates are rejected, not
//!   overwritten.
//! - **[`canonicalize`]**: the pipeline turning an instance plus its kind's
//!   interpreter into the final uid, applying a length-bounding hash
//!   fallback so uids stay short no matter how large the metadata tree is.
//!
//! ## Identity String Shape
//!
//! ```text
//! "minecraft:potion"                      // wildcard: no subtype information
//! "minecraft:potion#strength;5x1d3600"    // short discriminator, verbatim
//! "minecraft:potion#09c3acd1f4e0b72d55a1" // long discriminator, hashed
//! ```
//!
//! The subtype-less form doubles as the wildcard lookup key: a recipe
//! registered against an ingredient with no distinguishing metadata matches
//! queries for any instance of the same kind.
//!
//! ## Example
//!
//! ```
//! use identity::{
//!     canonicalize, AllMetadata, CanonicalConfig, Ingredient, IngredientKind,
//!     InterpreterRegistry, UidContext,
//! };
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let potion = IngredientKind::new("minecraft:potion").unwrap();
//! let mut registry = InterpreterRegistry::new();
//! assert!(registry.register(&potion, Arc::new(AllMetadata)).is_registered());
//!
//! let snapshot = registry.snapshot();
//! let cfg = CanonicalConfig::default();
//!
//! let plain = Ingredient::new(Arc::clone(&potion));
//! assert_eq!(
//!     canonicalize(&snapshot, &plain, UidContext::Recipe, &cfg),
//!     "minecraft:potion",
//! );
//!
//! let tagged = Ingredient::with_metadata(potion, json!({ "kind": "awkward" }));
//! assert_eq!(
//!     canonicalize(&snapshot, &tagged, UidContext::Recipe, &cfg),
//!     r##"minecraft:potion#{"kind":"awkward"}"##,
//! );
//! ```

mod builtin;
mod canonical;
mod config;
mod error;
mod hash;
mod ingredient;
mod interpreter;

pub use builtin::{AllMetadata, PotionEffects};
pub use canonical::{canonicalize, uids_with_wildcard, wildcard_uid};
pub use config::CanonicalConfig;
pub use error::IdentityError;
pub use hash::digest_discriminator;
pub use ingredient::{Ingredient, IngredientKind, KindId};
pub use interpreter::{
    InterpreterRegistry, InterpreterSnapshot, RegisterOutcome, SubtypeInterpreter, UidContext,
    NO_SUBTYPE,
};
