//! Built-in subtype interpreters.

use serde_json::Value;

use crate::ingredient::Ingredient;
use crate::interpreter::{SubtypeInterpreter, UidContext, NO_SUBTYPE};

/// Treats the entire auxiliary metadata tree as the subtype discriminator.
///
/// Serializes the tree to compact JSON. `serde_json` maps are
/// `BTreeMap`-backed, so key order (and therefore the discriminator) is
/// stable no matter how the host assembled the tree. Large trees are
/// bounded downstream by the canonicalization hash fallback; an absent or
/// empty tree short-circuits to [`NO_SUBTYPE`].
pub struct AllMetadata;

impl SubtypeInterpreter for AllMetadata {
    fn apply(&self, ingredient: &Ingredient, _context: UidContext) -> String {
        match ingredient.metadata() {
            Some(metadata) if !is_empty_tree(metadata) => metadata.to_string(),
            _ => NO_SUBTYPE.to_string(),
        }
    }
}

fn is_empty_tree(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Hand-crafted potion-style interpreter.
///
/// Instead of hashing the whole metadata tree, this builds a compact,
/// semantically meaningful discriminator: the base potion name, then for
/// each modifier effect in encounter order
///
/// ```text
/// ;<effect-id> [x<amplifier>] d<duration> [s] [h] [i]
/// ```
///
/// where `x<amplifier>` appears only for amplifiers above zero, `s` marks
/// a splash variant, `h` an effect that is not visibly shown, and `i` a
/// suppressed icon. Reads `potion` (string) and `effects` (array of
/// objects with `id`, `amplifier`, `duration`, `splash`, `visible`,
/// `show_icon`) from the metadata tree; absent metadata yields
/// [`NO_SUBTYPE`].
pub struct PotionEffects;

impl SubtypeInterpreter for PotionEffects {
    fn apply(&self, ingredient: &Ingredient, _context: UidContext) -> String {
        let Some(metadata) = ingredient.metadata() else {
            return NO_SUBTYPE.to_string();
        };

        let mut out = String::new();
        if let Some(name) = metadata.get("potion").and_then(Value::as_str) {
            out.push_str(name);
        }

        let effects = metadata
            .get("effects")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        for effect in effects {
            out.push(';');
            match effect.get("id") {
                Some(Value::String(id)) => out.push_str(id),
                Some(other) => out.push_str(&other.to_string()),
                None => {}
            }
            let amplifier = effect.get("amplifier").and_then(Value::as_u64).unwrap_or(0);
            if amplifier > 0 {
                out.push('x');
                out.push_str(&amplifier.to_string());
            }
            let duration = effect.get("duration").and_then(Value::as_u64).unwrap_or(0);
            out.push('d');
            out.push_str(&duration.to_string());
            if effect.get("splash").and_then(Value::as_bool).unwrap_or(false) {
                out.push('s');
            }
            if !effect.get("visible").and_then(Value::as_bool).unwrap_or(true) {
                out.push('h');
            }
            if !effect
                .get("show_icon")
                .and_then(Value::as_bool)
                .unwrap_or(true)
            {
                out.push('i');
            }
        }

        out
    }
}
