//! Minimal build-then-query walkthrough of the recipe map.
//!
//! Run with: `cargo run --example index_demo -p craftdex-recipe-index`

use identity::{CanonicalConfig, Ingredient, IngredientKind, InterpreterRegistry};
use recipe_index::{CategoryTag, IngredientsForType, RecipeMap};
use serde_json::json;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cell = IngredientKind::new("demo:fluid_cell")?;
    let mut registry = InterpreterRegistry::new();
    registry.use_metadata_for_subtypes([&cell]);

    let mut map: RecipeMap<&str> = RecipeMap::new(registry.snapshot(), CanonicalConfig::default());

    let filling = CategoryTag::new("demo:filling")?;
    let emptying = CategoryTag::new("demo:emptying")?;

    let water = Ingredient::with_metadata(Arc::clone(&cell), json!({ "fluid": "water" }));
    let any_cell = Ingredient::new(Arc::clone(&cell));

    map.add_recipe(
        "fill_water_cell",
        &filling,
        &[IngredientsForType::new(vec![vec![Some(water.clone())]])],
    );
    map.add_recipe(
        "empty_any_cell",
        &emptying,
        &[IngredientsForType::new(vec![vec![Some(any_cell)]])],
    );

    println!("categories for {}:", water.description());
    for category in map.recipe_categories(&water) {
        println!("  {category}");
        for recipe in map.recipes(&category, &water) {
            println!("    {recipe}");
        }
    }

    Ok(())
}
