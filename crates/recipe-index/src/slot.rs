//! Small-cardinality recipe storage for one (category, identity) cell.

/// Tagged storage holding zero, one, or many recipes.
///
/// Most identities map to at most one recipe per category, so the single
/// recipe is stored inline and a `Vec` is only allocated once a second
/// recipe collides on the same key. Append order is preserved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecipeSlot<R> {
    Empty,
    One(R),
    Many(Vec<R>),
}

// Manual impl: the derive would bound `R: Default`, and `Empty` needs no
// recipe value.
impl<R> Default for RecipeSlot<R> {
    fn default() -> Self {
        RecipeSlot::Empty
    }
}

impl<R> RecipeSlot<R> {
    /// Append a recipe, promoting `One` to `Many` on the second insert.
    pub fn push(&mut self, recipe: R) {
        match std::mem::take(self) {
            RecipeSlot::Empty => *self = RecipeSlot::One(recipe),
            RecipeSlot::One(first) => {
                let mut recipes = Vec::with_capacity(2);
                recipes.push(first);
                recipes.push(recipe);
                *self = RecipeSlot::Many(recipes);
            }
            RecipeSlot::Many(mut recipes) => {
                recipes.push(recipe);
                *self = RecipeSlot::Many(recipes);
            }
        }
    }

    /// Contents in append order.
    pub fn as_slice(&self) -> &[R] {
        match self {
            RecipeSlot::Empty => &[],
            RecipeSlot::One(recipe) => std::slice::from_ref(recipe),
            RecipeSlot::Many(recipes) => recipes.as_slice(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RecipeSlot::Empty => 0,
            RecipeSlot::One(_) => 1,
            RecipeSlot::Many(recipes) => recipes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RecipeSlot::Empty)
    }
}
