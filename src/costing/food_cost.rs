//! Raw ingredient cost of a recipe batch

use rust_decimal::Decimal;

use crate::models::{Ingredient, Recipe};
use crate::units::to_base_unit;

/// Total ingredient cost for one full batch of a recipe (not per serving)
///
/// Each usage line is rescaled from its own unit into the ingredient's
/// pricing unit through the category base unit, multiplied by the
/// ingredient's price, then amplified by the waste factor
/// `1 + waste_percent / 100`.
///
/// A line whose ingredient is missing from the catalog contributes zero:
/// a recipe referencing a since-deleted ingredient still prices its
/// remaining lines instead of failing entirely. A line in an unconvertible
/// unit prices without rescaling (the fail-soft base-unit contract).
pub fn calculate_food_cost(recipe: &Recipe, ingredients: &[Ingredient]) -> Decimal {
    let mut food_cost = Decimal::ZERO;

    for line in &recipe.ingredients {
        let Some(ingredient) = ingredients.iter().find(|i| i.id == line.ingredient_id) else {
            continue;
        };

        let line_in_base = to_base_unit(line.quantity, &line.unit);
        let one_purchase_unit_in_base = to_base_unit(Decimal::ONE, &ingredient.unit);
        // e.g. 100 g against a per-kg price -> 0.1 purchase units
        let quantity_in_purchase_units = line_in_base / one_purchase_unit_in_base;

        let waste_factor = Decimal::ONE + ingredient.waste_percent / Decimal::from(100);
        food_cost += quantity_in_purchase_units * ingredient.price * waste_factor;
    }

    food_cost
}
