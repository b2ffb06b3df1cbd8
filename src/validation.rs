//! Validation helpers for catalog records
//!
//! These express the data-model invariants the pricing formulas rely on.
//! The cost calculations themselves never call into here; they stay
//! fail-soft on bad data, and it is up to the editing surfaces to validate
//! before saving.

use rust_decimal::Decimal;

use crate::models::{Event, Ingredient, Recipe};
use crate::units::Unit;

/// Validate a price is non-negative
pub fn validate_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Price cannot be negative");
    }
    Ok(())
}

/// Validate a percentage is within 0-100
pub fn validate_percent(value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO || value > Decimal::from(100) {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

/// Validate a unit symbol resolves in the registry
pub fn validate_unit(unit: &str) -> Result<(), &'static str> {
    if Unit::resolve(unit).is_none() {
        return Err("Unknown measurement unit");
    }
    Ok(())
}

/// Validate an ingredient record
pub fn validate_ingredient(ingredient: &Ingredient) -> Result<(), &'static str> {
    if ingredient.name.trim().is_empty() {
        return Err("Ingredient name is required");
    }
    validate_unit(&ingredient.unit)?;
    validate_price(ingredient.price)?;
    validate_percent(ingredient.waste_percent)
}

/// Validate a recipe record
///
/// Servings must be positive because it is the per-serving divisor.
pub fn validate_recipe(recipe: &Recipe) -> Result<(), &'static str> {
    if recipe.name.trim().is_empty() {
        return Err("Recipe name is required");
    }
    if recipe.servings <= 0 {
        return Err("Servings must be greater than zero");
    }
    if recipe.prep_time_minutes < 0 {
        return Err("Prep time cannot be negative");
    }
    for line in &recipe.ingredients {
        if line.quantity <= Decimal::ZERO {
            return Err("Ingredient quantity must be greater than zero");
        }
    }
    Ok(())
}

/// Validate an event record
///
/// Guests must be at least 1 because it is the per-guest divisor.
pub fn validate_event(event: &Event) -> Result<(), &'static str> {
    if event.name.trim().is_empty() {
        return Err("Event name is required");
    }
    if event.guests < 1 {
        return Err("Guests must be at least 1");
    }
    if event.staff_count < 0 {
        return Err("Staff count cannot be negative");
    }
    if event.staff_hours < Decimal::ZERO {
        return Err("Staff hours cannot be negative");
    }
    if event.transport_km < Decimal::ZERO {
        return Err("Transport distance cannot be negative");
    }
    if event.equipment_cost < Decimal::ZERO {
        return Err("Equipment cost cannot be negative");
    }
    Ok(())
}
