//! Event-level financial totals

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::costing::get_recipe_pricing;
use crate::models::{Event, EventPricingMode, Ingredient, RateType, Recipe, Settings};

/// Aggregated financials for one event
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EventTotals {
    /// Full billed total including pass-through extras
    pub total: Decimal,
    pub per_guest: Decimal,
    pub staff_cost: Decimal,
    pub transport_cost: Decimal,
    pub equipment_cost: Decimal,
    /// Quantity-scaled menu subtotal before extras
    pub base_total: Decimal,
    /// Internal cost of the menu lines
    pub cost_total: Decimal,
    /// Percentage of `total`, net of all internal costs
    pub profit_margin: Decimal,
}

/// Staff cost for an event per the configured rate type, zero without
/// settings
pub fn calculate_staff_cost(event: &Event, settings: Option<&Settings>) -> Decimal {
    let Some(settings) = settings else {
        return Decimal::ZERO;
    };
    match settings.staff_rate_type {
        RateType::Hourly => {
            Decimal::from(event.staff_count) * event.staff_hours * settings.staff_hourly_rate
        }
        RateType::Daily => Decimal::from(event.staff_count) * settings.staff_daily_rate,
    }
}

/// Sum an event's recipe lines and extras into billed and internal totals
///
/// Always recomputed from the current recipe/ingredient/settings state.
/// Lines referencing a missing recipe are skipped, and a manual
/// `price_override` on a line always wins over the computed suggestion.
pub fn calculate_event_totals(
    event: &Event,
    recipes: &[Recipe],
    ingredients: &[Ingredient],
    settings: Option<&Settings>,
) -> EventTotals {
    let mut base_total = Decimal::ZERO;
    let mut per_person_from_recipes = Decimal::ZERO;
    let mut cost_total = Decimal::ZERO;

    for line in &event.recipes {
        let Some(recipe) = recipes.iter().find(|r| r.id == line.recipe_id) else {
            continue;
        };

        let pricing = get_recipe_pricing(recipe, ingredients, settings);
        let price_per_serving = line.price_override.unwrap_or(pricing.price_per_serving);
        let servings = Decimal::from(line.servings.max(1));

        base_total += price_per_serving * servings;
        per_person_from_recipes += price_per_serving;
        cost_total += pricing.cost_per_serving * servings;
    }

    let guests = Decimal::from(event.guests.max(1));

    let staff_cost = calculate_staff_cost(event, settings);
    let transport_cost = match settings {
        Some(s) => s.transport_cost_per_km * event.transport_km,
        None => Decimal::ZERO,
    };
    let equipment_cost = event.equipment_cost;

    // Staff is billed to the client only when the business passes it through
    let billed_staff = if event.include_staff_in_price {
        staff_cost
    } else {
        Decimal::ZERO
    };
    let extras = billed_staff + transport_cost + equipment_cost;

    let menu_total = match event.pricing_mode {
        EventPricingMode::PerPerson => per_person_from_recipes * guests,
        EventPricingMode::PerEvent => base_total,
    };
    let total = menu_total + extras;
    let per_guest = total / guests;

    // Margin is taken against the full billed total regardless of whether
    // staff cost was passed through, so absorbed staff lowers the margin.
    let profit_margin = if total > Decimal::ZERO {
        (total - cost_total - staff_cost - transport_cost - equipment_cost) / total
            * Decimal::from(100)
    } else {
        Decimal::ZERO
    };

    EventTotals {
        total,
        per_guest,
        staff_cost,
        transport_cost,
        equipment_cost,
        base_total,
        cost_total,
        profit_margin,
    }
}
