//! Per-serving recipe cost and suggested price
//!
//! Two entry points over the same formula family:
//! [`get_recipe_pricing`] is the lightweight best-effort path used inside
//! event and report aggregation (every denominator clamped to a safe
//! minimum), while [`calculate_recipe_costs`] is the strict detailed path
//! used for display (pricing-breaking denominators return `None` with a
//! logged warning, so the UI can show a distinct error state instead of a
//! misleading zero).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::costing::calculate_food_cost;
use crate::models::{
    calculate_monthly_fixed_costs, parse_fixed_costs, CostingMode, Ingredient, Recipe, Settings,
};

/// Lightweight pricing result
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecipePricing {
    pub price_per_serving: Decimal,
    pub cost_per_serving: Decimal,
}

/// Restaurant-mode breakdown: overhead amortized over a monthly portion
/// forecast, price derived from a target food-cost percentage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestaurantCosts {
    pub food_cost: Decimal,
    pub food_cost_per_serving: Decimal,
    pub labour_cost: Decimal,
    pub overhead_cost: Decimal,
    pub packaging_cost: Decimal,
    pub total_cost: Decimal,
    pub cost_per_serving: Decimal,
    pub suggested_price: Decimal,
    pub price_with_vat: Decimal,
    pub monthly_fixed: Decimal,
}

/// Catering-mode breakdown: per-person disposables plus a flat markup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CateringCosts {
    pub food_cost: Decimal,
    pub food_cost_per_serving: Decimal,
    pub disposables_cost: Decimal,
    pub total_cost: Decimal,
    pub cost_per_serving: Decimal,
    pub suggested_price: Decimal,
    pub price_with_vat: Decimal,
    pub staff_hourly_rate: Decimal,
    pub transport_per_km: Decimal,
    pub monthly_fixed: Decimal,
}

/// Private-chef breakdown: labour billed per engagement, straight food markup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrivateChefCosts {
    pub food_cost: Decimal,
    pub food_cost_per_serving: Decimal,
    pub food_with_markup: Decimal,
    pub chef_cost_for_recipe: Decimal,
    pub prep_time_hours: Decimal,
    pub total_cost: Decimal,
    pub cost_per_serving: Decimal,
    pub price_with_vat: Decimal,
    pub chef_fee_per_hour: Decimal,
    pub assistant_fee_per_hour: Decimal,
    pub monthly_fixed: Decimal,
}

/// Mode-tagged detailed cost breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RecipeCosts {
    Restaurant(RestaurantCosts),
    Catering(CateringCosts),
    PrivateChef(PrivateChefCosts),
}

/// Normalized monthly fixed costs from the settings record, zero when
/// settings are absent or the serialized list is unreadable
pub fn monthly_fixed_costs(settings: Option<&Settings>) -> Decimal {
    match settings {
        Some(s) => calculate_monthly_fixed_costs(&parse_fixed_costs(s.fixed_costs_json.as_deref())),
        None => Decimal::ZERO,
    }
}

fn percent(value: Decimal) -> Decimal {
    value / Decimal::from(100)
}

fn prep_time_hours(recipe: &Recipe) -> Decimal {
    Decimal::from(recipe.prep_time_minutes) / Decimal::from(60)
}

fn vat_factor(settings: &Settings) -> Decimal {
    Decimal::ONE + percent(settings.vat_rate)
}

/// Best-effort per-serving price and cost
///
/// Returns zeroes when settings have not loaded yet. Denominators are
/// clamped to at least 1 so a half-edited recipe still yields a number.
pub fn get_recipe_pricing(
    recipe: &Recipe,
    ingredients: &[Ingredient],
    settings: Option<&Settings>,
) -> RecipePricing {
    let Some(settings) = settings else {
        return RecipePricing::default();
    };

    let food_cost = calculate_food_cost(recipe, ingredients);
    let servings = Decimal::from(recipe.servings.max(1));
    let monthly_fixed = monthly_fixed_costs(Some(settings));

    match settings.mode {
        CostingMode::Restaurant => {
            let labour_cost = settings.labour_cost_per_hour * prep_time_hours(recipe);
            let portions = Decimal::from(settings.portions_per_month.max(1));
            let overhead_per_serving = (settings.overhead_monthly + monthly_fixed) / portions;
            let overhead_cost = overhead_per_serving * servings;
            let packaging_cost = settings.packaging_per_portion * servings;
            let total_cost = food_cost + labour_cost + overhead_cost + packaging_cost;
            let cost_per_serving = total_cost / servings;
            // target food cost floors at 1% so the division stays sane
            let target = percent(settings.target_food_cost_percent.max(Decimal::ONE));
            let suggested_price = cost_per_serving / target;
            RecipePricing {
                price_per_serving: suggested_price * vat_factor(settings),
                cost_per_serving,
            }
        }
        CostingMode::Catering => {
            let disposables_cost = settings.disposables_per_person * servings;
            let total_cost = food_cost + disposables_cost;
            let cost_per_serving = total_cost / servings;
            let suggested_price =
                cost_per_serving * (Decimal::ONE + percent(settings.catering_markup_percent));
            RecipePricing {
                price_per_serving: suggested_price * vat_factor(settings),
                cost_per_serving,
            }
        }
        CostingMode::PrivateChef => {
            let chef_cost = prep_time_hours(recipe) * settings.chef_fee_per_hour;
            let food_with_markup =
                food_cost * (Decimal::ONE + percent(settings.food_markup_percent));
            let total_cost = food_with_markup + chef_cost;
            let cost_per_serving = total_cost / servings;
            RecipePricing {
                price_per_serving: cost_per_serving * vat_factor(settings),
                cost_per_serving,
            }
        }
    }
}

/// Detailed mode-specific cost breakdown for display
///
/// Strict counterpart of [`get_recipe_pricing`]: absent settings or a
/// pricing-breaking denominator yield `None` instead of a clamped number.
pub fn calculate_recipe_costs(
    recipe: &Recipe,
    ingredients: &[Ingredient],
    settings: Option<&Settings>,
) -> Option<RecipeCosts> {
    let settings = settings?;

    if recipe.servings <= 0 {
        tracing::warn!(recipe_id = recipe.id, "recipe servings must be > 0");
        return None;
    }
    if settings.mode == CostingMode::Restaurant && settings.portions_per_month <= 0 {
        tracing::warn!("portions_per_month must be > 0 in restaurant mode");
        return None;
    }

    let food_cost = calculate_food_cost(recipe, ingredients);
    let servings = Decimal::from(recipe.servings);
    let food_cost_per_serving = food_cost / servings;
    let monthly_fixed = monthly_fixed_costs(Some(settings));

    match settings.mode {
        CostingMode::Restaurant => {
            let labour_cost = settings.labour_cost_per_hour * prep_time_hours(recipe);
            let total_monthly_overhead = settings.overhead_monthly + monthly_fixed;
            let overhead_per_serving =
                total_monthly_overhead / Decimal::from(settings.portions_per_month);
            let overhead_cost = overhead_per_serving * servings;
            let packaging_cost = settings.packaging_per_portion * servings;
            let total_cost = food_cost + labour_cost + overhead_cost + packaging_cost;
            let cost_per_serving = total_cost / servings;
            let target = percent(settings.target_food_cost_percent.max(Decimal::ONE));
            let suggested_price = cost_per_serving / target;
            let price_with_vat = suggested_price * vat_factor(settings);

            Some(RecipeCosts::Restaurant(RestaurantCosts {
                food_cost,
                food_cost_per_serving,
                labour_cost,
                overhead_cost,
                packaging_cost,
                total_cost,
                cost_per_serving,
                suggested_price,
                price_with_vat,
                monthly_fixed,
            }))
        }
        CostingMode::Catering => {
            let disposables_cost = settings.disposables_per_person * servings;
            let total_cost = food_cost + disposables_cost;
            let cost_per_serving = total_cost / servings;
            let suggested_price =
                cost_per_serving * (Decimal::ONE + percent(settings.catering_markup_percent));
            let price_with_vat = suggested_price * vat_factor(settings);

            Some(RecipeCosts::Catering(CateringCosts {
                food_cost,
                food_cost_per_serving,
                disposables_cost,
                total_cost,
                cost_per_serving,
                suggested_price,
                price_with_vat,
                staff_hourly_rate: settings.staff_hourly_rate,
                transport_per_km: settings.transport_cost_per_km,
                monthly_fixed,
            }))
        }
        CostingMode::PrivateChef => {
            let prep_time_hours = prep_time_hours(recipe);
            let chef_cost_for_recipe = prep_time_hours * settings.chef_fee_per_hour;
            let food_with_markup =
                food_cost * (Decimal::ONE + percent(settings.food_markup_percent));
            let total_cost = food_with_markup + chef_cost_for_recipe;
            let cost_per_serving = total_cost / servings;
            let price_with_vat = cost_per_serving * vat_factor(settings);

            Some(RecipeCosts::PrivateChef(PrivateChefCosts {
                food_cost,
                food_cost_per_serving,
                food_with_markup,
                chef_cost_for_recipe,
                prep_time_hours,
                total_cost,
                cost_per_serving,
                price_with_vat,
                chef_fee_per_hour: settings.chef_fee_per_hour,
                assistant_fee_per_hour: settings.assistant_fee_per_hour,
                monthly_fixed,
            }))
        }
    }
}
