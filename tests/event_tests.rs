//! Tests for the event totals aggregator

use chrono::Utc;
use rust_decimal::Decimal;

use fnb_cost_engine::{
    calculate_event_totals, get_recipe_pricing, CostingMode, Event, EventPricingMode, EventRecipe,
    EventStatus, Ingredient, RateType, Recipe, RecipeIngredient, Settings,
};

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn ingredient(id: i64, unit: &str, price: &str, waste_percent: &str) -> Ingredient {
    Ingredient {
        id,
        name: format!("Ingredient {id}"),
        category: "Λαχανικά".to_string(),
        unit: unit.to_string(),
        price: dec(price),
        waste_percent: dec(waste_percent),
        supplier: None,
        notes: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn recipe(id: i64, servings: i32, lines: Vec<RecipeIngredient>) -> Recipe {
    Recipe {
        id,
        name: format!("Recipe {id}"),
        category: "Κυρίως Πιάτα".to_string(),
        servings,
        prep_time_minutes: 30,
        notes: None,
        ingredients: lines,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn line(ingredient_id: i64, quantity: &str, unit: &str) -> RecipeIngredient {
    RecipeIngredient {
        ingredient_id,
        quantity: dec(quantity),
        unit: unit.to_string(),
    }
}

fn event_recipe(recipe_id: i64, servings: i32, price_override: Option<&str>) -> EventRecipe {
    EventRecipe {
        recipe_id,
        servings,
        price_override: price_override.map(dec),
    }
}

fn event(guests: i32, lines: Vec<EventRecipe>) -> Event {
    Event {
        id: 1,
        name: "Wedding".to_string(),
        client_name: None,
        client_email: None,
        client_phone: None,
        event_date: None,
        event_location: None,
        guests,
        pricing_mode: EventPricingMode::PerEvent,
        staff_count: 0,
        staff_hours: Decimal::ZERO,
        include_staff_in_price: false,
        transport_km: Decimal::ZERO,
        equipment_cost: Decimal::ZERO,
        equipment_notes: None,
        notes: None,
        status: EventStatus::Confirmed,
        recipes: lines,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn catering_settings() -> Settings {
    Settings {
        mode: CostingMode::Catering,
        vat_rate: Decimal::ZERO,
        disposables_per_person: Decimal::ZERO,
        catering_markup_percent: dec("50"),
        staff_rate_type: RateType::Hourly,
        staff_hourly_rate: dec("12"),
        staff_daily_rate: dec("80"),
        transport_cost_per_km: dec("0.5"),
        ..Settings::default()
    }
}

#[test]
fn price_override_wins_over_computed_suggestion() {
    let ingredients = vec![ingredient(1, "kg", "10", "0")];
    let recipes = vec![recipe(1, 4, vec![line(1, "2", "kg")])];
    let settings = catering_settings();

    let computed = get_recipe_pricing(&recipes[0], &ingredients, Some(&settings));
    assert_ne!(computed.price_per_serving, dec("5"));

    let ev = event(10, vec![event_recipe(1, 4, Some("5"))]);
    let totals = calculate_event_totals(&ev, &recipes, &ingredients, Some(&settings));

    // Exactly override * servings, regardless of the computed price
    assert_eq!(totals.base_total, dec("20"));
    assert_eq!(totals.total, dec("20"));
    // Internal cost still tracks the computed cost side
    assert_eq!(totals.cost_total, computed.cost_per_serving * dec("4"));
}

#[test]
fn per_person_and_per_event_scale_differently() {
    let ingredients: Vec<Ingredient> = vec![];
    let recipes = vec![recipe(1, 4, vec![]), recipe(2, 4, vec![])];
    let settings = catering_settings();

    let lines = vec![
        event_recipe(1, 4, Some("5")),
        event_recipe(2, 4, Some("10")),
    ];

    let per_event = event(10, lines.clone());
    let totals = calculate_event_totals(&per_event, &recipes, &ingredients, Some(&settings));
    // Quantity-scaled lines as-is: 5*4 + 10*4
    assert_eq!(totals.total, dec("60"));

    let per_person = Event {
        pricing_mode: EventPricingMode::PerPerson,
        ..event(10, lines)
    };
    let totals = calculate_event_totals(&per_person, &recipes, &ingredients, Some(&settings));
    // Summed per-guest menu price times guest count: (5 + 10) * 10
    assert_eq!(totals.total, dec("150"));
    assert_eq!(totals.per_guest, dec("15"));
}

#[test]
fn zero_guests_divides_against_one() {
    let recipes = vec![recipe(1, 4, vec![])];
    let ev = event(0, vec![event_recipe(1, 4, Some("5"))]);

    let totals = calculate_event_totals(&ev, &recipes, &[], Some(&catering_settings()));
    assert_eq!(totals.total, dec("20"));
    assert_eq!(totals.per_guest, dec("20"));
}

#[test]
fn staff_cost_follows_rate_type() {
    let recipes = vec![recipe(1, 4, vec![])];
    let lines = vec![event_recipe(1, 4, Some("5"))];
    let ev = Event {
        staff_count: 2,
        staff_hours: dec("5"),
        ..event(10, lines)
    };

    let hourly = calculate_event_totals(&ev, &recipes, &[], Some(&catering_settings()));
    assert_eq!(hourly.staff_cost, dec("120"));

    let daily_settings = Settings {
        staff_rate_type: RateType::Daily,
        ..catering_settings()
    };
    let daily = calculate_event_totals(&ev, &recipes, &[], Some(&daily_settings));
    assert_eq!(daily.staff_cost, dec("160"));
}

#[test]
fn staff_passes_through_only_when_opted_in() {
    let recipes = vec![recipe(1, 4, vec![])];
    let lines = vec![event_recipe(1, 4, Some("5"))];
    let absorbed = Event {
        staff_count: 2,
        staff_hours: dec("5"),
        include_staff_in_price: false,
        ..event(10, lines.clone())
    };
    let passed = Event {
        include_staff_in_price: true,
        ..absorbed.clone()
    };
    let settings = catering_settings();

    let absorbed_totals = calculate_event_totals(&absorbed, &recipes, &[], Some(&settings));
    let passed_totals = calculate_event_totals(&passed, &recipes, &[], Some(&settings));

    // Staff is billed only when passed through
    assert_eq!(absorbed_totals.total, dec("20"));
    assert_eq!(passed_totals.total, dec("140"));

    // Margin always subtracts staff, so absorbing it hurts the margin
    // absorbed: (20 - 0 - 120) / 20 = -500%; passed: (140 - 0 - 120) / 140
    assert_eq!(absorbed_totals.profit_margin, dec("-500"));
    assert!(passed_totals.profit_margin > absorbed_totals.profit_margin);
}

#[test]
fn transport_and_equipment_count_as_extras() {
    let recipes = vec![recipe(1, 4, vec![])];
    let ev = Event {
        transport_km: dec("100"),
        equipment_cost: dec("75"),
        ..event(10, vec![event_recipe(1, 4, Some("5"))])
    };

    let totals = calculate_event_totals(&ev, &recipes, &[], Some(&catering_settings()));
    assert_eq!(totals.transport_cost, dec("50"));
    assert_eq!(totals.equipment_cost, dec("75"));
    assert_eq!(totals.total, dec("145"));
}

#[test]
fn dangling_recipe_reference_is_skipped() {
    let recipes = vec![recipe(1, 4, vec![])];
    let ev = event(
        10,
        vec![event_recipe(1, 4, Some("5")), event_recipe(99, 4, Some("100"))],
    );

    let totals = calculate_event_totals(&ev, &recipes, &[], Some(&catering_settings()));
    assert_eq!(totals.base_total, dec("20"));
}

#[test]
fn missing_settings_zero_staff_and_transport() {
    let recipes = vec![recipe(1, 4, vec![])];
    let ev = Event {
        staff_count: 2,
        staff_hours: dec("5"),
        include_staff_in_price: true,
        transport_km: dec("100"),
        equipment_cost: dec("75"),
        ..event(10, vec![event_recipe(1, 4, Some("5"))])
    };

    let totals = calculate_event_totals(&ev, &recipes, &[], None);
    assert_eq!(totals.staff_cost, Decimal::ZERO);
    assert_eq!(totals.transport_cost, Decimal::ZERO);
    // Equipment lives on the event record and still bills
    assert_eq!(totals.total, dec("95"));
}

#[test]
fn empty_event_totals_are_all_zero() {
    let totals = calculate_event_totals(&event(10, vec![]), &[], &[], Some(&catering_settings()));
    assert_eq!(totals.total, Decimal::ZERO);
    assert_eq!(totals.per_guest, Decimal::ZERO);
    assert_eq!(totals.profit_margin, Decimal::ZERO);
}
