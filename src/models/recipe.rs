//! Recipe models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named preparation composed of ingredient usage lines
///
/// A recipe's cost is never stored; it is always derived on demand from
/// the current ingredient catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Batch yield; must be > 0 for any per-serving computation
    pub servings: i32,
    pub prep_time_minutes: i32,
    pub notes: Option<String>,
    pub ingredients: Vec<RecipeIngredient>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One ingredient usage line within a recipe
///
/// `unit` may differ from the referenced ingredient's purchase unit as long
/// as both belong to the same measurement category; the cost calculator
/// converts between them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub ingredient_id: i64,
    pub quantity: Decimal,
    pub unit: String,
}
