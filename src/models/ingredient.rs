//! Ingredient catalog models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchasable ingredient, priced per its natural unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    /// Free-form category label, e.g. "Λαχανικά"
    pub category: String,
    /// Natural purchase unit symbol, e.g. "kg" or "L"
    pub unit: String,
    /// Cost per one `unit`
    pub price: Decimal,
    /// Expected loss during prep, 0-100
    pub waste_percent: Decimal,
    pub supplier: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
