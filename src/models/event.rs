//! Catering / private-chef event models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Event lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Draft,
    QuoteSent,
    Confirmed,
    Completed,
    Cancelled,
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventStatus::Draft => write!(f, "Draft"),
            EventStatus::QuoteSent => write!(f, "Quote Sent"),
            EventStatus::Confirmed => write!(f, "Confirmed"),
            EventStatus::Completed => write!(f, "Completed"),
            EventStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// How the menu subtotal scales into an event total
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventPricingMode {
    /// Every guest gets every listed recipe at the summed per-guest rate
    PerPerson,
    /// The quantity-scaled recipe lines are charged as-is
    PerEvent,
}

/// One recipe usage line within an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecipe {
    pub recipe_id: i64,
    /// Servings requested for this event
    pub servings: i32,
    /// Manually fixed per-serving price; overrides the computed suggestion
    /// for this line only
    pub price_override: Option<Decimal>,
}

/// A catering or private-chef engagement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_location: Option<String>,
    /// Pricing divisor; clamped to >= 1 by the totals aggregator
    pub guests: i32,
    pub pricing_mode: EventPricingMode,
    pub staff_count: i32,
    pub staff_hours: Decimal,
    /// Pass staff cost through to the charged total
    pub include_staff_in_price: bool,
    pub transport_km: Decimal,
    pub equipment_cost: Decimal,
    pub equipment_notes: Option<String>,
    pub notes: Option<String>,
    pub status: EventStatus,
    pub recipes: Vec<EventRecipe>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
