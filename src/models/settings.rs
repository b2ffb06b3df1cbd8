//! Business settings model
//!
//! One record per business; read (never mutated) by every pricing
//! computation. The `mode` selects which pricing formula applies, and the
//! mode-specific parameter groups stay inert outside their own mode.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Business mode selecting the cost-composition formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CostingMode {
    Restaurant,
    Catering,
    PrivateChef,
}

impl std::fmt::Display for CostingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostingMode::Restaurant => write!(f, "Restaurant"),
            CostingMode::Catering => write!(f, "Catering"),
            CostingMode::PrivateChef => write!(f, "Private Chef"),
        }
    }
}

/// Billing basis for staff/chef/assistant rates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RateType {
    Hourly,
    Daily,
}

/// Per-business pricing parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub mode: CostingMode,

    // Common
    pub vat_rate: Decimal,
    /// JSON-encoded `Vec<FixedCost>`; parsed leniently by the aggregator
    pub fixed_costs_json: Option<String>,

    // Restaurant mode
    pub labour_cost_per_hour: Decimal,
    pub overhead_monthly: Decimal,
    /// Monthly portion forecast used to amortize overhead; must be > 0
    /// for the detailed restaurant breakdown
    pub portions_per_month: i32,
    pub packaging_per_portion: Decimal,
    pub target_food_cost_percent: Decimal,

    // Catering mode
    pub staff_rate_type: RateType,
    pub staff_hourly_rate: Decimal,
    pub staff_daily_rate: Decimal,
    pub transport_cost_per_km: Decimal,
    pub equipment_rental_default: Decimal,
    pub disposables_per_person: Decimal,
    pub catering_markup_percent: Decimal,

    // Private chef mode
    pub chef_rate_type: RateType,
    pub chef_fee_per_hour: Decimal,
    pub chef_daily_rate: Decimal,
    pub assistant_rate_type: RateType,
    pub assistant_fee_per_hour: Decimal,
    pub assistant_daily_rate: Decimal,
    pub food_markup_percent: Decimal,

    // Company info (quotes and exports)
    pub company_name: Option<String>,
    pub company_email: Option<String>,
    pub company_phone: Option<String>,
    pub company_address: Option<String>,
    pub company_vat_number: Option<String>,
    pub company_logo_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: CostingMode::Restaurant,
            vat_rate: Decimal::from(24),
            fixed_costs_json: None,
            labour_cost_per_hour: Decimal::from(15),
            overhead_monthly: Decimal::from(3000),
            portions_per_month: 1000,
            packaging_per_portion: Decimal::new(5, 1),
            target_food_cost_percent: Decimal::from(30),
            staff_rate_type: RateType::Hourly,
            staff_hourly_rate: Decimal::from(12),
            staff_daily_rate: Decimal::from(80),
            transport_cost_per_km: Decimal::new(5, 1),
            equipment_rental_default: Decimal::ZERO,
            disposables_per_person: Decimal::from(2),
            catering_markup_percent: Decimal::from(50),
            chef_rate_type: RateType::Hourly,
            chef_fee_per_hour: Decimal::from(50),
            chef_daily_rate: Decimal::from(300),
            assistant_rate_type: RateType::Hourly,
            assistant_fee_per_hour: Decimal::from(20),
            assistant_daily_rate: Decimal::from(120),
            food_markup_percent: Decimal::from(30),
            company_name: None,
            company_email: None,
            company_phone: None,
            company_address: None,
            company_vat_number: None,
            company_logo_path: None,
        }
    }
}
