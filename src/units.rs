//! Measurement units and conversions
//!
//! Ingredients are priced per their natural purchase unit, but recipes may
//! record usage in any compatible unit (e.g. priced per kg, used in grams).
//! Every conversion goes through the category base unit: kilogram for mass,
//! liter for volume, piece for count. The rescale-then-multiply step lives
//! here so cost callers never duplicate it.
//!
//! Two API levels exist for each conversion: a strict `try_*` form that
//! reports unknown units and category mismatches as [`UnitError`], and a
//! lenient form preserving the historical fail-soft contract relied on by
//! the pricing paths.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Measurement category of a unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    Mass,
    Volume,
    Count,
}

impl std::fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitCategory::Mass => write!(f, "mass"),
            UnitCategory::Volume => write!(f, "volume"),
            UnitCategory::Count => write!(f, "count"),
        }
    }
}

/// Conversion failures surfaced by the strict API
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UnitError {
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("cannot convert {from} to {to}")]
    IncompatibleCategories { from: UnitCategory, to: UnitCategory },
}

/// A supported measurement unit
///
/// Symbols and aliases match the ingredient data as entered over the years,
/// so Greek spellings are first-class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    // Mass (base: kg)
    Kilogram,
    Gram,
    Milligram,
    Pound,
    Ounce,
    // Volume (base: L)
    Liter,
    Milliliter,
    Centiliter,
    Deciliter,
    Gallon,
    Quart,
    Pint,
    Cup,
    Tablespoon,
    Teaspoon,
    FluidOunce,
    // Count (base: τεμ)
    Piece,
    Pieces,
    Dozen,
    Slice,
    Clove,
    Bunch,
}

impl Unit {
    /// All supported units, mass then volume then count
    pub fn all() -> &'static [Unit] {
        &[
            Unit::Kilogram,
            Unit::Gram,
            Unit::Milligram,
            Unit::Pound,
            Unit::Ounce,
            Unit::Liter,
            Unit::Milliliter,
            Unit::Centiliter,
            Unit::Deciliter,
            Unit::Gallon,
            Unit::Quart,
            Unit::Pint,
            Unit::Cup,
            Unit::Tablespoon,
            Unit::Teaspoon,
            Unit::FluidOunce,
            Unit::Piece,
            Unit::Pieces,
            Unit::Dozen,
            Unit::Slice,
            Unit::Clove,
            Unit::Bunch,
        ]
    }

    /// Canonical symbol, as stored on ingredient and recipe records
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Kilogram => "kg",
            Unit::Gram => "g",
            Unit::Milligram => "mg",
            Unit::Pound => "lb",
            Unit::Ounce => "oz",
            Unit::Liter => "L",
            Unit::Milliliter => "ml",
            Unit::Centiliter => "cl",
            Unit::Deciliter => "dl",
            Unit::Gallon => "gal",
            Unit::Quart => "qt",
            Unit::Pint => "pt",
            Unit::Cup => "cup",
            Unit::Tablespoon => "tbsp",
            Unit::Teaspoon => "tsp",
            Unit::FluidOunce => "fl oz",
            Unit::Piece => "τεμ",
            Unit::Pieces => "pcs",
            Unit::Dozen => "dozen",
            Unit::Slice => "φέτα",
            Unit::Clove => "σκελίδα",
            Unit::Bunch => "ματσάκι",
        }
    }

    /// Known alternative spellings, matched case-insensitively
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Unit::Kilogram => &["kilo", "kilos", "κιλό"],
            Unit::Gram => &["gr", "gram", "grams", "γρ"],
            Unit::Milligram => &["milligram"],
            Unit::Pound => &["lbs", "pound", "pounds", "λίβρα"],
            Unit::Ounce => &["ounce", "ounces", "ουγγιά"],
            Unit::Liter => &["lt", "liter", "λίτρο"],
            Unit::Milliliter => &["milliliter"],
            Unit::Centiliter => &["centiliter"],
            Unit::Deciliter => &["deciliter"],
            Unit::Gallon => &["gallon", "gallons", "γαλόνι"],
            Unit::Quart => &["quart", "quarts"],
            Unit::Pint => &["pint", "pints"],
            Unit::Cup => &["cups", "φλιτζάνι"],
            Unit::Tablespoon => &["tbs", "tablespoon", "κ.σ."],
            Unit::Teaspoon => &["teaspoon", "κ.γ."],
            Unit::FluidOunce => &["fl_oz", "floz", "fluid ounce"],
            Unit::Piece => &["τεμ.", "τεμάχιο", "pc", "piece"],
            Unit::Pieces => &["pieces"],
            Unit::Dozen => &["dz", "ντουζίνα"],
            Unit::Slice => &["φέτες", "slice"],
            Unit::Clove => &["σκελίδες", "clove"],
            Unit::Bunch => &["bunch"],
        }
    }

    pub fn category(&self) -> UnitCategory {
        match self {
            Unit::Kilogram | Unit::Gram | Unit::Milligram | Unit::Pound | Unit::Ounce => {
                UnitCategory::Mass
            }
            Unit::Liter
            | Unit::Milliliter
            | Unit::Centiliter
            | Unit::Deciliter
            | Unit::Gallon
            | Unit::Quart
            | Unit::Pint
            | Unit::Cup
            | Unit::Tablespoon
            | Unit::Teaspoon
            | Unit::FluidOunce => UnitCategory::Volume,
            Unit::Piece | Unit::Pieces | Unit::Dozen | Unit::Slice | Unit::Clove | Unit::Bunch => {
                UnitCategory::Count
            }
        }
    }

    /// Multiplier converting one of this unit into the category base unit
    pub fn to_base(&self) -> Decimal {
        match self {
            Unit::Kilogram => Decimal::ONE,
            Unit::Gram => Decimal::new(1, 3),
            Unit::Milligram => Decimal::new(1, 6),
            Unit::Pound => Decimal::new(453_592, 6),
            Unit::Ounce => Decimal::new(283_495, 7),
            Unit::Liter => Decimal::ONE,
            Unit::Milliliter => Decimal::new(1, 3),
            Unit::Centiliter => Decimal::new(1, 2),
            Unit::Deciliter => Decimal::new(1, 1),
            Unit::Gallon => Decimal::new(378_541, 5),
            Unit::Quart => Decimal::new(946_353, 6),
            Unit::Pint => Decimal::new(473_176, 6),
            Unit::Cup => Decimal::new(236_588, 6),
            Unit::Tablespoon => Decimal::new(147_868, 7),
            Unit::Teaspoon => Decimal::new(492_892, 8),
            Unit::FluidOunce => Decimal::new(295_735, 7),
            Unit::Piece | Unit::Pieces | Unit::Slice | Unit::Clove | Unit::Bunch => Decimal::ONE,
            Unit::Dozen => Decimal::from(12),
        }
    }

    /// Base unit of this unit's category
    pub fn base_unit(&self) -> Unit {
        match self.category() {
            UnitCategory::Mass => Unit::Kilogram,
            UnitCategory::Volume => Unit::Liter,
            UnitCategory::Count => Unit::Piece,
        }
    }

    /// Resolve a raw symbol or alias to a unit
    ///
    /// Exact symbols win before case-insensitive symbol and alias matching,
    /// so "mL" stays milliliters even though "l" alone means liters.
    pub fn resolve(raw: &str) -> Option<Unit> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Some(unit) = Self::all().iter().find(|u| u.symbol() == trimmed) {
            return Some(*unit);
        }
        let lower = trimmed.to_lowercase();
        Self::all().iter().copied().find(|u| {
            u.symbol().to_lowercase() == lower
                || u.aliases().iter().any(|a| a.to_lowercase() == lower)
        })
    }
}

/// Resolve case-insensitive spellings and aliases to the canonical symbol
///
/// Unresolvable input is returned unchanged (treated as already canonical);
/// later lookups then fail to match and callers see a no-op conversion.
pub fn normalize_unit(raw: &str) -> String {
    match Unit::resolve(raw) {
        Some(unit) => unit.symbol().to_string(),
        None => raw.trim().to_string(),
    }
}

/// Measurement category of a raw unit string, if known
pub fn unit_category(raw: &str) -> Option<UnitCategory> {
    Unit::resolve(raw).map(|u| u.category())
}

/// Whether two raw unit strings can convert into each other
pub fn units_compatible(a: &str, b: &str) -> bool {
    match (unit_category(a), unit_category(b)) {
        (Some(cat_a), Some(cat_b)) => cat_a == cat_b,
        _ => false,
    }
}

/// Convert a quantity between units, reporting failures
///
/// Identical units (after normalization) pass through unchanged even when
/// unknown to the registry.
pub fn try_convert_quantity(
    quantity: Decimal,
    from_unit: &str,
    to_unit: &str,
) -> Result<Decimal, UnitError> {
    let from = normalize_unit(from_unit);
    let to = normalize_unit(to_unit);
    if from == to {
        return Ok(quantity);
    }
    let from_def = Unit::resolve(&from).ok_or(UnitError::UnknownUnit(from))?;
    let to_def = Unit::resolve(&to).ok_or(UnitError::UnknownUnit(to))?;
    if from_def.category() != to_def.category() {
        return Err(UnitError::IncompatibleCategories {
            from: from_def.category(),
            to: to_def.category(),
        });
    }
    Ok(quantity * from_def.to_base() / to_def.to_base())
}

/// Convert a quantity between units; `None` when conversion is impossible
pub fn convert_quantity(quantity: Decimal, from_unit: &str, to_unit: &str) -> Option<Decimal> {
    try_convert_quantity(quantity, from_unit, to_unit).ok()
}

/// Express a quantity in its category's base unit, reporting unknown units
pub fn try_to_base_unit(quantity: Decimal, unit: &str) -> Result<Decimal, UnitError> {
    let def =
        Unit::resolve(unit).ok_or_else(|| UnitError::UnknownUnit(unit.trim().to_string()))?;
    Ok(quantity * def.to_base())
}

/// Express a quantity in its category's base unit
///
/// Unknown units return the quantity unchanged. Historical fail-soft
/// contract: a recipe line in an unrecognized unit prices as if already in
/// the ingredient's unit rather than aborting the computation.
pub fn to_base_unit(quantity: Decimal, unit: &str) -> Decimal {
    try_to_base_unit(quantity, unit).unwrap_or(quantity)
}
