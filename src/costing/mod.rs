//! Cost calculations
//!
//! Pure, fail-soft computation over the ingredient/recipe/event catalogs.
//! Every function is a deterministic mapping from its inputs to a numeric
//! result; missing references and absent settings degrade to zero or `None`
//! rather than erroring, because these calculations run on every screen
//! render over possibly half-edited data.

mod event_totals;
mod food_cost;
mod recipe_pricing;

pub use event_totals::*;
pub use food_cost::*;
pub use recipe_pricing::*;
