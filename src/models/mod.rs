//! Domain models for the F&B Cost Management Platform

mod event;
mod fixed_cost;
mod ingredient;
mod recipe;
mod settings;

pub use event::*;
pub use fixed_cost::*;
pub use ingredient::*;
pub use recipe::*;
pub use settings::*;
