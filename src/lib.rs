//! Cost-calculation engine for the F&B Cost Management Platform
//!
//! This crate contains the pure computation core shared between the
//! application backend, frontend, and export routines: measurement-unit
//! conversion, recipe food cost and pricing, and event-level totals.
//! It performs no I/O and holds no state; callers pass catalogs and
//! settings in and get plain numeric results back.

pub mod costing;
pub mod models;
pub mod units;
pub mod validation;

pub use costing::*;
pub use models::*;
pub use units::*;
pub use validation::*;
