//! Domain logic for the Pastel time tracker.
//!
//! Everything here is pure: no database or HTTP access. The `db` and `api`
//! crates build on these types and rules.

pub mod calendar;
pub mod error;
pub mod export;
pub mod rounding;
pub mod settings;
pub mod types;
pub mod validation;
