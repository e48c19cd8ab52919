//! Physical and astronomical constants for ad-hoc calculations.
//!
//! [`constants`] holds the values as plain `const` bindings, [`units`] the
//! energy conversions and [`table`] a registry for looking constants up by
//! symbol or name.

pub mod constants;
pub mod error;
pub mod table;
pub mod units;
pub mod utils;
