//! rp-fare: fare table and discount policy for railpath.
//!
//! Fares are integers in the smallest currency unit. Pricing happens in two
//! steps: `calculate_fare` turns distance plus the traversed lines into an
//! undiscounted fare (distance tiers + the single highest line surcharge),
//! and `AgeGroup::apply_discount` applies the rider's age tier to it.

pub mod age;
pub mod fare;

pub use age::AgeGroup;
pub use fare::{calculate_fare, BASE_FARE};
