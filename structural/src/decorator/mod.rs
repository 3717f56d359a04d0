//! Beverages whose description and cost grow with each condiment wrapped around them.
//!
//! Wrapping is read-only: a [`Condimented`] layer owns the beverage it wraps and only
//! appends to what the inner beverage reports, so the order of application shows up in
//! both the description and the running cost.

mod beverage;
mod condiment;

pub use beverage::{Beverage, BeverageExt, Espresso, HouseBlend};
pub use condiment::{Condiment, Condimented};
