//! Calculator state for presentation layers.
//!
//! A form or other front end owns a [`CalculatorState`] and feeds every user
//! action through [`CalculatorState::apply`] as an [`Edit`].

mod calculator;

pub use calculator::{CalculatorState, Edit};
