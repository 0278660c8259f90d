//! Core data models for the wage calculator.
//!
//! This module contains the domain models shared by validation, the earnings
//! engine and the caller-owned calculator state.

mod raw_input;
mod rate_table;
mod schedule;
mod wage_result;

pub use raw_input::{RawInput, parse_leading_int};
pub use rate_table::{RateField, RateTable};
pub use schedule::{DayInterval, HourRange, TimeField, WorkSchedule};
pub use wage_result::WageResult;
