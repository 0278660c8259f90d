//! Wage calculator engine
//!
//! This crate computes total wages over a set of workdays from three
//! time-band rates (regular, nighttime and midnight) and each day's start and
//! end hour, together with the validation rules that guard that calculation.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
