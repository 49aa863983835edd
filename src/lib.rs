//! aqmon - a terminal air-quality dashboard
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod aqi;
pub mod cli;
pub mod error;
pub mod models;
pub mod refresh;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
