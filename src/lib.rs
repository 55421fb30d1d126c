//! GreenLens+ - a terminal client for the GreenLens waste-scanning service
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod image_source;
pub mod input;
pub mod logging;
pub mod models;
pub mod router;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
