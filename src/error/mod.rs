//! Error types for the GreenLens client.
//!
//! - [`ApiError`] - backend request failures (transport or protocol)
//! - [`ImageError`] - reading a chosen image from disk
//! - [`PreconditionViolation`] - guard failures the UI should prevent
//! - [`ConfigError`] - startup configuration problems
//! - [`ErrorCategory`] - the handling policy bucket for each of the above
//!
//! No backend failure propagates as a fault: the scan path converts it into
//! a `Failed` result card and the stores keep their last good value.

mod api;
mod category;
mod config;
mod image;
mod precondition;

pub use api::ApiError;
pub use category::ErrorCategory;
pub use config::ConfigError;
pub use image::ImageError;
pub use precondition::PreconditionViolation;
