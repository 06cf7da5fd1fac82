//! Headless view layer comparing submitted sermons against benchmark preacher profiles.

pub mod config;
pub mod error;
pub mod evaluation;
pub mod profiles;
pub mod submission;
pub mod telemetry;
pub mod validation;
pub mod views;
