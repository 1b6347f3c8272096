//! Shared types and models for the Hazard Risk Monitor Platform
//!
//! This crate contains the wire models served by the backend together with
//! the pure domain logic (risk classification, forecast aggregation) that is
//! exercised both by the server and by the test suites.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
