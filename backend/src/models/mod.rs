//! Database models for the Hazard Risk Monitor
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
