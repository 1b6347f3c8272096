//! External API integrations

pub mod inference;
pub mod weather;

pub use inference::{InferenceClient, RiskModel};
pub use weather::WeatherClient;
