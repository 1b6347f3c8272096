//! Domain models for the Hazard Risk Monitor Platform

mod access;
mod analytics;
mod comparison;
mod explain;
mod forecast;
mod history;
mod inference;
mod report;
mod user;
mod weather;
mod zone;

pub use access::*;
pub use analytics::*;
pub use comparison::*;
pub use explain::*;
pub use forecast::*;
pub use history::*;
pub use inference::*;
pub use report::*;
pub use user::*;
pub use weather::*;
pub use zone::*;
