//! Type-safe wrappers for OpenF1 identifiers and the season year.

pub mod ids;
pub mod time;

pub use ids::{DriverNumber, SessionKey};
pub use time::SeasonYear;
